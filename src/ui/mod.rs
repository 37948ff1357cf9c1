// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Page
//!
//! - [`page`] - The scrollable product page (hero gallery, panels, brands, footer)
//! - [`lightbox`] - Gallery controller and the enlarged, zoomable image view
//! - [`tabs`] - Product / images / downloads tab strip
//! - [`navbar`] - Navigation bar and the narrow-window drawer
//! - [`search`] - Search modal over the catalog
//!
//! # Shared Infrastructure
//!
//! - [`scroll`] - Anchors, eased scrolling and reveal animations
//! - [`state`] - Zoom and pan state kept apart from widgets
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark theme mode and color schemes
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod lightbox;
pub mod navbar;
pub mod notifications;
pub mod page;
pub mod scroll;
pub mod search;
pub mod state;
pub mod styles;
pub mod tabs;
pub mod theming;
