// SPDX-License-Identifier: MPL-2.0
//! `catalog_lens` renders a product catalog page with the Iced GUI framework.
//!
//! A TOML manifest describes one product, its images, downloads and brand
//! strip. The page offers an image gallery with a zoomable lightbox, tabbed
//! panels, a search modal and a persisted light/dark theme.

pub mod app;
pub mod catalog;
pub mod error;
pub mod logo_fallback;
pub mod media;
pub mod ui;
