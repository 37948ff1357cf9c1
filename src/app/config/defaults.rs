// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Lightbox scale bounds and step factors
//! - **Feedback**: Main image fade timing
//! - **Probing**: Brand logo fallback probing
//! - **Layout**: Responsive breakpoint and scroll animations
//! - **Theme**: First-visit hint

use std::time::Duration;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Identity scale applied when the lightbox opens.
pub const DEFAULT_ZOOM_SCALE: f32 = 1.0;

/// Minimum lightbox scale.
pub const MIN_ZOOM_SCALE: f32 = 0.5;

/// Maximum lightbox scale.
pub const MAX_ZOOM_SCALE: f32 = 6.0;

/// Multiplier used by the zoom in/out buttons and keyboard shortcuts.
pub const BUTTON_ZOOM_FACTOR: f32 = 1.2;

/// Multiplier applied per mouse wheel notch.
pub const WHEEL_ZOOM_FACTOR: f32 = 1.12;

// ==========================================================================
// Feedback Defaults
// ==========================================================================

/// Opacity of the main image while a thumbnail swap is settling.
pub const FADE_OPACITY: f32 = 0.6;

/// Delay before the main image returns to full opacity.
pub const FADE_DURATION_MS: u64 = 180;

// ==========================================================================
// Probing Defaults
// ==========================================================================

/// Deadline for each logo candidate probe.
pub const LOGO_PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Only logos whose location contains this marker are probed.
pub const LOGO_PATH_MARKER: &str = "icons/brands/";

/// Extensions tried in order when probing a logo.
pub const LOGO_CANDIDATE_EXTENSIONS: [&str; 4] = ["png", "jpg", "gif", "svg"];

/// Deadline for manifest, fragment and image downloads.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Window width (logical pixels) below which the navbar collapses.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Duration of an anchor scroll animation.
pub const SMOOTH_SCROLL_MS: u64 = 300;

/// Duration of the panel reveal animation.
pub const REVEAL_DURATION_MS: u64 = 600;

/// Vertical slide distance of the panel reveal animation.
pub const REVEAL_OFFSET_PX: f32 = 20.0;

/// Frame interval used while an animation is running.
pub const ANIMATION_TICK_MS: u64 = 16;

/// Tick interval used while only notifications need servicing.
pub const NOTIFICATION_TICK_MS: u64 = 100;

/// Number of brands shown before "show more" is toggled.
pub const FEATURED_BRAND_LIMIT: usize = 8;

// ==========================================================================
// Theme Defaults
// ==========================================================================

/// How long the "try dark mode" hint stays visible.
pub const THEME_HINT_SECS: u64 = 4;

// ==========================================================================
// Compile-time validation
// ==========================================================================

const _: () = {
    // Zoom validation
    assert!(MIN_ZOOM_SCALE > 0.0);
    assert!(MIN_ZOOM_SCALE < DEFAULT_ZOOM_SCALE);
    assert!(MAX_ZOOM_SCALE > DEFAULT_ZOOM_SCALE);
    assert!(BUTTON_ZOOM_FACTOR > 1.0);
    assert!(WHEEL_ZOOM_FACTOR > 1.0);

    // Feedback validation
    assert!(FADE_OPACITY > 0.0);
    assert!(FADE_OPACITY < 1.0);
    assert!(FADE_DURATION_MS > 0);

    // Layout validation
    assert!(MOBILE_BREAKPOINT > 0.0);
    assert!(ANIMATION_TICK_MS < SMOOTH_SCROLL_MS);
    assert!(ANIMATION_TICK_MS < REVEAL_DURATION_MS);
    assert!(ANIMATION_TICK_MS < NOTIFICATION_TICK_MS);
    assert!(FEATURED_BRAND_LIMIT > 0);

    assert!(THEME_HINT_SECS > 0);
};
