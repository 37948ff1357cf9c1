// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! This module handles the lightbox transform: a clamped scale factor plus a
//! pan offset. The offset is kept in screen pixels and applied before the
//! scale, so a pan moves the image by the same distance at every zoom level.

pub use crate::app::config::{DEFAULT_ZOOM_SCALE, MAX_ZOOM_SCALE, MIN_ZOOM_SCALE};

use super::drag::PanState;
use iced::{Point, Rectangle, Size, Vector};

/// Zoom scale factor, guaranteed to be within the valid range (0.5–6.0).
///
/// This type ensures that scale values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// Creates a new scale, clamping the value to the valid range.
    ///
    /// Non-finite input falls back to the identity scale.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if !scale.is_finite() {
            return Self::default();
        }
        Self(scale.clamp(MIN_ZOOM_SCALE, MAX_ZOOM_SCALE))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Multiplies the scale by `factor`, then clamps.
    #[must_use]
    pub fn scaled_by(self, factor: f32) -> Self {
        Self::new(self.0 * factor)
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM_SCALE
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM_SCALE
    }

    /// Whether the image is enlarged enough to be panned.
    #[must_use]
    pub fn allows_pan(self) -> bool {
        self.0 > DEFAULT_ZOOM_SCALE
    }

    /// Returns the scale as a whole percentage (e.g., 1.44 → 144).
    #[must_use]
    pub fn as_percent(self) -> u32 {
        (self.0 * 100.0).round() as u32
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_SCALE)
    }
}

/// Transform of the enlarged lightbox image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoomState {
    pub scale: ZoomScale,

    /// Pan distance in screen pixels.
    pub offset: Vector,

    pub pan: PanState,
}

impl ZoomState {
    /// Back to `scale = 1`, `offset = (0, 0)`, no pan in progress.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale == ZoomScale::default() && self.offset == Vector::ZERO
    }

    /// Applies a multiplicative zoom step.
    pub fn change(&mut self, factor: f32) {
        self.scale = self.scale.scaled_by(factor);
    }

    /// Starts panning at `cursor` if the image is enlarged.
    ///
    /// Returns whether a pan actually started.
    pub fn begin_pan(&mut self, cursor: Point) -> bool {
        if !self.scale.allows_pan() {
            return false;
        }
        self.pan.start(cursor, self.offset);
        true
    }

    /// Follows the cursor while panning; ignored otherwise.
    pub fn track_pan(&mut self, cursor: Point) {
        if let Some(offset) = self.pan.calculate_offset(cursor) {
            self.offset = offset;
        }
    }

    pub fn end_pan(&mut self) {
        self.pan.stop();
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_panning
    }

    /// Places `fitted` on screen: scaled about its center, then moved by the
    /// pan offset.
    #[must_use]
    pub fn apply(&self, fitted: Rectangle) -> Rectangle {
        let scale = self.scale.value();
        let center = fitted.center() + self.offset;
        let size = Size::new(fitted.width * scale, fitted.height * scale);
        Rectangle::new(
            Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
        )
    }
}

/// Largest rectangle with the image's aspect ratio that fits in `bounds`,
/// centered. Small images are not upscaled.
#[must_use]
pub fn fit_rect(image: Size, bounds: Rectangle) -> Rectangle {
    if image.width <= 0.0 || image.height <= 0.0 {
        return Rectangle::new(bounds.center(), Size::ZERO);
    }
    let ratio = (bounds.width / image.width)
        .min(bounds.height / image.height)
        .min(1.0);
    let size = Size::new(image.width * ratio, image.height * ratio);
    let center = bounds.center();
    Rectangle::new(
        Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
        size,
    )
}
