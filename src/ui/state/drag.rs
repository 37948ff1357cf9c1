// SPDX-License-Identifier: MPL-2.0
//! Pan state management
//!
//! Handles grab-and-drag interaction state for moving the enlarged image.

use iced::{Point, Vector};

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanState {
    /// Whether a pan is currently active
    pub is_panning: bool,

    /// Cursor position where the pan started
    pub anchor: Option<Point>,

    /// Image offset when the pan started
    pub start_offset: Option<Vector>,
}

impl PanState {
    pub fn start(&mut self, position: Point, offset: Vector) {
        self.is_panning = true;
        self.anchor = Some(position);
        self.start_offset = Some(offset);
    }

    pub fn stop(&mut self) {
        self.is_panning = false;
        self.anchor = None;
        self.start_offset = None;
    }

    /// New image offset for the current cursor position: the offset at pan
    /// start plus the cursor travel. The image follows the cursor.
    #[must_use]
    pub fn calculate_offset(&self, current_position: Point) -> Option<Vector> {
        if !self.is_panning {
            return None;
        }

        let anchor = self.anchor?;
        let start_offset = self.start_offset?;

        Some(start_offset + (current_position - anchor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pan_state_is_idle() {
        let state = PanState::default();
        assert!(!state.is_panning);
        assert!(state.anchor.is_none());
        assert!(state.start_offset.is_none());
    }

    #[test]
    fn start_and_stop() {
        let mut state = PanState::default();
        state.start(Point::new(100.0, 50.0), Vector::new(20.0, 10.0));
        assert!(state.is_panning);
        assert_eq!(state.anchor, Some(Point::new(100.0, 50.0)));

        state.stop();
        assert_eq!(state, PanState::default());
    }

    #[test]
    fn calculate_offset_returns_none_when_idle() {
        let state = PanState::default();
        assert!(state.calculate_offset(Point::new(100.0, 50.0)).is_none());
    }

    #[test]
    fn offset_follows_cursor() {
        let mut state = PanState::default();
        state.start(Point::new(200.0, 150.0), Vector::new(50.0, 30.0));

        // Cursor moved left/up by 20 pixels
        let offset = state.calculate_offset(Point::new(180.0, 130.0));
        assert_eq!(offset, Some(Vector::new(30.0, 10.0)));
    }
}
