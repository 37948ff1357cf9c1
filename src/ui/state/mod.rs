// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Plain state kept apart from widgets so it can be tested without a renderer.

pub mod drag;
pub mod zoom;

pub use drag::PanState;
pub use zoom::{ZoomScale, ZoomState};
