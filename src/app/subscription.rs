// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard and window events are turned into application messages
//! here. Pan tracking and animation ticks are only subscribed to while they
//! are needed.

use super::Message;
use crate::app::config::{ANIMATION_TICK_MS, NOTIFICATION_TICK_MS};
use crate::ui::lightbox;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// Keyboard shortcuts understood by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Escape,
    Previous,
    Next,
    ZoomIn,
    ZoomOut,
    ResetZoom,
}

impl Shortcut {
    /// Maps a pressed key to a shortcut. `=` is accepted for zoom in so the
    /// unshifted `+` key works.
    #[must_use]
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Named(Named::Escape) => Some(Shortcut::Escape),
            Key::Named(Named::ArrowLeft) => Some(Shortcut::Previous),
            Key::Named(Named::ArrowRight) => Some(Shortcut::Next),
            Key::Character(c) => match c.as_str() {
                "+" | "=" => Some(Shortcut::ZoomIn),
                "-" => Some(Shortcut::ZoomOut),
                "0" => Some(Shortcut::ResetZoom),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Keyboard shortcuts and window resizes.
///
/// Escape is routed even when a widget captured it, since the focused
/// search input swallows it otherwise. Other keys only fire when no widget
/// used them.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            let shortcut = Shortcut::from_key(&key)?;
            match (shortcut, status) {
                (Shortcut::Escape, _) | (_, event::Status::Ignored) => {
                    Some(Message::Shortcut(shortcut))
                }
                (_, event::Status::Captured) => None,
            }
        }
        _ => None,
    })
}

/// Cursor tracking for an active lightbox pan.
///
/// Moves and the release are followed across the whole window so a drag
/// that leaves the image keeps panning, and releasing anywhere ends it.
pub fn create_pan_subscription(is_panning: bool) -> Subscription<Message> {
    if !is_panning {
        return Subscription::none();
    }
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::Lightbox(lightbox::Message::CursorMoved(position)))
        }
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::Lightbox(lightbox::Message::PanEnded))
        }
        _ => None,
    })
}

/// Creates a periodic tick for running animations and notification
/// auto-dismiss. Animations get the faster frame rate.
pub fn create_tick_subscription(is_animating: bool, has_notifications: bool) -> Subscription<Message> {
    if is_animating {
        time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::Tick)
    } else if has_notifications {
        time::every(Duration::from_millis(NOTIFICATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_and_zoom_keys_map_to_shortcuts() {
        assert_eq!(
            Shortcut::from_key(&Key::Named(Named::Escape)),
            Some(Shortcut::Escape)
        );
        assert_eq!(
            Shortcut::from_key(&Key::Named(Named::ArrowRight)),
            Some(Shortcut::Next)
        );
        assert_eq!(
            Shortcut::from_key(&Key::Character("+".into())),
            Some(Shortcut::ZoomIn)
        );
        assert_eq!(
            Shortcut::from_key(&Key::Character("=".into())),
            Some(Shortcut::ZoomIn)
        );
        assert_eq!(
            Shortcut::from_key(&Key::Character("0".into())),
            Some(Shortcut::ResetZoom)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(Shortcut::from_key(&Key::Character("a".into())), None);
        assert_eq!(Shortcut::from_key(&Key::Named(Named::Enter)), None);
    }
}
