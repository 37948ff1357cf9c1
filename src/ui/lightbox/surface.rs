// SPDX-License-Identifier: MPL-2.0
//! Canvas drawing the enlarged image with its zoom and pan transform.
//!
//! The surface owns the pointer interactions that must not reach the page
//! underneath: wheel zoom over the image and the press that starts a pan.
//! Cursor moves and the release are tracked by the application subscription
//! so a pan keeps following the pointer outside the image.

use super::Message;
use crate::media::ImageData;
use crate::ui::state::zoom::{fit_rect, ZoomState};
use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry};
use iced::widget::Action;
use iced::{Rectangle, Renderer, Theme};

/// Lines are converted to pixels with this factor so both wheel kinds
/// share the same sign convention.
const PIXELS_PER_LINE: f32 = 20.0;

pub struct Surface<'a> {
    pub image: &'a ImageData,
    pub zoom: &'a ZoomState,
}

impl Surface<'_> {
    /// On-screen rectangle of the image, relative to the canvas bounds.
    fn image_rect(&self, bounds: Rectangle) -> Rectangle {
        let local = Rectangle::with_size(bounds.size());
        self.zoom.apply(fit_rect(self.image.size(), local))
    }

    fn is_over_image(&self, bounds: Rectangle, cursor: mouse::Cursor) -> bool {
        cursor
            .position_in(bounds)
            .is_some_and(|position| self.image_rect(bounds).contains(position))
    }
}

/// Vertical wheel movement, positive when scrolling up.
fn wheel_delta(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => y * PIXELS_PER_LINE,
        mouse::ScrollDelta::Pixels { y, .. } => *y,
    }
}

impl canvas::Program<Message> for Surface<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if !self.is_over_image(bounds, cursor) {
                    return None;
                }
                Some(
                    Action::publish(Message::WheelScrolled {
                        delta_y: wheel_delta(delta),
                    })
                    .and_capture(),
                )
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if !self.zoom.scale.allows_pan() || !self.is_over_image(bounds, cursor) {
                    return None;
                }
                let position = cursor.position()?;
                Some(Action::publish(Message::PanStarted(position)).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.draw_image(
            self.image_rect(bounds),
            canvas::Image::new(self.image.handle.clone()),
        );
        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.zoom.is_panning() {
            mouse::Interaction::Grabbing
        } else if self.zoom.scale.allows_pan() && self.is_over_image(bounds, cursor) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Point, Size};

    fn image(width: u32, height: u32) -> ImageData {
        ImageData::from_rgba(width, height, vec![0; (width * height * 4) as usize])
    }

    #[test]
    fn image_rect_is_centered_in_bounds() {
        let data = image(100, 50);
        let zoom = ZoomState::default();
        let surface = Surface {
            image: &data,
            zoom: &zoom,
        };
        let rect = surface.image_rect(Rectangle::new(Point::new(10.0, 10.0), Size::new(400.0, 300.0)));
        assert_eq!(rect.center(), Point::new(200.0, 150.0));
        assert_eq!(rect.size(), Size::new(100.0, 50.0));
    }

    #[test]
    fn zoom_enlarges_image_rect() {
        let data = image(100, 50);
        let mut zoom = ZoomState::default();
        zoom.change(2.0);
        let surface = Surface {
            image: &data,
            zoom: &zoom,
        };
        let rect = surface.image_rect(Rectangle::with_size(Size::new(400.0, 300.0)));
        assert_eq!(rect.size(), Size::new(200.0, 100.0));
    }

    #[test]
    fn wheel_lines_and_pixels_share_sign() {
        assert!(wheel_delta(&mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 }) > 0.0);
        assert!(wheel_delta(&mouse::ScrollDelta::Pixels { x: 0.0, y: -3.0 }) < 0.0);
    }

    #[test]
    fn cursor_outside_image_is_not_over_it() {
        let data = image(100, 50);
        let zoom = ZoomState::default();
        let surface = Surface {
            image: &data,
            zoom: &zoom,
        };
        let bounds = Rectangle::with_size(Size::new(400.0, 300.0));
        assert!(surface.is_over_image(bounds, mouse::Cursor::Available(Point::new(200.0, 150.0))));
        assert!(!surface.is_over_image(bounds, mouse::Cursor::Available(Point::new(5.0, 5.0))));
        assert!(!surface.is_over_image(bounds, mouse::Cursor::Unavailable));
    }
}
