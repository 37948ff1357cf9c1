// SPDX-License-Identifier: MPL-2.0
//! Product image gallery and its enlarged, zoomable lightbox view.
//!
//! The controller owns the gallery list, the position within it, the zoom
//! transform of the enlarged image and the overlay itself. The overlay is
//! created on the first [`State::open`] and afterwards only shown or hidden.
//!
//! Missing overlay, empty gallery and unknown locations never fail: they
//! degrade to no-ops or to the first gallery position.

pub mod caption;
pub mod image_list;
pub mod surface;
mod view;

pub use caption::ViewLabel;
pub use image_list::ImageList;
pub use view::{overlay_view, ViewContext};

use crate::app::config::{
    BUTTON_ZOOM_FACTOR, FADE_DURATION_MS, FADE_OPACITY, WHEEL_ZOOM_FACTOR,
};
use crate::ui::state::ZoomState;
use iced::{Point, Task};
use std::time::Duration;

/// Messages emitted by the gallery, the overlay controls and the app shell.
#[derive(Debug, Clone)]
pub enum Message {
    /// A thumbnail was clicked.
    ThumbnailSelected(String),
    /// The main image was clicked.
    MainImagePressed,
    /// An image of the gallery grid was clicked.
    Open(String),
    Close,
    Next,
    Previous,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    /// Mouse wheel over the enlarged image; positive means "scroll up".
    WheelScrolled { delta_y: f32 },
    /// Left button pressed over the enlarged image (window coordinates).
    PanStarted(Point),
    /// Cursor moved anywhere in the window.
    CursorMoved(Point),
    /// Left button released anywhere in the window.
    PanEnded,
    /// The main image fade has run its course.
    FadeElapsed,
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// An image became visible and must be available in the image store.
    ShowImage(String),
}

/// The enlarged view. Kept for the controller's whole lifetime once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    image: String,
    visible: bool,
}

impl Overlay {
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[derive(Debug, Clone)]
pub struct State {
    images: ImageList,
    current_index: usize,
    main_image: Option<String>,
    caption: ViewLabel,
    main_opacity: f32,
    zoom: ZoomState,
    overlay: Option<Overlay>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            images: ImageList::default(),
            current_index: 0,
            main_image: None,
            caption: ViewLabel::default(),
            main_opacity: 1.0,
            zoom: ZoomState::default(),
            overlay: None,
        }
    }
}

impl State {
    /// Replaces the gallery with a product's main image and thumbnails.
    ///
    /// The main image and its caption are reset without any fade.
    pub fn load_page(&mut self, main_image: Option<&str>, thumbnails: &[String]) {
        self.images = ImageList::from_page(main_image, thumbnails);
        self.main_image = main_image
            .map(str::to_string)
            .or_else(|| self.images.get(0).map(str::to_string));
        self.current_index = self
            .main_image
            .as_deref()
            .map(|url| self.images.index_or_first(url))
            .unwrap_or(0);
        self.caption = self
            .main_image
            .as_deref()
            .map(ViewLabel::from_location)
            .unwrap_or_default();
        self.main_opacity = 1.0;
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::ThumbnailSelected(url) => {
                let task = self.select_main_image(&url);
                (Effect::ShowImage(url), task)
            }
            Message::MainImagePressed => match self.main_image.clone() {
                Some(url) => {
                    self.open(&url);
                    (Effect::ShowImage(url), Task::none())
                }
                None => (Effect::None, Task::none()),
            },
            Message::Open(url) => {
                self.open(&url);
                (Effect::ShowImage(url), Task::none())
            }
            Message::Close => {
                self.close();
                (Effect::None, Task::none())
            }
            Message::Next => (self.shown_effect(Self::next), Task::none()),
            Message::Previous => (self.shown_effect(Self::previous), Task::none()),
            Message::ZoomIn => {
                self.change_zoom(BUTTON_ZOOM_FACTOR);
                (Effect::None, Task::none())
            }
            Message::ZoomOut => {
                self.change_zoom(1.0 / BUTTON_ZOOM_FACTOR);
                (Effect::None, Task::none())
            }
            Message::ResetZoom => {
                self.reset_zoom();
                (Effect::None, Task::none())
            }
            Message::WheelScrolled { delta_y } => {
                if delta_y > 0.0 {
                    self.change_zoom(WHEEL_ZOOM_FACTOR);
                } else if delta_y < 0.0 {
                    self.change_zoom(1.0 / WHEEL_ZOOM_FACTOR);
                }
                (Effect::None, Task::none())
            }
            Message::PanStarted(position) => {
                self.begin_pan(position);
                (Effect::None, Task::none())
            }
            Message::CursorMoved(position) => {
                self.track_pan(position);
                (Effect::None, Task::none())
            }
            Message::PanEnded => {
                self.end_pan();
                (Effect::None, Task::none())
            }
            Message::FadeElapsed => {
                self.main_opacity = 1.0;
                (Effect::None, Task::none())
            }
        }
    }

    fn shown_effect(&mut self, navigate: fn(&mut Self)) -> Effect {
        navigate(self);
        match self.overlay_image() {
            Some(url) if self.is_open() => Effect::ShowImage(url.to_string()),
            _ => Effect::None,
        }
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Makes `url` the primary image of the page.
    ///
    /// The swap is immediate; the dimmed opacity is restored by the returned
    /// task once the fade delay has elapsed.
    pub fn select_main_image(&mut self, url: &str) -> Task<Message> {
        self.main_image = Some(url.to_string());
        self.current_index = self.images.index_or_first(url);
        self.caption = ViewLabel::from_location(url);
        self.main_opacity = FADE_OPACITY;

        Task::perform(
            async {
                tokio::time::sleep(Duration::from_millis(FADE_DURATION_MS)).await;
            },
            |()| Message::FadeElapsed,
        )
    }

    /// Shows `url` enlarged with an identity transform.
    pub fn open(&mut self, url: &str) {
        let overlay = self.overlay.get_or_insert_with(|| {
            tracing::debug!("lightbox overlay created");
            Overlay {
                image: String::new(),
                visible: false,
            }
        });
        overlay.image = url.to_string();
        overlay.visible = true;
        self.zoom.reset();
        self.current_index = self.images.index_or_first(url);
    }

    /// Hides the overlay. The overlay and its transform are kept.
    pub fn close(&mut self) {
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.visible = false;
        }
        self.zoom.end_pan();
    }

    /// Advances to the next gallery image, wrapping at the end.
    pub fn next(&mut self) {
        if let Some(index) = self.images.next_index(self.current_index) {
            self.show_index(index);
        }
    }

    /// Goes back to the previous gallery image, wrapping at the start.
    pub fn previous(&mut self) {
        if let Some(index) = self.images.previous_index(self.current_index) {
            self.show_index(index);
        }
    }

    fn show_index(&mut self, index: usize) {
        self.current_index = index;
        let Some(url) = self.images.get(index) else {
            return;
        };
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.image = url.to_string();
        }
    }

    /// Multiplies the scale by `factor`, clamped to the allowed range.
    pub fn change_zoom(&mut self, factor: f32) {
        self.zoom.change(factor);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom.reset();
    }

    /// Starts a pan at `position` when the image is enlarged beyond 1x.
    pub fn begin_pan(&mut self, position: Point) -> bool {
        if !self.is_open() {
            return false;
        }
        self.zoom.begin_pan(position)
    }

    pub fn track_pan(&mut self, position: Point) {
        self.zoom.track_pan(position);
    }

    pub fn end_pan(&mut self) {
        self.zoom.end_pan();
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn images(&self) -> &ImageList {
        &self.images
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn main_image(&self) -> Option<&str> {
        self.main_image.as_deref()
    }

    #[must_use]
    pub fn caption(&self) -> ViewLabel {
        self.caption
    }

    #[must_use]
    pub fn main_opacity(&self) -> f32 {
        self.main_opacity
    }

    #[must_use]
    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    #[must_use]
    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    #[must_use]
    pub fn overlay_image(&self) -> Option<&str> {
        self.overlay.as_ref().map(Overlay::image)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.overlay.as_ref().is_some_and(Overlay::is_visible)
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.zoom.is_panning()
    }
}
