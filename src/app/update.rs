// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component messages are applied to their state first; the events they
//! return are then turned into tasks (loading, clipboard, widget operations)
//! and cross-component changes here.

use super::{persistence, App, Message, Shortcut};
use crate::app::config::FETCH_TIMEOUT;
use crate::catalog::{Catalog, NavbarFragment, Source};
use crate::error::Error;
use crate::logo_fallback;
use crate::media;
use crate::ui::lightbox::{self, Effect as LightboxEffect};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::Notification;
use crate::ui::page::{self, Event as PageEvent};
use crate::ui::search::{self, Event as SearchEvent};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Instant;

/// Notifications about the catalog itself share this key prefix so they can
/// be cleared together once a catalog loads.
const CATALOG_NOTIFICATION_PREFIX: &str = "notification-catalog-";

/// Opens the native dialog to pick a manifest file.
pub fn open_catalog_dialog() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("Catalog", &["toml"])
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenCatalogDialogResult,
    )
}

impl App {
    /// Starts loading the manifest at `source`. The current page stays on
    /// screen until the new one arrives. Local paths are made absolute so
    /// the remembered source reopens from any working directory.
    pub(super) fn load_catalog(&mut self, source: Source) -> Task<Message> {
        let source = source.absolutized();
        tracing::info!(%source, "loading catalog");
        self.loading = true;
        self.source = Some(source.clone());
        let fetcher = self.fetcher.clone();
        Task::perform(
            async move { Catalog::load(&fetcher, &source).await },
            Message::CatalogLoaded,
        )
    }

    /// Requests `location` from the image store, starting a load when it
    /// was never requested before.
    fn request_image(&mut self, location: &str) -> Task<Message> {
        if !self.images.request(location) {
            return Task::none();
        }
        let fetcher = self.fetcher.clone();
        let target = location.to_string();
        let location = location.to_string();
        Task::perform(
            media::image::load_within(fetcher, target, Some(FETCH_TIMEOUT)),
            move |result| Message::ImageLoaded {
                location: location.clone(),
                result,
            },
        )
    }

    pub(super) fn handle_catalog_loaded(&mut self, result: Result<Catalog, Error>) -> Task<Message> {
        self.loading = false;
        let catalog = match result {
            Ok(catalog) => catalog,
            Err(error) => {
                tracing::warn!(%error, "catalog unavailable");
                let source = self
                    .source
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                let reason = self.i18n.tr(error.i18n_key());
                self.notifications.push(
                    Notification::error("notification-catalog-load-error")
                        .with_arg("source", source)
                        .with_arg("reason", reason),
                );
                return Task::none();
            }
        };

        self.notifications.dismiss_by_prefix(CATALOG_NOTIFICATION_PREFIX);
        if let Some(source) = &self.source {
            persistence::persist_last_source(&source.to_string());
        }

        self.images.clear();
        self.logos.clear();
        self.navbar = NavbarFragment::default();
        self.search.close();
        self.menu_open = false;
        self.lightbox.close();
        self.lightbox
            .load_page(catalog.product.main_image.as_deref(), &catalog.product.thumbnails);
        self.page.reset(Instant::now());

        let mut tasks: Vec<Task<Message>> = catalog
            .image_locations()
            .into_iter()
            .map(|location| self.request_image(location))
            .collect();

        for logo in catalog.brands.iter().filter_map(|brand| brand.logo.as_ref()) {
            if logo_fallback::is_brand_logo(logo) {
                let original = logo.clone();
                tasks.push(Task::perform(
                    logo_fallback::resolve(self.fetcher.clone(), logo.clone()),
                    move |replacement| Message::LogoResolved {
                        original: original.clone(),
                        replacement,
                    },
                ));
            } else {
                tasks.push(self.request_image(logo));
            }
        }

        if let Some(location) = &catalog.navbar {
            tasks.push(self.load_navbar(location));
        }

        self.catalog = Some(catalog);
        Task::batch(tasks)
    }

    fn load_navbar(&mut self, location: &str) -> Task<Message> {
        match Source::parse(location) {
            Ok(source) => {
                let fetcher = self.fetcher.clone();
                Task::perform(
                    async move { NavbarFragment::load(&fetcher, &source).await },
                    Message::NavbarLoaded,
                )
            }
            Err(error) => self.handle_navbar_loaded(Err(error)),
        }
    }

    pub(super) fn handle_navbar_loaded(
        &mut self,
        result: Result<NavbarFragment, Error>,
    ) -> Task<Message> {
        match result {
            Ok(fragment) => self.navbar = fragment,
            Err(error) => {
                tracing::warn!(%error, "navbar fragment unavailable, keeping built-in controls");
                self.notifications
                    .push(Notification::warning("notification-catalog-navbar-error"));
            }
        }
        Task::none()
    }

    pub(super) fn handle_logo_resolved(
        &mut self,
        original: String,
        replacement: Option<String>,
    ) -> Task<Message> {
        let shown = replacement.clone().unwrap_or_else(|| original.clone());
        if let Some(replacement) = replacement {
            self.logos.insert(original, replacement);
        }
        self.request_image(&shown)
    }

    pub(super) fn handle_lightbox_message(&mut self, message: lightbox::Message) -> Task<Message> {
        let (effect, task) = self.lightbox.handle_message(message);
        let effect_task = match effect {
            LightboxEffect::None => Task::none(),
            LightboxEffect::ShowImage(location) => self.request_image(&location),
        };
        Task::batch([task.map(Message::Lightbox), effect_task])
    }

    pub(super) fn handle_page_message(&mut self, message: page::Message) -> Task<Message> {
        match self.page.update(message, Instant::now()) {
            PageEvent::None => Task::none(),
            PageEvent::Lightbox(message) => self.handle_lightbox_message(message),
            PageEvent::CopyLink(download) => {
                tracing::debug!(url = %download.url, "download link copied");
                self.notifications.push(
                    Notification::success("notification-link-copied")
                        .with_arg("title", download.title),
                );
                iced::clipboard::write(download.url)
            }
        }
    }

    pub(super) fn handle_navbar_message(&mut self, message: navbar::Message) -> Task<Message> {
        match navbar::update(message, &mut self.menu_open) {
            NavbarEvent::None => Task::none(),
            NavbarEvent::Navigate(anchor) => {
                self.page.scroll_to(anchor, Instant::now());
                Task::none()
            }
            NavbarEvent::OpenSearch => {
                self.search.open(self.catalog.as_ref());
                operation::focus(Id::new(search::INPUT_ID))
            }
            NavbarEvent::ToggleTheme => {
                self.theme_mode = self.theme_mode.toggled();
                tracing::debug!(mode = ?self.theme_mode, "theme toggled");
                self.notifications.dismiss_by_prefix("notification-theme-hint");
                persistence::persist_theme(self.theme_mode);
                Task::none()
            }
            NavbarEvent::OpenCatalog => open_catalog_dialog(),
        }
    }

    pub(super) fn handle_search_message(&mut self, message: search::Message) -> Task<Message> {
        match self.search.update(message, self.catalog.as_ref()) {
            SearchEvent::None | SearchEvent::Closed => Task::none(),
            SearchEvent::Jump(anchor) => {
                self.page.scroll_to(anchor, Instant::now());
                Task::none()
            }
        }
    }

    /// Escape closes the topmost layer: lightbox, then search, then drawer.
    /// The other shortcuts only act on a visible lightbox.
    pub(super) fn handle_shortcut(&mut self, shortcut: Shortcut) -> Task<Message> {
        if shortcut == Shortcut::Escape {
            if self.lightbox.is_open() {
                return self.handle_lightbox_message(lightbox::Message::Close);
            }
            if self.search.is_open() {
                self.search.close();
            } else {
                self.menu_open = false;
            }
            return Task::none();
        }

        if !self.lightbox.is_open() {
            return Task::none();
        }
        let message = match shortcut {
            Shortcut::Previous => lightbox::Message::Previous,
            Shortcut::Next => lightbox::Message::Next,
            Shortcut::ZoomIn => lightbox::Message::ZoomIn,
            Shortcut::ZoomOut => lightbox::Message::ZoomOut,
            Shortcut::ResetZoom => lightbox::Message::ResetZoom,
            Shortcut::Escape => lightbox::Message::Close,
        };
        self.handle_lightbox_message(message)
    }

    pub(super) fn handle_tick(&mut self, now: Instant) -> Task<Message> {
        self.notifications.tick_at(now);
        match self.page.tick(now) {
            Some(y) => operation::scroll_to(Id::new(page::SCROLL_ID), AbsoluteOffset { x: 0.0, y }),
            None => Task::none(),
        }
    }
}
