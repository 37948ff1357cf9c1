// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page components.
//!
//! The `App` struct wires together the catalog, the page, the lightbox, the
//! navbar, the search modal and the notifications, and translates their
//! events into side effects like resource loading or config persistence.

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use subscription::Shortcut;

use crate::catalog::{Catalog, Fetcher, NavbarFragment, Source};
use crate::media::ImageStore;
use crate::ui::lightbox;
use crate::ui::notifications::{self, Notification};
use crate::ui::page;
use crate::ui::search;
use crate::ui::theming::{AppTheme, ThemeMode};
use chrono::Datelike;
use config::{Config, MOBILE_BREAKPOINT, THEME_HINT_SECS};
use i18n::fluent::I18n;
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    fetcher: Fetcher,
    /// Manifest currently shown, or being loaded.
    source: Option<Source>,
    catalog: Option<Catalog>,
    loading: bool,
    navbar: NavbarFragment,
    images: ImageStore,
    /// Brand logo replacements found by probing, keyed by original location.
    logos: HashMap<String, String>,
    lightbox: lightbox::State,
    page: page::State,
    search: search::State,
    /// Whether the narrow-window drawer is open.
    menu_open: bool,
    window_width: f32,
    theme_mode: ThemeMode,
    notifications: notifications::Manager,
    year: i32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("source", &self.source)
            .field("loading", &self.loading)
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the state without touching the environment: no config file,
    /// no OS theme detection, no loading.
    fn from_parts(i18n: I18n, theme_mode: ThemeMode) -> Self {
        Self {
            i18n,
            fetcher: Fetcher::new(),
            source: None,
            catalog: None,
            loading: false,
            navbar: NavbarFragment::default(),
            images: ImageStore::new(),
            logos: HashMap::new(),
            lightbox: lightbox::State::default(),
            page: page::State::default(),
            search: search::State::default(),
            menu_open: false,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            theme_mode,
            notifications: notifications::Manager::new(),
            year: chrono::Local::now().year(),
        }
    }

    /// Initializes application state and optionally kicks off the manifest
    /// load from CLI flags or the last opened source.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let mut app = Self::from_parts(i18n, ThemeMode::resolve(config.general.theme));

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        app.offer_theme_hint(&config);

        let manifest = flags.manifest.or(config.catalog.last_source);
        let task = match manifest {
            Some(raw) => match Source::parse(&raw) {
                Ok(source) => app.load_catalog(source),
                Err(error) => {
                    tracing::warn!(manifest = %raw, %error, "manifest location ignored");
                    let reason = app.i18n.tr(error.i18n_key());
                    app.notifications.push(
                        Notification::error("notification-catalog-load-error")
                            .with_arg("source", raw)
                            .with_arg("reason", reason),
                    );
                    Task::none()
                }
            },
            None => Task::none(),
        };

        (app, task)
    }

    /// Shows the "try dark mode" hint once, for users who never picked a theme.
    fn offer_theme_hint(&mut self, config: &Config) {
        if config.general.theme.is_some() || config.general.theme_hint_seen {
            return;
        }
        self.notifications.push(
            Notification::info("notification-theme-hint")
                .auto_dismiss(Duration::from_secs(THEME_HINT_SECS)),
        );
        persistence::persist_theme_hint_seen();
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.catalog {
            Some(catalog) => format!("{} - {app_name}", catalog.product.name),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        AppTheme::new(self.theme_mode).iced_theme()
    }

    /// Narrow windows collapse the navbar links into the drawer.
    fn is_compact(&self) -> bool {
        self.window_width < MOBILE_BREAKPOINT
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let pan_sub = subscription::create_pan_subscription(self.lightbox.is_panning());
        let tick_sub = subscription::create_tick_subscription(
            self.page.is_animating(Instant::now()),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, pan_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Page(page_message) => self.handle_page_message(page_message),
            Message::Lightbox(lightbox_message) => self.handle_lightbox_message(lightbox_message),
            Message::Navbar(navbar_message) => self.handle_navbar_message(navbar_message),
            Message::Search(search_message) => self.handle_search_message(search_message),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::CatalogLoaded(result) => self.handle_catalog_loaded(result),
            Message::NavbarLoaded(result) => self.handle_navbar_loaded(result),
            Message::ImageLoaded { location, result } => {
                self.images.complete(location, result);
                Task::none()
            }
            Message::LogoResolved {
                original,
                replacement,
            } => self.handle_logo_resolved(original, replacement),
            Message::OpenCatalogDialog => update::open_catalog_dialog(),
            Message::OpenCatalogDialogResult(path) => match path {
                Some(path) => self.load_catalog(Source::Local(path)),
                None => Task::none(),
            },
            Message::Shortcut(shortcut) => self.handle_shortcut(shortcut),
            Message::WindowResized(size) => {
                self.window_width = size.width;
                if !self.is_compact() {
                    self.menu_open = false;
                }
                Task::none()
            }
            Message::Tick(now) => self.handle_tick(now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: self.catalog.as_ref(),
            loading: self.loading,
            navbar: &self.navbar,
            images: &self.images,
            logos: &self.logos,
            lightbox: &self.lightbox,
            page: &self.page,
            search: &self.search,
            menu_open: self.menu_open,
            compact: self.is_compact(),
            theme_mode: self.theme_mode,
            notifications: &self.notifications,
            year: self.year,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::scroll::Anchor;
    use crate::ui::tabs::Tab;
    use crate::ui::{navbar, search};
    use iced::Size;
    use std::path::PathBuf;

    /// Clicks the widget showing `label` and returns the page and navbar
    /// messages the click produced.
    fn page_messages_from_click(app: &App, label: &str) -> Vec<Message> {
        let mut ui = iced_test::simulator(app.view());
        let _ = ui.click(label);
        ui.into_messages()
            .filter(|message| matches!(message, Message::Page(_) | Message::Navbar(_)))
            .collect()
    }

    const MANIFEST: &str = r#"
        [product]
        name = "Catalyst 9200L"
        main_image = "/srv/img/C9200L_front.jpg"
        thumbnails = ["/srv/img/C9200L_front.jpg", "/srv/img/C9200L_back.jpg"]

        [[downloads]]
        title = "Datasheet"
        url = "https://example.com/datasheet.pdf"

        [[brands]]
        name = "Cisco"
        logo = "/srv/icons/brands/cisco.svg"
    "#;

    fn app() -> App {
        App::from_parts(I18n::default(), ThemeMode::Light)
    }

    fn loaded_app() -> App {
        let mut app = app();
        let catalog = Catalog::parse(MANIFEST).expect("valid manifest");
        let _ = app.update(Message::CatalogLoaded(Ok(catalog)));
        app
    }

    #[test]
    fn catalog_load_prepares_gallery_and_requests_images() {
        let app = loaded_app();
        assert!(!app.loading);
        assert_eq!(app.lightbox.images().len(), 2);
        assert_eq!(app.lightbox.main_image(), Some("/srv/img/C9200L_front.jpg"));
        assert!(app.images.get("/srv/img/C9200L_back.jpg").is_some());
        assert_eq!(app.page.active_tab(), Tab::Product);
        assert!(app.title().starts_with("Catalyst 9200L - "));
    }

    #[test]
    fn catalog_failure_shows_error_toast() {
        let mut app = app();
        app.loading = true;
        let _ = app.update(Message::CatalogLoaded(Err(crate::error::Error::Catalog(
            "broken".into(),
        ))));
        assert!(!app.loading);
        assert!(app.catalog.is_none());
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn escape_closes_lightbox_then_search_then_menu() {
        let mut app = loaded_app();
        app.menu_open = true;
        app.search.open(app.catalog.as_ref());
        let _ = app.update(Message::Lightbox(lightbox::Message::MainImagePressed));
        assert!(app.lightbox.is_open());

        let _ = app.update(Message::Shortcut(Shortcut::Escape));
        assert!(!app.lightbox.is_open());
        assert!(app.search.is_open());

        let _ = app.update(Message::Shortcut(Shortcut::Escape));
        assert!(!app.search.is_open());
        assert!(app.menu_open);

        let _ = app.update(Message::Shortcut(Shortcut::Escape));
        assert!(!app.menu_open);
    }

    #[test]
    fn arrow_keys_only_navigate_open_lightbox() {
        let mut app = loaded_app();
        let _ = app.update(Message::Shortcut(Shortcut::Next));
        assert_eq!(app.lightbox.current_index(), 0);

        let _ = app.update(Message::Lightbox(lightbox::Message::MainImagePressed));
        let _ = app.update(Message::Shortcut(Shortcut::ZoomIn));
        let _ = app.update(Message::Shortcut(Shortcut::Next));
        assert_eq!(app.lightbox.current_index(), 1);
        assert!(app.lightbox.zoom().scale.value() > 1.0);

        let _ = app.update(Message::Shortcut(Shortcut::ResetZoom));
        assert!(app.lightbox.zoom().is_identity());
    }

    #[test]
    fn navbar_link_scrolls_to_panel() {
        let mut app = loaded_app();
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Anchor::Downloads)));
        assert_eq!(app.page.active_tab(), Tab::Downloads);
        assert!(app.page.is_animating(Instant::now()));
    }

    #[test]
    fn search_jump_switches_tab() {
        let mut app = loaded_app();
        let _ = app.update(Message::Navbar(navbar::Message::OpenSearch));
        assert!(app.search.is_open());
        let _ = app.update(Message::Search(search::Message::QueryChanged(
            "datasheet".into(),
        )));
        let _ = app.update(Message::Search(search::Message::Submitted));
        assert!(!app.search.is_open());
        assert_eq!(app.page.active_tab(), Tab::Downloads);
    }

    #[test]
    fn theme_toggle_flips_mode() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Dark);
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn theme_hint_shown_only_without_stored_choice() {
        let mut app = app();
        app.offer_theme_hint(&Config::default());
        assert_eq!(app.notifications.visible_count(), 1);

        let mut app = self::app();
        let mut config = Config::default();
        config.general.theme_hint_seen = true;
        app.offer_theme_hint(&config);
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn widening_the_window_closes_the_drawer() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(Size::new(500.0, 700.0)));
        assert!(app.is_compact());
        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        assert!(app.menu_open);

        let _ = app.update(Message::WindowResized(Size::new(1200.0, 700.0)));
        assert!(!app.is_compact());
        assert!(!app.menu_open);
    }

    #[test]
    fn copy_link_confirms_with_toast() {
        let mut app = loaded_app();
        let download = app.catalog.as_ref().expect("catalog").downloads[0].clone();
        let _ = app.update(Message::Page(page::Message::CopyLink(download)));
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn logo_replacement_is_remembered() {
        let mut app = loaded_app();
        let _ = app.update(Message::LogoResolved {
            original: "/srv/icons/brands/cisco.svg".into(),
            replacement: Some("/srv/icons/brands/cisco.png".into()),
        });
        assert_eq!(
            app.logos.get("/srv/icons/brands/cisco.svg").map(String::as_str),
            Some("/srv/icons/brands/cisco.png")
        );
        assert!(app.images.get("/srv/icons/brands/cisco.png").is_some());
    }

    #[test]
    fn open_lightbox_blocks_clicks_on_the_page_below() {
        let mut app = loaded_app();
        assert!(matches!(
            page_messages_from_click(&app, "Downloads").as_slice(),
            [Message::Page(page::Message::Tabs(_))]
        ));

        let _ = app.update(Message::Lightbox(lightbox::Message::MainImagePressed));
        assert!(app.lightbox.is_open());
        for label in ["Downloads", "Images", "Catalyst 9200L"] {
            let leaked = page_messages_from_click(&app, label);
            assert!(leaked.is_empty(), "click on {label:?} reached the page: {leaked:?}");
        }
    }

    #[test]
    fn relative_manifest_is_remembered_as_absolute_path() {
        let mut app = app();
        let _ = app.load_catalog(Source::Local(PathBuf::from("demos/catalog/catalog.toml")));
        assert!(app.loading);
        let Some(Source::Local(path)) = &app.source else {
            panic!("expected a local source, got {:?}", app.source);
        };
        assert!(path.is_absolute());
        assert!(path.ends_with("demos/catalog/catalog.toml"));
    }
}
