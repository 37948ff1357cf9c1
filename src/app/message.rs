// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::{Catalog, NavbarFragment};
use crate::error::Error;
use crate::media::ImageData;
use crate::ui::lightbox;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::page;
use crate::ui::search;
use iced::Size;
use std::path::PathBuf;
use std::time::Instant;

use super::subscription::Shortcut;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Page(page::Message),
    Lightbox(lightbox::Message),
    Navbar(navbar::Message),
    Search(search::Message),
    Notification(notifications::NotificationMessage),
    /// The manifest finished loading.
    CatalogLoaded(Result<Catalog, Error>),
    /// The navbar fragment named by the manifest finished loading.
    NavbarLoaded(Result<NavbarFragment, Error>),
    ImageLoaded {
        location: String,
        result: Result<ImageData, Error>,
    },
    /// Logo probing finished; `replacement` is `None` when the original stays.
    LogoResolved {
        original: String,
        replacement: Option<String>,
    },
    /// Trigger the open manifest dialog.
    OpenCatalogDialog,
    OpenCatalogDialogResult(Option<PathBuf>),
    Shortcut(Shortcut),
    WindowResized(Size),
    Tick(Instant),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `es`, `en-US`).
    pub lang: Option<String>,
    /// Optional manifest path or URL to open on startup.
    pub manifest: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CATALOG_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
