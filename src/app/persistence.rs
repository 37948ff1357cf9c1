// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Every write reloads the settings file, changes one field and saves it
//! back, so concurrent edits of other fields are not lost. Failures are
//! logged and otherwise ignored.

use crate::app::config::{self, Config};
use crate::ui::theming::ThemeMode;

fn update_config(edit: impl FnOnce(&mut Config)) {
    // Tests exercise the callers without touching the user's settings file.
    if cfg!(test) {
        return;
    }

    let (mut cfg, _warning) = config::load();
    edit(&mut cfg);
    if let Err(error) = config::save(&cfg) {
        tracing::warn!(%error, "failed to save settings");
    }
}

/// Stores an explicit theme choice.
pub fn persist_theme(mode: ThemeMode) {
    update_config(|cfg| cfg.general.theme = Some(mode));
}

/// Remembers that the "try dark mode" hint was shown.
pub fn persist_theme_hint_seen() {
    update_config(|cfg| cfg.general.theme_hint_seen = true);
}

/// Remembers the manifest opened most recently.
pub fn persist_last_source(source: &str) {
    let source = source.to_string();
    update_config(|cfg| cfg.catalog.last_source = Some(source));
}
