// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming and the stored-preference fallback to the OS scheme.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_tertiary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,

    // Backdrop behind modals and the mobile drawer
    pub backdrop: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            surface_tertiary: palette::GRAY_200,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::PRIMARY_500,
            brand_secondary: palette::PRIMARY_600,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            backdrop: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_950,
            surface_secondary: palette::GRAY_900,
            surface_tertiary: palette::GRAY_800,

            text_primary: palette::GRAY_100,
            text_secondary: palette::GRAY_400,

            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_500,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            backdrop: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
        }
    }
}

/// The two page themes. The absence of a stored mode means "follow the OS".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Stored preference wins; otherwise the detected OS scheme, where only
    /// an explicit "dark" answer selects the dark theme.
    #[must_use]
    pub fn resolve_with(stored: Option<ThemeMode>, detected: Option<ThemeMode>) -> Self {
        stored.or(detected).unwrap_or(ThemeMode::Light)
    }

    /// Stored preference, falling back to the OS color scheme.
    #[must_use]
    pub fn resolve(stored: Option<ThemeMode>) -> Self {
        if stored.is_some() {
            return Self::resolve_with(stored, None);
        }
        Self::resolve_with(None, detect_system())
    }

    /// Icon shown on the toggle: a moon invites switching to dark, a sun to light.
    #[must_use]
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            ThemeMode::Light => "☾",
            ThemeMode::Dark => "☀",
        }
    }
}

/// Queries the OS color scheme. `None` when it cannot be determined.
#[must_use]
pub fn detect_system() -> Option<ThemeMode> {
    match dark_light::detect() {
        Ok(dark_light::Mode::Light) => Some(ThemeMode::Light),
        Ok(dark_light::Mode::Dark) => Some(ThemeMode::Dark),
        Ok(_) => None,
        Err(error) => {
            tracing::debug!(%error, "system color scheme detection failed");
            None
        }
    }
}

/// Active theme: mode plus resolved colors.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
        };

        Self { colors, mode }
    }

    /// Built-in Iced theme matching the mode.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        match self.mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn stored_preference_wins_over_detection() {
        let mode = ThemeMode::resolve_with(Some(ThemeMode::Light), Some(ThemeMode::Dark));
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn detection_used_without_preference() {
        assert_eq!(
            ThemeMode::resolve_with(None, Some(ThemeMode::Light)),
            ThemeMode::Light
        );
        assert_eq!(
            ThemeMode::resolve_with(None, Some(ThemeMode::Dark)),
            ThemeMode::Dark
        );
    }

    #[test]
    fn undetectable_scheme_defaults_to_light() {
        assert_eq!(ThemeMode::resolve_with(None, None), ThemeMode::Light);
        assert_eq!(
            ThemeMode::resolve_with(Some(ThemeMode::Dark), None),
            ThemeMode::Dark
        );
    }

    #[test]
    fn toggling_flips_mode() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert!(ThemeMode::Dark.is_dark());
    }

    #[test]
    fn toggle_glyph_shows_target_mode() {
        assert_eq!(ThemeMode::Light.toggle_glyph(), "☾");
        assert_eq!(ThemeMode::Dark.toggle_glyph(), "☀");
    }

    #[test]
    fn iced_theme_follows_mode() {
        assert_eq!(AppTheme::new(ThemeMode::Light).iced_theme(), Theme::Light);
        assert_eq!(AppTheme::new(ThemeMode::Dark).iced_theme(), Theme::Dark);
    }
}
