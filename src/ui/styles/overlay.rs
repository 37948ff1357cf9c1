// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the lightbox, modal backdrops and indicators.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{BLACK, WHITE},
};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimming layer behind the search modal and the mobile drawer.
pub fn backdrop(theme: &Theme) -> container::Style {
    let scheme = if matches!(theme, Theme::Light) {
        ColorScheme::light()
    } else {
        ColorScheme::dark()
    };

    container::Style {
        background: Some(Background::Color(scheme.backdrop)),
        ..Default::default()
    }
}

/// Near-opaque layer of the lightbox.
pub fn lightbox(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_LIGHTBOX,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Pill for the position counter, zoom level and caption.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        text_color: Some(WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: border::WIDTH_SM,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_is_darker_in_dark_theme() {
        let alpha = |theme: &Theme| match backdrop(theme).background {
            Some(Background::Color(color)) => color.a,
            _ => 0.0,
        };
        assert!(alpha(&Theme::Dark) > alpha(&Theme::Light));
    }
}
