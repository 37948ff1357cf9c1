// SPDX-License-Identifier: MPL-2.0
//! Container styles for the page surfaces.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn base(theme: &Theme) -> Color {
    theme.extended_palette().background.base.color
}

fn divider(theme: &Theme) -> Color {
    if matches!(theme, Theme::Light) {
        palette::GRAY_200
    } else {
        palette::GRAY_800
    }
}

/// Panel surface behind the tab contents and the hero.
///
/// The color is derived from the active Iced `Theme` background so panels
/// stay readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let weak = theme.extended_palette().background.weak.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..weak
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Bordered card used for downloads, brand tiles and search results.
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(base(theme))),
        border: Border {
            color: divider(theme),
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Sticky bar at the top of the window.
pub fn navbar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(base(theme))),
        border: Border {
            color: divider(theme),
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        shadow: shadow::SM,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Side drawer holding the navbar links in narrow windows.
pub fn drawer(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base(theme)
        })),
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Dialog box of the search modal.
pub fn modal(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(base(theme))),
        border: Border {
            color: divider(theme),
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Page text faded by `alpha`, used by the reveal animation.
pub fn faded(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        text_color: Some(Color {
            a: alpha.clamp(0.0, 1.0),
            ..theme.palette().text
        }),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_is_translucent() {
        let style = panel(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            other => panic!("expected color background, got {other:?}"),
        }
    }

    #[test]
    fn faded_text_alpha_is_clamped() {
        let style = faded(1.7)(&Theme::Dark);
        assert_eq!(style.text_color.map(|c| c.a), Some(1.0));
    }
}
