// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn is_light(theme: &Theme) -> bool {
    matches!(theme, Theme::Light)
}

/// Primary action (open catalog, search result, show more brands).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, elevation) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => (palette::GRAY_400, palette::GRAY_400, shadow::NONE),
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: elevation,
        snap: true,
    }
}

/// Round translucent control drawn over the lightbox image.
pub fn overlay(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_STRONG,
        button::Status::Pressed => opacity::OVERLAY_LIGHTBOX,
        button::Status::Disabled => opacity::OVERLAY_SUBTLE,
        button::Status::Active => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: if status == button::Status::Disabled {
            palette::GRAY_400
        } else {
            WHITE
        },
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Tab header. The active tab is outlined in the brand color.
pub fn tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let light = is_light(theme);
        let idle_text = if light {
            palette::GRAY_700
        } else {
            palette::GRAY_400
        };
        let (text_color, border_color) = match (active, status) {
            (true, _) => (
                if light {
                    palette::PRIMARY_600
                } else {
                    palette::PRIMARY_400
                },
                palette::PRIMARY_500,
            ),
            (false, button::Status::Hovered) => (
                theme.palette().text,
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..palette::PRIMARY_500
                },
            ),
            (false, _) => (idle_text, Color::TRANSPARENT),
        };

        button::Style {
            background: None,
            text_color,
            border: Border {
                color: border_color,
                width: border::WIDTH_MD,
                radius: radius::NONE.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless text button for navbar links and "copy link".
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_500,
        button::Status::Disabled => palette::GRAY_400,
        button::Status::Active => theme.palette().text,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Icon-like button (hamburger, theme toggle, search, close).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let hover = if is_light(theme) {
        palette::GRAY_200
    } else {
        palette::GRAY_800
    };
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(hover)),
        _ => None,
    };

    button::Style {
        background,
        text_color: theme.palette().text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Frame around a gallery thumbnail; the one showing the main image is
/// outlined.
pub fn thumbnail(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let idle = if is_light(theme) {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        };
        let border_color = match (selected, status) {
            (true, _) => palette::PRIMARY_500,
            (false, button::Status::Hovered) => palette::PRIMARY_400,
            (false, _) => idle,
        };

        button::Style {
            background: None,
            text_color: theme.palette().text,
            border: Border {
                color: border_color,
                width: border::WIDTH_MD,
                radius: radius::SM.into(),
            },
            shadow: if selected { shadow::SM } else { shadow::NONE },
            snap: true,
        }
    }
}

/// Transparent full-area button used for click-to-dismiss backdrops and
/// the clickable main image.
pub fn bare(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: Color::TRANSPARENT,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::PRIMARY_500)));
    }

    #[test]
    fn overlay_button_darkens_on_hover() {
        let normal = overlay(&Theme::Dark, button::Status::Active);
        let hover = overlay(&Theme::Dark, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn only_active_tab_is_outlined() {
        let active = tab(true)(&Theme::Light, button::Status::Active);
        let inactive = tab(false)(&Theme::Light, button::Status::Active);
        assert_eq!(active.border.color, palette::PRIMARY_500);
        assert_eq!(inactive.border.color, Color::TRANSPARENT);
    }

    #[test]
    fn selected_thumbnail_is_outlined_in_brand_color() {
        let style = thumbnail(true)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.border.color, palette::PRIMARY_500);
    }
}
