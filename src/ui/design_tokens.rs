// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the catalog page, the lightbox and the navbar.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use catalog_lens::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.07, 0.08, 0.1);
    pub const GRAY_900: Color = Color::from_rgb(0.11, 0.12, 0.15);
    pub const GRAY_800: Color = Color::from_rgb(0.17, 0.18, 0.22);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.32, 0.36);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.57, 0.6);
    pub const GRAY_200: Color = Color::from_rgb(0.86, 0.87, 0.89);
    pub const GRAY_100: Color = Color::from_rgb(0.94, 0.95, 0.96);

    // Brand colors (teal-blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.25, 0.7, 0.85);
    pub const PRIMARY_500: Color = Color::from_rgb(0.0, 0.6, 0.8);
    pub const PRIMARY_600: Color = Color::from_rgb(0.0, 0.5, 0.7);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.2, 0.55, 0.95);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_LIGHTBOX: f32 = 0.9;

    /// Semi-transparent panels (toasts, navbar drawer)
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Bars
    pub const NAVBAR_HEIGHT: f32 = 56.0;

    // Gallery
    pub const MAIN_IMAGE_HEIGHT: f32 = 360.0;
    pub const THUMBNAIL: f32 = 72.0;
    pub const BRAND_LOGO_HEIGHT: f32 = 40.0;
    pub const BRAND_TILE_WIDTH: f32 = 140.0;

    // Component widths
    pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
    pub const DRAWER_WIDTH: f32 = 280.0;
    pub const SEARCH_MODAL_WIDTH: f32 = 520.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Round control buttons of the lightbox toolbar
    pub const LIGHTBOX_BUTTON: f32 = 44.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Product name heading
    pub const TITLE_LG: f32 = 30.0;

    /// Navbar title, section headings
    pub const TITLE_MD: f32 = 20.0;

    /// Panel headers
    pub const TITLE_SM: f32 = 18.0;

    /// Search input, emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Most UI text
    pub const BODY: f32 = 14.0;

    /// Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Captions, counters, footer
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.15,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::MAIN_IMAGE_HEIGHT > sizing::THUMBNAIL);
    assert!(sizing::CONTENT_MAX_WIDTH > sizing::SEARCH_MODAL_WIDTH);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
