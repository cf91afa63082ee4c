// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design constants shared by every view of the menu viewer.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use flipmenu::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let bar_bg = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};
let padding = spacing::SM;
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
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859);

    // Progress gradient (dark yellow to amber)
    pub const YELLOW_900: Color = Color::from_rgb(0.443, 0.247, 0.071);
    pub const AMBER_700: Color = Color::from_rgb(0.706, 0.325, 0.035);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 16.0;
    pub const ICON_NAV: f32 = 40.0;

    /// Header and footer heights, reserved when sizing the book.
    pub const HEADER_HEIGHT_MOBILE: f32 = 48.0;
    pub const HEADER_HEIGHT_DESKTOP: f32 = 60.0;
    pub const FOOTER_HEIGHT_MOBILE: f32 = 36.0;
    pub const FOOTER_HEIGHT_DESKTOP: f32 = 56.0;

    pub const PROGRESS_TRACK_MOBILE: f32 = 6.0;
    pub const PROGRESS_TRACK_DESKTOP: f32 = 8.0;
    pub const PROGRESS_MAX_WIDTH: f32 = 448.0;

    /// Widest extent of header/footer content.
    pub const CONTENT_MAX_WIDTH: f32 = 1280.0;

    pub const CORNER_MARK: f32 = 18.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const TITLE_DESKTOP: f32 = 18.0;
    pub const TITLE_MOBILE: f32 = 16.0;
    pub const BODY_DESKTOP: f32 = 14.0;
    pub const BODY_MOBILE: f32 = 12.0;
    pub const CAPTION: f32 = 10.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const LG: f32 = 8.0;
    pub const FULL: f32 = 9999.0;
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

    /// Drop shadow under the book.
    pub const XL: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.45),
        offset: Vector { x: 0.0, y: 12.0 },
        blur_radius: 28.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < opacity::OVERLAY_STRONG);

    assert!(typography::TITLE_DESKTOP > typography::TITLE_MOBILE);
    assert!(typography::BODY_DESKTOP > typography::BODY_MOBILE);
    assert!(typography::BODY_MOBILE > typography::CAPTION);

    assert!(sizing::HEADER_HEIGHT_DESKTOP > sizing::HEADER_HEIGHT_MOBILE);
    assert!(sizing::FOOTER_HEIGHT_DESKTOP > sizing::FOOTER_HEIGHT_MOBILE);
};
