// SPDX-License-Identifier: MPL-2.0
//! Layout presets selected from the window width.

use crate::config::{
    LayoutConfig, DESKTOP_BOOK_HEIGHT, DESKTOP_BOOK_WIDTH, MOBILE_BOOK_HEIGHT, MOBILE_BOOK_WIDTH,
};
use iced::Size;

/// The (dimensions, default zoom, zoom cap) tuple in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutPreset {
    Mobile,
    #[default]
    Desktop,
}

impl LayoutPreset {
    /// Widths at or below the breakpoint are mobile.
    #[must_use]
    pub fn from_width(width: f32, breakpoint_px: f32) -> Self {
        if width <= breakpoint_px {
            LayoutPreset::Mobile
        } else {
            LayoutPreset::Desktop
        }
    }

    #[must_use]
    pub fn is_mobile(self) -> bool {
        self == LayoutPreset::Mobile
    }

    /// Nominal page size before stretching and zoom.
    #[must_use]
    pub fn book_size(self) -> Size {
        match self {
            LayoutPreset::Mobile => Size::new(MOBILE_BOOK_WIDTH, MOBILE_BOOK_HEIGHT),
            LayoutPreset::Desktop => Size::new(DESKTOP_BOOK_WIDTH, DESKTOP_BOOK_HEIGHT),
        }
    }

    #[must_use]
    pub fn default_zoom(self, layout: &LayoutConfig) -> f32 {
        match self {
            LayoutPreset::Mobile => layout.mobile_default_zoom,
            LayoutPreset::Desktop => layout.desktop_default_zoom,
        }
    }

    #[must_use]
    pub fn zoom_max(self, layout: &LayoutConfig) -> f32 {
        match self {
            LayoutPreset::Mobile => layout.mobile_zoom_max,
            LayoutPreset::Desktop => layout.desktop_zoom_max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive_for_mobile() {
        assert_eq!(LayoutPreset::from_width(768.0, 768.0), LayoutPreset::Mobile);
        assert_eq!(LayoutPreset::from_width(320.0, 768.0), LayoutPreset::Mobile);
        assert_eq!(LayoutPreset::from_width(768.5, 768.0), LayoutPreset::Desktop);
        assert_eq!(LayoutPreset::from_width(1920.0, 768.0), LayoutPreset::Desktop);
    }

    #[test]
    fn presets_carry_expected_dimensions_and_zoom() {
        let layout = LayoutConfig::default();

        assert_eq!(LayoutPreset::Mobile.book_size(), Size::new(300.0, 430.0));
        assert_eq!(LayoutPreset::Desktop.book_size(), Size::new(400.0, 600.0));
        assert_eq!(LayoutPreset::Mobile.default_zoom(&layout), 1.4);
        assert_eq!(LayoutPreset::Desktop.default_zoom(&layout), 1.6);
        assert_eq!(LayoutPreset::Mobile.zoom_max(&layout), 2.5);
        assert_eq!(LayoutPreset::Desktop.zoom_max(&layout), 3.0);
    }
}
