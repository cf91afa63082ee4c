// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Radians, Shadow, Theme};
use std::f32::consts::FRAC_PI_2;

/// Translucent header/footer band over the background.
pub fn bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        border: Border {
            color: palette::GRAY_700,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Window backdrop when no background image is configured.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        ..Default::default()
    }
}

/// White page surface. Covers get a heavier frame and the book shadow.
pub fn page(is_cover: bool, drop_shadow: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            color: if is_cover { palette::GRAY_700 } else { palette::GRAY_300 },
            width: if is_cover { 2.0 } else { 0.0 },
            radius: radius::NONE.into(),
        },
        shadow: if drop_shadow { shadow::XL } else { shadow::NONE },
        ..Default::default()
    }
}

/// Placeholder drawn where a page image failed to load.
pub fn broken_page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        text_color: Some(palette::GRAY_600),
        ..Default::default()
    }
}

/// Darkening overlay on a folding page.
pub fn fold_shadow(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Hint drawn on the hovered page corner.
pub fn corner_mark(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::BLACK
        })),
        shadow: Shadow {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
            blur_radius: 6.0,
            ..shadow::NONE
        },
        ..Default::default()
    }
}

pub fn progress_track(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_700)),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

pub fn progress_fill(_theme: &Theme) -> container::Style {
    let gradient = Linear::new(Radians(FRAC_PI_2))
        .add_stop(0.0, palette::YELLOW_900)
        .add_stop(1.0, palette::AMBER_700);

    container::Style {
        background: Some(Background::Gradient(gradient.into())),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}
