// SPDX-License-Identifier: MPL-2.0
//! Centralized SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and their handles
//! are cached using `OnceLock`. Each icon is drawn as a mask and tinted with
//! the color given to [`tinted`].

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(zoom_in, "zoom_in.svg", "Magnifier with a plus sign.");
define_icon!(zoom_out, "zoom_out.svg", "Magnifier with a minus sign.");
define_icon!(rotate_ccw, "rotate_ccw.svg", "Counter-clockwise arrow.");
define_icon!(chevron_left, "chevron_left.svg", "Chevron pointing left.");
define_icon!(chevron_right, "chevron_right.svg", "Chevron pointing right.");

/// Sizes an icon to a square of `size` logical pixels.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Tints an icon with a single color.
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}
