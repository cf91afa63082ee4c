// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::menu::LoadedPage;
use iced::widget::image::Handle;

/// A ready page of the given pixel size, backed by a blank RGBA buffer.
pub fn ready_page(width: u32, height: u32) -> LoadedPage {
    let pixels = vec![255u8; (width * height * 4) as usize];
    LoadedPage::Ready {
        handle: Handle::from_rgba(width, height, pixels),
        width,
        height,
    }
}

/// `count` ready pages with the desktop book aspect ratio.
pub fn ready_pages(count: usize) -> Vec<LoadedPage> {
    (0..count).map(|_| ready_page(4, 6)).collect()
}
