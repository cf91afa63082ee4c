// SPDX-License-Identifier: MPL-2.0
//! `flipmenu` is a restaurant menu viewer built with the Iced GUI framework.
//!
//! It shows a fixed set of menu pages as a page-turning book with zoom
//! controls, a layout that adapts to the window width and a progress bar.

#![doc(html_root_url = "https://docs.rs/flipmenu/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod menu;
pub mod ui;

#[cfg(test)]
mod test_utils;
