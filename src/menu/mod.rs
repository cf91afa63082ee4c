// SPDX-License-Identifier: MPL-2.0
//! Menu model: the fixed, ordered list of page images.
//!
//! A [`MenuBook`] is built once at startup (from the config file or CLI) and
//! never changes afterwards. Page order is insertion order.

pub mod loader;

pub use loader::{load_page, LoadedPage};

use crate::config::MenuConfig;
use std::fmt;
use std::path::PathBuf;

/// Where a page image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    /// Fetched over HTTP(S).
    Remote(String),
    /// Read from the local filesystem.
    Local(PathBuf),
}

impl PageSource {
    /// Classifies a raw reference: `http://` and `https://` prefixes are
    /// remote, everything else is treated as a path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            PageSource::Remote(trimmed.to_string())
        } else {
            PageSource::Local(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for PageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSource::Remote(url) => write!(f, "{url}"),
            PageSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The menu: a title and its pages in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuBook {
    title: String,
    subtitle: String,
    pages: Vec<PageSource>,
    background: Option<PageSource>,
}

impl MenuBook {
    #[must_use]
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>, pages: Vec<PageSource>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            pages,
            background: None,
        }
    }

    /// Builds the menu from config, replacing the page list with
    /// `page_overrides` when it is non-empty. Blank entries are skipped.
    #[must_use]
    pub fn from_config(menu: &MenuConfig, page_overrides: &[String]) -> Self {
        let raw_pages = if page_overrides.is_empty() {
            &menu.pages
        } else {
            page_overrides
        };
        let pages = raw_pages
            .iter()
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| PageSource::parse(raw))
            .collect();

        Self {
            title: menu.title.clone(),
            subtitle: menu.subtitle.clone(),
            pages,
            background: menu
                .background
                .as_deref()
                .filter(|raw| !raw.trim().is_empty())
                .map(PageSource::parse),
        }
    }

    #[must_use]
    pub fn with_background(mut self, background: PageSource) -> Self {
        self.background = Some(background);
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    #[must_use]
    pub fn pages(&self) -> &[PageSource] {
        &self.pages
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn background(&self) -> Option<&PageSource> {
        self.background.as_ref()
    }
}

/// Percentage of the menu reached when `current_index` is displayed,
/// rounded to the nearest integer. An empty menu reports 0.
#[must_use]
pub fn progress_percent(current_index: usize, page_count: usize) -> u8 {
    if page_count == 0 {
        return 0;
    }
    let position = (current_index + 1).min(page_count);
    let percent = (position as f64 / page_count as f64 * 100.0).round();
    // Bounded to 0..=100 by the min above
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = percent as u8;
    percent
}
