// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[layout]` - Mobile breakpoint and zoom bounds/defaults per preset
//! - `[book]` - Page-flip widget sizing and behavior
//! - `[menu]` - Title, subtitle, page list and background image
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `FLIPMENU_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use flipmenu::config;
//!
//! let (mut config, _warning) = config::load();
//! config.layout.zoom_step = 0.25;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the notice shown when `settings.toml` could not be parsed.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Enums
// =============================================================================

/// How the flip widget sizes its pages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SizeMode {
    /// Pages keep the preset dimensions.
    Fixed,
    /// Pages follow the available area, clamped to the min/max bounds.
    #[default]
    Stretch,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Breakpoint and zoom bounds for the two layout presets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Windows at most this wide use the mobile preset.
    pub mobile_breakpoint_px: f32,
    pub zoom_min: f32,
    pub zoom_step: f32,
    pub mobile_default_zoom: f32,
    pub desktop_default_zoom: f32,
    pub mobile_zoom_max: f32,
    pub desktop_zoom_max: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
            zoom_min: DEFAULT_ZOOM_MIN,
            zoom_step: DEFAULT_ZOOM_STEP,
            mobile_default_zoom: DEFAULT_MOBILE_ZOOM,
            desktop_default_zoom: DEFAULT_DESKTOP_ZOOM,
            mobile_zoom_max: DEFAULT_MOBILE_ZOOM_MAX,
            desktop_zoom_max: DEFAULT_DESKTOP_ZOOM_MAX,
        }
    }
}

impl LayoutConfig {
    /// Returns a copy where every value is usable: positive breakpoint, step
    /// within range and `zoom_min <= default <= max` for both presets.
    ///
    /// Values that are not finite fall back to their defaults.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let finite_or = |value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };

        let mobile_breakpoint_px =
            finite_or(self.mobile_breakpoint_px, defaults.mobile_breakpoint_px);
        let zoom_step =
            finite_or(self.zoom_step, defaults.zoom_step).clamp(MIN_ZOOM_STEP, MAX_ZOOM_STEP);
        let mobile_default_zoom =
            finite_or(self.mobile_default_zoom, defaults.mobile_default_zoom);
        let desktop_default_zoom =
            finite_or(self.desktop_default_zoom, defaults.desktop_default_zoom);

        // The floor may never sit above a preset default
        let zoom_min = finite_or(self.zoom_min, defaults.zoom_min)
            .min(mobile_default_zoom)
            .min(desktop_default_zoom);

        // Caps may never sit below their preset default
        let mobile_zoom_max =
            finite_or(self.mobile_zoom_max, defaults.mobile_zoom_max).max(mobile_default_zoom);
        let desktop_zoom_max =
            finite_or(self.desktop_zoom_max, defaults.desktop_zoom_max).max(desktop_default_zoom);

        Self {
            mobile_breakpoint_px,
            zoom_min,
            zoom_step,
            mobile_default_zoom,
            desktop_default_zoom,
            mobile_zoom_max,
            desktop_zoom_max,
        }
    }
}

/// Page-flip widget settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BookConfig {
    pub size_mode: SizeMode,
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
    pub flipping_time_ms: u64,
    pub draw_shadow: bool,
    pub max_shadow_opacity: f32,
    pub show_cover: bool,
    pub show_page_corners: bool,
    pub disable_flip_by_click: bool,
    pub use_mouse_events: bool,
    pub swipe_distance: f32,
    pub start_page: usize,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            size_mode: SizeMode::default(),
            min_width: DEFAULT_PAGE_MIN_WIDTH,
            max_width: DEFAULT_PAGE_MAX_WIDTH,
            min_height: DEFAULT_PAGE_MIN_HEIGHT,
            max_height: DEFAULT_PAGE_MAX_HEIGHT,
            flipping_time_ms: DEFAULT_FLIPPING_TIME_MS,
            draw_shadow: true,
            max_shadow_opacity: DEFAULT_MAX_SHADOW_OPACITY,
            show_cover: true,
            show_page_corners: true,
            disable_flip_by_click: false,
            use_mouse_events: true,
            swipe_distance: DEFAULT_SWIPE_DISTANCE,
            start_page: 0,
        }
    }
}

/// Menu content: what is shown and in which order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MenuConfig {
    pub title: String,
    pub subtitle: String,
    /// Page image URLs or file paths, in page order.
    pub pages: Vec<String>,
    /// Optional image drawn behind the whole viewer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_MENU_TITLE.to_string(),
            subtitle: DEFAULT_MENU_SUBTITLE.to_string(),
            pages: DEFAULT_MENU_PAGES.iter().map(|s| (*s).to_string()).collect(),
            background: None,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub book: BookConfig,

    #[serde(default)]
    pub menu: MenuConfig,
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Path of `settings.toml` in the resolved config directory.
pub fn config_path() -> Option<PathBuf> {
    get_config_path_with_override(None)
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to display.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded configuration");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default configuration");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
