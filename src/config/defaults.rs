// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Layout**: Breakpoint between the mobile and desktop presets
//! - **Zoom**: Zoom factor bounds, step and per-preset defaults
//! - **Book**: Page-flip widget sizing and behavior
//! - **Menu**: Title and default page list

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Windows at most this wide (logical pixels) use the mobile preset.
pub const DEFAULT_MOBILE_BREAKPOINT_PX: f32 = 768.0;

/// Book page size for the mobile preset.
pub const MOBILE_BOOK_WIDTH: f32 = 300.0;
pub const MOBILE_BOOK_HEIGHT: f32 = 430.0;

/// Book page size for the desktop preset.
pub const DESKTOP_BOOK_WIDTH: f32 = 400.0;
pub const DESKTOP_BOOK_HEIGHT: f32 = 600.0;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Lowest zoom factor reachable with zoom out.
pub const DEFAULT_ZOOM_MIN: f32 = 0.5;

/// Zoom factor increment per zoom in/out.
pub const DEFAULT_ZOOM_STEP: f32 = 0.2;

/// Zoom factor applied on mount, resize and reset in the mobile preset.
pub const DEFAULT_MOBILE_ZOOM: f32 = 1.4;

/// Zoom factor applied on mount, resize and reset in the desktop preset.
pub const DEFAULT_DESKTOP_ZOOM: f32 = 1.6;

/// Highest zoom factor in the mobile preset.
pub const DEFAULT_MOBILE_ZOOM_MAX: f32 = 2.5;

/// Highest zoom factor in the desktop preset.
pub const DEFAULT_DESKTOP_ZOOM_MAX: f32 = 3.0;

/// Smallest accepted zoom step; configured steps are clamped to this range.
pub const MIN_ZOOM_STEP: f32 = 0.01;
pub const MAX_ZOOM_STEP: f32 = 2.0;

// ==========================================================================
// Book Defaults
// ==========================================================================

pub const DEFAULT_PAGE_MIN_WIDTH: f32 = 280.0;
pub const DEFAULT_PAGE_MAX_WIDTH: f32 = 600.0;
pub const DEFAULT_PAGE_MIN_HEIGHT: f32 = 400.0;
pub const DEFAULT_PAGE_MAX_HEIGHT: f32 = 800.0;

/// Duration of one page turn.
pub const DEFAULT_FLIPPING_TIME_MS: u64 = 600;

/// Shadow opacity at the middle of a page turn.
pub const DEFAULT_MAX_SHADOW_OPACITY: f32 = 0.5;

/// Horizontal drag distance (logical pixels) recognized as a swipe.
pub const DEFAULT_SWIPE_DISTANCE: f32 = 30.0;

// ==========================================================================
// Menu Defaults
// ==========================================================================

pub const DEFAULT_MENU_TITLE: &str = "Mir Doner";
pub const DEFAULT_MENU_SUBTITLE: &str = "RESTAURANT";

/// Page images shown when neither the config file nor the CLI provides any.
pub const DEFAULT_MENU_PAGES: [&str; 6] = [
    "https://324rfedcsx.sirv.com/mir-doner/00.jpg",
    "https://324rfedcsx.sirv.com/mir-doner/001.jpg",
    "https://324rfedcsx.sirv.com/mir-doner/002.jpg",
    "https://324rfedcsx.sirv.com/mir-doner/003.jpg",
    "https://324rfedcsx.sirv.com/mir-doner/004.jpg",
    "https://324rfedcsx.sirv.com/mir-doner/00.jpg",
];

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_ZOOM_MIN > 0.0);
    assert!(DEFAULT_ZOOM_MIN < DEFAULT_MOBILE_ZOOM);
    assert!(DEFAULT_MOBILE_ZOOM < DEFAULT_MOBILE_ZOOM_MAX);
    assert!(DEFAULT_DESKTOP_ZOOM < DEFAULT_DESKTOP_ZOOM_MAX);
    assert!(DEFAULT_PAGE_MIN_WIDTH < DEFAULT_PAGE_MAX_WIDTH);
    assert!(DEFAULT_PAGE_MIN_HEIGHT < DEFAULT_PAGE_MAX_HEIGHT);
    assert!(MIN_ZOOM_STEP < DEFAULT_ZOOM_STEP && DEFAULT_ZOOM_STEP < MAX_ZOOM_STEP);
};
