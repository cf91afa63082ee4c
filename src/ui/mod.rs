// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following the Elm-style
//! "state down, messages up" pattern.
//!
//! - [`viewer`] - The menu viewer: header, flip book, progress footer
//! - [`flipbook`] - Page-turning book widget with its imperative API
//! - [`state`] - Layout preset and zoom state
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - SVG icon loading and rendering

pub mod design_tokens;
pub mod flipbook;
pub mod icons;
pub mod state;
pub mod styles;
pub mod viewer;
