// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Plain state types kept apart from the widgets that render them, so the
//! layout and zoom rules can be tested without a renderer.

pub mod layout;
pub mod zoom;

pub use layout::LayoutPreset;
pub use zoom::ZoomState;
