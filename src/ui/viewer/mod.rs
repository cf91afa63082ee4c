// SPDX-License-Identifier: MPL-2.0
//! Menu viewer: header with zoom controls, the flip book with navigation
//! buttons, and the footer progress bar.

pub mod component;
pub mod header;
pub mod progress;

pub use component::{Effect, Message, State};
