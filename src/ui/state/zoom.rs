// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! The zoom factor scales the whole flip book. Its ceiling depends on the
//! active layout preset while the floor and step are shared.

use super::LayoutPreset;
use crate::config::LayoutConfig;

/// Manages the zoom factor applied to the book.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomState {
    factor: f32,
    limits: LayoutConfig,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(LayoutConfig::default(), LayoutPreset::default())
    }
}

impl ZoomState {
    /// Creates a zoom state at the preset's default factor. `limits` is
    /// sanitized first so the floor never exceeds a cap.
    #[must_use]
    pub fn new(limits: LayoutConfig, preset: LayoutPreset) -> Self {
        let limits = limits.sanitized();
        Self {
            factor: preset.default_zoom(&limits),
            limits,
        }
    }

    #[must_use]
    pub fn factor(&self) -> f32 {
        self.factor
    }

    #[must_use]
    pub fn limits(&self) -> &LayoutConfig {
        &self.limits
    }

    /// Zoom factor as a whole percentage for display (1.6 → 160).
    #[must_use]
    pub fn percent(&self) -> u32 {
        // Factors are positive and bounded by the sanitized caps
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (self.factor * 100.0).round() as u32;
        percent
    }

    #[must_use]
    pub fn is_at_max(&self, preset: LayoutPreset) -> bool {
        self.factor >= preset.zoom_max(&self.limits)
    }

    #[must_use]
    pub fn is_at_min(&self) -> bool {
        self.factor <= self.limits.zoom_min
    }

    /// Applies zoom in by one step, capped by the preset maximum.
    /// Returns whether the factor changed.
    pub fn zoom_in(&mut self, preset: LayoutPreset) -> bool {
        let next = (self.factor + self.limits.zoom_step).min(preset.zoom_max(&self.limits));
        self.set(next)
    }

    /// Applies zoom out by one step, floored at the minimum.
    /// Returns whether the factor changed.
    pub fn zoom_out(&mut self) -> bool {
        let next = (self.factor - self.limits.zoom_step).max(self.limits.zoom_min);
        self.set(next)
    }

    /// Resets to the preset's default factor.
    pub fn reset(&mut self, preset: LayoutPreset) {
        self.factor = preset.default_zoom(&self.limits);
    }

    fn set(&mut self, next: f32) -> bool {
        if (next - self.factor).abs() < f32::EPSILON {
            return false;
        }
        self.factor = next;
        true
    }
}
