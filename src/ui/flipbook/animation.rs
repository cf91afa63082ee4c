// SPDX-License-Identifier: MPL-2.0
//! Page-turn animation timing.
//!
//! A flip is a fold: the outgoing page narrows to nothing during the first
//! half, then the incoming page widens back to full width.

use std::time::{Duration, Instant};

/// Which way the book is turning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// An in-progress page turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipAnimation {
    pub from: usize,
    pub to: usize,
    started: Instant,
    duration: Duration,
}

impl FlipAnimation {
    #[must_use]
    pub fn new(from: usize, to: usize, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        if self.to >= self.from {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// Fraction of the turn completed at `now`, in `0.0..=1.0`.
    /// A zero duration is complete immediately.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Index of the page visible at `progress`.
    #[must_use]
    pub fn visible_page(&self, progress: f32) -> usize {
        if progress < 0.5 {
            self.from
        } else {
            self.to
        }
    }
}

/// Horizontal scale of the visible page at `progress`: 1 at both ends of
/// the turn, 0 at the fold.
#[must_use]
pub fn fold_scale(progress: f32) -> f32 {
    (1.0 - 2.0 * progress.clamp(0.0, 1.0)).abs()
}

/// Opacity of the fold shadow, peaking at `max_opacity` mid-turn.
#[must_use]
pub fn shadow_opacity(progress: f32, max_opacity: f32) -> f32 {
    max_opacity.clamp(0.0, 1.0) * (1.0 - fold_scale(progress))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn progress_follows_elapsed_time() {
        let start = Instant::now();
        let flip = FlipAnimation::new(0, 1, start, Duration::from_millis(600));

        assert_abs_diff_eq!(flip.progress(start), 0.0);
        assert_abs_diff_eq!(flip.progress(start + Duration::from_millis(300)), 0.5, epsilon = 1e-4);
        assert_abs_diff_eq!(flip.progress(start + Duration::from_secs(5)), 1.0);
        assert!(!flip.is_finished(start + Duration::from_millis(599)));
        assert!(flip.is_finished(start + Duration::from_millis(600)));
    }

    #[test]
    fn zero_duration_is_immediately_finished() {
        let start = Instant::now();
        let flip = FlipAnimation::new(2, 1, start, Duration::ZERO);
        assert!(flip.is_finished(start));
        assert_eq!(flip.direction(), Direction::Backward);
    }

    #[test]
    fn visible_page_switches_at_the_fold() {
        let flip = FlipAnimation::new(3, 4, Instant::now(), Duration::from_millis(600));
        assert_eq!(flip.visible_page(0.49), 3);
        assert_eq!(flip.visible_page(0.5), 4);
        assert_eq!(flip.direction(), Direction::Forward);
    }

    #[test]
    fn fold_and_shadow_are_symmetric() {
        assert_abs_diff_eq!(fold_scale(0.0), 1.0);
        assert_abs_diff_eq!(fold_scale(0.5), 0.0);
        assert_abs_diff_eq!(fold_scale(1.0), 1.0);
        assert_abs_diff_eq!(fold_scale(0.25), fold_scale(0.75));

        assert_abs_diff_eq!(shadow_opacity(0.0, 0.5), 0.0);
        assert_abs_diff_eq!(shadow_opacity(0.5, 0.5), 0.5);
        assert_abs_diff_eq!(shadow_opacity(0.5, 3.0), 1.0);
    }
}
