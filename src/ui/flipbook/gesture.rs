// SPDX-License-Identifier: MPL-2.0
//! Pointer tracking over the book: swipes, clicks and corner hover.

use iced::{Point, Size};

/// Share of the page width that counts as a corner hot zone.
pub const CORNER_ZONE_FRACTION: f32 = 0.15;

/// What a completed press/release pair asks the book to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    SwipeNext,
    SwipePrev,
    ClickNext,
    ClickPrev,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Classifies a press at `origin` released at `release` over a page of
/// `width`. Dragging left by at least `swipe_distance` turns forward,
/// dragging right turns back; anything shorter is a click on one half.
#[must_use]
pub fn classify(origin: Point, release: Point, width: f32, swipe_distance: f32) -> Gesture {
    let dx = release.x - origin.x;
    if dx <= -swipe_distance {
        Gesture::SwipeNext
    } else if dx >= swipe_distance {
        Gesture::SwipePrev
    } else if release.x >= width / 2.0 {
        Gesture::ClickNext
    } else {
        Gesture::ClickPrev
    }
}

/// Corner of a page of `size` under `cursor`, if any.
#[must_use]
pub fn corner_at(cursor: Point, size: Size) -> Option<Corner> {
    if size.width <= 0.0 || size.height <= 0.0 {
        return None;
    }
    if cursor.x < 0.0 || cursor.y < 0.0 || cursor.x > size.width || cursor.y > size.height {
        return None;
    }

    let zone = size.width.min(size.height) * CORNER_ZONE_FRACTION;
    let left = cursor.x <= zone;
    let right = cursor.x >= size.width - zone;
    let top = cursor.y <= zone;
    let bottom = cursor.y >= size.height - zone;

    match (left, right, top, bottom) {
        (true, _, true, _) => Some(Corner::TopLeft),
        (_, true, true, _) => Some(Corner::TopRight),
        (true, _, _, true) => Some(Corner::BottomLeft),
        (_, true, _, true) => Some(Corner::BottomRight),
        _ => None,
    }
}

/// Cursor and press position relative to the page.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    cursor: Option<Point>,
    pressed_at: Option<Point>,
}

impl PointerTracker {
    pub fn moved(&mut self, position: Point) {
        self.cursor = Some(position);
    }

    pub fn pressed(&mut self) {
        self.pressed_at = self.cursor;
    }

    /// Ends a press. Returns the gesture when both ends are known.
    pub fn released(&mut self, width: f32, swipe_distance: f32) -> Option<Gesture> {
        let origin = self.pressed_at.take()?;
        let release = self.cursor?;
        Some(classify(origin, release, width, swipe_distance))
    }

    /// Pointer left the page: forget the cursor and cancel any press.
    pub fn left(&mut self) {
        self.cursor = None;
        self.pressed_at = None;
    }

    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipes_need_the_full_distance() {
        let origin = Point::new(200.0, 100.0);
        assert_eq!(
            classify(origin, Point::new(170.0, 100.0), 400.0, 30.0),
            Gesture::SwipeNext
        );
        assert_eq!(
            classify(origin, Point::new(230.0, 90.0), 400.0, 30.0),
            Gesture::SwipePrev
        );
        assert_eq!(
            classify(origin, Point::new(180.0, 100.0), 400.0, 30.0),
            Gesture::ClickPrev
        );
    }

    #[test]
    fn clicks_use_page_halves() {
        let right = Point::new(300.0, 50.0);
        let left = Point::new(20.0, 50.0);
        assert_eq!(classify(right, right, 400.0, 30.0), Gesture::ClickNext);
        assert_eq!(classify(left, left, 400.0, 30.0), Gesture::ClickPrev);
    }

    #[test]
    fn corners_are_detected_inside_the_zone_only() {
        let size = Size::new(400.0, 600.0);
        assert_eq!(corner_at(Point::new(5.0, 5.0), size), Some(Corner::TopLeft));
        assert_eq!(corner_at(Point::new(395.0, 5.0), size), Some(Corner::TopRight));
        assert_eq!(corner_at(Point::new(5.0, 595.0), size), Some(Corner::BottomLeft));
        assert_eq!(corner_at(Point::new(395.0, 595.0), size), Some(Corner::BottomRight));
        assert_eq!(corner_at(Point::new(200.0, 300.0), size), None);
        assert_eq!(corner_at(Point::new(-1.0, 5.0), size), None);
    }

    #[test]
    fn tracker_reports_gesture_once_per_press() {
        let mut tracker = PointerTracker::default();
        tracker.moved(Point::new(300.0, 100.0));
        tracker.pressed();
        assert!(tracker.is_pressed());
        tracker.moved(Point::new(250.0, 100.0));

        assert_eq!(tracker.released(400.0, 30.0), Some(Gesture::SwipeNext));
        assert_eq!(tracker.released(400.0, 30.0), None);
    }

    #[test]
    fn leaving_cancels_the_press() {
        let mut tracker = PointerTracker::default();
        tracker.moved(Point::new(10.0, 10.0));
        tracker.pressed();
        tracker.left();
        assert!(tracker.cursor().is_none());
        assert_eq!(tracker.released(400.0, 30.0), None);
    }
}
