// SPDX-License-Identifier: MPL-2.0
//! Page-flip book widget.
//!
//! `FlipBook` owns the loaded pages, the current page index, the running
//! page-turn animation and pointer tracking. Its owner drives it through the
//! imperative API ([`FlipBook::flip_next`], [`FlipBook::flip_prev`],
//! [`FlipBook::turn_to_page`]) and forwards widget [`Message`]s to
//! [`FlipBook::update`]. A settled turn is reported as [`Event::Flipped`].
//!
//! Bounds are enforced here: turning past the first or last page, or while
//! a turn is still running, does nothing.

pub mod animation;
pub mod gesture;
mod view;

pub use animation::{Direction, FlipAnimation};
pub use gesture::{Corner, Gesture};
pub use view::ViewContext;

use crate::config::{BookConfig, SizeMode};
use crate::menu::LoadedPage;
use gesture::PointerTracker;
use iced::{Point, Size};
use std::time::{Duration, Instant};

/// Behavior and sizing of the book.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub size_mode: SizeMode,
    pub min_size: Size,
    pub max_size: Size,
    pub flipping_time: Duration,
    pub draw_shadow: bool,
    pub max_shadow_opacity: f32,
    pub show_cover: bool,
    pub show_page_corners: bool,
    pub disable_flip_by_click: bool,
    pub use_mouse_events: bool,
    pub swipe_distance: f32,
    pub start_page: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(&BookConfig::default())
    }
}

impl From<&BookConfig> for Settings {
    fn from(config: &BookConfig) -> Self {
        let min_size = Size::new(config.min_width.max(1.0), config.min_height.max(1.0));
        Self {
            size_mode: config.size_mode,
            min_size,
            max_size: Size::new(
                config.max_width.max(min_size.width),
                config.max_height.max(min_size.height),
            ),
            flipping_time: Duration::from_millis(config.flipping_time_ms),
            draw_shadow: config.draw_shadow,
            max_shadow_opacity: config.max_shadow_opacity.clamp(0.0, 1.0),
            show_cover: config.show_cover,
            show_page_corners: config.show_page_corners,
            disable_flip_by_click: config.disable_flip_by_click,
            use_mouse_events: config.use_mouse_events,
            swipe_distance: config.swipe_distance.max(0.0),
            start_page: config.start_page,
        }
    }
}

impl Settings {
    /// Page size for the `nominal` preset dimensions inside `available`.
    ///
    /// In stretch mode the nominal size is scaled to fit the available area
    /// (keeping its aspect ratio), then each side is clamped to its bounds.
    #[must_use]
    pub fn page_size(&self, nominal: Size, available: Size) -> Size {
        match self.size_mode {
            SizeMode::Fixed => nominal,
            SizeMode::Stretch => {
                let scale = if available.width > 0.0 && available.height > 0.0 {
                    (available.width / nominal.width).min(available.height / nominal.height)
                } else {
                    1.0
                };
                Size::new(
                    (nominal.width * scale).clamp(self.min_size.width, self.max_size.width),
                    (nominal.height * scale).clamp(self.min_size.height, self.max_size.height),
                )
            }
        }
    }
}

/// Widget-internal messages produced by the book's view.
#[derive(Debug, Clone)]
pub enum Message {
    PointerMoved(Point),
    PointerPressed,
    PointerReleased,
    PointerLeft,
    Tick(Instant),
}

/// Notifications for the owner of the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A page turn settled on this page index.
    Flipped(usize),
}

#[derive(Debug, Clone)]
pub struct FlipBook {
    pages: Vec<LoadedPage>,
    settings: Settings,
    current: usize,
    animation: Option<FlipAnimation>,
    /// Progress of `animation` at the last tick.
    progress: f32,
    pointer: PointerTracker,
    page_size: Size,
    zoom: f32,
}

impl FlipBook {
    /// Creates a book opened at the configured start page (clamped).
    #[must_use]
    pub fn new(pages: Vec<LoadedPage>, settings: Settings, page_size: Size) -> Self {
        let current = settings.start_page.min(pages.len().saturating_sub(1));
        Self {
            pages,
            settings,
            current,
            animation: None,
            progress: 0.0,
            pointer: PointerTracker::default(),
            page_size,
            zoom: 1.0,
        }
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn pages(&self) -> &[LoadedPage] {
        &self.pages
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn is_flipping(&self) -> bool {
        self.animation.is_some()
    }

    #[must_use]
    pub fn animation(&self) -> Option<&FlipAnimation> {
        self.animation.as_ref()
    }

    /// Progress of the running turn as of the last tick.
    #[must_use]
    pub fn flip_progress(&self) -> f32 {
        self.progress
    }

    /// Unscaled page size.
    #[must_use]
    pub fn page_size(&self) -> Size {
        self.page_size
    }

    pub fn set_page_size(&mut self, size: Size) {
        self.page_size = size;
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
    }

    /// Page size on screen, zoom included.
    #[must_use]
    pub fn display_size(&self) -> Size {
        Size::new(self.page_size.width * self.zoom, self.page_size.height * self.zoom)
    }

    /// Whether `index` is drawn as a hard cover.
    #[must_use]
    pub fn is_cover(&self, index: usize) -> bool {
        self.settings.show_cover && (index == 0 || index + 1 == self.pages.len())
    }

    /// Starts turning to the next page. Returns whether a turn started.
    pub fn flip_next(&mut self, now: Instant) -> bool {
        if self.current + 1 >= self.pages.len() {
            return false;
        }
        self.start_flip(self.current + 1, now)
    }

    /// Starts turning to the previous page. Returns whether a turn started.
    pub fn flip_prev(&mut self, now: Instant) -> bool {
        if self.current == 0 {
            return false;
        }
        self.start_flip(self.current - 1, now)
    }

    /// Jumps to `index` without animation, cancelling any running turn.
    pub fn turn_to_page(&mut self, index: usize) -> Option<Event> {
        if index >= self.pages.len() {
            return None;
        }
        self.animation = None;
        if index == self.current {
            return None;
        }
        self.current = index;
        Some(Event::Flipped(index))
    }

    /// Advances the running turn; settles it once its time is up.
    pub fn tick(&mut self, now: Instant) -> Option<Event> {
        let animation = self.animation?;
        if !animation.is_finished(now) {
            self.progress = animation.progress(now);
            return None;
        }
        self.animation = None;
        self.progress = 0.0;
        self.current = animation.to;
        tracing::debug!(page = animation.to, "page turn settled");
        Some(Event::Flipped(animation.to))
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Option<Event> {
        match message {
            Message::Tick(instant) => return self.tick(instant),
            _ if !self.settings.use_mouse_events => {}
            Message::PointerMoved(position) => self.pointer.moved(position),
            Message::PointerPressed => self.pointer.pressed(),
            Message::PointerReleased => {
                let width = self.display_size().width;
                match self.pointer.released(width, self.settings.swipe_distance) {
                    Some(Gesture::SwipeNext) => {
                        self.flip_next(now);
                    }
                    Some(Gesture::SwipePrev) => {
                        self.flip_prev(now);
                    }
                    Some(Gesture::ClickNext) if !self.settings.disable_flip_by_click => {
                        self.flip_next(now);
                    }
                    Some(Gesture::ClickPrev) if !self.settings.disable_flip_by_click => {
                        self.flip_prev(now);
                    }
                    _ => {}
                }
            }
            Message::PointerLeft => self.pointer.left(),
        }
        None
    }

    /// Corner currently highlighted under the pointer.
    #[must_use]
    pub fn hovered_corner(&self) -> Option<Corner> {
        if !self.settings.show_page_corners || !self.settings.use_mouse_events || self.is_flipping() {
            return None;
        }
        self.pointer
            .cursor()
            .and_then(|cursor| gesture::corner_at(cursor, self.display_size()))
    }

    fn start_flip(&mut self, to: usize, now: Instant) -> bool {
        if self.animation.is_some() {
            return false;
        }
        self.animation = Some(FlipAnimation::new(
            self.current,
            to,
            now,
            self.settings.flipping_time,
        ));
        self.progress = 0.0;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, ready_pages};

    fn page() -> Size {
        Size::new(400.0, 600.0)
    }

    fn book(count: usize) -> FlipBook {
        FlipBook::new(ready_pages(count), Settings::default(), page())
    }

    fn settle(book: &mut FlipBook, started: Instant) -> Option<Event> {
        book.tick(started + book.settings().flipping_time)
    }

    #[test]
    fn flip_next_settles_after_flipping_time() {
        let mut book = book(6);
        let start = Instant::now();

        assert!(book.flip_next(start));
        assert!(book.is_flipping());
        assert_eq!(book.tick(start + Duration::from_millis(300)), None);
        assert_eq!(book.current_page(), 0);
        assert_abs_diff_eq!(book.flip_progress(), 0.5, epsilon = 1e-3);

        assert_eq!(settle(&mut book, start), Some(Event::Flipped(1)));
        assert_eq!(book.current_page(), 1);
        assert!(!book.is_flipping());
        assert_eq!(book.tick(start + Duration::from_secs(2)), None);
    }

    #[test]
    fn flips_clamp_at_both_ends() {
        let mut book = book(2);
        let start = Instant::now();

        assert!(!book.flip_prev(start));
        assert!(book.flip_next(start));
        settle(&mut book, start);
        assert!(!book.flip_next(start));
        assert_eq!(book.current_page(), 1);
    }

    #[test]
    fn requests_during_a_turn_are_ignored() {
        let mut book = book(6);
        let start = Instant::now();

        assert!(book.flip_next(start));
        assert!(!book.flip_next(start + Duration::from_millis(10)));
        assert_eq!(settle(&mut book, start), Some(Event::Flipped(1)));
    }

    #[test]
    fn empty_book_never_flips() {
        let mut book = book(0);
        let now = Instant::now();
        assert!(!book.flip_next(now));
        assert!(!book.flip_prev(now));
        assert_eq!(book.turn_to_page(0), None);
    }

    #[test]
    fn start_page_is_clamped() {
        let settings = Settings {
            start_page: 42,
            ..Settings::default()
        };
        let book = FlipBook::new(ready_pages(3), settings, page());
        assert_eq!(book.current_page(), 2);
    }

    #[test]
    fn turn_to_page_jumps_and_reports() {
        let mut book = book(6);
        let now = Instant::now();
        book.flip_next(now);

        assert_eq!(book.turn_to_page(4), Some(Event::Flipped(4)));
        assert!(!book.is_flipping());
        assert_eq!(book.turn_to_page(4), None);
        assert_eq!(book.turn_to_page(10), None);
    }

    #[test]
    fn swipe_left_turns_forward_and_swipe_right_turns_back() {
        let mut book = book(6);
        let start = Instant::now();

        book.update(Message::PointerMoved(Point::new(300.0, 200.0)), start);
        book.update(Message::PointerPressed, start);
        book.update(Message::PointerMoved(Point::new(200.0, 200.0)), start);
        book.update(Message::PointerReleased, start);
        assert_eq!(
            book.update(Message::Tick(start + Duration::from_secs(1)), start),
            Some(Event::Flipped(1))
        );

        let later = start + Duration::from_secs(2);
        book.update(Message::PointerMoved(Point::new(100.0, 200.0)), later);
        book.update(Message::PointerPressed, later);
        book.update(Message::PointerMoved(Point::new(180.0, 200.0)), later);
        book.update(Message::PointerReleased, later);
        assert_eq!(
            book.update(Message::Tick(later + Duration::from_secs(1)), later),
            Some(Event::Flipped(0))
        );
    }

    #[test]
    fn click_on_right_half_turns_forward_unless_disabled() {
        let start = Instant::now();
        let click = |book: &mut FlipBook| {
            book.update(Message::PointerMoved(Point::new(350.0, 300.0)), start);
            book.update(Message::PointerPressed, start);
            book.update(Message::PointerReleased, start);
        };

        let mut enabled = book(3);
        click(&mut enabled);
        assert!(enabled.is_flipping());

        let settings = Settings {
            disable_flip_by_click: true,
            ..Settings::default()
        };
        let mut disabled = FlipBook::new(ready_pages(3), settings, page());
        click(&mut disabled);
        assert!(!disabled.is_flipping());
    }

    #[test]
    fn pointer_input_is_ignored_without_mouse_events() {
        let settings = Settings {
            use_mouse_events: false,
            ..Settings::default()
        };
        let mut book = FlipBook::new(ready_pages(3), settings, page());
        let now = Instant::now();

        book.update(Message::PointerMoved(Point::new(5.0, 5.0)), now);
        book.update(Message::PointerPressed, now);
        book.update(Message::PointerMoved(Point::new(300.0, 5.0)), now);
        book.update(Message::PointerReleased, now);
        assert!(!book.is_flipping());
        assert_eq!(book.hovered_corner(), None);

        // Programmatic navigation still works
        assert!(book.flip_next(now));
    }

    #[test]
    fn hovered_corner_follows_zoomed_size() {
        let mut book = book(3);
        book.set_zoom(2.0);
        let now = Instant::now();

        book.update(Message::PointerMoved(Point::new(795.0, 1195.0)), now);
        assert_eq!(book.hovered_corner(), Some(Corner::BottomRight));

        book.update(Message::PointerLeft, now);
        assert_eq!(book.hovered_corner(), None);
    }

    #[test]
    fn covers_are_first_and_last_page() {
        let book = book(4);
        assert!(book.is_cover(0));
        assert!(!book.is_cover(1));
        assert!(book.is_cover(3));
    }

    #[test]
    fn stretch_fits_available_area_within_bounds() {
        let settings = Settings::default();
        let nominal = Size::new(400.0, 600.0);

        // Plenty of room: capped by the maximums
        let large = settings.page_size(nominal, Size::new(2000.0, 2000.0));
        assert_eq!(large, Size::new(600.0, 800.0));

        let fitted = settings.page_size(nominal, Size::new(1000.0, 690.0));
        assert_abs_diff_eq!(fitted.width, 460.0, epsilon = 1e-3);
        assert_abs_diff_eq!(fitted.height, 690.0, epsilon = 1e-3);

        // Tight room: floored by the minimums
        let small = settings.page_size(nominal, Size::new(100.0, 100.0));
        assert_eq!(small, Size::new(280.0, 400.0));

        // Unknown area keeps the nominal size
        assert_eq!(settings.page_size(nominal, Size::ZERO), nominal);

        let fixed = Settings {
            size_mode: SizeMode::Fixed,
            ..Settings::default()
        };
        assert_eq!(fixed.page_size(nominal, Size::new(2000.0, 2000.0)), nominal);
    }
}
