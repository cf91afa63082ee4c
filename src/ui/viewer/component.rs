// SPDX-License-Identifier: MPL-2.0
//! Menu viewer component encapsulating state and update logic.

use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::menu::{self, LoadedPage, MenuBook};
use crate::ui::design_tokens::{palette, sizing, spacing};
use crate::ui::flipbook::{self, FlipBook};
use crate::ui::icons;
use crate::ui::state::{LayoutPreset, ZoomState};
use crate::ui::styles;
use crate::ui::viewer::{header, progress};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, image, text, tooltip, Column, Container, Stack, Svg};
use iced::{ContentFit, Element, Length, Size, Subscription};
use std::time::{Duration, Instant};

/// Tick period while a page turn is animating.
const FLIP_FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Clone)]
pub enum Message {
    /// The window opened or was resized to this size.
    WindowResized(Size),
    ZoomIn,
    ZoomOut,
    ResetZoom,
    FlipPrev,
    FlipNext,
    Book(flipbook::Message),
    PageLoaded { index: usize, page: LoadedPage },
    BackgroundLoaded(LoadedPage),
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The book settled on this page index.
    PageChanged(usize),
    /// Every page load resolved and the book is ready.
    BookMounted { pages: usize, broken: usize },
}

/// Complete viewer state. Lives while the viewer is mounted.
#[derive(Debug)]
pub struct State {
    menu: MenuBook,
    book_settings: flipbook::Settings,
    preset: LayoutPreset,
    zoom: ZoomState,
    current_page: usize,
    window_size: Size,
    pending: Vec<Option<LoadedPage>>,
    background: Option<LoadedPage>,
    book: Option<FlipBook>,
}

impl State {
    /// Mounts the viewer for `menu` in a window of `window_size`.
    ///
    /// A menu without pages gets an empty book right away; otherwise the
    /// book is mounted once every [`Message::PageLoaded`] has arrived.
    #[must_use]
    pub fn new(menu: MenuBook, config: &Config, window_size: Size) -> Self {
        let zoom = ZoomState::new(config.layout.clone(), LayoutPreset::default());
        let preset = LayoutPreset::from_width(window_size.width, zoom.limits().mobile_breakpoint_px);
        let pending = vec![None; menu.page_count()];

        let mut state = Self {
            menu,
            book_settings: flipbook::Settings::from(&config.book),
            preset,
            zoom,
            current_page: 0,
            window_size,
            pending,
            background: None,
            book: None,
        };
        state.zoom.reset(preset);
        state.try_mount_book();
        state
    }

    #[must_use]
    pub fn menu(&self) -> &MenuBook {
        &self.menu
    }

    #[must_use]
    pub fn layout(&self) -> LayoutPreset {
        self.preset
    }

    #[must_use]
    pub fn is_mobile_layout(&self) -> bool {
        self.preset.is_mobile()
    }

    #[must_use]
    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f32 {
        self.zoom.factor()
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        menu::progress_percent(self.current_page, self.menu.page_count())
    }

    #[must_use]
    pub fn book(&self) -> Option<&FlipBook> {
        self.book.as_ref()
    }

    /// Loaded backdrop image, if the menu has one and it arrived.
    #[must_use]
    pub fn background(&self) -> Option<&LoadedPage> {
        self.background.as_ref()
    }

    #[must_use]
    pub fn is_book_mounted(&self) -> bool {
        self.book.is_some()
    }

    /// Applies a window size: picks the layout preset for the width and
    /// resets zoom to that preset's default.
    pub fn on_resize(&mut self, size: Size) {
        self.window_size = size;
        let preset = LayoutPreset::from_width(size.width, self.zoom.limits().mobile_breakpoint_px);
        if preset != self.preset {
            tracing::debug!(width = size.width, ?preset, "layout preset changed");
        }
        self.preset = preset;
        self.zoom.reset(preset);
        self.sync_book();
    }

    pub fn zoom_in(&mut self) {
        if self.zoom.zoom_in(self.preset) {
            self.sync_book();
        }
    }

    pub fn zoom_out(&mut self) {
        if self.zoom.zoom_out() {
            self.sync_book();
        }
    }

    pub fn reset_zoom(&mut self) {
        self.zoom.reset(self.preset);
        self.sync_book();
    }

    /// Asks the book to turn back. Skipped while the book is not mounted.
    pub fn flip_prev(&mut self, now: Instant) {
        match self.book.as_mut() {
            Some(book) => {
                book.flip_prev(now);
            }
            None => tracing::trace!("previous page requested before the book is mounted"),
        }
    }

    /// Asks the book to turn forward. Skipped while the book is not mounted.
    pub fn flip_next(&mut self, now: Instant) {
        match self.book.as_mut() {
            Some(book) => {
                book.flip_next(now);
            }
            None => tracing::trace!("next page requested before the book is mounted"),
        }
    }

    /// Records the page the book settled on.
    pub fn on_flip(&mut self, index: usize) -> Effect {
        self.current_page = index;
        Effect::PageChanged(index)
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::WindowResized(size) => {
                self.on_resize(size);
                Effect::None
            }
            Message::ZoomIn => {
                self.zoom_in();
                Effect::None
            }
            Message::ZoomOut => {
                self.zoom_out();
                Effect::None
            }
            Message::ResetZoom => {
                self.reset_zoom();
                Effect::None
            }
            Message::FlipPrev => {
                self.flip_prev(Instant::now());
                Effect::None
            }
            Message::FlipNext => {
                self.flip_next(Instant::now());
                Effect::None
            }
            Message::Book(message) => {
                let event = self
                    .book
                    .as_mut()
                    .and_then(|book| book.update(message, Instant::now()));
                match event {
                    Some(flipbook::Event::Flipped(index)) => self.on_flip(index),
                    None => Effect::None,
                }
            }
            Message::PageLoaded { index, page } => {
                match self.pending.get_mut(index) {
                    Some(slot) => *slot = Some(page),
                    None => tracing::warn!(index, "page load result for an unknown page"),
                }
                self.try_mount_book()
            }
            Message::BackgroundLoaded(page) => {
                self.background = Some(page);
                Effect::None
            }
        }
    }

    /// Animation ticks, only while a turn is running.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.book.as_ref().is_some_and(FlipBook::is_flipping) {
            iced::time::every(FLIP_FRAME).map(|now| Message::Book(flipbook::Message::Tick(now)))
        } else {
            Subscription::none()
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let header = header::view(header::ViewContext {
            i18n,
            title: self.menu.title(),
            subtitle: self.menu.subtitle(),
            preset: self.preset,
            zoom: &self.zoom,
        });

        let footer = progress::view(progress::ViewContext {
            i18n,
            preset: self.preset,
            percent: self.progress_percent(),
            page: self
                .book
                .as_ref()
                .filter(|book| book.page_count() > 0)
                .map(|book| (self.current_page + 1, book.page_count())),
        });

        let content = Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(header)
            .push(self.body(i18n))
            .push(footer);

        let backdrop: Element<'a, Message> = match &self.background {
            Some(LoadedPage::Ready { handle, .. }) => image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover)
                .into(),
            _ => container(text(""))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::backdrop)
                .into(),
        };

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(backdrop)
            .push(content)
            .into()
    }

    fn body<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let book: Element<'a, Message> = match &self.book {
            Some(book) => book
                .view(flipbook::ViewContext { i18n })
                .map(Message::Book),
            None => text(i18n.tr("menu-loading")).into(),
        };

        let centered = Container::new(book)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .clip(true);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(centered)
            .push(nav_zone(
                icons::chevron_left(),
                i18n.tr("flip-prev-tooltip"),
                Message::FlipPrev,
                Horizontal::Left,
            ))
            .push(nav_zone(
                icons::chevron_right(),
                i18n.tr("flip-next-tooltip"),
                Message::FlipNext,
                Horizontal::Right,
            ))
            .into()
    }

    /// Area left for the book between the header, footer and nav buttons.
    fn book_area(&self) -> Size {
        if self.window_size.width <= 0.0 || self.window_size.height <= 0.0 {
            return Size::ZERO;
        }
        let (header, footer) = if self.preset.is_mobile() {
            (sizing::HEADER_HEIGHT_MOBILE, sizing::FOOTER_HEIGHT_MOBILE)
        } else {
            (sizing::HEADER_HEIGHT_DESKTOP, sizing::FOOTER_HEIGHT_DESKTOP)
        };
        let nav = 2.0 * (sizing::ICON_NAV + 2.0 * spacing::MD);
        Size::new(
            (self.window_size.width - nav).max(0.0),
            (self.window_size.height - header - footer - 2.0 * spacing::MD).max(0.0),
        )
    }

    /// Unzoomed page size: the preset frame, shrunk to the book area when
    /// the window is smaller, then clamped by the book settings.
    fn page_size(&self) -> Size {
        let nominal = self.preset.book_size();
        let area = self.book_area();
        let available = if area == Size::ZERO {
            nominal
        } else {
            Size::new(nominal.width.min(area.width), nominal.height.min(area.height))
        };
        self.book_settings.page_size(nominal, available)
    }

    fn sync_book(&mut self) {
        let page_size = self.page_size();
        let zoom = self.zoom.factor();
        if let Some(book) = self.book.as_mut() {
            book.set_page_size(page_size);
            book.set_zoom(zoom);
        }
    }

    fn try_mount_book(&mut self) -> Effect {
        if self.book.is_some() || self.pending.iter().any(Option::is_none) {
            return Effect::None;
        }

        let pages: Vec<LoadedPage> = self.pending.drain(..).flatten().collect();
        let broken = pages.iter().filter(|page| !page.is_ready()).count();
        let count = pages.len();

        let mut book = FlipBook::new(pages, self.book_settings.clone(), self.page_size());
        book.set_zoom(self.zoom.factor());
        self.current_page = book.current_page();
        self.book = Some(book);

        tracing::info!(pages = count, broken, "menu book mounted");
        Effect::BookMounted {
            pages: count,
            broken,
        }
    }
}

fn nav_zone<'a>(
    icon: Svg<'static>,
    label: String,
    message: Message,
    side: Horizontal,
) -> Element<'a, Message> {
    let icon = icons::tinted(icons::sized(icon, sizing::ICON_MD * 1.5), palette::WHITE);
    let arrow = button(
        container(icon)
            .width(Length::Fixed(sizing::ICON_NAV))
            .height(Length::Fixed(sizing::ICON_NAV))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .padding(0)
    .style(styles::button::nav_overlay)
    .on_press(message);

    let position = match side {
        Horizontal::Left => tooltip::Position::Right,
        _ => tooltip::Position::Left,
    };

    Container::new(styles::tooltip::styled(arrow, label, position))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(side)
        .align_y(Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::PageSource;
    use crate::test_utils::{assert_abs_diff_eq, ready_page};

    fn desktop() -> Size {
        Size::new(1280.0, 900.0)
    }

    fn menu(count: usize) -> MenuBook {
        let pages = (0..count)
            .map(|i| PageSource::Remote(format!("https://example.com/{i}.jpg")))
            .collect();
        MenuBook::new("Mir Doner", "RESTAURANT", pages)
    }

    fn loaded_state(count: usize) -> State {
        let mut state = State::new(menu(count), &Config::default(), desktop());
        for index in 0..count {
            state.handle_message(Message::PageLoaded {
                index,
                page: ready_page(40, 60),
            });
        }
        state
    }

    #[test]
    fn initial_layout_follows_window_width() {
        let wide = State::new(menu(6), &Config::default(), desktop());
        assert!(!wide.is_mobile_layout());
        assert_abs_diff_eq!(wide.zoom_factor(), 1.6);

        let mobile = State::new(menu(6), &Config::default(), Size::new(400.0, 800.0));
        assert!(mobile.is_mobile_layout());
        assert_abs_diff_eq!(mobile.zoom_factor(), 1.4);
    }

    #[test]
    fn book_mounts_after_every_page_resolves() {
        let mut state = State::new(menu(3), &Config::default(), desktop());
        let page = |index| Message::PageLoaded {
            index,
            page: ready_page(40, 60),
        };

        assert_eq!(state.handle_message(page(2)), Effect::None);
        assert_eq!(state.handle_message(page(0)), Effect::None);
        assert!(!state.is_book_mounted());

        let broken = Message::PageLoaded {
            index: 1,
            page: LoadedPage::Broken {
                reason: "404".to_string(),
            },
        };
        assert_eq!(
            state.handle_message(broken),
            Effect::BookMounted {
                pages: 3,
                broken: 1
            }
        );
        assert_eq!(state.book().map(FlipBook::page_count), Some(3));
    }

    #[test]
    fn empty_menu_mounts_immediately() {
        let state = State::new(menu(0), &Config::default(), desktop());
        assert!(state.is_book_mounted());
        assert_eq!(state.progress_percent(), 0);
    }

    #[test]
    fn flips_before_mount_are_skipped() {
        let mut state = State::new(menu(6), &Config::default(), desktop());
        assert_eq!(state.handle_message(Message::FlipNext), Effect::None);
        assert_eq!(state.handle_message(Message::FlipPrev), Effect::None);
        assert_eq!(state.current_page(), 0);
    }

    #[test]
    fn settled_flip_updates_progress() {
        let mut state = loaded_state(6);
        assert_eq!(state.progress_percent(), 17);

        let start = Instant::now();
        state.flip_next(start);
        let settle = Message::Book(flipbook::Message::Tick(start + Duration::from_secs(1)));
        assert_eq!(state.handle_message(settle), Effect::PageChanged(1));
        assert_eq!(state.progress_percent(), 33);
    }

    #[test]
    fn zoom_is_pushed_to_the_book() {
        let mut state = loaded_state(2);
        state.handle_message(Message::ZoomIn);
        let book = state.book().expect("book should be mounted");
        let page = book.page_size();
        assert_abs_diff_eq!(book.display_size().width, page.width * 1.8, epsilon = 1e-3);
    }

    #[test]
    fn resize_resets_zoom_and_switches_preset_at_the_breakpoint() {
        let mut state = loaded_state(2);
        state.zoom_in();
        state.zoom_in();

        state.on_resize(Size::new(1000.0, 900.0));
        assert!(!state.is_mobile_layout());
        assert_abs_diff_eq!(state.zoom_factor(), 1.6);

        state.on_resize(Size::new(768.0, 900.0));
        assert!(state.is_mobile_layout());
        assert_abs_diff_eq!(state.zoom_factor(), 1.4);

        state.on_resize(Size::new(769.0, 900.0));
        assert!(!state.is_mobile_layout());
    }

    #[test]
    fn page_size_shrinks_with_small_windows() {
        let state = State::new(menu(0), &Config::default(), Size::new(700.0, 500.0));
        let book = state.book().expect("empty menu mounts at once");
        // Mobile frame is 300x430; little height is left so the minimum applies
        assert_eq!(book.page_size(), Size::new(280.0, 400.0));
    }

    #[test]
    fn background_arrives_independently_of_pages() {
        let menu = menu(2).with_background(PageSource::Local("backdrop.jpg".into()));
        let mut state = State::new(menu, &Config::default(), desktop());
        assert!(state.background().is_none());

        state.handle_message(Message::BackgroundLoaded(ready_page(8, 8)));
        assert!(state.background().is_some_and(LoadedPage::is_ready));
        assert!(!state.is_book_mounted());
    }

    #[test]
    fn out_of_range_load_is_ignored() {
        let mut state = State::new(menu(1), &Config::default(), desktop());
        let effect = state.handle_message(Message::PageLoaded {
            index: 9,
            page: ready_page(4, 6),
        });
        assert_eq!(effect, Effect::None);
        assert!(!state.is_book_mounted());
    }
}
