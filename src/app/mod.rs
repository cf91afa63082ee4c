// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the menu viewer.
//!
//! The `App` struct wires together configuration, localization and the
//! viewer, and turns viewer effects into logging. Page loads are started at
//! boot as async tasks; their results come back as viewer messages.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::menu::{self, loader, MenuBook, PageSource};
use crate::ui::viewer;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    menu: MenuBook,
    /// `None` once the viewer is unmounted.
    viewer: Option<viewer::State>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("menu", &self.menu.title())
            .field("viewer_mounted", &self.viewer.is_some())
            .finish()
    }
}

/// Builds the window settings. Close requests are handled by the app so the
/// viewer can unmount first.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration, then boots with it.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (app, task) = Self::with_config(flags, config);
        if let Some(key) = config_warning {
            tracing::warn!("{}", app.i18n.tr(&key));
        }
        (app, task)
    }

    /// Mounts the viewer for the configured menu and starts loading every
    /// page (and the optional background).
    pub fn with_config(flags: Flags, config: Config) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &config);
        let menu = MenuBook::from_config(&config.menu, &flags.pages);
        tracing::info!(title = menu.title(), pages = menu.page_count(), "opening menu");

        let viewer = viewer::State::new(
            menu.clone(),
            &config,
            Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        );
        let task = load_menu(&menu);

        let app = App {
            i18n,
            config,
            menu,
            viewer: Some(viewer),
        };
        (app, task)
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn viewer(&self) -> Option<&viewer::State> {
        self.viewer.as_ref()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(message) => {
                // Unmounted: late resizes and page loads are dropped
                let Some(viewer) = self.viewer.as_mut() else {
                    return Task::none();
                };
                match viewer.handle_message(message) {
                    viewer::Effect::None => {}
                    viewer::Effect::PageChanged(index) => {
                        tracing::debug!(page = index, "page changed");
                    }
                    viewer::Effect::BookMounted { pages, broken } if broken > 0 => {
                        tracing::warn!(pages, broken, "some menu pages could not be loaded");
                    }
                    viewer::Effect::BookMounted { .. } => {}
                }
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                self.unmount_viewer();
                window::close(id)
            }
        }
    }

    /// Drops the viewer and with it the window-size subscription.
    pub fn unmount_viewer(&mut self) {
        if self.viewer.take().is_some() {
            tracing::debug!("viewer unmounted");
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            viewer: self.viewer.as_ref(),
        })
    }

    pub fn title(&self) -> String {
        self.i18n
            .tr_with_args("window-title", &[("title", self.menu.title().to_string())])
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let close = subscription::close_requests();
        match &self.viewer {
            Some(viewer) => Subscription::batch([
                close,
                subscription::window_size(),
                viewer.subscription().map(Message::Viewer),
            ]),
            None => close,
        }
    }
}

/// One task per page plus one for the background. A failing HTTP client
/// only breaks remote pages; local ones still load.
fn load_menu(menu: &MenuBook) -> Task<Message> {
    let needs_http = menu
        .pages()
        .iter()
        .chain(menu.background())
        .any(|source| matches!(source, PageSource::Remote(_)));
    let client = if needs_http {
        match loader::http_client() {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::error!(%err, "HTTP client could not be created");
                None
            }
        }
    } else {
        None
    };

    let pages = menu.pages().iter().cloned().enumerate().map(|(index, source)| {
        Task::perform(menu::load_page(client.clone(), source), move |page| {
            Message::Viewer(viewer::Message::PageLoaded { index, page })
        })
    });

    let background = menu.background().cloned().map(|source| {
        Task::perform(menu::load_page(client.clone(), source), |page| {
            Message::Viewer(viewer::Message::BackgroundLoaded(page))
        })
    });

    Task::batch(pages.chain(background).collect::<Vec<_>>())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let (app, _task) = App::with_config(Flags::default(), Config::default());
        app
    }

    #[test]
    fn boots_with_mounted_viewer() {
        let app = app();
        let viewer = app.viewer().expect("viewer should be mounted at boot");
        assert_eq!(viewer.menu().page_count(), 6);
        assert!(!viewer.is_book_mounted());
    }

    #[test]
    fn title_uses_menu_title() {
        let app = App::with_config(
            Flags {
                lang: Some("en-US".to_string()),
                ..Flags::default()
            },
            Config::default(),
        )
        .0;
        assert_eq!(app.title(), "Mir Doner - Menu");
    }

    #[test]
    fn cli_pages_replace_configured_pages() {
        let flags = Flags {
            pages: vec!["a.png".to_string(), "b.png".to_string()],
            ..Flags::default()
        };
        let (app, _task) = App::with_config(flags, Config::default());
        let viewer = app.viewer().expect("viewer should be mounted");
        assert_eq!(viewer.menu().page_count(), 2);
    }

    #[test]
    fn close_request_unmounts_the_viewer() {
        let mut app = app();
        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));
        assert!(app.viewer().is_none());

        // Messages arriving after unmount are dropped
        let _ = app.update(Message::Viewer(viewer::Message::WindowResized(Size::new(
            400.0, 800.0,
        ))));
        assert!(app.viewer().is_none());
    }

    #[test]
    fn resize_reaches_mounted_viewer() {
        let mut app = app();
        let _ = app.update(Message::Viewer(viewer::Message::WindowResized(Size::new(
            400.0, 800.0,
        ))));
        let viewer = app.viewer().expect("viewer should be mounted");
        assert!(viewer.is_mobile_layout());
    }
}
