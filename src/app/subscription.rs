// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Close requests are always routed. Window size events reach the viewer
//! only while it is mounted; the caller drops that subscription otherwise.

use super::Message;
use crate::ui::viewer;
use iced::{event, window, Subscription};

/// Routes window close requests for cleanup.
pub fn close_requests() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        _ => None,
    })
}

/// Routes window open and resize events to the viewer.
pub fn window_size() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Opened { size, .. })
        | event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::Viewer(viewer::Message::WindowResized(size)))
        }
        _ => None,
    })
}
