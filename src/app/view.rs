// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::styles;
use crate::ui::viewer;
use iced::widget::{container, text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub viewer: Option<&'a viewer::State>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.viewer {
        Some(state) => state.view(ctx.i18n).map(Message::Viewer),
        // Only visible for the frame between unmount and window close
        None => container(text(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop)
            .into(),
    }
}
