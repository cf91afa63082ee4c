// SPDX-License-Identifier: MPL-2.0
//! Rendering of the book: the visible page, the fold during a turn and the
//! corner hint.

use super::animation::{self, Direction};
use super::{Corner, FlipBook, Message};
use crate::i18n::fluent::I18n;
use crate::menu::LoadedPage;
use crate::ui::design_tokens::{sizing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, image, mouse_area, text, Container, Space, Stack};
use iced::{mouse, ContentFit, Element, Length};

/// Borrowed data the book needs to render.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl FlipBook {
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let size = self.display_size();
        let progress = self.flip_progress();

        let (index, scale, shadow_alpha, anchor) = match self.animation() {
            Some(turn) => {
                let shadow = if self.settings().draw_shadow {
                    animation::shadow_opacity(progress, self.settings().max_shadow_opacity)
                } else {
                    0.0
                };
                // Forward turns fold toward the spine on the left
                let anchor = match turn.direction() {
                    Direction::Forward => Horizontal::Left,
                    Direction::Backward => Horizontal::Right,
                };
                (
                    turn.visible_page(progress),
                    animation::fold_scale(progress),
                    shadow,
                    anchor,
                )
            }
            None => (self.current_page(), 1.0, 0.0, Horizontal::Center),
        };

        let page_width = (size.width * scale).max(1.0);
        let mut layers = Stack::new()
            .width(Length::Fixed(page_width))
            .height(Length::Fixed(size.height));

        if let Some(page) = self.pages().get(index) {
            let sheet = container(page_content(page, index, &ctx))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::page(
                    self.is_cover(index),
                    self.settings().draw_shadow,
                ));
            layers = layers.push(sheet);
        }

        if shadow_alpha > 0.0 {
            layers = layers.push(
                container(Space::new())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(styles::container::fold_shadow(shadow_alpha)),
            );
        }

        let hovered = self.hovered_corner();
        if let Some(corner) = hovered {
            layers = layers.push(corner_mark(corner));
        }

        let frame = Container::new(layers)
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height))
            .align_x(anchor)
            .align_y(Vertical::Center);

        if !self.settings().use_mouse_events {
            return frame.into();
        }

        let interaction = if hovered.is_some() {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        };

        mouse_area(frame)
            .on_move(Message::PointerMoved)
            .on_press(Message::PointerPressed)
            .on_release(Message::PointerReleased)
            .on_exit(Message::PointerLeft)
            .interaction(interaction)
            .into()
    }
}

fn page_content<'a>(page: &LoadedPage, index: usize, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match page {
        LoadedPage::Ready { handle, .. } => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Fill)
            .into(),
        LoadedPage::Broken { .. } => {
            let label = ctx
                .i18n
                .tr_with_args("page-broken", &[("page", (index + 1).to_string())]);
            container(text(label).size(typography::BODY_MOBILE))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .style(styles::container::broken_page)
                .into()
        }
    }
}

fn corner_mark<'a>(corner: Corner) -> Element<'a, Message> {
    let (x, y) = match corner {
        Corner::TopLeft => (Horizontal::Left, Vertical::Top),
        Corner::TopRight => (Horizontal::Right, Vertical::Top),
        Corner::BottomLeft => (Horizontal::Left, Vertical::Bottom),
        Corner::BottomRight => (Horizontal::Right, Vertical::Bottom),
    };

    let mark = container(Space::new())
        .width(Length::Fixed(sizing::CORNER_MARK))
        .height(Length::Fixed(sizing::CORNER_MARK))
        .style(styles::container::corner_mark);

    container(mark)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(x)
        .align_y(y)
        .into()
}
