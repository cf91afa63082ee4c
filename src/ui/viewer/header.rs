// SPDX-License-Identifier: MPL-2.0
//! Header band: menu title and the zoom controls.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::state::{LayoutPreset, ZoomState};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, text, tooltip, Column, Row, Space, Svg};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub title: &'a str,
    pub subtitle: &'a str,
    pub preset: LayoutPreset,
    pub zoom: &'a ZoomState,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mobile = ctx.preset.is_mobile();

    let title_size = if mobile {
        typography::TITLE_MOBILE
    } else {
        typography::TITLE_DESKTOP
    };
    let mut heading = Column::new()
        .push(text(ctx.title).size(title_size).color(palette::WHITE));
    // Subtitle is dropped on narrow windows
    if !mobile {
        heading = heading.push(
            text(ctx.subtitle)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    let body_size = if mobile {
        typography::BODY_MOBILE
    } else {
        typography::BODY_DESKTOP
    };
    let percent = ctx
        .i18n
        .tr_with_args("zoom-percent", &[("percent", ctx.zoom.percent().to_string())]);

    let controls = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(control_button(
            icons::zoom_out(),
            ctx.i18n.tr("zoom-out-tooltip"),
            (!ctx.zoom.is_at_min()).then_some(Message::ZoomOut),
        ))
        .push(
            container(text(percent).size(body_size).color(palette::GRAY_300))
                .width(Length::Fixed(sizing::ICON_NAV * 1.5))
                .align_x(Horizontal::Center),
        )
        .push(control_button(
            icons::zoom_in(),
            ctx.i18n.tr("zoom-in-tooltip"),
            (!ctx.zoom.is_at_max(ctx.preset)).then_some(Message::ZoomIn),
        ))
        .push(control_button(
            icons::rotate_ccw(),
            ctx.i18n.tr("zoom-reset-tooltip"),
            Some(Message::ResetZoom),
        ));

    let row = Row::new()
        .align_y(Vertical::Center)
        .push(heading)
        .push(Space::new().width(Length::Fill))
        .push(controls);

    let height = if mobile {
        sizing::HEADER_HEIGHT_MOBILE
    } else {
        sizing::HEADER_HEIGHT_DESKTOP
    };

    container(
        container(row)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .padding([0.0, spacing::MD]),
    )
    .width(Length::Fill)
    .height(Length::Fixed(height))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::bar)
    .into()
}

fn control_button<'a>(
    icon: Svg<'static>,
    label: String,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let icon = icons::tinted(icons::sized(icon, sizing::ICON_MD), palette::GRAY_300);
    let control = button(icon)
        .padding(spacing::XS)
        .style(styles::button::control)
        .on_press_maybe(on_press);

    styles::tooltip::styled(control, label, tooltip::Position::Bottom).into()
}
