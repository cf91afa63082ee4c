// SPDX-License-Identifier: MPL-2.0
//! Footer progress bar.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::state::LayoutPreset;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, text, Row, Space};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub preset: LayoutPreset,
    /// Percentage in `0..=100`.
    pub percent: u8,
    /// One-based page shown beside the bar, with the page count.
    pub page: Option<(usize, usize)>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mobile = ctx.preset.is_mobile();
    let percent = ctx.percent.min(100);

    let (track_height, body_size, height) = if mobile {
        (
            sizing::PROGRESS_TRACK_MOBILE,
            typography::BODY_MOBILE,
            sizing::FOOTER_HEIGHT_MOBILE,
        )
    } else {
        (
            sizing::PROGRESS_TRACK_DESKTOP,
            typography::BODY_DESKTOP,
            sizing::FOOTER_HEIGHT_DESKTOP,
        )
    };

    // A zero portion would lay out as shrink, so empty parts are skipped
    let mut fill = Row::new().height(Length::Fill);
    if percent > 0 {
        fill = fill.push(
            container(Space::new())
                .width(Length::FillPortion(u16::from(percent)))
                .height(Length::Fill)
                .style(styles::container::progress_fill),
        );
    }
    if percent < 100 {
        fill = fill.push(Space::new().width(Length::FillPortion(u16::from(100 - percent))));
    }

    let track = container(fill)
        .width(Length::Fill)
        .max_width(sizing::PROGRESS_MAX_WIDTH)
        .height(Length::Fixed(track_height))
        .style(styles::container::progress_track);

    let label = text(ctx.i18n.tr("progress-label"))
        .size(body_size)
        .color(palette::GRAY_300);
    let value = text(
        ctx.i18n
            .tr_with_args("progress-percent", &[("percent", percent.to_string())]),
    )
    .size(body_size)
    .color(palette::WHITE);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(label)
        .push(track)
        .push(value);

    if let (Some((current, total)), false) = (ctx.page, mobile) {
        row = row.push(
            text(ctx.i18n.tr_with_args(
                "page-counter",
                &[
                    ("current", current.to_string()),
                    ("total", total.to_string()),
                ],
            ))
            .size(typography::CAPTION)
            .color(palette::GRAY_400),
        );
    }

    container(row)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding([0.0, spacing::MD])
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::bar)
        .into()
}
