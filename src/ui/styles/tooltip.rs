// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles for the header and navigation buttons.

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Shadow, Theme, Vector};

/// Light bubble over the dark chrome.
pub fn bubble(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.98,
            ..palette::GRAY_300
        })),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: palette::GRAY_400,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        text_color: Some(palette::GRAY_900),
        ..Default::default()
    }
}

/// Wraps `content` with a tooltip bubble showing `tip`.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding(spacing::XS)
        .style(bubble);

    tooltip(content, tip_container, position).gap(spacing::XXS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_contrasts_with_dark_chrome() {
        let style = bubble(&Theme::Dark);
        let Some(Background::Color(bg)) = style.background else {
            panic!("Expected color background")
        };
        assert!(bg.r > 0.5);
        assert_eq!(style.text_color, Some(palette::GRAY_900));
        assert!(style.shadow.blur_radius > 0.0);
    }
}
