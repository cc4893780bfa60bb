use iced::widget::container::Style;
use iced::{Background, Border};

use super::Theme;

pub fn simple(theme: &Theme) -> Style {
    let palette = &theme.colors.cards.simple;
    Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: Border {
            width: if palette.border.is_some() { 1.0 } else { 0.0 },
            color: palette.border.unwrap_or(iced::Color::TRANSPARENT),
            radius: 25.0.into(),
        },
        ..Default::default()
    }
}
