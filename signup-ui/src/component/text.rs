use crate::{font, theme::Theme};
use iced::{advanced::text::Shaping, Font};
use std::fmt::Display;

pub const H2_SIZE: u16 = 29;
pub const P1_SIZE: u16 = 16;
pub const P2_SIZE: u16 = 14;
pub const CAPTION_SIZE: u16 = 12;

fn styled<'a>(content: impl Display, font: Font, size: u16) -> iced::widget::Text<'a, Theme> {
    iced::widget::text!("{}", content)
        .shaping(Shaping::Advanced)
        .font(font)
        .size(size)
}

pub fn h2<'a>(content: impl Display) -> iced::widget::Text<'a, Theme> {
    styled(content, font::BOLD, H2_SIZE)
}

pub fn p1_bold<'a>(content: impl Display) -> iced::widget::Text<'a, Theme> {
    styled(content, font::BOLD, P1_SIZE)
}

pub fn p1_regular<'a>(content: impl Display) -> iced::widget::Text<'a, Theme> {
    styled(content, font::REGULAR, P1_SIZE)
}

pub fn p2_regular<'a>(content: impl Display) -> iced::widget::Text<'a, Theme> {
    styled(content, font::REGULAR, P2_SIZE)
}

pub fn caption<'a>(content: impl Display) -> iced::widget::Text<'a, Theme> {
    styled(content, font::REGULAR, CAPTION_SIZE)
}

pub fn text<'a>(content: impl Display) -> iced::widget::Text<'a, Theme> {
    p1_regular(content)
}
