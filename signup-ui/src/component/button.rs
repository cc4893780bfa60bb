use super::text::text;
use crate::font::MEDIUM;
use crate::{theme, widget::*};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::container;

pub fn primary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(centered(text(t).font(MEDIUM))).style(theme::button::primary)
}

pub fn secondary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(centered(text(t))).style(theme::button::secondary)
}

pub fn link<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(container(text(t)).align_y(Vertical::Center).padding(5))
        .style(theme::button::link)
}

fn centered<'a, T: 'a>(text: Text<'a>) -> Container<'a, T> {
    container(text.align_x(iced::Alignment::Center))
        .align_y(Vertical::Center)
        .align_x(Horizontal::Center)
        .width(iced::Length::Fill)
        .padding(5)
}
