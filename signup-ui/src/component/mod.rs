pub mod button;
pub mod form;
pub mod notification;
pub mod text;

use iced::Length;

use crate::{theme, widget::*};

/// White rounded panel used to group a page's content.
pub fn card<'a, T: 'a>(content: impl Into<Element<'a, T>>) -> Container<'a, T> {
    Container::new(content)
        .padding(30)
        .width(Length::Fill)
        .style(theme::card::simple)
}
