use iced::{Alignment, Length};

use crate::{component::text, theme, widget::*};

pub fn success<'a, T: 'a>(message: &'a str) -> Container<'a, T> {
    Container::new(
        Row::new()
            .align_y(Alignment::Center)
            .push(text::p1_bold(message)),
    )
    .padding(15)
    .style(theme::notification::success)
    .width(Length::Fill)
}

/// Error banner with a headline and optional detail lines below it.
pub fn error<'a, T: 'a>(message: &'a str, details: Vec<String>) -> Container<'a, T> {
    Container::new(
        details.into_iter().fold(
            Column::new().spacing(5).push(text::p1_bold(message)),
            |col, detail| col.push(text::p2_regular(detail)),
        ),
    )
    .padding(15)
    .style(theme::notification::error)
    .width(Length::Fill)
}
