mod pricing;
mod signup;

pub use pricing::pricing_view;
pub use signup::{signup_view, EMAIL_INPUT, PASSWORD_INPUT, USERNAME_INPUT};

use iced::{widget::Space, Alignment, Length};
use signup_ui::{component::card, theme, widget::*};

use crate::app::message::Message;

/// Centers the page content in a card on the application background.
fn layout<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(
        Row::new()
            .push(Space::with_width(Length::FillPortion(1)))
            .push(
                Column::new()
                    .push(Space::with_height(Length::Fixed(80.0)))
                    .push(card(content))
                    .align_x(Alignment::Center)
                    .width(Length::FillPortion(2)),
            )
            .push(Space::with_width(Length::FillPortion(1))),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(theme::container::background)
    .into()
}
