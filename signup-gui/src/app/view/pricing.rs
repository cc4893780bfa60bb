use iced::{widget::Space, Length};
use signup_ui::{
    component::{button, notification, text},
    theme,
    widget::*,
};

use crate::app::{
    message::{Message, ViewMessage},
    signup::SUCCESS_MESSAGE,
};

const PLANS: [(&str, &str); 3] = [
    ("Starter", "Free for individual learners."),
    ("Institute", "Shared catalogue and member management."),
    ("Enterprise", "Dedicated support and custom integrations."),
];

/// Landing page, reached after a successful registration or from the form.
pub fn pricing_view<'a>(welcome: bool) -> Element<'a, Message> {
    let plans = PLANS
        .iter()
        .fold(Column::new().spacing(15), |col, (name, description)| {
            col.push(
                Column::new()
                    .push(text::p1_bold(*name))
                    .push(text::p2_regular(*description).style(theme::text::secondary))
                    .spacing(5),
            )
        });

    let content = Column::new()
        .push_maybe(welcome.then(|| notification::success(SUCCESS_MESSAGE)))
        .push(text::h2("Pricing"))
        .push(plans)
        .push(Space::with_height(10))
        .push(
            button::secondary("Create an account")
                .width(Length::Fill)
                .on_press(ViewMessage::ShowSignUp.into()),
        )
        .spacing(20);

    super::layout(content)
}
