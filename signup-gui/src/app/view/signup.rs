use iced::{
    widget::{row, Space},
    Alignment, Length,
};
use signup_ui::{
    component::{button, form, notification, text},
    widget::*,
};

use crate::app::{
    message::{Message, ViewMessage},
    signup::{Field, FormState, Phase},
};

pub const USERNAME_INPUT: &str = "signup_username";
pub const EMAIL_INPUT: &str = "signup_email";
pub const PASSWORD_INPUT: &str = "signup_password";

pub fn signup_view(state: &FormState) -> Element<'_, Message> {
    let editable = state.is_editable();

    let username = if editable {
        form::Form::new("User Name", &state.username, |s| {
            Message::View(ViewMessage::UserNameEdited(s))
        })
    } else {
        form::Form::new_disabled("User Name", &state.username)
    }
    .label("User Name")
    .id(text_input::Id::new(USERNAME_INPUT))
    .on_submit_maybe(editable.then_some(ViewMessage::FieldSubmitted(Field::UserName).into()));

    let email = if editable {
        form::Form::new("Email Address", &state.email, |s| {
            Message::View(ViewMessage::EmailEdited(s))
        })
    } else {
        form::Form::new_disabled("Email Address", &state.email)
    }
    .label("Email Address")
    .id(text_input::Id::new(EMAIL_INPUT))
    .on_submit_maybe(editable.then_some(ViewMessage::FieldSubmitted(Field::Email).into()));

    let password = if editable {
        form::Form::new("Password", &state.password, |s| {
            Message::View(ViewMessage::PasswordEdited(s))
        })
    } else {
        form::Form::new_disabled("Password", &state.password)
    }
    .label("Password")
    .secure(true)
    .id(text_input::Id::new(PASSWORD_INPUT))
    .on_submit_maybe(editable.then_some(ViewMessage::FieldSubmitted(Field::Password).into()));

    let sign_up = button::primary(if state.is_submitting() {
        "Signing up..."
    } else {
        "Sign Up"
    })
    .width(Length::Fill)
    .on_press_maybe(state.can_submit().then_some(ViewMessage::SignUp.into()));

    let status: Option<Element<'_, Message>> = match &state.phase {
        Phase::Succeeded => state
            .status_message()
            .map(|message| notification::success(message).into()),
        Phase::Failed(failure) => state
            .status_message()
            .map(|message| notification::error(message, failure.details.clone()).into()),
        Phase::Editing | Phase::Submitting => None,
    };

    let pricing = row![
        text::p2_regular("Not ready yet?"),
        button::link("View pricing").on_press(ViewMessage::ShowPricing.into()),
    ]
    .align_y(Alignment::Center)
    .spacing(5);

    let content = Column::new()
        .push(text::h2("Create your account"))
        .push(Space::with_height(10))
        .push(username.size(16).padding(10))
        .push(email.size(16).padding(10))
        .push(password.size(16).padding(10))
        .push_maybe(status)
        .push(sign_up)
        .push(pricing)
        .spacing(20);

    super::layout(content)
}
