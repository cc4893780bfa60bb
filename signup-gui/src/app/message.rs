use crate::{app::signup::Field, services::registration::RegistrationResult};

/// Identifies one mounted sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormId(pub u64);

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
    Registered(FormId, RegistrationResult),
}

impl From<ViewMessage> for Message {
    fn from(msg: ViewMessage) -> Self {
        Self::View(msg)
    }
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    UserNameEdited(String),
    EmailEdited(String),
    PasswordEdited(String),
    /// Enter pressed in the input of the field.
    FieldSubmitted(Field),
    SignUp,
    ShowPricing,
    ShowSignUp,
}
