pub mod validation;

use signup_ui::component::form;
use tracing::debug;

use crate::services::registration::{RegistrationError, RegistrationRequest, RegistrationResult};
use validation::{validate_email, validate_password, ValidationError};

pub const SUCCESS_MESSAGE: &str = "Sign Up Successfully!";
pub const FAILURE_MESSAGE: &str = "Error Signing Up!";
const TRANSPORT_FAILURE_DETAIL: &str =
    "Could not reach the registration server, check your connection and try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    UserName,
    Email,
    Password,
}

impl Field {
    /// Field that receives the focus when the user leaves this one.
    pub fn next(self) -> Option<Field> {
        match self {
            Self::UserName => Some(Self::Email),
            Self::Email => Some(Self::Password),
            Self::Password => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Server message and field messages, or a generic line for transport errors.
    pub details: Vec<String>,
}

impl From<&RegistrationError> for Failure {
    fn from(error: &RegistrationError) -> Self {
        match error {
            RegistrationError::Rejected(errors) => {
                let mut details: Vec<String> = errors.message.iter().cloned().collect();
                details.extend(errors.field_messages());
                Self { details }
            }
            RegistrationError::Transport { .. } => Self {
                details: vec![TRANSPORT_FAILURE_DETAIL.to_string()],
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitting,
    Succeeded,
    Failed(Failure),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Edited(Field, String),
    Left(Field),
    Submit,
    Completed(RegistrationResult),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Register(RegistrationRequest),
    NavigateToLanding,
}

/// State of one mounted sign-up form.
///
/// Never mutated in place: every user action or registration outcome goes
/// through [`FormState::apply`], which returns the next state and the effect
/// the caller has to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub username: form::Value<String>,
    pub email: form::Value<String>,
    pub password: form::Value<String>,
    pub phase: Phase,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            username: form::Value::default(),
            email: form::Value::default(),
            password: form::Value::default(),
            phase: Phase::Editing,
        }
    }

    /// Email and password both pass their rules. The username has none.
    pub fn is_valid(&self) -> bool {
        validate_email(self.email.value.trim()).is_ok()
            && validate_password(&self.password.value).is_ok()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Inputs accept edits.
    pub fn is_editable(&self) -> bool {
        matches!(self.phase, Phase::Editing | Phase::Failed(_))
    }

    pub fn can_submit(&self) -> bool {
        self.is_editable() && self.is_valid()
    }

    pub fn status_message(&self) -> Option<&'static str> {
        match self.phase {
            Phase::Succeeded => Some(SUCCESS_MESSAGE),
            Phase::Failed(_) => Some(FAILURE_MESSAGE),
            Phase::Editing | Phase::Submitting => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match &self.phase {
            Phase::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn request(&self) -> RegistrationRequest {
        RegistrationRequest {
            username: self.username.value.clone(),
            email: self.email.value.trim().to_string(),
            password: self.password.value.clone(),
        }
    }

    pub fn apply(self, event: Event) -> (FormState, Option<Effect>) {
        match event {
            Event::Edited(field, value) => (self.on_edited(field, value), None),
            Event::Left(field) => (self.on_left(field), None),
            Event::Submit => self.on_submit(),
            Event::Completed(result) => self.on_completed(result),
        }
    }

    fn on_edited(mut self, field: Field, value: String) -> Self {
        if !self.is_editable() {
            debug!("Ignoring edit of {:?} in phase {:?}", field, self.phase);
            return self;
        }
        match field {
            Field::UserName => self.username.value = value,
            Field::Email => self.email.value = value,
            Field::Password => self.password.value = value,
        }
        self.phase = Phase::Editing;
        self.check(field)
    }

    fn on_left(self, field: Field) -> Self {
        if !self.is_editable() {
            return self;
        }
        self.check(field)
    }

    fn on_submit(mut self) -> (Self, Option<Effect>) {
        if !self.can_submit() {
            debug!("Ignoring submit in phase {:?}", self.phase);
            return (self, None);
        }
        let request = self.request();
        self.phase = Phase::Submitting;
        (self, Some(Effect::Register(request)))
    }

    fn on_completed(mut self, result: RegistrationResult) -> (Self, Option<Effect>) {
        if self.phase != Phase::Submitting {
            debug!("Ignoring registration outcome in phase {:?}", self.phase);
            return (self, None);
        }
        match result {
            Ok(_) => {
                self.phase = Phase::Succeeded;
                (self, Some(Effect::NavigateToLanding))
            }
            Err(e) => {
                self.phase = Phase::Failed(Failure::from(&e));
                (self, None)
            }
        }
    }

    fn check(mut self, field: Field) -> Self {
        match field {
            Field::UserName => {}
            Field::Email => {
                let outcome = validate_email(self.email.value.trim());
                set_outcome(&mut self.email, outcome);
            }
            Field::Password => {
                let outcome = validate_password(&self.password.value);
                set_outcome(&mut self.password, outcome);
            }
        }
        self
    }
}

fn set_outcome(value: &mut form::Value<String>, outcome: Result<(), ValidationError>) {
    value.valid = outcome.is_ok();
    value.warning = outcome.err().map(|e| e.message());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::registration::{Registered, ServerErrors};

    fn filled(username: &str, email: &str, password: &str) -> FormState {
        let (state, _) = FormState::new().apply(Event::Edited(Field::UserName, username.into()));
        let (state, _) = state.apply(Event::Edited(Field::Email, email.into()));
        let (state, _) = state.apply(Event::Edited(Field::Password, password.into()));
        state
    }

    fn submitted() -> FormState {
        let (state, effect) =
            filled("test", "ANDtesXYZt@gmail.com", "321321321").apply(Event::Submit);
        assert!(matches!(effect, Some(Effect::Register(_))));
        state
    }

    fn rejected() -> RegistrationError {
        RegistrationError::Rejected(ServerErrors::from_body(
            400,
            &serde_json::json!({ "error": "Internal Server Error" }),
        ))
    }

    #[test]
    fn test_initial_state() {
        let state = FormState::new();
        assert_eq!(state.phase, Phase::Editing);
        assert!(!state.is_valid());
        assert!(!state.can_submit());
        assert_eq!(state.status_message(), None);
        for value in [&state.username, &state.email, &state.password] {
            assert!(value.valid);
            assert_eq!(value.warning, None);
        }
    }

    #[test]
    fn test_invalid_email_disables_submit() {
        for email in ["test", "test@", "test@gmail", "@gmail.com", "a b@c.com"] {
            let state = filled("test", email, "321321321");
            assert!(!state.email.valid);
            assert_eq!(state.email.warning, Some("Enter a valid email"));
            assert!(!state.can_submit());
            let (state, effect) = state.apply(Event::Submit);
            assert_eq!(effect, None);
            assert_eq!(state.phase, Phase::Editing);
        }
    }

    #[test]
    fn test_empty_email_is_required() {
        let state = filled("test", "user@example.com", "321321321");
        let (state, _) = state.apply(Event::Edited(Field::Email, "".into()));
        assert_eq!(state.email.warning, Some("Email is required"));
        assert!(!state.can_submit());
    }

    #[test]
    fn test_short_password_disables_submit() {
        for password in ["1", "1234567", "abcdefg"] {
            let state = filled("test", "ANDtesXYZt@gmail.com", password);
            assert!(!state.password.valid);
            assert_eq!(
                state.password.warning,
                Some("Password should be of minimum 8 characters length")
            );
            assert!(!state.can_submit());
        }
        let (state, _) =
            filled("test", "ANDtesXYZt@gmail.com", "1").apply(Event::Edited(Field::Password, "".into()));
        assert_eq!(state.password.warning, Some("Password is required"));
    }

    #[test]
    fn test_valid_fields_enable_submit() {
        for (username, email, password) in [
            ("test", "ANDtesXYZt@gmail.com", "321321321"),
            ("", "user@example.com", "12345678"),
            ("Jane Doe", "jane.doe+news@mail.example.org", "correct horse battery"),
        ] {
            let state = filled(username, email, password);
            assert!(state.email.valid && state.password.valid);
            assert_eq!(state.email.warning, None);
            assert_eq!(state.password.warning, None);
            assert!(state.can_submit(), "{} {} should be submittable", email, password);
        }
    }

    #[test]
    fn test_email_is_trimmed_on_submit() {
        let state = filled("test", "  user@example.com ", "12345678");
        assert_eq!(state.email.value, "  user@example.com ");
        assert!(state.email.valid);
        assert!(state.can_submit());

        let (_, effect) = state.apply(Event::Submit);
        assert!(matches!(
            effect,
            Some(Effect::Register(RegistrationRequest { ref email, .. })) if email == "user@example.com"
        ));
    }

    #[test]
    fn test_typed_space_is_kept() {
        let (state, _) = FormState::new().apply(Event::Edited(Field::Email, "jane ".into()));
        assert_eq!(state.email.value, "jane ");
        let (state, _) = state.apply(Event::Edited(Field::Email, "jane d".into()));
        assert_eq!(state.email.value, "jane d");
        assert_eq!(state.email.warning, Some("Enter a valid email"));

        let (state, _) = state.apply(Event::Edited(Field::Email, "   ".into()));
        assert_eq!(state.email.warning, Some("Email is required"));
    }

    #[test]
    fn test_leaving_untouched_field_shows_message() {
        let (state, _) = FormState::new().apply(Event::Left(Field::Email));
        assert_eq!(state.email.warning, Some("Email is required"));
        let (state, _) = state.apply(Event::Left(Field::UserName));
        assert!(state.username.valid);
        assert_eq!(state.password.warning, None);
    }

    #[test]
    fn test_submit_emits_request() {
        let (state, effect) =
            filled("test", "ANDtesXYZt@gmail.com", "321321321").apply(Event::Submit);
        assert_eq!(state.phase, Phase::Submitting);
        assert!(!state.can_submit());
        assert_eq!(
            effect,
            Some(Effect::Register(RegistrationRequest {
                username: "test".to_string(),
                email: "ANDtesXYZt@gmail.com".to_string(),
                password: "321321321".to_string(),
            }))
        );
    }

    #[test]
    fn test_submit_while_submitting_is_ignored() {
        let state = submitted();
        let (state, effect) = state.apply(Event::Submit);
        assert_eq!(effect, None);
        assert_eq!(state.phase, Phase::Submitting);
    }

    #[test]
    fn test_edit_while_submitting_is_ignored() {
        let state = submitted();
        let (next, effect) = state.clone().apply(Event::Edited(Field::Email, "x".into()));
        assert_eq!(effect, None);
        assert_eq!(next, state);
    }

    #[test]
    fn test_success() {
        let (state, effect) = submitted().apply(Event::Completed(Ok(Registered {
            token: "test1234".to_string(),
        })));
        assert_eq!(state.phase, Phase::Succeeded);
        assert_eq!(state.status_message(), Some("Sign Up Successfully!"));
        assert_eq!(effect, Some(Effect::NavigateToLanding));

        // Terminal.
        let (state, effect) = state.apply(Event::Submit);
        assert_eq!(effect, None);
        let (state, _) = state.apply(Event::Edited(Field::Password, "other".into()));
        assert_eq!(state.phase, Phase::Succeeded);
        assert_eq!(state.password.value, "321321321");
    }

    #[test]
    fn test_server_rejection() {
        let (state, effect) = submitted().apply(Event::Completed(Err(rejected())));
        assert_eq!(effect, None);
        assert_eq!(state.status_message(), Some("Error Signing Up!"));
        assert_eq!(
            state.failure().map(|f| f.details.clone()),
            Some(vec!["Internal Server Error".to_string()])
        );
    }

    #[test]
    fn test_rejection_with_field_messages() {
        let error = RegistrationError::Rejected(ServerErrors::from_body(
            422,
            &serde_json::json!({
                "message": "The given data was invalid.",
                "errors": { "email": ["The email has already been taken."] }
            }),
        ));
        let (state, _) = submitted().apply(Event::Completed(Err(error)));
        assert_eq!(
            state.failure().map(|f| f.details.clone()),
            Some(vec![
                "The given data was invalid.".to_string(),
                "email: The email has already been taken.".to_string(),
            ])
        );
    }

    #[test]
    fn test_transport_failure_is_generic() {
        let error = RegistrationError::Transport {
            http_status: None,
            error: "error sending request".to_string(),
        };
        let (state, _) = submitted().apply(Event::Completed(Err(error)));
        assert_eq!(state.status_message(), Some(FAILURE_MESSAGE));
        assert_eq!(
            state.failure().map(|f| f.details.clone()),
            Some(vec![TRANSPORT_FAILURE_DETAIL.to_string()])
        );
    }

    #[test]
    fn test_failed_is_recoverable() {
        let (state, _) = submitted().apply(Event::Completed(Err(rejected())));
        assert!(state.can_submit());

        let (state, _) = state.apply(Event::Edited(Field::Email, "other@example.com".into()));
        assert_eq!(state.phase, Phase::Editing);
        assert_eq!(state.status_message(), None);

        let (state, effect) = state.apply(Event::Submit);
        assert_eq!(state.phase, Phase::Submitting);
        assert!(matches!(
            effect,
            Some(Effect::Register(RegistrationRequest { ref email, .. })) if email == "other@example.com"
        ));
    }

    #[test]
    fn test_completed_outside_submitting_is_ignored() {
        let state = filled("test", "ANDtesXYZt@gmail.com", "321321321");
        let (next, effect) = state.clone().apply(Event::Completed(Ok(Registered {
            token: "late".to_string(),
        })));
        assert_eq!(effect, None);
        assert_eq!(next, state);
    }

    #[test]
    fn test_field_order() {
        assert_eq!(Field::UserName.next(), Some(Field::Email));
        assert_eq!(Field::Email.next(), Some(Field::Password));
        assert_eq!(Field::Password.next(), None);
    }
}
