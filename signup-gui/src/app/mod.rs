pub mod config;
pub mod message;
pub mod signup;
pub mod view;

use iced::{widget::text_input, Task};
use signup_ui::widget::Element;
use tracing::{debug, info};

use crate::services::registration::{RegistrationClient, RegistrationResult};
use message::{FormId, Message, ViewMessage};
use signup::{Effect, Event, Field, FormState};

#[derive(Debug)]
pub struct SignUpPanel {
    pub id: FormId,
    pub form: FormState,
}

#[derive(Debug)]
pub enum Route {
    SignUp(SignUpPanel),
    /// Landing page. `welcome` is set when reached through a successful registration.
    Pricing { welcome: bool },
}

pub struct App {
    client: RegistrationClient,
    route: Route,
    next_form_id: u64,
}

impl App {
    pub fn new(client: RegistrationClient) -> (Self, Task<Message>) {
        let mut app = Self {
            client,
            route: Route::Pricing { welcome: false },
            next_form_id: 0,
        };
        let task = app.mount_form();
        (app, task)
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn title(&self) -> String {
        match self.route {
            Route::SignUp(_) => "Sign Up".to_string(),
            Route::Pricing { .. } => "Pricing".to_string(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(msg) => self.on_view(msg),
            Message::Registered(id, result) => self.on_registered(id, result),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match &self.route {
            Route::SignUp(panel) => view::signup_view(&panel.form),
            Route::Pricing { welcome } => view::pricing_view(*welcome),
        }
    }

    fn on_view(&mut self, msg: ViewMessage) -> Task<Message> {
        match msg {
            ViewMessage::UserNameEdited(value) => {
                self.on_form_event(Event::Edited(Field::UserName, value))
            }
            ViewMessage::EmailEdited(value) => self.on_form_event(Event::Edited(Field::Email, value)),
            ViewMessage::PasswordEdited(value) => {
                self.on_form_event(Event::Edited(Field::Password, value))
            }
            ViewMessage::FieldSubmitted(field) => self.on_field_submitted(field),
            ViewMessage::SignUp => self.on_form_event(Event::Submit),
            ViewMessage::ShowPricing => {
                if let Route::SignUp(panel) = &self.route {
                    debug!("Unmounting sign-up form {:?}", panel.id);
                }
                self.route = Route::Pricing { welcome: false };
                Task::none()
            }
            ViewMessage::ShowSignUp => self.mount_form(),
        }
    }

    fn mount_form(&mut self) -> Task<Message> {
        let id = FormId(self.next_form_id);
        self.next_form_id += 1;
        debug!("Mounting sign-up form {:?}", id);
        self.route = Route::SignUp(SignUpPanel {
            id,
            form: FormState::new(),
        });
        text_input::focus(view::USERNAME_INPUT)
    }

    /// Enter leaves the field and moves to the next one, or submits from the last one.
    fn on_field_submitted(&mut self, field: Field) -> Task<Message> {
        let task = self.on_form_event(Event::Left(field));
        match field.next() {
            Some(next) => Task::batch([task, text_input::focus(input_id(next))]),
            None => Task::batch([task, self.on_form_event(Event::Submit)]),
        }
    }

    fn on_registered(&mut self, id: FormId, result: RegistrationResult) -> Task<Message> {
        let mounted = matches!(&self.route, Route::SignUp(panel) if panel.id == id);
        if !mounted {
            debug!("Dropping registration outcome of unmounted form {:?}", id);
            return Task::none();
        }
        self.on_form_event(Event::Completed(result))
    }

    fn on_form_event(&mut self, event: Event) -> Task<Message> {
        let Route::SignUp(panel) = &mut self.route else {
            return Task::none();
        };
        let id = panel.id;
        let (form, effect) = std::mem::take(&mut panel.form).apply(event);
        panel.form = form;

        match effect {
            None => Task::none(),
            Some(Effect::Register(request)) => {
                info!("Submitting registration of {}", request.email);
                let client = self.client.clone();
                Task::perform(
                    async move { client.sign_up(&request).await },
                    move |result| Message::Registered(id, result),
                )
            }
            Some(Effect::NavigateToLanding) => {
                self.route = Route::Pricing { welcome: true };
                Task::none()
            }
        }
    }
}

fn input_id(field: Field) -> &'static str {
    match field {
        Field::UserName => view::USERNAME_INPUT,
        Field::Email => view::EMAIL_INPUT,
        Field::Password => view::PASSWORD_INPUT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::registration::{
        Registered, RegistrationConfig, RegistrationError, ServerErrors,
    };
    use signup::{Phase, FAILURE_MESSAGE};

    fn new_app() -> App {
        let client = RegistrationClient::new(RegistrationConfig::default()).unwrap();
        App::new(client).0
    }

    fn panel(app: &App) -> &SignUpPanel {
        match app.route() {
            Route::SignUp(panel) => panel,
            route => panic!("sign-up form is not mounted: {:?}", route),
        }
    }

    fn fill_and_submit(app: &mut App) -> FormId {
        for msg in [
            ViewMessage::UserNameEdited("test".to_string()),
            ViewMessage::EmailEdited("ANDtesXYZt@gmail.com".to_string()),
            ViewMessage::PasswordEdited("321321321".to_string()),
        ] {
            let _ = app.update(msg.into());
        }
        assert!(panel(app).form.can_submit());
        let _ = app.update(ViewMessage::SignUp.into());
        assert_eq!(panel(app).form.phase, Phase::Submitting);
        panel(app).id
    }

    fn token() -> RegistrationResult {
        Ok(Registered {
            token: "test1234".to_string(),
        })
    }

    #[test]
    fn test_starts_on_empty_form() {
        let app = new_app();
        let panel = panel(&app);
        assert_eq!(panel.form, FormState::new());
        assert!(!panel.form.can_submit());
        assert_eq!(app.title(), "Sign Up");
    }

    #[test]
    fn test_success_navigates_to_landing() {
        let mut app = new_app();
        let id = fill_and_submit(&mut app);

        let _ = app.update(Message::Registered(id, token()));

        assert!(matches!(app.route(), Route::Pricing { welcome: true }));
        assert_eq!(app.title(), "Pricing");
    }

    #[test]
    fn test_failure_stays_on_form() {
        let mut app = new_app();
        let id = fill_and_submit(&mut app);

        let error = RegistrationError::Rejected(ServerErrors::from_body(
            400,
            &serde_json::json!({ "error": "Internal Server Error" }),
        ));
        let _ = app.update(Message::Registered(id, Err(error)));

        let form = &panel(&app).form;
        assert_eq!(form.status_message(), Some(FAILURE_MESSAGE));
        assert!(form.can_submit());
    }

    #[test]
    fn test_outcome_after_unmount_is_dropped() {
        let mut app = new_app();
        let id = fill_and_submit(&mut app);

        let _ = app.update(ViewMessage::ShowPricing.into());
        let _ = app.update(Message::Registered(id, token()));
        assert!(matches!(app.route(), Route::Pricing { welcome: false }));

        // A remounted form does not receive the outcome of its predecessor either.
        let mut app2 = new_app();
        let stale = fill_and_submit(&mut app2);
        let _ = app2.update(ViewMessage::ShowPricing.into());
        let _ = app2.update(ViewMessage::ShowSignUp.into());
        assert_ne!(panel(&app2).id, stale);
        let _ = app2.update(Message::Registered(stale, token()));
        assert_eq!(panel(&app2).form, FormState::new());
    }

    #[test]
    fn test_enter_moves_through_fields_and_submits() {
        let mut app = new_app();
        let _ = app.update(ViewMessage::FieldSubmitted(Field::Email).into());
        assert_eq!(panel(&app).form.email.warning, Some("Email is required"));

        let _ = app.update(ViewMessage::EmailEdited("ANDtesXYZt@gmail.com".to_string()).into());
        let _ = app.update(ViewMessage::PasswordEdited("321321321".to_string()).into());
        let _ = app.update(ViewMessage::FieldSubmitted(Field::Password).into());
        assert_eq!(panel(&app).form.phase, Phase::Submitting);
    }

    #[test]
    fn test_create_account_from_landing_mounts_fresh_form() {
        let mut app = new_app();
        let id = fill_and_submit(&mut app);
        let _ = app.update(Message::Registered(id, token()));
        assert!(matches!(app.route(), Route::Pricing { welcome: true }));
        let _ = app.view();

        let _ = app.update(ViewMessage::ShowSignUp.into());
        assert_eq!(panel(&app).form, FormState::new());
    }
}
