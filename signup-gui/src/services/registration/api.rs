use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_INSTITUTE_ID: u32 = 1;
pub const DEFAULT_PHONE: &str = "987";

/// Fields collected by the sign-up form for one submission.
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /register`.
///
/// Only built from a [`RegistrationRequest`], so `password_confirmation`
/// always mirrors `password`.
#[derive(Clone, Serialize)]
pub struct RegistrationPayload {
    name: String,
    email: String,
    password: String,
    password_confirmation: String,
    institute_id: u32,
    phone: String,
}

impl RegistrationPayload {
    pub fn new(request: &RegistrationRequest, institute_id: u32, phone: &str) -> Self {
        Self {
            name: request.username.clone(),
            email: request.email.clone(),
            password: request.password.clone(),
            password_confirmation: request.password.clone(),
            institute_id,
            phone: phone.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registered {
    pub token: String,
}

impl Registered {
    pub fn from_body(body: &Value) -> Option<Self> {
        body.get("token")
            .and_then(Value::as_str)
            .map(|token| Self {
                token: token.to_string(),
            })
    }
}

/// Rejection returned by the registration endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerErrors {
    pub http_status: u16,
    pub message: Option<String>,
    /// Field name to the messages the server attached to it.
    pub fields: BTreeMap<String, Vec<String>>,
}

impl ServerErrors {
    /// Extracts the error structure of a JSON body.
    ///
    /// Accepts both `{"error": "..."}` and `{"message": "...", "errors": {"email": ["..."]}}`
    /// shapes, as well as field lists at the top level (`{"email": ["..."]}`).
    pub fn from_body(http_status: u16, body: &Value) -> Self {
        let message = ["error", "message"]
            .iter()
            .find_map(|key| body.get(key).and_then(Value::as_str))
            .map(str::to_string);

        let mut fields = BTreeMap::new();
        if let Some(errors) = body.get("errors").and_then(Value::as_object) {
            for (field, value) in errors {
                if let Some(messages) = messages_of(value, true) {
                    fields.insert(field.clone(), messages);
                }
            }
        }
        if let Some(top) = body.as_object() {
            for (field, value) in top {
                if let Some(messages) = messages_of(value, false) {
                    fields.entry(field.clone()).or_insert(messages);
                }
            }
        }

        Self {
            http_status,
            message,
            fields,
        }
    }

    /// One line per field message, prefixed with the field name.
    pub fn field_messages(&self) -> Vec<String> {
        self.fields
            .iter()
            .flat_map(|(field, messages)| {
                messages
                    .iter()
                    .map(move |message| format!("{}: {}", field, message))
            })
            .collect()
    }
}

impl std::fmt::Display for ServerErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP {}", self.http_status)?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        if !self.fields.is_empty() {
            write!(f, " ({})", self.field_messages().join(", "))?;
        }
        Ok(())
    }
}

fn messages_of(value: &Value, allow_single: bool) -> Option<Vec<String>> {
    match value {
        Value::Array(items) if !items.is_empty() => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect(),
        Value::String(s) if allow_single => Some(vec![s.clone()]),
        _ => None,
    }
}
