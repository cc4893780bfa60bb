pub mod api;
pub mod client;


pub use api::{Registered, RegistrationRequest, ServerErrors};
pub use client::{
    RegistrationClient, RegistrationConfig, RegistrationError, RegistrationResult,
    DEFAULT_API_URL,
};
