use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info, warn};

use super::api::{
    Registered, RegistrationPayload, RegistrationRequest, ServerErrors, DEFAULT_INSTITUTE_ID,
    DEFAULT_PHONE,
};
use crate::services::http::{NotSuccessResponseInfo, ResponseExt};

pub const DEFAULT_API_URL: &str = "https://lib.brocali.co/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const REGISTER_ENDPOINT: &str = "register";

/// Everything needed to build a [`RegistrationClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub institute_id: u32,
    pub phone: String,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            institute_id: DEFAULT_INSTITUTE_ID,
            phone: DEFAULT_PHONE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// The server answered and refused the registration.
    #[error("Registration rejected: {0}")]
    Rejected(ServerErrors),
    /// No usable answer: connection failure, timeout or malformed response.
    #[error("Registration request failed: {error}")]
    Transport {
        http_status: Option<u16>,
        error: String,
    },
}

impl From<reqwest::Error> for RegistrationError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport {
            http_status: error.status().map(|s| s.as_u16()),
            error: error.to_string(),
        }
    }
}

impl From<NotSuccessResponseInfo> for RegistrationError {
    fn from(info: NotSuccessResponseInfo) -> Self {
        match serde_json::from_str::<Value>(&info.text) {
            Ok(body) if body.is_object() => {
                Self::Rejected(ServerErrors::from_body(info.status_code, &body))
            }
            _ => Self::Transport {
                http_status: Some(info.status_code),
                error: format!("unexpected response with status {}", info.status_code),
            },
        }
    }
}

pub type RegistrationResult = Result<Registered, RegistrationError>;

#[derive(Debug, Clone)]
pub struct RegistrationClient {
    http: reqwest::Client,
    base_url: String,
    institute_id: u32,
    phone: String,
}

impl RegistrationClient {
    pub fn new(config: RegistrationConfig) -> Result<Self, RegistrationError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("signup-gui/{}", crate::VERSION))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            institute_id: config.institute_id,
            phone: config.phone,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Sends one registration request. Never retries.
    pub async fn sign_up(&self, request: &RegistrationRequest) -> RegistrationResult {
        let payload = RegistrationPayload::new(request, self.institute_id, &self.phone);
        let url = self.endpoint(REGISTER_ENDPOINT);
        debug!("Sending registration of {} to {}", request.email, url);

        let result = self.post_registration(&url, &payload).await;
        match &result {
            Ok(_) => info!("Registration of {} accepted", request.email),
            Err(e) => warn!("Registration of {} failed: {}", request.email, e),
        }
        result
    }

    async fn post_registration(
        &self,
        url: &str,
        payload: &RegistrationPayload,
    ) -> RegistrationResult {
        let response = self
            .http
            .post(url)
            // Without it some backends answer validation errors with an HTML redirect.
            .header("Accept", "application/json")
            .json(payload)
            .send()
            .await?
            .check_success()
            .await?;

        let status = response.status().as_u16();
        let body: Value = response.json().await?;
        if !body.is_object() {
            return Err(RegistrationError::Transport {
                http_status: Some(status),
                error: format!("unexpected response body with status {}", status),
            });
        }
        Registered::from_body(&body)
            .ok_or_else(|| RegistrationError::Rejected(ServerErrors::from_body(status, &body)))
    }
}
