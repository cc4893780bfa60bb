use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing_subscriber::filter;

use crate::services::registration::{
    api::{DEFAULT_INSTITUTE_ID, DEFAULT_PHONE},
    client::DEFAULT_TIMEOUT,
    RegistrationConfig, DEFAULT_API_URL,
};

pub const DEFAULT_FILE_NAME: &str = "signup.toml";
/// Environment variable overriding the registration API base URL.
pub const API_URL_ENV: &str = "SIGNUP_API_URL";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
    /// Log at debug level when `log_level` is not set.
    pub debug: Option<bool>,
    /// Base URL of the registration API.
    pub api_url: Option<String>,
    /// Timeout of a registration request, in seconds.
    pub request_timeout_secs: Option<u64>,
    pub institute_id: Option<u32>,
    pub phone: Option<String>,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read_to_string(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConfigError::NotFound,
                _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
            })
            .and_then(|file_content| {
                toml::from_str::<Config>(&file_content).map_err(|e| {
                    ConfigError::ReadingFile(format!("Parsing configuration file: {}", e))
                })
            })?;

        config.log_level()?;
        if let Some(url) = &config.api_url {
            check_api_url(url)?;
        }
        if config.request_timeout_secs == Some(0) {
            return Err(ConfigError::InvalidField(
                "request_timeout_secs",
                "must be greater than 0".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        if let Some(level) = &self.log_level {
            match level.as_ref() {
                "info" => Ok(filter::LevelFilter::INFO),
                "debug" => Ok(filter::LevelFilter::DEBUG),
                "trace" => Ok(filter::LevelFilter::TRACE),
                _ => Err(ConfigError::InvalidField(
                    "log_level",
                    format!("Unknown value '{}'", level),
                )),
            }
        } else if let Some(true) = self.debug {
            Ok(filter::LevelFilter::DEBUG)
        } else {
            Ok(filter::LevelFilter::INFO)
        }
    }

    /// Builds the registration client configuration.
    ///
    /// The base URL is taken from the command line, then the environment, then
    /// this file, and falls back to [`DEFAULT_API_URL`].
    pub fn registration(
        &self,
        cli_api_url: Option<&str>,
        env_api_url: Option<&str>,
    ) -> Result<RegistrationConfig, ConfigError> {
        Ok(RegistrationConfig {
            base_url: resolve_api_url(cli_api_url, env_api_url, self.api_url.as_deref())?,
            timeout: self
                .request_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TIMEOUT),
            institute_id: self.institute_id.unwrap_or(DEFAULT_INSTITUTE_ID),
            phone: self
                .phone
                .clone()
                .unwrap_or_else(|| DEFAULT_PHONE.to_string()),
        })
    }
}

/// First non-empty candidate wins. The result must be an http(s) URL.
pub fn resolve_api_url(
    cli: Option<&str>,
    env: Option<&str>,
    file: Option<&str>,
) -> Result<String, ConfigError> {
    let url = [cli, env, file]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL);
    check_api_url(url)?;
    Ok(url.to_string())
}

fn check_api_url(url: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(url)
        .map_err(|e| ConfigError::InvalidField("api_url", format!("'{}': {}", url, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ConfigError::InvalidField(
            "api_url",
            format!("'{}': unsupported scheme '{}'", url, scheme),
        )),
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ConfigError {
    InvalidField(&'static str, String),
    NotFound,
    ReadingFile(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Config file not found"),
            Self::InvalidField(field, message) => {
                write!(f, "Config field {} is invalid: {}", field, message)
            }
            Self::ReadingFile(e) => write!(f, "Error while reading file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
