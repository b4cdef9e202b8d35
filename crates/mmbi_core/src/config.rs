//! Application configuration and endpoint resolution.
//!
//! # Responsibility
//! - Load backend location and logging settings from JSON or environment.
//! - Resolve API paths against the gateway base URL and microservice name.
//!
//! # Invariants
//! - `api_base_url` is an absolute `http`/`https` URL after validation.
//! - Resolved endpoints never contain a doubled `/` between segments.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Duration;

pub const ENV_API_BASE_URL: &str = "MMBI_API_BASE_URL";
pub const ENV_MICROSERVICE: &str = "MMBI_MICROSERVICE";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "MMBI_REQUEST_TIMEOUT_SECS";
pub const ENV_LOG_LEVEL: &str = "MMBI_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "MMBI_LOG_DIR";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_MICROSERVICE: &str = "moneymarketbi";

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: String,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    InvalidBaseUrl(String),
    InvalidMicroservice(String),
    InvalidValue {
        key: &'static str,
        value: String,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => write!(f, "failed to read config `{path}`: {source}"),
            Self::Parse(err) => write!(f, "invalid config JSON: {err}"),
            Self::InvalidBaseUrl(value) => {
                write!(f, "api_base_url must be an absolute http(s) URL, got `{value}`")
            }
            Self::InvalidMicroservice(value) => {
                write!(f, "microservice name must not contain `/` or spaces, got `{value}`")
            }
            Self::InvalidValue { key, value } => write!(f, "invalid value `{value}` for {key}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Gateway base URL, e.g. `https://erp.example.com`.
    pub api_base_url: String,
    /// Microservice name routed by the gateway. `None` talks to the API
    /// directly under `api_base_url`.
    pub microservice: Option<String>,
    /// Per-request timeout. `None` leaves timeouts to the transport.
    pub request_timeout_secs: Option<u64>,
    pub log_level: String,
    /// Absolute directory for rolling log files. `None` disables file logs.
    pub log_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            microservice: Some(DEFAULT_MICROSERVICE.to_string()),
            request_timeout_secs: None,
            log_level: crate::logging::default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Reads `MMBI_*` variables on top of defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_API_BASE_URL) {
            config.api_base_url = value;
        }
        if let Some(value) = lookup(ENV_MICROSERVICE) {
            // Empty disables gateway routing.
            config.microservice = Some(value).filter(|name| !name.trim().is_empty());
        }
        if let Some(value) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
            let secs = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: ENV_REQUEST_TIMEOUT_SECS,
                    value: value.clone(),
                })?;
            config.request_timeout_secs = Some(secs);
        }
        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            config.log_level = value;
        }
        if let Some(value) = lookup(ENV_LOG_DIR) {
            config.log_dir = Some(value).filter(|dir| !dir.trim().is_empty());
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.api_base_url.trim();
        let scheme_ok = base.starts_with("http://") || base.starts_with("https://");
        let host = base.split_once("://").map(|(_, rest)| rest).unwrap_or("");
        if !scheme_ok || host.trim_matches('/').is_empty() {
            return Err(ConfigError::InvalidBaseUrl(self.api_base_url.clone()));
        }
        if let Some(name) = self.microservice.as_deref() {
            if name.trim().is_empty() || name.contains('/') || name.contains(char::is_whitespace)
            {
                return Err(ConfigError::InvalidMicroservice(name.to_string()));
            }
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Resolves an API path such as `api/fiscal-years`.
    pub fn endpoint_for(&self, api: &str) -> String {
        let base = self.api_base_url.trim().trim_end_matches('/');
        let api = api.trim_start_matches('/');
        match self.microservice.as_deref() {
            Some(name) => format!("{base}/services/{name}/{api}"),
            None => format!("{base}/{api}"),
        }
    }
}
