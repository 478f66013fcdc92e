//! Configuration loading and management
//!
//! Every option is environment-sourced; a `.env` file is honored when
//! present (loaded in `main` before anything reads the environment). The
//! struct is constructed once at startup and injected into the loader and
//! handlers — nothing consults the environment afterwards.

use axum::http::HeaderValue;

use crate::core::ConfigError;

/// Default chat-completions endpoint when `OPENAI_API_URL` is not set
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Runtime configuration for the service
///
/// | variable          | default                        |
/// |-------------------|--------------------------------|
/// | `DATA_FILE_PATH`  | `dummyData.json`               |
/// | `ALLOWED_ORIGINS` | `http://localhost:3000`        |
/// | `OPENAI_API_KEY`  | unset                          |
/// | `OPENAI_API_URL`  | the OpenAI chat completions URL|
/// | `OPENAI_MODEL`    | `gpt-4o-mini`                  |
/// | `BIND_ADDR`       | `127.0.0.1:8000`               |
/// | `DEBUG`           | `true`                         |
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the JSON document holding the record collection
    pub data_file_path: String,

    /// Origins allowed by the CORS layer, validated at startup
    pub allowed_origins: Vec<HeaderValue>,

    /// Credential for the OpenAI-compatible provider
    pub openai_api_key: Option<String>,

    /// Chat-completions endpoint (override for compatible servers)
    pub openai_api_url: String,

    /// Model name sent with each completion request
    pub openai_model: String,

    /// Listen address for the HTTP server
    pub bind_addr: String,

    /// When true the AI endpoint answers with the deterministic placeholder
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file_path: "dummyData.json".to_string(),
            allowed_origins: vec![HeaderValue::from_static("http://localhost:3000")],
            openai_api_key: None,
            openai_api_url: DEFAULT_OPENAI_API_URL.to_string(),
            openai_model: "gpt-4o-mini".to_string(),
            bind_addr: "127.0.0.1:8000".to_string(),
            debug: true,
        }
    }
}

impl AppConfig {
    /// Build the configuration from the process environment.
    ///
    /// Unset variables fall back to the defaults above. A malformed
    /// `ALLOWED_ORIGINS` entry is a [`ConfigError`] and aborts startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let allowed_origins = match std::env::var("ALLOWED_ORIGINS") {
            Ok(raw) => parse_origins(&raw)?,
            Err(_) => defaults.allowed_origins,
        };

        let debug = match std::env::var("DEBUG") {
            Ok(raw) => parse_bool(&raw),
            Err(_) => defaults.debug,
        };

        Ok(Self {
            data_file_path: std::env::var("DATA_FILE_PATH").unwrap_or(defaults.data_file_path),
            allowed_origins,
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            openai_api_url: std::env::var("OPENAI_API_URL").unwrap_or(defaults.openai_api_url),
            openai_model: std::env::var("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            debug,
        })
    }
}

/// Parse a comma-separated origin list into validated header values.
fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidValue {
                variable: "ALLOWED_ORIGINS".to_string(),
                value: origin.to_string(),
                message: e.to_string(),
            })
        })
        .collect()
}

/// Truthiness for environment flags: 1/true/yes/on, case-insensitive.
fn parse_bool(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
