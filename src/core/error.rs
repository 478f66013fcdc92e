//! Typed error handling for the dashboard service
//!
//! Each subsystem gets its own error enum; [`DashError`] wraps them all
//! and is the one type handlers return. The startup-time categories
//! ([`DataError`], [`ConfigError`]) abort bootstrap before the listener
//! binds; the request-time categories map to an HTTP status and a
//! `{"detail": ...}` body through the single [`IntoResponse`] impl.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type for the dashboard service
#[derive(Debug, Error)]
pub enum DashError {
    /// Data document errors (fatal at startup)
    #[error(transparent)]
    Data(#[from] DataError),

    /// Configuration errors (fatal at startup)
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Request validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// AI provider errors
    #[error(transparent)]
    Ai(#[from] AiError),
}

/// Errors loading the record document
#[derive(Debug, Error)]
pub enum DataError {
    /// The path does not resolve to a readable file
    #[error("data file not found: {path}")]
    NotFound { path: String },

    /// The file content is not valid structured data
    #[error("data file corrupt: {message}")]
    Corrupt { message: String },
}

/// Errors reading the environment configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable holds a value that cannot be used
    #[error("invalid value '{value}' for {variable}: {message}")]
    InvalidValue {
        variable: String,
        value: String,
        message: String,
    },
}

/// Errors validating a request body
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The AI endpoint was called without a usable question
    #[error("Question is required")]
    MissingQuestion,
}

/// Errors from the AI provider
#[derive(Debug, Error)]
pub enum AiError {
    /// Transport, HTTP-status or decode failure from the provider
    #[error("AI service error: {0}")]
    Request(String),
}

/// Error response body — the wire shape for all request-boundary errors
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable failure detail
    pub detail: String,
}

impl DashError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashError::Data(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DashError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DashError::Validation(_) => StatusCode::BAD_REQUEST,
            DashError::Ai(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DashError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// A specialized Result type for dashboard operations
pub type DashResult<T> = Result<T, DashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_error_display_carries_path() {
        let err = DataError::NotFound {
            path: "dummyData.json".to_string(),
        };
        assert!(err.to_string().contains("dummyData.json"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_validation_error_detail_text() {
        let err: DashError = ValidationError::MissingQuestion.into();
        assert_eq!(err.to_string(), "Question is required");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_ai_error_maps_to_500_with_detail() {
        let err: DashError = AiError::Request("connection refused".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_startup_errors_map_to_500() {
        let data: DashError = DataError::Corrupt {
            message: "expected value at line 1".to_string(),
        }
        .into();
        assert_eq!(data.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let config: DashError = ConfigError::InvalidValue {
            variable: "ALLOWED_ORIGINS".to_string(),
            value: "\u{7f}".to_string(),
            message: "invalid header value".to_string(),
        }
        .into();
        assert_eq!(config.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_wire_shape() {
        let body = ErrorResponse {
            detail: "Question is required".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"detail": "Question is required"}));
    }
}
