// Error handling types for the application

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::fmt;
use tracing::error;

use super::validation::ValidationResult;

/// Application error types
#[derive(Debug)]
pub enum ApiError {
    Unauthorized(String),
    BadRequest(String),
    NotFound(String),
    ValidationError(String),
    CredentialError(String),
    UpstreamError(String),
    Timeout(String),
    InternalServer(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            ApiError::CredentialError(msg) => write!(f, "Credential Error: {}", msg),
            ApiError::UpstreamError(msg) => write!(f, "Upstream Error: {}", msg),
            ApiError::Timeout(msg) => write!(f, "Timeout: {}", msg),
            ApiError::InternalServer(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

/// JSON error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ApiError {
    /// Status code and machine-readable code for this error
    pub fn parts(&self) -> (StatusCode, &str, &str) {
        match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, "UNAUTHORIZED"),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, "BAD_REQUEST"),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "NOT_FOUND"),
            ApiError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg, "VALIDATION_ERROR"),
            ApiError::CredentialError(msg) => (StatusCode::BAD_GATEWAY, msg, "CREDENTIAL_ERROR"),
            ApiError::UpstreamError(msg) => (StatusCode::BAD_GATEWAY, msg, "UPSTREAM_ERROR"),
            ApiError::Timeout(msg) => (StatusCode::GATEWAY_TIMEOUT, msg, "TIMEOUT"),
            ApiError::InternalServer(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                msg,
                "INTERNAL_SERVER_ERROR",
            ),
        }
    }

    /// Short human-readable summary for inline page rendering.
    /// Never a stack trace; detail stays in the logs.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized(_) => "Please log in to continue.".to_string(),
            ApiError::BadRequest(msg) | ApiError::ValidationError(msg) => msg.clone(),
            ApiError::NotFound(_) => "Not found.".to_string(),
            ApiError::CredentialError(_) => {
                "The advice service is not configured correctly. Please try again later."
                    .to_string()
            }
            ApiError::UpstreamError(_) => {
                "The advice service returned an error. Please try again.".to_string()
            }
            ApiError::Timeout(_) => "The request timed out. Please try again.".to_string(),
            ApiError::InternalServer(_) => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message, code) = self.parts();

        if status.is_server_error() {
            error!(code = %code, error = %error_message, "Request failed");
        }

        let error_response = ErrorResponse {
            error: error_message.to_string(),
            code: code.to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Helper to convert ValidationResult to ApiError
impl From<ValidationResult> for ApiError {
    fn from(result: ValidationResult) -> Self {
        if result.is_valid {
            ApiError::InternalServer(
                "Validation result was valid but converted to error".to_string(),
            )
        } else {
            let error_messages: Vec<String> = result
                .errors
                .iter()
                .map(|e| format!("{}: {}", e.field, e.message))
                .collect();
            ApiError::ValidationError(error_messages.join(", "))
        }
    }
}
