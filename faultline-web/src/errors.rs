//! Web-specific error types and conversions
//!
//! This module provides error types that integrate well with HTTP APIs
//! and can be converted to appropriate HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Marker placed in response extensions for failures that were requested on
/// purpose (fault injection), so logging middleware can tell them apart from
/// genuine server errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedFailure;

/// Web-specific error type for HTTP API operations
#[derive(Debug, Error)]
pub enum WebError {
    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    UnsupportedMediaType { message: String },

    #[error("{message}")]
    UnprocessableEntity { message: String },
}

impl WebError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            WebError::NotFound { .. } => StatusCode::NOT_FOUND,
            WebError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            WebError::UnprocessableEntity { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            WebError::BadRequest { .. } => "BAD_REQUEST",
            WebError::NotFound { .. } => "NOT_FOUND",
            WebError::UnsupportedMediaType { .. } => "UNSUPPORTED_MEDIA_TYPE",
            WebError::UnprocessableEntity { .. } => "VALIDATION_ERROR",
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error_response(self.status_code(), self.error_code(), &self.to_string())
    }
}

/// Build the structured error body shared by every error type
///
/// `detail` carries the human-readable message; `error` repeats it with a
/// machine-readable code and the numeric status.
pub fn error_response(status: StatusCode, code: &str, message: &str) -> Response {
    let body = json!({
        "detail": message,
        "error": {
            "code": code,
            "message": message,
            "status": status.as_u16()
        }
    });

    (status, Json(body)).into_response()
}

// Common error constructors
impl WebError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        WebError::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        WebError::NotFound {
            message: message.into(),
        }
    }

    pub fn unsupported_media_type(message: impl Into<String>) -> Self {
        WebError::UnsupportedMediaType {
            message: message.into(),
        }
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        WebError::UnprocessableEntity {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(WebError::bad_request("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(WebError::unprocessable("x").status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            WebError::unsupported_media_type("x").status_code(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }

    #[test]
    fn test_display_is_bare_message() {
        assert_eq!(WebError::not_found("Item not found").to_string(), "Item not found");
    }

    #[test]
    fn test_error_response_status() {
        let response = error_response(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", "boom");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
