//! REST API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use faultline_interfaces::StoreError;
use faultline_web::{error_response, ExpectedFailure};
use thiserror::Error;

/// REST API specific error type
#[derive(Error, Debug)]
pub enum RestError {
    #[error("{0}")]
    InvalidParameter(String),

    /// Failure injected by `/random-error`
    #[error("{0}")]
    SimulatedFailure(String),

    /// Outage injected by `/cascade-failure`
    #[error("{0}")]
    SimulatedOutage(String),

    #[error("{0}")]
    InternalError(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for REST handlers
pub type RestResult<T> = Result<T, RestError>;

impl RestError {
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            RestError::SimulatedFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RestError::SimulatedOutage(_) => StatusCode::SERVICE_UNAVAILABLE,
            RestError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RestError::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            RestError::Store(StoreError::Conflict { .. }) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            RestError::Store(StoreError::NotFound { .. }) => "NOT_FOUND",
            RestError::Store(StoreError::Conflict { .. }) => "CONFLICT",
            RestError::InvalidParameter(_) => "INVALID_PARAMETER",
            RestError::SimulatedFailure(_) => "SIMULATED_FAILURE",
            RestError::SimulatedOutage(_) => "SERVICE_UNAVAILABLE",
            RestError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the failure was asked for by the caller
    pub fn is_injected(&self) -> bool {
        matches!(self, RestError::SimulatedFailure(_) | RestError::SimulatedOutage(_))
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let mut response = error_response(self.status_code(), self.error_code(), &self.to_string());
        if self.is_injected() {
            response.extensions_mut().insert(ExpectedFailure);
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faultline_api_types::Item;

    #[test]
    fn test_store_errors_keep_their_message() {
        let err = RestError::from(StoreError::not_found::<Item>(9999));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Item not found");

        let err = RestError::from(StoreError::conflict::<Item>(1));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Item already exists");
    }

    #[test]
    fn test_injected_failures_are_tagged() {
        let response = RestError::SimulatedFailure("Simulated random failure".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.extensions().get::<ExpectedFailure>().is_some());

        let response = RestError::internal("worker panicked").into_response();
        assert!(response.extensions().get::<ExpectedFailure>().is_none());
    }

    #[test]
    fn test_outage_maps_to_503() {
        let err = RestError::SimulatedOutage("down".into());
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.is_injected());
    }
}
