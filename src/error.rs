//! Error types for toolshelf
//!
//! Centralized error handling using thiserror. Every variant renders as a
//! JSON body `{"error": "..."}` with a matching HTTP status.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Client-facing message for anything unexpected
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// All error types a request handler can produce
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input
    #[error("{0}")]
    InvalidArgument(String),

    /// Referenced entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// Entity already exists (duplicate favorite)
    #[error("{0}")]
    Conflict(String),

    /// Unexpected fault; details are logged, never returned
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    ///
    /// Conflict maps to 400, not 409, to stay compatible with existing clients.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response body
    pub fn client_message(&self) -> String {
        match self {
            ApiError::InvalidArgument(msg) | ApiError::NotFound(msg) | ApiError::Conflict(msg) => {
                msg.clone()
            }
            ApiError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            log::error!("Internal error: {}", detail);
        }
        let body = Json(json!({ "error": self.client_message() }));
        (self.status_code(), body).into_response()
    }
}

/// Result type alias for toolshelf operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let err = ApiError::InvalidArgument("toolId is required".to_string());
        assert_eq!(err.to_string(), "toolId is required");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error() {
        let err = ApiError::NotFound("Tool not found".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.client_message(), "Tool not found");
    }

    #[test]
    fn test_conflict_maps_to_bad_request() {
        let err = ApiError::Conflict("Tool is already in favorites".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let err = ApiError::Internal("lock poisoned at store.rs:42".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.client_message(), INTERNAL_ERROR_MESSAGE);
        assert!(err.to_string().contains("lock poisoned"));
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::NotFound("Favorite not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(ApiError::NotFound("test".to_string()))
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }
}
