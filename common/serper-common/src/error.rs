//! Error handling utilities for the HTTP transport
//!
//! Provides an error type that renders as a JSON `{"error": "..."}` body with
//! the matching status code, so handlers can return `ApiResult<T>` and use `?`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON error body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

/// Errors returned by HTTP handlers
#[derive(Error, Debug)]
pub enum ApiError {
    /// The client sent a request that cannot be served
    #[error("{0}")]
    BadRequest(String),

    /// Something failed on our side
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Rejected request: {}", self);
        }
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Type alias for handler results
pub type ApiResult<T> = Result<T, ApiError>;

/// Create a bad request error with a message
pub fn bad_request(message: impl Into<String>) -> ApiError {
    ApiError::BadRequest(message.into())
}

/// Create an internal error with a message
pub fn internal_error(message: impl Into<String>) -> ApiError {
    ApiError::Internal(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_status() {
        let err = bad_request("missing q");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "missing q");
    }

    #[test]
    fn test_internal_error_status() {
        let err = internal_error("boom");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_into_response_json_body() {
        let response = bad_request("Invalid request body").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "Invalid request body");
    }
}
