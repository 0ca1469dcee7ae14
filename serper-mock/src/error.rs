//! Error types for search requests
//!
//! Synthesis itself never fails; these cover the upstream HTTP path.

use thiserror::Error;

/// Errors that can occur when querying a search backend
#[derive(Error, Debug)]
pub enum SerperError {
    /// The request could not be built or sent
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API request failed with status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The response body was not a valid search result
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for search operations
pub type SerperResult<T> = Result<T, SerperError>;
