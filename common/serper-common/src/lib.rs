//! Serper Common - Shared utilities for the mock search API
//!
//! This crate provides the ambient pieces used by the `serper-mock` service:
//!
//! - **Initialization**: [`init_tracing`] for standardized logging setup
//! - **Errors**: [`ApiError`] and [`ErrorResponse`] for JSON error bodies
//!   returned by the HTTP transport
//!
//! # Example
//!
//! ```rust,ignore
//! use serper_common::{bad_request, init_tracing, ApiResult};
//!
//! init_tracing("serper_mock", 0)?;
//!
//! async fn handler(q: String) -> ApiResult<String> {
//!     if q.is_empty() {
//!         return Err(bad_request("Query parameter 'q' is required"));
//!     }
//!     Ok(q)
//! }
//! ```

pub mod error;
pub mod init;

// Re-export commonly used items at crate root
pub use error::{bad_request, internal_error, ApiError, ApiResult, ErrorResponse};
pub use init::init_tracing;
