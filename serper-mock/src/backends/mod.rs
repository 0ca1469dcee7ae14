//! Search backend implementations
//!
//! This module provides a trait-based abstraction for search backends:
//! the in-process mock synthesizer and the upstream Serper HTTP API.

use async_trait::async_trait;

use crate::error::SerperResult;
use crate::options::SearchRequest;
use crate::types::SearchResult;

pub mod mock;
pub mod serper;

pub use mock::MockBackend;
pub use serper::SerperBackend;

/// Trait for search backends
///
/// The client talks to every backend through this trait, so mock mode and
/// the real API are interchangeable.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Get the name of this backend
    fn name(&self) -> &str;

    /// Execute a search request
    async fn search(&self, request: &SearchRequest) -> SerperResult<SearchResult>;
}
