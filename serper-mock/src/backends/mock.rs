//! Mock backend
//!
//! Answers every request in-process with a synthesized response.

use async_trait::async_trait;

use super::SearchBackend;
use crate::error::SerperResult;
use crate::options::SearchRequest;
use crate::synth::ResponseSynthesizer;
use crate::types::SearchResult;

/// Backend that never leaves the process
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    synth: ResponseSynthesizer,
}

impl MockBackend {
    pub fn new(synth: ResponseSynthesizer) -> Self {
        Self { synth }
    }
}

#[async_trait]
impl SearchBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn search(&self, request: &SearchRequest) -> SerperResult<SearchResult> {
        Ok(self
            .synth
            .generate_category(&request.q, request.category()))
    }
}
