//! Search client
//!
//! One call per category. In mock mode the client answers from the local
//! synthesizer; otherwise it forwards to the upstream API.

use std::sync::Arc;

use crate::backends::{MockBackend, SearchBackend, SerperBackend};
use crate::category::Category;
use crate::config::{ClientConfig, Config};
use crate::error::SerperResult;
use crate::options::{SearchOptions, SearchRequest};
use crate::synth::ResponseSynthesizer;
use crate::types::SearchResult;

/// Client for the search API
#[derive(Clone)]
pub struct SerperClient {
    backend: Arc<dyn SearchBackend>,
    mock_mode: bool,
    base_url: String,
}

impl SerperClient {
    /// Build a client from configuration
    pub fn new(config: &Config) -> SerperResult<Self> {
        let base_url = format!("http://localhost:{}", config.server.port);
        let client = if config.client.mock_mode {
            Self::mock(config.synth.build())
        } else {
            Self::upstream(&config.client)?
        };
        Ok(Self { base_url, ..client })
    }

    /// Client answering from the given synthesizer
    pub fn mock(synth: ResponseSynthesizer) -> Self {
        Self::with_backend(Arc::new(MockBackend::new(synth)), true)
    }

    /// Client forwarding to the configured endpoint
    pub fn upstream(config: &ClientConfig) -> SerperResult<Self> {
        let backend = SerperBackend::new(&config.endpoint, config.api_key(), config.timeout())?;
        Ok(Self::with_backend(Arc::new(backend), false))
    }

    pub fn with_backend(backend: Arc<dyn SearchBackend>, mock_mode: bool) -> Self {
        Self {
            backend,
            mock_mode,
            base_url: format!("http://localhost:{}", Config::default().server.port),
        }
    }

    pub fn is_mock(&self) -> bool {
        self.mock_mode
    }

    /// Address of the embedded mock server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Generic search; honors a `type` set in the options
    pub async fn search(&self, query: &str, options: SearchOptions) -> SerperResult<SearchResult> {
        self.execute(SearchRequest::new(query, options)).await
    }

    pub async fn search_images(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> SerperResult<SearchResult> {
        self.search_category(query, options, Category::Images).await
    }

    pub async fn search_videos(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> SerperResult<SearchResult> {
        self.search_category(query, options, Category::Videos).await
    }

    pub async fn search_news(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> SerperResult<SearchResult> {
        self.search_category(query, options, Category::News).await
    }

    pub async fn search_places(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> SerperResult<SearchResult> {
        self.search_category(query, options, Category::Places).await
    }

    /// Search a specific category, overriding any `type` in the options
    pub async fn search_category(
        &self,
        query: &str,
        options: SearchOptions,
        category: Category,
    ) -> SerperResult<SearchResult> {
        self.execute(SearchRequest::new(query, options).for_category(category))
            .await
    }

    async fn execute(&self, request: SearchRequest) -> SerperResult<SearchResult> {
        tracing::info!(
            "Searching {} for: {} (backend: {})",
            request.category(),
            request.q,
            self.backend.name()
        );

        let result = self.backend.search(&request).await?;
        if self.mock_mode {
            Ok(result.retain_category())
        } else {
            Ok(result)
        }
    }
}
