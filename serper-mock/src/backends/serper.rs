//! Serper HTTP backend
//!
//! Forwards requests to the real API (or anything speaking its protocol,
//! such as this crate's own mock server).
//! See: https://serper.dev

use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;

use super::SearchBackend;
use crate::error::{SerperError, SerperResult};
use crate::options::SearchRequest;
use crate::types::SearchResult;

/// Default upstream endpoint
pub const DEFAULT_ENDPOINT: &str = "https://google.serper.dev/search";

/// Serper API backend
pub struct SerperBackend {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl SerperBackend {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> SerperResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("serper-mock/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl SearchBackend for SerperBackend {
    fn name(&self) -> &str {
        "serper"
    }

    async fn search(&self, request: &SearchRequest) -> SerperResult<SearchResult> {
        tracing::debug!("POST {} (q: {})", self.endpoint, request.q);

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-API-KEY", &self.api_key)
            .header(header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Serper API returned {}: {}", status, body);
            return Err(SerperError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
