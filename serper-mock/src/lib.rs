//! Serper Mock Library
//!
//! A local stand-in for the Serper web search API. It synthesizes
//! structurally valid responses for web, image, video, news and place
//! searches without any network call, so integration code can be exercised
//! without credentials.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use serper_mock::{ResponseSynthesizer, SearchOptions, SerperClient};
//!
//! let client = SerperClient::mock(ResponseSynthesizer::new());
//! let result = client.search_images("kubernetes", SearchOptions::new()).await?;
//! assert_eq!(result.images.len(), 2);
//! ```
//!
//! # Configuration
//! Set `SERPER_MOCK_MODE`, `SERPER_API_KEY` and `SERPER_MOCK_PORT`, or
//! configure in `~/.serper-mock/config.toml`

pub mod backends;
pub mod category;
pub mod client;
pub mod config;
pub mod error;
pub mod options;
pub mod server;
pub mod synth;
pub mod types;

// Re-export the main entry points
pub use category::Category;
pub use client::SerperClient;
pub use config::Config;
pub use error::{SerperError, SerperResult};
pub use options::{SearchOptions, SearchRequest};
pub use server::MockServer;
pub use synth::ResponseSynthesizer;
pub use types::SearchResult;
