//! Configuration loading for serper-mock
//!
//! Configuration is loaded from:
//! 1. Environment variables (`SERPER_API_KEY`, `SERPER_API_URL`,
//!    `SERPER_MOCK_MODE`, `SERPER_MOCK_PORT`)
//! 2. Environment variable SERPER_MOCK_CONFIG_PATH
//! 3. ~/.serper-mock/config.toml
//! 4. Default values
//!
//! Command-line flags are applied on top by the binary.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::backends::serper::DEFAULT_ENDPOINT;
use crate::synth::{ResponseSynthesizer, SeededDice};

/// API key used when none is configured
pub const DEFAULT_API_KEY: &str = "mock-api-key";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Embedded mock server
    #[serde(default)]
    pub server: ServerConfig,
    /// Search client
    #[serde(default)]
    pub client: ClientConfig,
    /// Response synthesis
    #[serde(default)]
    pub synth: SynthConfig,
}

/// Mock server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Listening port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// Search client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Answer locally instead of calling the upstream API
    #[serde(default = "default_true")]
    pub mock_mode: bool,
    /// Upstream API key (only used when mock mode is off)
    #[serde(default = "default_api_key")]
    pub api_key: String,
    /// Upstream search endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// HTTP timeout in seconds
    #[serde(default = "default_client_timeout")]
    pub timeout_secs: u64,
}

/// Synthesizer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SynthConfig {
    /// Fixed RNG seed for reproducible knowledge-graph coin-flips
    #[serde(default)]
    pub seed: Option<u64>,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

fn default_api_key() -> String {
    DEFAULT_API_KEY.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_client_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            mock_mode: default_true(),
            api_key: default_api_key(),
            endpoint: default_endpoint(),
            timeout_secs: default_client_timeout(),
        }
    }
}

impl ServerConfig {
    /// Socket address to bind
    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The configured API key, or the placeholder when blank
    pub fn api_key(&self) -> &str {
        if self.api_key.is_empty() {
            DEFAULT_API_KEY
        } else {
            &self.api_key
        }
    }
}

impl SynthConfig {
    /// Build a synthesizer, seeded if a seed is configured
    pub fn build(&self) -> ResponseSynthesizer {
        let synth = ResponseSynthesizer::new();
        match self.seed {
            Some(seed) => synth.with_dice(SeededDice::new(seed)),
            None => synth,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::find_config_path() {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from: {}", path.display());
                Self::load_from(&path)?
            }
            Some(_) => {
                tracing::info!("Config file not found, using defaults");
                Self::default()
            }
            None => {
                tracing::info!("No config path specified, using defaults");
                Self::default()
            }
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Apply overrides from environment-style lookups
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("SERPER_API_KEY") {
            self.client.api_key = key;
        }
        if let Some(url) = lookup("SERPER_API_URL") {
            self.client.endpoint = url;
        }
        if let Some(mode) = lookup("SERPER_MOCK_MODE") {
            match parse_bool(&mode) {
                Some(mock_mode) => self.client.mock_mode = mock_mode,
                None => tracing::warn!("Ignoring invalid SERPER_MOCK_MODE: {}", mode),
            }
        }
        if let Some(port) = lookup("SERPER_MOCK_PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!("Ignoring invalid SERPER_MOCK_PORT: {}", port),
            }
        }
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        // 1. Check environment variable
        if let Ok(path) = std::env::var("SERPER_MOCK_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        // 2. Check ~/.serper-mock/config.toml
        if let Ok(home) = std::env::var("HOME") {
            let path = PathBuf::from(home).join(".serper-mock").join("config.toml");
            return Some(path);
        }

        None
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
