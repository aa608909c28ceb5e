//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default base URL for the BOT reference rate (THB/USD interbank) API.
pub const DEFAULT_REFERENCE_RATE_URL: &str =
    "https://apigw1.bot.or.th/bot/public/Stat-ReferenceRate/v2";

/// Default base URL for the BOT average exchange rate API.
pub const DEFAULT_EXCHANGE_RATE_URL: &str =
    "https://apigw1.bot.or.th/bot/public/Stat-ExchangeRate/v2";

/// Default upstream deadline in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Environment variable holding the BOT API key.
pub const API_KEY_VAR: &str = "BOT_API_KEY";

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Upstream BOT API endpoints and deadline.
    pub upstream: UpstreamConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Upstream API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the reference rate API (interbank tools).
    pub reference_rate_url: String,

    /// Base URL of the exchange rate API (exchange tools).
    pub exchange_rate_url: String,

    /// Hard deadline for a single upstream call, in milliseconds.
    pub timeout_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for external API credentials.
#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Name of the environment variable holding the BOT API key.
    /// The variable is read on every call, so a key exported after startup
    /// is picked up by the next tool invocation.
    pub api_key_var: String,

    /// Fixed API key that takes precedence over the environment.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("api_key_var", &self.api_key_var)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl CredentialsConfig {
    /// Credentials with a fixed key, ignoring the environment.
    pub fn fixed(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Resolve the current API key.
    ///
    /// Empty values count as unset.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_var).ok())
            .filter(|key| !key.is_empty())
    }
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            api_key_var: API_KEY_VAR.to_string(),
            api_key: None,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            reference_rate_url: DEFAULT_REFERENCE_RATE_URL.to_string(),
            exchange_rate_url: DEFAULT_EXCHANGE_RATE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl UpstreamConfig {
    /// The per-call deadline.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "bot-rates-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            upstream: UpstreamConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`); upstream settings use `BOT_`
    /// (`BOT_API_TIMEOUT_MS`, `BOT_REFERENCE_RATE_URL`, `BOT_EXCHANGE_RATE_URL`).
    /// `BOT_API_KEY` is not captured here; the gateway reads it on each call.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(url) = std::env::var("BOT_REFERENCE_RATE_URL") {
            config.upstream.reference_rate_url = url;
        }

        if let Ok(url) = std::env::var("BOT_EXCHANGE_RATE_URL") {
            config.upstream.exchange_rate_url = url;
        }

        if let Some(timeout_ms) = std::env::var("BOT_API_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.upstream.timeout_ms = timeout_ms;
        }

        config.transport = TransportConfig::from_env();

        config
    }

    /// Check settings that would otherwise only fail on the first tool call.
    pub fn validate(&self) -> Result<()> {
        if self.upstream.timeout_ms == 0 {
            return Err(Error::config("upstream timeout must be greater than zero"));
        }

        for url in [
            &self.upstream.reference_rate_url,
            &self.upstream.exchange_rate_url,
        ] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(Error::config(format!(
                    "upstream base URL must start with http:// or https://: {url}"
                )));
            }
        }

        Ok(())
    }
}
