//! Configuration management for the MCP server.
//!
//! Configuration is read once at startup from environment variables (after
//! loading an optional `.env` file) and is immutable afterwards. The remote
//! query API URL and key are mandatory: `Config::from_env` fails without them
//! and the process exits before any transport is opened.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Environment variable holding the query API endpoint.
pub const API_URL_VAR: &str = "INFORMIX_API_URL";

/// Environment variable holding the query API key.
pub const API_KEY_VAR: &str = "INFORMIX_API_KEY";

/// Database used when a tool call omits `database`.
pub const DEFAULT_DATABASE: &str = "sysmaster";

/// Upper bound on a query round trip.
pub const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 30;

/// Upper bound on the health probe round trip.
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Remote query API settings.
    pub api: ApiConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Settings for the remote query-execution API.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Endpoint receiving `POST {queryName, params}`.
    pub url: String,

    /// Static key sent as `X-API-KEY`.
    #[serde(skip_serializing)]
    pub api_key: String,

    /// Database substituted when a call omits one.
    pub default_database: String,

    /// Timeout for query operations.
    pub query_timeout: Duration,

    /// Timeout for the connectivity probe.
    pub probe_timeout: Duration,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("url", &self.url)
            .field("api_key", &"[REDACTED]")
            .field("default_database", &self.default_database)
            .field("query_timeout", &self.query_timeout)
            .field("probe_timeout", &self.probe_timeout)
            .finish()
    }
}

impl ApiConfig {
    /// Build API settings with default database and timeouts.
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            default_database: DEFAULT_DATABASE.to_string(),
            query_timeout: Duration::from_secs(DEFAULT_QUERY_TIMEOUT_SECS),
            probe_timeout: Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
        }
    }

    /// Whether a non-empty key is configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Config {
    /// Create a configuration around the given API settings, with defaults
    /// for everything else.
    pub fn new(api: ApiConfig) -> Self {
        Self {
            server: ServerConfig {
                name: "informix-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            api,
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }

    /// Load configuration from the process environment.
    ///
    /// Fails with [`Error::Config`] when `INFORMIX_API_URL` or
    /// `INFORMIX_API_KEY` is missing or blank.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::config(format!("{key} environment variable is required")))
        };

        let url = required(API_URL_VAR)?;
        let api_key = required(API_KEY_VAR)?;

        let mut config = Self::new(ApiConfig::new(url, api_key));

        if let Some(name) = lookup("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Some(level) = lookup("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(database) = lookup("INFORMIX_DEFAULT_DATABASE").filter(|d| !d.is_empty()) {
            info!("Default database set to {}", database);
            config.api.default_database = database;
        }

        if let Some(secs) = parse_secs(&lookup, "INFORMIX_QUERY_TIMEOUT_SECS") {
            config.api.query_timeout = Duration::from_secs(secs);
        }

        if let Some(secs) = parse_secs(&lookup, "INFORMIX_PROBE_TIMEOUT_SECS") {
            config.api.probe_timeout = Duration::from_secs(secs);
        }

        config.transport = TransportConfig::from_lookup(&lookup);

        Ok(config)
    }
}

fn parse_secs<F>(lookup: &F, key: &str) -> Option<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Some(secs),
        _ => {
            warn!("Ignoring invalid {}={:?}, keeping default", key, raw);
            None
        }
    }
}
