//! Database configuration module

use serde::{Deserialize, Serialize};

use super::{env_or, ConfigError};

/// Embedded SQLite store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    pub connect_timeout: u64,

    /// Slow statement threshold in milliseconds
    #[serde(default = "default_slow_query_threshold")]
    pub slow_query_threshold: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("sqlite://rt.db?mode=rwc"),
            max_connections: 5,
            connect_timeout: 30,
            slow_query_threshold: default_slow_query_threshold(),
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            url: std::env::var("DATABASE_URL").unwrap_or(defaults.url),
            max_connections: env_or("DATABASE_MAX_CONNECTIONS", defaults.max_connections)?,
            connect_timeout: env_or("DATABASE_CONNECT_TIMEOUT", defaults.connect_timeout)?,
            ..defaults
        })
    }

    /// Create a new database configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Private in-memory store, used by tests
    pub fn in_memory() -> Self {
        Self::new("sqlite::memory:")
    }

    /// Set the maximum number of connections
    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Whether the URL points at an in-memory database
    ///
    /// Every connection to `:memory:` opens its own empty database, so the
    /// pool must be capped at one connection for all handlers to share state.
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

fn default_slow_query_threshold() -> u64 {
    1000
}
