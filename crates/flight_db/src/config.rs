//! Configuration for the flight database connection.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{DbError, DbResult};

/// Connection target used when nothing else is configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/flights.sqlite3";

/// Database configuration for SQLite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbConfig {
    /// sqlx SQLite connection URL.
    #[serde(default = "default_url")]
    pub url: String,

    /// Upper bound on pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Open the database read-only. This layer never writes.
    #[serde(default = "default_true")]
    pub read_only: bool,

    /// Seconds to wait for a pooled connection before giving up.
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

impl DbConfig {
    /// Config with defaults for everything but the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
            read_only: true,
            acquire_timeout_secs: default_acquire_timeout_secs(),
        }
    }
}

fn default_url() -> String {
    DEFAULT_DATABASE_URL.to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_true() -> bool {
    true
}

fn default_acquire_timeout_secs() -> u64 {
    30
}

/// Top-level configuration file layout.
///
/// ```toml
/// [database]
/// url = "sqlite://data/flights.sqlite3"
/// max_connections = 5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightsConfig {
    #[serde(default)]
    pub database: DbConfig,
}

/// Load configuration from a TOML file.
pub async fn load_config(path: &Path) -> DbResult<FlightsConfig> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| DbError::config(path.display().to_string(), e.to_string()))?;

    let config: FlightsConfig = toml::from_str(&content)?;
    if config.database.max_connections == 0 {
        return Err(DbError::config(
            path.display().to_string(),
            "database.max_connections must be at least 1",
        ));
    }
    Ok(config)
}
