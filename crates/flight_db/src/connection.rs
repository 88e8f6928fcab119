//! Database connection management.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::config::DbConfig;
use crate::error::{DbError, DbResult};

/// Connection to a flights database.
///
/// Wraps a sqlx pool. Cloning shares the pool; closing any clone closes it
/// for all of them.
#[derive(Debug, Clone)]
pub struct FlightDb {
    pool: SqlitePool,
}

impl FlightDb {
    /// Connect to the database behind `url` with default options.
    pub async fn connect(url: &str) -> DbResult<Self> {
        Self::open(&DbConfig::new(url)).await
    }

    /// Open a pool described by `config`.
    ///
    /// The target is parsed up front and one connection is opened eagerly,
    /// so a malformed or unreachable target fails here rather than on the
    /// first query. Missing database files are never created.
    pub async fn open(config: &DbConfig) -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| DbError::invalid_target(&config.url, e))?
            .create_if_missing(false)
            .read_only(config.read_only);

        info!("Opening flights database: {}", config.url);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect_with(options)
            .await?;

        debug!("Database connection established");

        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the pool. Safe to call more than once.
    pub async fn close(&self) {
        if !self.pool.is_closed() {
            info!("Closing flights database");
        }
        self.pool.close().await;
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::seeded_database;

    #[tokio::test]
    async fn test_connect_to_seeded_file() {
        let (_dir, url) = seeded_database().await;
        let db = FlightDb::connect(&url).await.unwrap();
        assert!(!db.is_closed());
        db.close().await;
        assert!(db.is_closed());
    }

    #[tokio::test]
    async fn test_missing_file_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("absent.sqlite3").display());

        let err = FlightDb::connect(&url).await.unwrap_err();
        assert!(matches!(err, DbError::Sqlx(_)));
        assert!(!dir.path().join("absent.sqlite3").exists());
    }

    #[tokio::test]
    async fn test_malformed_target_fails_fast() {
        let err = FlightDb::connect("sqlite://flights.sqlite3?bogus=1")
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::InvalidTarget { .. }));
    }

    #[tokio::test]
    async fn test_close_is_idempotent() {
        let (_dir, url) = seeded_database().await;
        let db = FlightDb::connect(&url).await.unwrap();
        let shared = db.clone();

        db.close().await;
        db.close().await;
        assert!(shared.is_closed());
    }
}
