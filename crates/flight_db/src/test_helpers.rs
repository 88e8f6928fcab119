#![cfg(test)]

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;

pub const FIXTURE_SQL: &str = include_str!("../fixtures/flights.sql");

/// Create a SQLite file seeded with the fixture dataset.
///
/// Returns the directory guard (the file is removed when it drops) and a
/// connection URL for the file.
pub async fn seeded_database() -> (TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flights.sqlite3");

    let options = SqliteConnectOptions::new()
        .filename(&path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    sqlx::raw_sql(FIXTURE_SQL).execute(&pool).await.unwrap();
    pool.close().await;

    let url = format!("sqlite://{}", path.display());
    (dir, url)
}
