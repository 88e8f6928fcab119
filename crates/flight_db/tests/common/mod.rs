use flight_db::FlightData;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;

const FIXTURE_SQL: &str = include_str!("../../fixtures/flights.sql");

/// A seeded database file and a repository connected to it.
pub struct Fixture {
    pub data: FlightData,
    pub url: String,
    pub path: std::path::PathBuf,
    _dir: TempDir,
}

pub async fn fixture() -> Fixture {
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
    let data = FlightData::connect(&url).await.unwrap();
    Fixture {
        data,
        url,
        path,
        _dir: dir,
    }
}

/// Flight ids of `records`, sorted. Templates do not order their rows.
pub fn ids(records: &[flight_db::Record]) -> Vec<i64> {
    let mut ids: Vec<i64> = records.iter().filter_map(|r| r.flight_id()).collect();
    ids.sort_unstable();
    ids
}
