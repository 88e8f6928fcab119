//! Resolving the database configuration from flags, environment and file.

use std::path::Path;

use flight_db::{DbConfig, load_config};
use miette::Result;

/// Database config for this run.
///
/// `database` is the `--database` flag or `FLIGHTS_DATABASE_URL`, which
/// clap has already merged. It overrides the URL from `config_path`; the
/// file's other settings still apply. Without either, defaults are used.
pub async fn resolve(database: Option<String>, config_path: Option<&Path>) -> Result<DbConfig> {
    let mut config = match config_path {
        Some(path) => load_config(path).await?.database,
        None => DbConfig::default(),
    };
    if let Some(url) = database {
        config.url = url;
    }
    Ok(config)
}
