//! Error types for the flight data layer.

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for database operations.
pub type DbResult<T> = Result<T, DbError>;

/// Database error types.
#[derive(Debug, Error, Diagnostic)]
pub enum DbError {
    /// SQLite/sqlx error
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Connection target could not be parsed
    #[error("Invalid connection target `{target}`: {reason}")]
    #[diagnostic(help(
        "Use a SQLite URL such as sqlite://data/flights.sqlite3 or sqlite::memory:"
    ))]
    InvalidTarget { target: String, reason: String },

    /// A template placeholder had no value in the supplied parameters
    #[error("Query `{query}` is missing parameter `{name}`")]
    MissingParameter {
        query: &'static str,
        name: &'static str,
    },

    /// Configuration file could not be used
    #[error("Configuration error in {path}: {message}")]
    Config { path: String, message: String },

    /// TOML parse error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DbError {
    /// Create an invalid target error.
    pub fn invalid_target(target: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidTarget {
            target: target.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}
