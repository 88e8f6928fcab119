//! Flight Database Layer
//!
//! Read-only SQLite access to a dataset of flights and the airlines that
//! operate them.
//!
//! # Architecture
//!
//! - **Query catalog** - four fixed, parameterized templates
//! - **Records** - each row comes back as an ordered column-to-value map
//! - **Fail-soft lookups** - query errors are logged and read as "no rows"
//!
//! # Usage
//!
//! ```rust,ignore
//! use flight_db::FlightData;
//!
//! let data = FlightData::connect("sqlite://data/flights.sqlite3").await?;
//! let delayed = data.get_delayed_flights_by_airport("JFK").await;
//! data.close().await;
//! ```

pub mod config;
pub mod connection;
pub mod error;
pub mod models;
pub mod queries;
pub mod repository;
mod test_helpers;

pub use config::{DEFAULT_DATABASE_URL, DbConfig, FlightsConfig, load_config};
pub use connection::FlightDb;
pub use error::{DbError, DbResult};
pub use models::{Param, QueryParams, Record, Value};
pub use queries::{FlightQuery, QueryTemplate};
pub use repository::FlightData;
