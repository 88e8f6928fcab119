//! Flight lookups over a connected database.

use tracing::error;

use crate::config::DbConfig;
use crate::connection::FlightDb;
use crate::error::DbResult;
use crate::models::{QueryParams, Record};
use crate::queries::{self, FlightQuery};

/// Data access object for the flights dataset.
///
/// Construction connects eagerly and fails loudly. Lookups never fail: any
/// error raised while running a query is logged and reported as an empty
/// result, so "no matches" and "query failed" look the same to callers.
/// Use [`FlightData::try_execute`] where the difference matters.
///
/// The pool is released when the value is dropped; [`FlightData::close`]
/// releases it deterministically.
#[derive(Debug, Clone)]
pub struct FlightData {
    db: FlightDb,
}

impl FlightData {
    /// Connect to `target` with default options.
    pub async fn connect(target: &str) -> DbResult<Self> {
        Ok(Self::from_db(FlightDb::connect(target).await?))
    }

    pub async fn open(config: &DbConfig) -> DbResult<Self> {
        Ok(Self::from_db(FlightDb::open(config).await?))
    }

    pub fn from_db(db: FlightDb) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &FlightDb {
        &self.db
    }

    /// Run a catalog query, returning any failure to the caller.
    pub async fn try_execute(
        &self,
        query: FlightQuery,
        params: &QueryParams,
    ) -> DbResult<Vec<Record>> {
        queries::fetch_records(self.db.pool(), query.template(), params).await
    }

    /// Run a catalog query. Failures are logged and yield no records.
    pub async fn execute(&self, query: FlightQuery, params: &QueryParams) -> Vec<Record> {
        match self.try_execute(query, params).await {
            Ok(records) => records,
            Err(e) => {
                error!(query = %query, "Query failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Details of one flight. More than one record means the dataset has
    /// duplicate identifiers.
    pub async fn get_flight_by_id(&self, flight_id: i64) -> Vec<Record> {
        let params = QueryParams::new().with("id", flight_id);
        self.execute(FlightQuery::ById, &params).await
    }

    /// Flights scheduled on a calendar date.
    pub async fn get_flights_by_date(&self, day: u32, month: u32, year: i32) -> Vec<Record> {
        let params = QueryParams::new()
            .with("day", day)
            .with("month", month)
            .with("year", year);
        self.execute(FlightQuery::ByDate, &params).await
    }

    /// Delayed departures from an airport, matched case-insensitively.
    pub async fn get_delayed_flights_by_airport(&self, airport_code: &str) -> Vec<Record> {
        let params = QueryParams::new().with("airport", airport_code);
        self.execute(FlightQuery::DelayedByAirport, &params).await
    }

    /// Delayed flights of an airline, matched case-insensitively on its name.
    pub async fn get_delayed_flights_by_airline(&self, airline: &str) -> Vec<Record> {
        let params = QueryParams::new().with("airline", airline);
        self.execute(FlightQuery::DelayedByAirline, &params).await
    }

    /// Release the connection pool. Later lookups return no records.
    pub async fn close(&self) {
        self.db.close().await;
    }

    pub fn is_closed(&self) -> bool {
        self.db.is_closed()
    }
}
