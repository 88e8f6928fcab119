//! Query catalog: the fixed set of flight lookups.
//!
//! Every template joins a flight to its airline and projects all flight
//! columns, the airline display name, and two aliases: `FLIGHT_ID` and
//! `DELAY`. Placeholders are positional; `params` names them in order.
//! No template orders its rows.

use std::fmt;

/// A parameterized SQL statement with named placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTemplate {
    /// Stable name used in logs.
    pub name: &'static str,
    pub sql: &'static str,
    /// Parameter names, one per `?` placeholder, in placeholder order.
    pub params: &'static [&'static str],
}

/// Look up a single flight by its identifier.
pub const FLIGHT_BY_ID: QueryTemplate = QueryTemplate {
    name: "flight_by_id",
    sql: r#"
        SELECT
            flights.*,
            airlines.airline,
            flights.id AS FLIGHT_ID,
            flights.departure_delay AS DELAY
        FROM flights JOIN airlines ON flights.airline = airlines.id
        WHERE flights.id = ?
    "#,
    params: &["id"],
};

/// All flights on a calendar date.
pub const FLIGHTS_BY_DATE: QueryTemplate = QueryTemplate {
    name: "flights_by_date",
    sql: r#"
        SELECT
            flights.*,
            airlines.airline,
            flights.id AS FLIGHT_ID,
            flights.departure_delay AS DELAY
        FROM flights JOIN airlines ON flights.airline = airlines.id
        WHERE flights.day = ? AND flights.month = ? AND flights.year = ?
    "#,
    params: &["day", "month", "year"],
};

/// Delayed flights operated by an airline, matched on display name.
///
/// The delay column holds numbers, NULLs and empty strings; the `<> ''`
/// guard drops the empty strings, which SQLite orders above any number.
pub const DELAYED_FLIGHTS_BY_AIRLINE: QueryTemplate = QueryTemplate {
    name: "delayed_flights_by_airline",
    sql: r#"
        SELECT
            flights.*,
            airlines.airline,
            flights.id AS FLIGHT_ID,
            flights.departure_delay AS DELAY
        FROM flights JOIN airlines ON flights.airline = airlines.id
        WHERE LOWER(airlines.airline) = LOWER(?)
            AND DELAY > 0 AND DELAY <> ''
    "#,
    params: &["airline"],
};

/// Delayed departures from an origin airport.
pub const DELAYED_FLIGHTS_BY_AIRPORT: QueryTemplate = QueryTemplate {
    name: "delayed_flights_by_airport",
    sql: r#"
        SELECT
            flights.*,
            airlines.airline,
            flights.id AS FLIGHT_ID,
            flights.departure_delay AS DELAY
        FROM flights JOIN airlines ON flights.airline = airlines.id
        WHERE LOWER(flights.origin_airport) = LOWER(?)
            AND DELAY > 0 AND DELAY <> ''
    "#,
    params: &["airport"],
};

/// Logical name of a catalog query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlightQuery {
    ById,
    ByDate,
    DelayedByAirline,
    DelayedByAirport,
}

impl FlightQuery {
    pub const ALL: [FlightQuery; 4] = [
        FlightQuery::ById,
        FlightQuery::ByDate,
        FlightQuery::DelayedByAirline,
        FlightQuery::DelayedByAirport,
    ];

    /// The template backing this query.
    pub fn template(self) -> &'static QueryTemplate {
        match self {
            Self::ById => &FLIGHT_BY_ID,
            Self::ByDate => &FLIGHTS_BY_DATE,
            Self::DelayedByAirline => &DELAYED_FLIGHTS_BY_AIRLINE,
            Self::DelayedByAirport => &DELAYED_FLIGHTS_BY_AIRPORT,
        }
    }
}

impl fmt::Display for FlightQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template().name)
    }
}
