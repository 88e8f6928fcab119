//! Integration tests for the four flight lookups against a seeded file.

mod common;

use common::{fixture, ids};
use flight_db::{FlightData, FlightQuery, QueryParams, Value};
use pretty_assertions::assert_eq;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

#[tokio::test]
async fn lookup_by_id_returns_single_record() {
    let fx = fixture().await;

    let records = fx.data.get_flight_by_id(1).await;
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.get("FLIGHT_ID"), Some(&Value::Integer(1)));
    assert_eq!(record.get("id"), Some(&Value::Integer(1)));
    assert_eq!(record.get("airline"), Some(&Value::Text("AA".into())));
    assert_eq!(record.get("DELAY"), Some(&Value::Integer(0)));
    assert!(!record.is_delayed());
}

#[tokio::test]
async fn lookup_by_id_matches_input_for_every_flight() {
    let fx = fixture().await;

    for id in 1..=9 {
        let records = fx.data.get_flight_by_id(id).await;
        assert_eq!(ids(&records), vec![id], "flight {id}");
    }
}

#[tokio::test]
async fn lookup_by_unknown_id_is_empty() {
    let fx = fixture().await;
    assert!(fx.data.get_flight_by_id(42).await.is_empty());
    assert!(fx.data.get_flight_by_id(-1).await.is_empty());
}

#[tokio::test]
async fn record_columns_follow_projection() {
    let fx = fixture().await;
    let record = fx.data.get_flight_by_id(4).await.remove(0);

    // flights.* first; the airline name reuses the foreign key's slot.
    assert_eq!(
        record.columns().collect::<Vec<_>>(),
        vec![
            "id",
            "year",
            "month",
            "day",
            "airline",
            "flight_number",
            "origin_airport",
            "destination_airport",
            "departure_delay",
            "arrival_delay",
            "FLIGHT_ID",
            "DELAY",
        ]
    );
    assert_eq!(record.airline(), Some("Delta Air Lines Inc."));
}

#[tokio::test]
async fn lookup_by_date_matches_all_three_fields() {
    let fx = fixture().await;

    let records = fx.data.get_flights_by_date(1, 1, 2015).await;
    assert_eq!(ids(&records), vec![1, 2, 3]);
    for record in &records {
        assert_eq!(record.get("day"), Some(&Value::Integer(1)));
        assert_eq!(record.get("month"), Some(&Value::Integer(1)));
        assert_eq!(record.get("year"), Some(&Value::Integer(2015)));
    }

    assert_eq!(ids(&fx.data.get_flights_by_date(2, 1, 2015).await), vec![4, 5, 6]);
    assert_eq!(ids(&fx.data.get_flights_by_date(1, 1, 2014).await), vec![9]);
    assert!(fx.data.get_flights_by_date(31, 12, 2015).await.is_empty());
}

#[tokio::test]
async fn delayed_by_airport_excludes_empty_null_and_non_positive() {
    let fx = fixture().await;

    let records = fx.data.get_delayed_flights_by_airport("JFK").await;
    // 6 has an empty-string delay and 7 a NULL one.
    assert_eq!(ids(&records), vec![4, 5]);
    assert!(records.iter().all(|r| r.is_delayed()));

    assert!(fx.data.get_delayed_flights_by_airport("ANC").await.is_empty());
    assert_eq!(ids(&fx.data.get_delayed_flights_by_airport("LAX").await), vec![8]);
}

#[tokio::test]
async fn delayed_by_airport_is_case_insensitive() {
    let fx = fixture().await;

    let upper = fx.data.get_delayed_flights_by_airport("JFK").await;
    let lower = fx.data.get_delayed_flights_by_airport("jfk").await;
    let mixed = fx.data.get_delayed_flights_by_airport("jFk").await;
    assert_eq!(ids(&upper), ids(&lower));
    assert_eq!(ids(&upper), ids(&mixed));
}

#[tokio::test]
async fn delayed_by_airline_filters_on_delay() {
    let fx = fixture().await;

    let united = fx.data.get_delayed_flights_by_airline("United Air Lines Inc.").await;
    assert_eq!(ids(&united), vec![3, 5, 8]);
    assert!(united.iter().all(|r| r.is_delayed()));

    let delta = fx.data.get_delayed_flights_by_airline("delta air lines inc.").await;
    assert_eq!(ids(&delta), vec![4, 9]);

    // Flight 1 is the only AA flight and left on time.
    assert!(fx.data.get_delayed_flights_by_airline("AA").await.is_empty());
    assert!(fx.data.get_delayed_flights_by_airline("aa").await.is_empty());
}

#[tokio::test]
async fn dropped_table_yields_empty_results() {
    let fx = fixture().await;
    assert!(!fx.data.get_flight_by_id(1).await.is_empty());

    let writer = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(SqliteConnectOptions::new().filename(&fx.path))
        .await
        .unwrap();
    sqlx::query("DROP TABLE flights").execute(&writer).await.unwrap();
    writer.close().await;

    assert!(fx.data.get_flight_by_id(1).await.is_empty());
    assert!(fx.data.get_delayed_flights_by_airport("JFK").await.is_empty());

    let err = fx
        .data
        .try_execute(FlightQuery::ById, &QueryParams::new().with("id", 1))
        .await;
    assert!(err.is_err());
}

#[tokio::test]
async fn closed_repository_yields_empty_results() {
    let fx = fixture().await;
    fx.data.close().await;
    fx.data.close().await;

    assert!(fx.data.get_flight_by_id(1).await.is_empty());
    assert!(fx.data.get_flights_by_date(1, 1, 2015).await.is_empty());
    assert!(fx.data.get_delayed_flights_by_airport("JFK").await.is_empty());
    assert!(fx.data.get_delayed_flights_by_airline("AA").await.is_empty());
}

#[tokio::test]
async fn separate_repositories_share_nothing() {
    let fx = fixture().await;
    let other = FlightData::connect(&fx.url).await.unwrap();

    other.close().await;
    assert_eq!(fx.data.get_flight_by_id(2).await.len(), 1);
}

#[tokio::test]
async fn records_serialize_as_json_objects() {
    let fx = fixture().await;
    let records = fx.data.get_flight_by_id(6).await;

    let json = serde_json::to_value(&records).unwrap();
    assert_eq!(json[0]["FLIGHT_ID"], serde_json::json!(6));
    assert_eq!(json[0]["DELAY"], serde_json::json!(""));
    assert_eq!(json[0]["arrival_delay"], serde_json::Value::Null);
    assert_eq!(json[0]["airline"], serde_json::json!("Delta Air Lines Inc."));
}
