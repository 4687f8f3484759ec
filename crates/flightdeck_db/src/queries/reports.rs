//! Flight report queries.
//!
//! Each report is one fixed parameterized query joining `flights` to
//! `airlines`. Parameters are always bound through placeholders, never
//! spliced into the SQL. These functions propagate errors; the fail-open
//! behavior the interactive shell relies on lives in the `FlightsDb`
//! report methods.

use chrono::{Datelike, NaiveDate};
use sqlx::SqlitePool;

use crate::error::{DbError, DbResult};
use crate::models::FlightRecord;

/// Departure delay, in minutes, at which a flight counts as delayed.
pub const MIN_DELAY_MINUTES: i64 = 20;

/// Parse a report date in `YYYY-MM-DD` form.
///
/// Rejecting the input here keeps malformed dates from ever reaching the
/// database.
pub fn parse_report_date(input: &str) -> DbResult<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| DbError::invalid_date(input))
}

/// Look up a single flight by exact identifier match.
///
/// The id is bound as text and compared through the column's INTEGER
/// affinity, so a non-numeric input simply matches nothing.
pub async fn flight_by_id(pool: &SqlitePool, flight_id: &str) -> DbResult<Vec<FlightRecord>> {
    let flights = sqlx::query_as::<_, FlightRecord>(
        r#"
        SELECT
            flights.id, flights.year, flights.month, flights.day,
            flights.day_of_week, flights.airline AS airline_code,
            airlines.airline AS airline,
            flights.flight_number, flights.tail_number,
            flights.origin_airport, flights.destination_airport,
            flights.scheduled_departure, flights.departure_time,
            flights.departure_delay
        FROM flights
        JOIN airlines ON flights.airline = airlines.id
        WHERE flights.id = ?
        ORDER BY flights.id
        "#,
    )
    .bind(flight_id)
    .fetch_all(pool)
    .await?;
    Ok(flights)
}

/// All flights whose stored year/month/day equal the given date's components.
pub async fn flights_by_date(pool: &SqlitePool, date: NaiveDate) -> DbResult<Vec<FlightRecord>> {
    let flights = sqlx::query_as::<_, FlightRecord>(
        r#"
        SELECT
            flights.id, flights.year, flights.month, flights.day,
            flights.day_of_week, flights.airline AS airline_code,
            airlines.airline AS airline,
            flights.flight_number, flights.tail_number,
            flights.origin_airport, flights.destination_airport,
            flights.scheduled_departure, flights.departure_time,
            flights.departure_delay
        FROM flights
        JOIN airlines ON flights.airline = airlines.id
        WHERE flights.year = ? AND flights.month = ? AND flights.day = ?
        ORDER BY flights.id
        "#,
    )
    .bind(date.year() as i64)
    .bind(date.month() as i64)
    .bind(date.day() as i64)
    .fetch_all(pool)
    .await?;
    Ok(flights)
}

/// Delayed flights for an airline, matched exactly on its display name.
pub async fn delayed_flights_by_airline(
    pool: &SqlitePool,
    airline_name: &str,
) -> DbResult<Vec<FlightRecord>> {
    let flights = sqlx::query_as::<_, FlightRecord>(
        r#"
        SELECT
            flights.id, flights.year, flights.month, flights.day,
            flights.day_of_week, flights.airline AS airline_code,
            airlines.airline AS airline,
            flights.flight_number, flights.tail_number,
            flights.origin_airport, flights.destination_airport,
            flights.scheduled_departure, flights.departure_time,
            flights.departure_delay
        FROM flights
        JOIN airlines ON flights.airline = airlines.id
        WHERE airlines.airline = ? AND flights.departure_delay >= ?
        ORDER BY flights.id
        "#,
    )
    .bind(airline_name)
    .bind(MIN_DELAY_MINUTES)
    .fetch_all(pool)
    .await?;
    Ok(flights)
}

/// Delayed flights departing from an origin airport code.
pub async fn delayed_flights_by_origin(
    pool: &SqlitePool,
    origin_code: &str,
) -> DbResult<Vec<FlightRecord>> {
    let flights = sqlx::query_as::<_, FlightRecord>(
        r#"
        SELECT
            flights.id, flights.year, flights.month, flights.day,
            flights.day_of_week, flights.airline AS airline_code,
            airlines.airline AS airline,
            flights.flight_number, flights.tail_number,
            flights.origin_airport, flights.destination_airport,
            flights.scheduled_departure, flights.departure_time,
            flights.departure_delay
        FROM flights
        JOIN airlines ON flights.airline = airlines.id
        WHERE flights.origin_airport = ? AND flights.departure_delay >= ?
        ORDER BY flights.id
        "#,
    )
    .bind(origin_code)
    .bind(MIN_DELAY_MINUTES)
    .fetch_all(pool)
    .await?;
    Ok(flights)
}
