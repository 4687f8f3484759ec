//! Database models.
//!
//! These structs map directly to query projections via sqlx.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of a flight report.
///
/// All four reports share the same projection: the `flights` columns plus
/// the owning airline's display name resolved through an inner join, so a
/// flight whose airline code has no `airlines` row never appears.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Flight identifier (primary key of `flights`)
    pub id: i64,

    /// Scheduled date, stored as separate integer components
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub day_of_week: Option<i64>,

    /// Airline code (foreign key into `airlines`)
    pub airline_code: String,

    /// Resolved airline display name from the `airlines` table
    pub airline: String,

    pub flight_number: Option<String>,
    pub tail_number: Option<String>,

    /// Origin airport code (e.g. "JFK")
    pub origin_airport: String,
    pub destination_airport: String,

    pub scheduled_departure: Option<String>,
    pub departure_time: Option<String>,

    /// Minutes behind schedule at departure; negative means early,
    /// NULL means the flight never departed or the value wasn't recorded.
    pub departure_delay: Option<i64>,
}

impl FlightRecord {
    /// Field names and rendered values, in display order.
    ///
    /// The shell prints one `name: value` line per entry; keeping the order
    /// here means every report renders rows the same way.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.to_string()),
            ("year", self.year.to_string()),
            ("month", self.month.to_string()),
            ("day", self.day.to_string()),
            ("day_of_week", render_opt_i64(self.day_of_week)),
            ("airline_code", self.airline_code.clone()),
            ("airline", self.airline.clone()),
            ("flight_number", render_opt(&self.flight_number)),
            ("tail_number", render_opt(&self.tail_number)),
            ("origin_airport", self.origin_airport.clone()),
            ("destination_airport", self.destination_airport.clone()),
            ("scheduled_departure", render_opt(&self.scheduled_departure)),
            ("departure_time", render_opt(&self.departure_time)),
            ("departure_delay", render_opt_i64(self.departure_delay)),
        ]
    }
}

fn render_opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn render_opt_i64(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FlightRecord {
        FlightRecord {
            id: 1,
            year: 2015,
            month: 1,
            day: 1,
            day_of_week: Some(4),
            airline_code: "AA".to_string(),
            airline: "American Airlines".to_string(),
            flight_number: Some("98".to_string()),
            tail_number: None,
            origin_airport: "JFK".to_string(),
            destination_airport: "LAX".to_string(),
            scheduled_departure: Some("0900".to_string()),
            departure_time: Some("0925".to_string()),
            departure_delay: Some(25),
        }
    }

    #[test]
    fn fields_are_ordered_and_complete() {
        let fields = sample().fields();
        let names: Vec<&str> = fields.iter().map(|(n, _)| *n).collect();
        assert_eq!(names.first(), Some(&"id"));
        assert_eq!(names.last(), Some(&"departure_delay"));
        assert_eq!(fields.len(), 14);
    }

    #[test]
    fn missing_values_render_empty() {
        let fields = sample().fields();
        let tail = fields.iter().find(|(n, _)| *n == "tail_number").unwrap();
        assert_eq!(tail.1, "");
    }
}
