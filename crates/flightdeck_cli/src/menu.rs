//! The interactive menu loop.

use dialoguer::Input;
use flightdeck_db::FlightsDb;
use miette::{IntoDiagnostic, Result};
use tracing::debug;

use crate::display;

/// One iteration's worth of user intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    FlightById,
    FlightsByDate,
    DelayedByAirline,
    DelayedByOrigin,
    Exit,
}

impl MenuChoice {
    /// Parse a raw selector line. Anything but "1".."5" is unrecognized.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::FlightById),
            "2" => Some(Self::FlightsByDate),
            "3" => Some(Self::DelayedByAirline),
            "4" => Some(Self::DelayedByOrigin),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Run the read-print loop until the user picks Exit.
///
/// Each pass prints the menu, reads one selector line, prompts for the one
/// parameter the chosen report needs, and renders whatever the data layer
/// returns. Unrecognized selectors are reported and the loop continues.
pub async fn run(db: &FlightsDb) -> Result<()> {
    loop {
        println!("{}", display::menu());
        let selector = prompt("Select an option (1-5)")?;

        let choice = match MenuChoice::parse(&selector) {
            Some(choice) => choice,
            None => {
                println!("Invalid option. Please choose between 1 and 5.\n");
                continue;
            }
        };
        debug!("Menu selection: {:?}", choice);

        let rows = match choice {
            MenuChoice::FlightById => {
                let flight_id = prompt("Enter Flight ID")?;
                db.get_flight_by_id(&flight_id).await
            }
            MenuChoice::FlightsByDate => {
                let date = prompt("Enter date (YYYY-MM-DD)")?;
                db.get_flights_by_date(&date).await
            }
            MenuChoice::DelayedByAirline => {
                let airline = prompt("Enter airline name")?;
                db.get_delayed_flights_by_airline(&airline).await
            }
            MenuChoice::DelayedByOrigin => {
                let origin = prompt("Enter origin airport code (e.g. JFK)")?;
                db.get_delayed_flights_by_origin(&origin).await
            }
            MenuChoice::Exit => {
                println!("Goodbye!");
                return Ok(());
            }
        };

        println!("{}", display::render_rows(&rows));
    }
}

/// Read one free-form line. Empty input is allowed; the reports treat it
/// like any other non-matching value.
fn prompt(label: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .into_diagnostic()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_the_five_options() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::FlightById));
        assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::FlightsByDate));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::DelayedByAirline));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::DelayedByOrigin));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(MenuChoice::parse(" 3 "), Some(MenuChoice::DelayedByAirline));
        assert_eq!(MenuChoice::parse("5\n"), Some(MenuChoice::Exit));
    }

    #[test]
    fn rejects_out_of_range_and_junk_input() {
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("exit"), None);
        assert_eq!(MenuChoice::parse("1 2"), None);
    }
}
