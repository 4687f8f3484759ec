//! Flightdeck Database Layer
//!
//! SQLite-based data access for the flight-records report viewer.
//!
//! # Architecture
//!
//! - **One pool for the process** - opened at startup, closed on exit
//! - **Four fixed reports** - parameterized queries joining `flights` to
//!   `airlines`, never built by string concatenation
//! - **Fail-open facade** - the `FlightsDb` report methods convert any
//!   query failure into an empty result plus a logged diagnostic, matching
//!   what an interactive shell expects; the functions in [`queries::reports`]
//!   propagate errors for callers that need to tell the cases apart
//!
//! # Usage
//!
//! ```rust,ignore
//! use flightdeck_db::FlightsDb;
//!
//! let db = FlightsDb::open("data/flights.sqlite3").await?;
//! let rows = db.get_flight_by_id("1").await;
//! ```

pub mod connection;
pub mod error;
pub mod models;
pub mod queries;

pub use connection::{DbStats, FlightsDb};
pub use error::{DbError, DbResult};
pub use models::FlightRecord;
pub use queries::reports::MIN_DELAY_MINUTES;
