//! Database query functions.
//!
//! Organized by domain:
//! - `reports`: the four parameterized flight reports

pub mod reports;

pub use reports::*;
