//! Terminal rendering for menus and report rows.
//!
//! The renderers build plain strings so they can be unit tested; only the
//! menu header carries color.

use flightdeck_db::FlightRecord;
use owo_colors::OwoColorize;

const SEPARATOR_WIDTH: usize = 40;

/// The fixed five-option menu.
pub fn menu() -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Menu:".bold().bright_cyan()));
    out.push_str("1. Show flight by ID\n");
    out.push_str("2. Show flights by date\n");
    out.push_str("3. Delayed flights by airline\n");
    out.push_str("4. Delayed flights by origin airport\n");
    out.push_str("5. Exit");
    out
}

/// Render a report result.
///
/// One separator line before each row, one `name: value` line per field in
/// the record's display order, and a single trailing separator after the
/// last row. An empty result renders the no-results message instead.
pub fn render_rows(rows: &[FlightRecord]) -> String {
    if rows.is_empty() {
        return "No results found.\n".to_string();
    }

    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut out = String::new();
    for row in rows {
        out.push_str(&separator);
        out.push('\n');
        for (name, value) in row.fields() {
            out.push_str(&format!("{}: {}\n", name, value));
        }
    }
    out.push_str(&separator);
    out.push('\n');
    out
}
