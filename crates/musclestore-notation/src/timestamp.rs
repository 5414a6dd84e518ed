//! Timestamp parsing and formatting for notations.

use chrono::{DateTime, NaiveDateTime};
use musclestore_error::{Result, parse_error};

/// Canonical wire format: ISO-8601 local date-time with microseconds.
pub const NOTATION_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Day-first format shown next to recorded workouts.
pub const DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// Placeholder rendered for a timestamp that cannot be read.
pub const INVALID_DATE: &str = "Invalid Date";

/// Parse a notation timestamp.
///
/// Accepts the canonical microsecond form, any other fractional precision
/// (including none), minute precision, and RFC 3339 strings with an offset.
/// For offset strings the wall-clock reading is kept and the offset dropped,
/// so `2024-03-01T23:30:00+05:00` lands on March 1st.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime> {
    let s = input.trim();

    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
        return Ok(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }

    Err(parse_error("unrecognized notation timestamp").with_context("input", input))
}

/// Format a date-time in the canonical wire format.
pub fn format_timestamp(dt: NaiveDateTime) -> String {
    dt.format(NOTATION_FORMAT).to_string()
}

/// Render a raw timestamp as `dd.MM.yyyy`, or [`INVALID_DATE`].
pub fn display_date(input: &str) -> String {
    match parse_timestamp(input) {
        Ok(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        Err(_) => INVALID_DATE.to_string(),
    }
}
