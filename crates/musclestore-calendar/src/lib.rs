//! Workout calendar month grids.
//!
//! A month is shown as its days in order, laid out in a fixed number of
//! columns with no weekday alignment. Days with a recorded workout are
//! flagged so the view can highlight them.

mod grid;
mod month;

pub use grid::{CalendarCell, CalendarMonth, DEFAULT_COLUMNS, build_month};
pub use month::{
    Direction, YearMonth, advance_month, days_in_month, is_leap_year, supported_years,
};
