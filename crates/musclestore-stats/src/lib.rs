//! Statistics over a user's workout history.
//!
//! Every function here is pure: the caller supplies the already-parsed events
//! and, where the result depends on the current date, the reference day.

mod average;
mod streak;
mod summary;

pub use average::{compute_monthly_average, compute_weekly_average};
pub use streak::compute_streak;
pub use summary::WorkoutStats;

use chrono::{Datelike, Months, NaiveDate};

/// First day of the month containing `day`.
pub(crate) fn month_start(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

/// Number of days in the month containing `day`.
pub(crate) fn month_length(day: NaiveDate) -> u32 {
    let start = month_start(day);
    match start.checked_add_months(Months::new(1)) {
        Some(next) => (next - start).num_days() as u32,
        // Only reachable in December of chrono's last representable year.
        None => 31,
    }
}
