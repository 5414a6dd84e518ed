use chrono::{Datelike, Days, Months, NaiveDate};
use musclestore_notation::WorkoutEvent;
use std::collections::BTreeSet;

/// Share of the current month's week buckets that contain a workout, rounded up.
///
/// Only events in `today`'s month and year count. A day falls into bucket
/// `day_of_month / 7`; the month has `ceil(days_in_month / 7)` buckets. The
/// ratio is rounded up, so the result is always a whole number.
pub fn compute_weekly_average(events: &[WorkoutEvent], today: NaiveDate) -> f64 {
    if events.is_empty() {
        return 0.0;
    }

    let weeks_in_month = crate::month_length(today).div_ceil(7);

    let active_weeks: BTreeSet<u32> = events
        .iter()
        .map(WorkoutEvent::date)
        .filter(|d| d.year() == today.year() && d.month() == today.month())
        .map(|d| d.day() / 7)
        .collect();

    (active_weeks.len() as f64 / f64::from(weeks_in_month)).ceil()
}

/// Workouts in the current Monday-to-Sunday week divided by the number of
/// active months among the twelve starting at `today`'s month.
///
/// Every event in the week counts, including several on one day. Returns 0.0
/// when none of the twelve months has a workout.
pub fn compute_monthly_average(events: &[WorkoutEvent], today: NaiveDate) -> f64 {
    if events.is_empty() {
        return 0.0;
    }

    let week_start = today - Days::new(u64::from(today.weekday().num_days_from_monday()));
    let week_end = week_start + Days::new(6);

    let this_week = events
        .iter()
        .map(WorkoutEvent::date)
        .filter(|d| *d >= week_start && *d <= week_end)
        .count();

    let active: BTreeSet<(i32, u32)> = events
        .iter()
        .map(|e| (e.date().year(), e.date().month()))
        .collect();

    let first = crate::month_start(today);
    let active_months = (0..12)
        .filter_map(|i| first.checked_add_months(Months::new(i)))
        .filter(|m| active.contains(&(m.year(), m.month())))
        .count();

    if active_months > 0 {
        this_week as f64 / active_months as f64
    } else {
        0.0
    }
}
