use chrono::{Days, NaiveDate};
use musclestore_notation::{WorkoutEvent, WorkoutNotation};
use proptest::prelude::*;

// ============================================================================
// Base Strategies
// ============================================================================

/// Dates from 2020-01-01 through roughly 2030-12-31.
pub fn strategy_naive_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..4018).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2020, 1, 1)
            .expect("epoch date")
            .checked_add_days(Days::new(offset))
            .expect("date in range")
    })
}

/// `(year, month)` pairs with a 1-based month, including leap and century years.
pub fn strategy_year_month() -> impl Strategy<Value = (i32, u32)> {
    (1600i32..2500, 1u32..=12)
}

// ============================================================================
// Notation Strategies
// ============================================================================

/// A workout event anywhere within a day.
pub fn strategy_workout_event() -> impl Strategy<Value = WorkoutEvent> {
    (strategy_naive_date(), 0u32..86_400, 0u32..1_000_000).prop_map(|(date, secs, micros)| {
        let time = chrono::NaiveTime::from_num_seconds_from_midnight_opt(secs, micros * 1_000)
            .expect("time in range");
        WorkoutEvent::new(date.and_time(time))
    })
}

/// Workout histories of up to `max` events, unsorted and possibly repeating days.
pub fn strategy_event_vec(max: usize) -> impl Strategy<Value = Vec<WorkoutEvent>> {
    prop::collection::vec(strategy_workout_event(), 0..=max)
}

/// Canonical wire-format timestamp text.
pub fn strategy_timestamp_text() -> impl Strategy<Value = String> {
    strategy_workout_event().prop_map(|e| WorkoutNotation::from(e).timestamp)
}

/// Notations that are valid about three times out of four.
pub fn strategy_notation() -> impl Strategy<Value = WorkoutNotation> {
    prop_oneof![
        3 => strategy_timestamp_text().prop_map(WorkoutNotation::new),
        1 => "[a-zA-Z0-9 :.-]{0,30}".prop_map(WorkoutNotation::new),
    ]
}

pub fn strategy_notation_vec(max: usize) -> impl Strategy<Value = Vec<WorkoutNotation>> {
    prop::collection::vec(strategy_notation(), 0..=max)
}
