use chrono::{Days, NaiveDate};
use musclestore_notation::{WorkoutEvent, WorkoutNotation};

pub mod proptest;

/// Small helpers for building fixtures in tests.
///
/// Keeping these in a microcrate avoids copy-paste across stats/calendar/CLI tests.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid fixture date {year}-{month}-{day}"))
}

/// A notation logged at 07:30 on the given day, in the canonical wire format.
pub fn notation_on(year: i32, month: u32, day: u32) -> WorkoutNotation {
    notation_at(year, month, day, 7, 30)
}

pub fn notation_at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> WorkoutNotation {
    let at = date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_else(|| panic!("invalid fixture time {hour}:{minute}"));
    WorkoutNotation::at(at)
}

/// One event at midnight per date.
pub fn events_on(dates: &[NaiveDate]) -> Vec<WorkoutEvent> {
    dates.iter().copied().map(WorkoutEvent::on).collect()
}

/// `count` consecutive days starting at `start`.
pub fn consecutive_days(start: NaiveDate, count: u64) -> Vec<NaiveDate> {
    (0..count)
        .map(|i| start + Days::new(i))
        .collect()
}

/// Serialize notations the way the backend returns them.
pub fn notations_json(notations: &[WorkoutNotation]) -> String {
    serde_json::to_string_pretty(notations).expect("notations serialize")
}
