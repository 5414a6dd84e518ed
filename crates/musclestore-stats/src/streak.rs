use chrono::{Days, NaiveDate};
use itertools::Itertools;
use musclestore_notation::WorkoutEvent;

/// Length of the unbroken run of workout days starting at the earliest day.
///
/// Days are deduplicated and sorted, then walked forward from the first one;
/// the walk stops at the first gap. This counts the run at the *start* of the
/// history, not a run ending today. Empty input gives 0.
pub fn compute_streak(events: &[WorkoutEvent]) -> u32 {
    let days: Vec<NaiveDate> = events.iter().map(WorkoutEvent::date).sorted().dedup().collect();

    let Some(first) = days.first() else {
        return 0;
    };

    let mut streak = 1;
    let mut previous = *first;
    for &day in &days[1..] {
        if previous.checked_add_days(Days::new(1)) == Some(day) {
            streak += 1;
        } else if day != previous {
            break;
        }
        previous = day;
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn at(s: &str) -> WorkoutEvent {
        WorkoutEvent::new(NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap())
    }

    #[test]
    fn empty_history_has_no_streak() {
        assert_eq!(compute_streak(&[]), 0);
    }

    #[test]
    fn single_day_is_one() {
        assert_eq!(compute_streak(&[at("2024-03-01 07:00")]), 1);
    }

    #[test]
    fn same_day_workouts_collapse() {
        let events = [
            at("2024-03-01 07:00"),
            at("2024-03-01 18:00"),
            at("2024-03-02 07:00"),
        ];
        assert_eq!(compute_streak(&events), 2);
    }

    #[test]
    fn gap_ends_the_walk() {
        let events = [at("2024-03-01 07:00"), at("2024-03-03 07:00")];
        assert_eq!(compute_streak(&events), 1);
    }

    #[test]
    fn later_longer_run_is_not_counted() {
        let events = [
            at("2024-03-01 07:00"),
            at("2024-03-02 07:00"),
            at("2024-03-10 07:00"),
            at("2024-03-11 07:00"),
            at("2024-03-12 07:00"),
            at("2024-03-13 07:00"),
        ];
        assert_eq!(compute_streak(&events), 2);
    }

    #[test]
    fn order_of_input_does_not_matter() {
        let events = [
            at("2024-01-02 07:00"),
            at("2023-12-31 22:00"),
            at("2024-01-01 00:30"),
            at("2023-12-31 06:00"),
        ];
        assert_eq!(compute_streak(&events), 3);
    }

    #[test]
    fn run_crosses_leap_day() {
        let events = [
            at("2024-02-28 07:00"),
            at("2024-02-29 07:00"),
            at("2024-03-01 07:00"),
        ];
        assert_eq!(compute_streak(&events), 3);
    }
}
