use chrono::NaiveDate;
use musclestore_notation::{WorkoutEvent, WorkoutNotation, events_from_notations, recorded_on};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::{compute_monthly_average, compute_streak, compute_weekly_average};

/// Everything the profile and home screens show about a workout history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutStats {
    /// Day the time-relative figures were computed for.
    pub reference_date: NaiveDate,
    pub streak: u32,
    pub weekly_average: f64,
    pub monthly_average: f64,
    /// A workout is already logged on `reference_date`.
    pub recorded_today: bool,
}

impl WorkoutStats {
    pub fn compute(events: &[WorkoutEvent], today: NaiveDate) -> Self {
        let stats = Self {
            reference_date: today,
            streak: compute_streak(events),
            weekly_average: compute_weekly_average(events, today),
            monthly_average: compute_monthly_average(events, today),
            recorded_today: recorded_on(events, today),
        };
        debug!(
            events = events.len(),
            streak = stats.streak,
            weekly_average = stats.weekly_average,
            monthly_average = stats.monthly_average,
            "computed workout stats"
        );
        stats
    }

    /// Parse raw notations (discarding unreadable ones) and compute.
    pub fn from_notations(notations: &[WorkoutNotation], today: NaiveDate) -> Self {
        Self::compute(&events_from_notations(notations), today)
    }

    /// Weekly average as shown on screen: truncated to a whole number.
    pub fn weekly_display(&self) -> i64 {
        self.weekly_average.trunc() as i64
    }

    /// Monthly average as shown on screen: truncated to a whole number.
    pub fn monthly_display(&self) -> i64 {
        self.monthly_average.trunc() as i64
    }
}

impl fmt::Display for WorkoutStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Streak: {} days", self.streak)?;
        writeln!(f, "Median per week: {} days", self.weekly_display())?;
        writeln!(f, "Monthly average: {} workouts", self.monthly_display())?;
        write!(
            f,
            "Recorded today: {}",
            if self.recorded_today { "yes" } else { "no" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_history_is_all_zero() {
        let stats = WorkoutStats::compute(&[], day(2024, 4, 17));
        assert_eq!(stats.streak, 0);
        assert_eq!(stats.weekly_average, 0.0);
        assert_eq!(stats.monthly_average, 0.0);
        assert!(!stats.recorded_today);
    }

    #[test]
    fn from_notations_skips_bad_timestamps() {
        let notations = vec![
            WorkoutNotation::new("2024-04-16T07:30:00.000000"),
            WorkoutNotation::new("not-a-date"),
            WorkoutNotation::new("2024-04-17T07:30:00.000000"),
        ];
        let stats = WorkoutStats::from_notations(&notations, day(2024, 4, 17));
        assert_eq!(stats.streak, 2);
        assert_eq!(stats.weekly_average, 1.0);
        assert_eq!(stats.monthly_average, 2.0);
        assert!(stats.recorded_today);
    }

    #[test]
    fn display_truncates_averages() {
        let stats = WorkoutStats {
            reference_date: day(2024, 4, 17),
            streak: 4,
            weekly_average: 1.0,
            monthly_average: 1.5,
            recorded_today: false,
        };
        assert_eq!(
            stats.to_string(),
            "Streak: 4 days\nMedian per week: 1 days\nMonthly average: 1 workouts\nRecorded today: no"
        );
    }

    #[test]
    fn serializes_for_the_view_layer() {
        let stats = WorkoutStats::compute(&[WorkoutEvent::on(day(2024, 4, 17))], day(2024, 4, 17));
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["reference_date"], "2024-04-17");
        assert_eq!(json["streak"], 1);
        assert_eq!(json["recorded_today"], true);
    }
}
