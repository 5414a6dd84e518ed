use chrono::{NaiveDate, NaiveDateTime};
use musclestore_error::MusclestoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::timestamp::{format_timestamp, parse_timestamp};

/// A workout notation exactly as the backend stores it.
///
/// The timestamp is kept as text; nothing here guarantees it parses.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutNotation {
    pub timestamp: String,
}

impl WorkoutNotation {
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
        }
    }

    /// The record sent when a workout is logged at `at`.
    pub fn at(at: NaiveDateTime) -> Self {
        Self::new(format_timestamp(at))
    }

    /// Parse this notation into an event.
    pub fn to_event(&self) -> musclestore_error::Result<WorkoutEvent> {
        self.timestamp.parse()
    }
}

/// One recorded workout with a parsed timestamp.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkoutEvent {
    pub occurred_at: NaiveDateTime,
}

impl WorkoutEvent {
    pub fn new(occurred_at: NaiveDateTime) -> Self {
        Self { occurred_at }
    }

    /// An event at midnight on `date`.
    pub fn on(date: NaiveDate) -> Self {
        Self::new(date.and_time(chrono::NaiveTime::MIN))
    }

    /// Calendar date of the event; time-of-day is dropped.
    pub fn date(&self) -> NaiveDate {
        self.occurred_at.date()
    }
}

impl FromStr for WorkoutEvent {
    type Err = MusclestoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_timestamp(s).map(WorkoutEvent::new)
    }
}

impl From<WorkoutEvent> for WorkoutNotation {
    fn from(event: WorkoutEvent) -> Self {
        WorkoutNotation::at(event.occurred_at)
    }
}

/// Whether any workout was recorded on `day`.
pub fn recorded_on(events: &[WorkoutEvent], day: NaiveDate) -> bool {
    events.iter().any(|e| e.date() == day)
}
