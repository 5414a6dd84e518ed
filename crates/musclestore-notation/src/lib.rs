//! Workout notations: the timestamped records a user logs when they work out.
//!
//! The backend hands these over as a JSON array of `{"timestamp": "..."}`
//! objects. This crate turns that body into validated [`WorkoutEvent`]s,
//! discarding anything it cannot read instead of failing the whole batch.

pub mod decode;
pub mod event;
pub mod timestamp;

pub use decode::{decode_notations, events_from_notations, read_notations};
pub use event::{WorkoutEvent, WorkoutNotation, recorded_on};
pub use timestamp::{
    DISPLAY_FORMAT, INVALID_DATE, NOTATION_FORMAT, display_date, format_timestamp, parse_timestamp,
};
