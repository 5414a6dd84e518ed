//! Proptest strategies for musclestore property-based testing
//!
//! Reusable generators for dates, months, and workout histories.

pub mod strategies;

pub use strategies::{
    strategy_event_vec, strategy_naive_date, strategy_notation, strategy_notation_vec,
    strategy_timestamp_text, strategy_workout_event, strategy_year_month,
};
