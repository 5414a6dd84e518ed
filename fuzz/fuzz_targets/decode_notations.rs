//! Fuzz harness for notation response bodies
//!
//! Decoding is tolerant: arbitrary bodies must yield a (possibly empty) list,
//! and the statistics built from it must never panic.

#![no_main]

use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use musclestore_notation::{decode_notations, events_from_notations};
use musclestore_stats::WorkoutStats;

fuzz_target!(|data: &[u8]| {
    let Ok(body) = std::str::from_utf8(data) else {
        return;
    };

    let notations = decode_notations(body);
    let events = events_from_notations(&notations);
    assert!(events.len() <= notations.len());

    if let Some(today) = NaiveDate::from_ymd_opt(2024, 4, 17) {
        let stats = WorkoutStats::compute(&events, today);
        assert!(stats.streak as usize <= events.len());
        assert!(stats.weekly_average >= 0.0);
    }
});
