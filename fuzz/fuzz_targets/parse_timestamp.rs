//! Fuzz harness for timestamp parsing and display

#![no_main]

use chrono::Datelike;
use libfuzzer_sys::fuzz_target;
use musclestore_notation::{INVALID_DATE, display_date, format_timestamp, parse_timestamp};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    match parse_timestamp(input) {
        Ok(dt) => {
            assert_ne!(display_date(input), INVALID_DATE);
            // Canonical text is a fixed point for four-digit years.
            if (0..=9999).contains(&dt.year()) {
                let canonical = format_timestamp(dt);
                let again = parse_timestamp(&canonical).expect("canonical form parses");
                assert_eq!(format_timestamp(again), canonical);
            }
        }
        Err(_) => assert_eq!(display_date(input), INVALID_DATE),
    }
});
