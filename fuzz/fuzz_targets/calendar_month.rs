//! Fuzz harness for calendar month grids and navigation

#![no_main]

use libfuzzer_sys::fuzz_target;
use musclestore_calendar::{Direction, build_month, supported_years};
use musclestore_notation::{WorkoutEvent, decode_notations, events_from_notations};

fuzz_target!(|input: (i32, u32, u8, &[u8])| {
    let (year, month, columns, body) = input;
    let events: Vec<WorkoutEvent> = match std::str::from_utf8(body) {
        Ok(text) => events_from_notations(&decode_notations(text)),
        Err(_) => Vec::new(),
    };

    let Ok(grid) = build_month(year, month, &events) else {
        assert!(!(1..=12).contains(&month) || !supported_years().contains(&year));
        return;
    };
    assert!((28..=31).contains(&grid.len()));

    let _ = grid.render(usize::from(columns));

    let ym = grid.year_month();
    if let Ok(next) = ym.advance(Direction::Forward) {
        assert_eq!(next.advance(Direction::Backward).ok(), Some(ym));
    }
});
