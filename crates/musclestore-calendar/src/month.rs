use chrono::{Datelike, NaiveDate};
use musclestore_error::{MusclestoreError, Result, validation_error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Which way to page through the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl FromStr for Direction {
    type Err = MusclestoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "forward" | "next" => Ok(Direction::Forward),
            "backward" | "prev" | "previous" => Ok(Direction::Backward),
            _ => Err(validation_error("unknown direction").with_context("input", s)),
        }
    }
}

/// Proleptic Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Years a [`YearMonth`] may fall in: the span chrono can represent.
pub fn supported_years() -> RangeInclusive<i32> {
    NaiveDate::MIN.year()..=NaiveDate::MAX.year()
}

/// A calendar month. The month number is always within 1..=12 and the year
/// within [`supported_years`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Fails for a month outside 1..=12 or a year outside [`supported_years`].
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(validation_error("month must be between 1 and 12")
                .with_context("year", year.to_string())
                .with_context("month", month.to_string()));
        }
        let years = supported_years();
        if !years.contains(&year) {
            return Err(validation_error("year is outside the supported calendar range")
                .with_context("year", year.to_string())
                .with_context("min", years.start().to_string())
                .with_context("max", years.end().to_string()));
        }
        Ok(Self { year, month })
    }

    /// The month a date falls in.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Number of days in this month.
    pub fn days(&self) -> u32 {
        match self.month {
            4 | 6 | 9 | 11 => 30,
            2 if is_leap_year(self.year) => 29,
            2 => 28,
            _ => 31,
        }
    }

    /// Whether `date` falls in this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The adjacent month, rolling the year over at December/January.
    ///
    /// Fails only when paging past either end of [`supported_years`].
    pub fn advance(self, direction: Direction) -> Result<Self> {
        // Supported years sit well inside i32, so the year step cannot overflow.
        let (year, month) = match (direction, self.month) {
            (Direction::Forward, 12) => (self.year + 1, 1),
            (Direction::Forward, m) => (self.year, m + 1),
            (Direction::Backward, 1) => (self.year - 1, 12),
            (Direction::Backward, m) => (self.year, m - 1),
        };
        Self::new(year, month)
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Header text, e.g. `February 2024`.
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Days in `month` of `year`; fails for a month outside 1..=12 or an unsupported year.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    YearMonth::new(year, month).map(|ym| ym.days())
}

/// The `(year, month)` adjacent to the given one.
///
/// Fails for a month outside 1..=12, or when either month falls outside
/// [`supported_years`].
pub fn advance_month(year: i32, month: u32, direction: Direction) -> Result<(i32, u32)> {
    let next = YearMonth::new(year, month)?.advance(direction)?;
    Ok((next.year, next.month))
}
