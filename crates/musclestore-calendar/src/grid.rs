use chrono::Datelike;
use musclestore_error::{Result, validation_error};
use musclestore_notation::WorkoutEvent;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

use crate::month::YearMonth;

/// Columns in the calendar grid when none are configured.
pub const DEFAULT_COLUMNS: usize = 5;

/// One day slot in a displayed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    pub day_of_month: u32,
    pub has_workout: bool,
    /// Opaque display strings attached to the day.
    pub notes: Vec<String>,
}

/// The day cells for one month, in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarMonth {
    #[serde(flatten)]
    month: YearMonth,
    label: String,
    cells: Vec<CalendarCell>,
}

impl CalendarMonth {
    /// One cell per day of `month`, flagged where some event falls on that day.
    pub fn build(month: YearMonth, events: &[WorkoutEvent]) -> Self {
        let workout_days: BTreeSet<u32> = events
            .iter()
            .map(WorkoutEvent::date)
            .filter(|d| month.contains(*d))
            .map(|d| d.day())
            .collect();

        let cells: Vec<CalendarCell> = (1..=month.days())
            .map(|day| CalendarCell {
                day_of_month: day,
                has_workout: workout_days.contains(&day),
                notes: Vec::new(),
            })
            .collect();

        debug!(%month, days = cells.len(), workout_days = workout_days.len(), "built calendar month");

        Self {
            month,
            label: month.label(),
            cells,
        }
    }

    pub fn year_month(&self) -> YearMonth {
        self.month
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell for a selected day, if the month has it.
    pub fn cell(&self, day: u32) -> Option<&CalendarCell> {
        let index = usize::try_from(day).ok()?.checked_sub(1)?;
        self.cells.get(index)
    }

    /// Attach notes to a day, replacing any it had.
    pub fn with_notes<I, S>(mut self, day: u32, notes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cell_mut(day)?.notes = notes.into_iter().map(Into::into).collect();
        Ok(self)
    }

    /// Append one note after any the day already has.
    pub fn add_note(mut self, day: u32, note: impl Into<String>) -> Result<Self> {
        self.cell_mut(day)?.notes.push(note.into());
        Ok(self)
    }

    fn cell_mut(&mut self, day: u32) -> Result<&mut CalendarCell> {
        let month = self.month;
        day.checked_sub(1)
            .and_then(|i| self.cells.get_mut(i as usize))
            .ok_or_else(|| {
                validation_error("day is not in this month")
                    .with_context("month", month.to_string())
                    .with_context("day", day.to_string())
            })
    }

    /// Days that have at least one workout.
    pub fn workout_days(&self) -> Vec<u32> {
        self.cells
            .iter()
            .filter(|c| c.has_workout)
            .map(|c| c.day_of_month)
            .collect()
    }

    /// Cells in rows of `columns`, in day order; the last row may be short.
    pub fn rows(&self, columns: usize) -> Result<std::slice::Chunks<'_, CalendarCell>> {
        if columns == 0 {
            return Err(validation_error("calendar needs at least one column"));
        }
        Ok(self.cells.chunks(columns))
    }

    /// Plain-text grid: the label, then one line per row with `*` on workout days.
    pub fn render(&self, columns: usize) -> Result<String> {
        let mut lines = vec![self.label.clone()];
        for row in self.rows(columns)? {
            let line = row
                .iter()
                .map(|c| format!("{:>2}{}", c.day_of_month, if c.has_workout { '*' } else { ' ' }))
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(line.trim_end().to_string());
        }
        Ok(lines.join("\n"))
    }
}

/// Build the grid for `month` of `year`; fails for a month outside 1..=12.
pub fn build_month(year: i32, month: u32, events: &[WorkoutEvent]) -> Result<CalendarMonth> {
    Ok(CalendarMonth::build(YearMonth::new(year, month)?, events))
}
