//! Six-week month grid for calendar views

use crate::domain::calendar::{first_of_month, is_same_month, weekday_number, Calendar};
use chrono::{Duration, NaiveDate, TimeZone, Weekday};

/// Six rows of seven days
pub const GRID_CELLS: usize = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_selected: bool,
    pub has_entries: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    /// First day of the displayed month
    pub month: NaiveDate,
    /// Column headers, starting at the first weekday
    pub weekday_labels: [&'static str; 7],
    pub cells: Vec<GridCell>,
}

impl MonthGrid {
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> + '_ {
        self.cells.chunks(7)
    }
}

/// Latest day on or before the first of the month that falls on `first_weekday`
pub fn grid_start(month_anchor: NaiveDate, first_weekday: Weekday) -> NaiveDate {
    let first = first_of_month(month_anchor);
    let offset = (weekday_number(first) + 7 - first_weekday.number_from_sunday()) % 7;
    first - Duration::days(offset as i64)
}

/// Build the 42-cell grid for the month containing `month_anchor`
pub fn build_grid<Tz, F>(
    calendar: &Calendar<Tz>,
    month_anchor: NaiveDate,
    selected: NaiveDate,
    has_entries: F,
) -> MonthGrid
where
    Tz: TimeZone,
    F: Fn(NaiveDate) -> bool,
{
    let start = grid_start(month_anchor, calendar.first_weekday());
    let cells = start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| GridCell {
            date,
            in_month: is_same_month(date, month_anchor),
            is_selected: date == selected,
            has_entries: has_entries(date),
        })
        .collect();

    MonthGrid {
        month: first_of_month(month_anchor),
        weekday_labels: calendar.weekday_symbols(),
        cells,
    }
}
