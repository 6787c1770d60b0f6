//! Output formatting utilities

use crate::application::FormSummary;
use crate::domain::{Calendar, GridCell, MonthGrid, Totals, WorkEntry};
use crate::infrastructure::Appearance;
use chrono::{NaiveDate, TimeZone};
use crossterm::style::Stylize;

/// Characters of an entry id shown in listings
const SHORT_ID_LEN: usize = 8;

/// Cell styling derived from the appearance preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// No escape codes
    Plain,
    Light,
    Dark,
}

impl Theme {
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Theme::Light,
            Appearance::Dark => Theme::Dark,
            Appearance::System => Theme::Plain,
        }
    }
}

pub fn format_day_header(day: NaiveDate) -> String {
    format!("Entries for {}", day.format("%d %b %Y"))
}

/// Format the entries of one day for display
pub fn format_entry_list<Tz: TimeZone>(
    entries: &[&WorkEntry],
    calendar: &Calendar<Tz>,
    currency: &str,
) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let id = entry.id.to_string();
        output.push_str(&format!(
            "{}  Start: {}, End: {}  Hours: {:.2}, Earned: {:.2} {}\n",
            &id[..SHORT_ID_LEN],
            calendar.time_of(entry.start_time).format("%H:%M"),
            calendar.time_of(entry.end_time).format("%H:%M"),
            entry.hours(),
            entry.earnings(),
            currency
        ));
    }
    output
}

/// Preview of a not yet saved entry
pub fn format_form_summary(summary: Option<FormSummary>, currency: &str) -> String {
    match summary {
        Some(s) => format!(
            "Hours: {:.2}\nEarned: {:.2} {}\n",
            s.hours, s.earnings, currency
        ),
        None => "Enter valid times and rate\n".to_string(),
    }
}

/// Two-line hours and earnings footer
pub fn format_totals(label: &str, totals: &Totals, currency: &str) -> String {
    format!(
        "{} Total Hours: {:.2}\n{} Total Earned: {:.2} {}\n",
        label, totals.hours, label, totals.earnings, currency
    )
}

pub fn format_daily_totals(days: &[(NaiveDate, Totals)], currency: &str) -> String {
    let mut output = String::new();
    for (day, totals) in days {
        output.push_str(&format!(
            "{}  {:>6.2} h  {:>10.2} {}\n",
            day.format("%d-%m-%Y"),
            totals.hours,
            totals.earnings,
            currency
        ));
    }
    output
}

/// Render a month grid as text.
///
/// Each cell is `[dd]` when selected, `*` marks days with entries and `·`
/// precedes days of adjacent months.
pub fn format_grid(grid: &MonthGrid, theme: Theme) -> String {
    let mut output = format!("{:^35}\n", grid.month.format("%B %Y").to_string());

    for label in grid.weekday_labels.iter() {
        output.push_str(&format!(" {:<4}", label));
    }
    output.push('\n');

    for week in grid.weeks() {
        let line: String = week.iter().map(|cell| format_cell(cell, theme)).collect();
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}

fn format_cell(cell: &GridCell, theme: Theme) -> String {
    let day = cell.date.format("%e").to_string();
    let (open, close) = match (cell.is_selected, cell.in_month) {
        (true, _) => ('[', ']'),
        (false, true) => (' ', ' '),
        (false, false) => ('·', ' '),
    };
    let marker = if cell.has_entries { '*' } else { ' ' };

    let day = match theme {
        Theme::Plain => day,
        Theme::Light => style_day(day, cell, |d| d.blue().bold().to_string()),
        Theme::Dark => style_day(day, cell, |d| d.yellow().bold().to_string()),
    };
    format!("{}{}{}{}", open, day, close, marker)
}

fn style_day(day: String, cell: &GridCell, selected: impl Fn(String) -> String) -> String {
    if cell.is_selected {
        selected(day)
    } else if !cell.in_month {
        day.dim().to_string()
    } else if cell.has_entries {
        day.bold().to_string()
    } else {
        day
    }
}
