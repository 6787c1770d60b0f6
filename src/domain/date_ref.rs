//! Date, month and time-of-day argument parsing

use crate::error::{Result, WorkTrackError};
use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};

/// A day named relative to today or given explicitly
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateReference {
    Today,
    Yesterday,
    Tomorrow,
    /// Today if it is that weekday, otherwise its most recent occurrence
    Weekday(Weekday),
    /// Strictly before today
    LastWeekday(Weekday),
    /// Strictly after today
    NextWeekday(Weekday),
    SpecificDate(NaiveDate),
}

impl DateReference {
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(DateReference::Today),
            "yesterday" => Ok(DateReference::Yesterday),
            "tomorrow" => Ok(DateReference::Tomorrow),
            _ if normalized.starts_with("last ") => {
                parse_weekday_name(&normalized[5..])
                    .map(DateReference::LastWeekday)
                    .ok_or_else(|| WorkTrackError::InvalidDateReference(input.to_string()))
            }
            _ if normalized.starts_with("next ") => {
                parse_weekday_name(&normalized[5..])
                    .map(DateReference::NextWeekday)
                    .ok_or_else(|| WorkTrackError::InvalidDateReference(input.to_string()))
            }
            _ => {
                if let Some(day) = parse_weekday_name(&normalized) {
                    return Ok(DateReference::Weekday(day));
                }
                NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                    .or_else(|_| NaiveDate::parse_from_str(&normalized, "%d-%m-%Y"))
                    .map(DateReference::SpecificDate)
                    .map_err(|_| WorkTrackError::InvalidDateReference(input.to_string()))
            }
        }
    }

    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        let days_since = |target: Weekday| {
            (today.weekday().num_days_from_monday() + 7 - target.num_days_from_monday()) % 7
        };

        match self {
            DateReference::Today => today,
            DateReference::Yesterday => today - Duration::days(1),
            DateReference::Tomorrow => today + Duration::days(1),
            DateReference::Weekday(target) => today - Duration::days(days_since(*target) as i64),
            DateReference::LastWeekday(target) => {
                let back = match days_since(*target) {
                    0 => 7,
                    n => n,
                };
                today - Duration::days(back as i64)
            }
            DateReference::NextWeekday(target) => {
                let forward = match (target.num_days_from_monday() + 7
                    - today.weekday().num_days_from_monday())
                    % 7
                {
                    0 => 7,
                    n => n,
                };
                today + Duration::days(forward as i64)
            }
            DateReference::SpecificDate(date) => *date,
        }
    }
}

/// Resolve an optional date argument, defaulting to today
pub fn resolve_day(input: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    match input {
        Some(raw) => Ok(DateReference::parse(raw)?.resolve(today)),
        None => Ok(today),
    }
}

/// Parse `YYYY-MM` into the first day of that month
pub fn parse_month(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d")
        .map_err(|_| WorkTrackError::InvalidMonth(input.to_string()))
}

/// Parse `HH:MM` (24-hour) wall-clock time
pub fn parse_time(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M").map_err(|_| {
        WorkTrackError::InvalidEntry(format!("Invalid time '{}', expected HH:MM", input))
    })
}

fn parse_weekday_name(name: &str) -> Option<Weekday> {
    match name {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}
