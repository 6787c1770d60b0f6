//! Entry creation form: defaults, validation and live summary

use crate::domain::{Calendar, WorkEntry};
use crate::infrastructure::Preferences;
use chrono::{NaiveDate, NaiveTime, TimeZone};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Hourly rate '{0}' is not a valid non-negative number")]
    InvalidRate(String),

    #[error("End time must be after start time")]
    EndNotAfterStart,
}

/// Preview shown while the form is being filled in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormSummary {
    pub hours: f64,
    pub earnings: f64,
}

/// Input for one new entry on a selected day
#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    pub day: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub hourly_rate_text: String,
}

impl EntryForm {
    /// Form for `day` prefilled with the last used values
    pub fn new(day: NaiveDate, preferences: &Preferences) -> Self {
        EntryForm {
            day,
            start_time: preferences.start_time,
            end_time: preferences.end_time,
            hourly_rate_text: preferences.hourly_rate_text.clone(),
        }
    }

    /// Rate as typed; a comma is accepted as decimal separator
    pub fn parse_rate(&self) -> Option<f64> {
        let text = self.hourly_rate_text.trim().replace(',', ".");
        text.parse::<f64>()
            .ok()
            .filter(|rate| rate.is_finite() && *rate >= 0.0)
    }

    pub fn validate(&self) -> Result<f64, ValidationError> {
        let rate = self
            .parse_rate()
            .ok_or_else(|| ValidationError::InvalidRate(self.hourly_rate_text.clone()))?;
        if self.end_time <= self.start_time {
            return Err(ValidationError::EndNotAfterStart);
        }
        Ok(rate)
    }

    /// Hours and earnings for valid input, `None` otherwise
    pub fn summary(&self) -> Option<FormSummary> {
        let rate = self.validate().ok()?;
        let hours = (self.end_time - self.start_time).num_seconds() as f64 / 3600.0;
        Some(FormSummary {
            hours,
            earnings: hours * rate,
        })
    }

    /// Build the entry; start and end are placed on the form's day
    pub fn submit<Tz: TimeZone>(
        &self,
        calendar: &Calendar<Tz>,
    ) -> Result<WorkEntry, ValidationError> {
        let rate = self.validate()?;
        Ok(WorkEntry::new(
            calendar,
            calendar.midnight(self.day),
            calendar.at_time(self.day, self.start_time),
            calendar.at_time(self.day, self.end_time),
            rate,
        ))
    }
}
