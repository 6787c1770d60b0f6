//! Calendar arithmetic: day normalization, month intervals and weekday numbering

use crate::error::{Result, WorkTrackError};
use chrono::{
    DateTime, Datelike, Duration, Local, LocalResult, Months, NaiveDate, NaiveDateTime, NaiveTime,
    TimeZone, Utc, Weekday,
};

/// Calendar bound to a time zone and a first day of the week.
///
/// Timestamps are kept as UTC instants; the time zone decides which
/// calendar day an instant belongs to and where that day's midnight is.
#[derive(Debug, Clone)]
pub struct Calendar<Tz: TimeZone = Local> {
    tz: Tz,
    first_weekday: Weekday,
}

impl Calendar<Local> {
    /// Calendar in the system time zone
    pub fn local(first_weekday: Weekday) -> Self {
        Calendar::new(Local, first_weekday)
    }
}

impl<Tz: TimeZone> Calendar<Tz> {
    pub fn new(tz: Tz, first_weekday: Weekday) -> Self {
        Calendar { tz, first_weekday }
    }

    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    /// The calendar day an instant falls on
    pub fn day_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.tz).date_naive()
    }

    /// Local wall-clock time of an instant
    pub fn time_of(&self, instant: DateTime<Utc>) -> NaiveTime {
        instant.with_timezone(&self.tz).time()
    }

    /// The first instant of a calendar day
    pub fn midnight(&self, day: NaiveDate) -> DateTime<Utc> {
        self.resolve_local(day.and_time(NaiveTime::MIN))
    }

    /// Truncate an instant to the midnight of its day
    pub fn start_of_day(&self, instant: DateTime<Utc>) -> DateTime<Utc> {
        self.midnight(self.day_of(instant))
    }

    /// The instant at a given wall-clock time on a day
    pub fn at_time(&self, day: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
        self.resolve_local(day.and_time(time))
    }

    pub fn today(&self) -> NaiveDate {
        self.day_of(Utc::now())
    }

    /// Month containing the anchor day
    pub fn month_interval(&self, anchor: NaiveDate) -> MonthInterval {
        MonthInterval::containing(anchor)
    }

    /// Short weekday labels starting at the first weekday
    pub fn weekday_symbols(&self) -> [&'static str; 7] {
        let mut symbols = [""; 7];
        let mut day = self.first_weekday;
        for symbol in symbols.iter_mut() {
            *symbol = short_weekday_name(day);
            day = day.succ();
        }
        symbols
    }

    fn resolve_local(&self, naive: NaiveDateTime) -> DateTime<Utc> {
        match self.tz.from_local_datetime(&naive) {
            LocalResult::Single(t) => t.with_timezone(&Utc),
            LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
            // Wall-clock time skipped by a DST jump: take the first valid hour after it
            LocalResult::None => (1..=3)
                .find_map(|h| {
                    self.tz
                        .from_local_datetime(&(naive + Duration::hours(h)))
                        .earliest()
                })
                .map(|t| t.with_timezone(&Utc))
                .unwrap_or_else(|| Utc.from_utc_datetime(&naive)),
        }
    }
}

/// Inclusive range of days making up one month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthInterval {
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

impl MonthInterval {
    pub fn containing(anchor: NaiveDate) -> Self {
        let first_day = first_of_month(anchor);
        let last_day = first_day
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX);
        MonthInterval {
            first_day,
            last_day,
        }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.first_day && day <= self.last_day
    }
}

pub fn first_of_month(anchor: NaiveDate) -> NaiveDate {
    anchor - Duration::days(anchor.day0() as i64)
}

/// Move an anchor by whole months, clamping the day to the target month's length.
/// Out-of-range moves leave the anchor where it is.
pub fn shift_month(anchor: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        anchor.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        anchor.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(anchor)
}

pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Weekday in 1=Sunday..7=Saturday numbering
pub fn weekday_number(day: NaiveDate) -> u32 {
    day.weekday().number_from_sunday()
}

pub fn parse_weekday(input: &str) -> Result<Weekday> {
    match input.trim().to_lowercase().as_str() {
        "monday" | "mon" => Ok(Weekday::Mon),
        "tuesday" | "tue" => Ok(Weekday::Tue),
        "wednesday" | "wed" => Ok(Weekday::Wed),
        "thursday" | "thu" => Ok(Weekday::Thu),
        "friday" | "fri" => Ok(Weekday::Fri),
        "saturday" | "sat" => Ok(Weekday::Sat),
        "sunday" | "sun" => Ok(Weekday::Sun),
        _ => Err(WorkTrackError::Config(format!("Invalid weekday: {}", input))),
    }
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

fn short_weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Serde adapter storing a weekday as its lowercase English name
pub mod weekday_format {
    use super::{parse_weekday, weekday_name};
    use chrono::Weekday;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(weekday_name(*day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_weekday(&raw).map_err(de::Error::custom)
    }
}
