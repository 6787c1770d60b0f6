//! Work entry model

use crate::domain::calendar::Calendar;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded work session.
///
/// `date` is the midnight of the day the entry was recorded for. It is set
/// independently of `start_time`, so an entry filed under Monday keeps that
/// day even if its times fall on another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEntry {
    pub id: Uuid,
    #[serde(with = "iso8601")]
    pub date: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub end_time: DateTime<Utc>,
    pub hourly_rate: f64,
}

impl WorkEntry {
    /// Create an entry with a fresh id, normalizing `date` to its midnight
    pub fn new<Tz: TimeZone>(
        calendar: &Calendar<Tz>,
        date: DateTime<Utc>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        hourly_rate: f64,
    ) -> Self {
        WorkEntry {
            id: Uuid::new_v4(),
            date: calendar.start_of_day(date),
            start_time,
            end_time,
            hourly_rate,
        }
    }

    /// Elapsed time, never negative
    pub fn duration(&self) -> Duration {
        (self.end_time - self.start_time).max(Duration::zero())
    }

    pub fn hours(&self) -> f64 {
        self.duration().num_milliseconds() as f64 / 3_600_000.0
    }

    pub fn earnings(&self) -> f64 {
        self.hours() * self.hourly_rate
    }

    /// The calendar day this entry is filed under
    pub fn day<Tz: TimeZone>(&self, calendar: &Calendar<Tz>) -> NaiveDate {
        calendar.day_of(self.date)
    }
}

/// RFC 3339 timestamps written at whole-second precision with a `Z` suffix.
/// Any RFC 3339 timestamp is accepted on read.
mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|t| t.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Weekday};

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn entry(start: DateTime<Utc>, end: DateTime<Utc>, rate: f64) -> WorkEntry {
        let cal = Calendar::new(Utc, Weekday::Mon);
        WorkEntry::new(&cal, start, start, end, rate)
    }

    #[test]
    fn test_new_normalizes_date() {
        let cal = Calendar::new(Utc, Weekday::Mon);
        let e = WorkEntry::new(
            &cal,
            utc(2025, 1, 17, 13, 45),
            utc(2025, 1, 17, 9, 0),
            utc(2025, 1, 17, 17, 0),
            20.0,
        );
        assert_eq!(e.date, utc(2025, 1, 17, 0, 0));
        assert_eq!(e.day(&cal), NaiveDate::from_ymd_opt(2025, 1, 17).unwrap());
    }

    #[test]
    fn test_date_independent_of_start_time() {
        let cal = Calendar::new(Utc, Weekday::Mon);
        let e = WorkEntry::new(
            &cal,
            utc(2025, 1, 13, 12, 0),
            utc(2025, 1, 14, 9, 0),
            utc(2025, 1, 14, 11, 0),
            10.0,
        );
        assert_eq!(e.day(&cal), NaiveDate::from_ymd_opt(2025, 1, 13).unwrap());
    }

    #[test]
    fn test_hours_and_earnings() {
        let e = entry(utc(2025, 1, 17, 9, 0), utc(2025, 1, 17, 17, 0), 20.0);
        assert_eq!(e.hours(), 8.0);
        assert_eq!(e.earnings(), 160.0);
    }

    #[test]
    fn test_partial_hours() {
        let e = entry(utc(2025, 1, 17, 9, 0), utc(2025, 1, 17, 10, 30), 30.0);
        assert_eq!(e.hours(), 1.5);
        assert_eq!(e.earnings(), 45.0);
    }

    #[test]
    fn test_negative_duration_clamps_to_zero() {
        let e = entry(utc(2025, 1, 17, 17, 0), utc(2025, 1, 17, 9, 0), 20.0);
        assert_eq!(e.duration(), Duration::zero());
        assert_eq!(e.hours(), 0.0);
        assert_eq!(e.earnings(), 0.0);
    }

    #[test]
    fn test_json_shape() {
        let e = entry(utc(2025, 1, 17, 9, 0), utc(2025, 1, 17, 17, 0), 20.0);
        let json = serde_json::to_value(&e).unwrap();

        assert_eq!(json["date"], "2025-01-17T00:00:00Z");
        assert_eq!(json["startTime"], "2025-01-17T09:00:00Z");
        assert_eq!(json["endTime"], "2025-01-17T17:00:00Z");
        assert_eq!(json["hourlyRate"], 20.0);
        assert_eq!(json["id"], e.id.to_string());
    }

    #[test]
    fn test_reads_offset_and_fractional_timestamps() {
        let raw = r#"{
            "id": "6f1c1d2e-8a2b-4c3d-9e4f-0a1b2c3d4e5f",
            "date": "2025-01-16T23:00:00Z",
            "startTime": "2025-01-17T09:00:00.250+01:00",
            "endTime": "2025-01-17T17:00:00+01:00",
            "hourlyRate": 25.5
        }"#;
        let e: WorkEntry = serde_json::from_str(raw).unwrap();

        assert_eq!(e.start_time.timestamp(), utc(2025, 1, 17, 8, 0).timestamp());
        assert_eq!(e.end_time, utc(2025, 1, 17, 16, 0));
        assert_eq!(e.hourly_rate, 25.5);

        let cet = Calendar::new(FixedOffset::east_opt(3600).unwrap(), Weekday::Mon);
        assert_eq!(e.day(&cet), NaiveDate::from_ymd_opt(2025, 1, 17).unwrap());
    }

    #[test]
    fn test_rejects_bad_timestamp() {
        let raw = r#"{"id":"6f1c1d2e-8a2b-4c3d-9e4f-0a1b2c3d4e5f","date":"yesterday",
            "startTime":"2025-01-17T09:00:00Z","endTime":"2025-01-17T17:00:00Z","hourlyRate":1}"#;
        assert!(serde_json::from_str::<WorkEntry>(raw).is_err());
    }
}
