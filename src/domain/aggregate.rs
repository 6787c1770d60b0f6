//! Hours and earnings totals over entry sequences

use crate::domain::calendar::Calendar;
use crate::domain::entry::WorkEntry;
use chrono::{NaiveDate, TimeZone};
use std::collections::BTreeMap;

/// Summed hours and earnings over a set of entries
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub entries: usize,
    pub hours: f64,
    pub earnings: f64,
}

impl Totals {
    pub fn of<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a WorkEntry>,
    {
        entries.into_iter().fold(Totals::default(), |mut acc, entry| {
            acc.add(entry);
            acc
        })
    }

    fn add(&mut self, entry: &WorkEntry) {
        self.entries += 1;
        self.hours += entry.hours();
        self.earnings += entry.earnings();
    }
}

/// Totals per calendar day, oldest day first
pub fn daily_totals<Tz: TimeZone>(
    calendar: &Calendar<Tz>,
    entries: &[WorkEntry],
) -> Vec<(NaiveDate, Totals)> {
    let by_day: BTreeMap<NaiveDate, Totals> =
        entries.iter().fold(BTreeMap::new(), |mut acc, entry| {
            acc.entry(entry.day(calendar)).or_default().add(entry);
            acc
        });
    by_day.into_iter().collect()
}
