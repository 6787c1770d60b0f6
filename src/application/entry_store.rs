//! In-memory entry collection backed by persistence

use crate::domain::aggregate::{self, Totals};
use crate::domain::{Calendar, WorkEntry};
use crate::error::{Result, WorkTrackError};
use crate::infrastructure::EntryPersistence;
use chrono::{Local, NaiveDate, TimeZone};
use tracing::{debug, info};
use uuid::Uuid;

/// What a mutation did to the collection
#[derive(Debug, Clone, PartialEq)]
pub enum StoreChange {
    Added(WorkEntry),
    Deleted(WorkEntry),
    /// Delete of an id that is not stored
    Unchanged,
}

/// Notified after every mutation that changed the collection
pub trait EntryObserver {
    fn entries_changed(&mut self, change: &StoreChange);
}

impl<F: FnMut(&StoreChange)> EntryObserver for F {
    fn entries_changed(&mut self, change: &StoreChange) {
        self(change)
    }
}

/// Ordered work entries; insertion order is display order within a day.
/// Every mutation rewrites the whole collection through `P`.
pub struct EntryStore<P: EntryPersistence, Tz: TimeZone = Local> {
    entries: Vec<WorkEntry>,
    persistence: P,
    calendar: Calendar<Tz>,
    observers: Vec<Box<dyn EntryObserver>>,
}

impl<P: EntryPersistence, Tz: TimeZone> EntryStore<P, Tz> {
    /// Open the store with whatever the persistence layer holds
    pub fn load(persistence: P, calendar: Calendar<Tz>) -> Self {
        let entries = persistence.load_entries();
        debug!(count = entries.len(), "entry store opened");
        EntryStore {
            entries,
            persistence,
            calendar,
            observers: Vec::new(),
        }
    }

    pub fn calendar(&self) -> &Calendar<Tz> {
        &self.calendar
    }

    pub fn entries(&self) -> &[WorkEntry] {
        &self.entries
    }

    pub fn subscribe<O: EntryObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    pub fn add_entry(&mut self, entry: WorkEntry) -> Result<StoreChange> {
        info!(id = %entry.id, date = %entry.date, "adding entry");
        self.entries.push(entry.clone());
        let change = StoreChange::Added(entry);
        self.notify(&change);
        self.persistence.save_entries(&self.entries)?;
        Ok(change)
    }

    /// Remove the entry with `id`. Unknown ids are ignored; the collection is still saved.
    pub fn delete_entry(&mut self, id: Uuid) -> Result<StoreChange> {
        let change = match self.entries.iter().position(|e| e.id == id) {
            Some(index) => {
                info!(%id, "deleting entry");
                StoreChange::Deleted(self.entries.remove(index))
            }
            None => {
                debug!(%id, "delete of unknown entry ignored");
                StoreChange::Unchanged
            }
        };
        if change != StoreChange::Unchanged {
            self.notify(&change);
        }
        self.persistence.save_entries(&self.entries)?;
        Ok(change)
    }

    pub fn find(&self, id: Uuid) -> Option<&WorkEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Resolve a full id or an unambiguous prefix of one
    pub fn find_by_prefix(&self, prefix: &str) -> Result<Option<&WorkEntry>> {
        let needle = prefix.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(None);
        }
        let mut matches = self
            .entries
            .iter()
            .filter(|e| e.id.to_string().starts_with(&needle));
        match (matches.next(), matches.next()) {
            (Some(_), Some(_)) => Err(WorkTrackError::AmbiguousEntryId(prefix.to_string())),
            (found, _) => Ok(found),
        }
    }

    pub fn entries_on_day(&self, day: NaiveDate) -> Vec<&WorkEntry> {
        self.entries
            .iter()
            .filter(|e| e.day(&self.calendar) == day)
            .collect()
    }

    /// Entries whose day lies within the month of `month_anchor`, boundaries included
    pub fn entries_in_month(&self, month_anchor: NaiveDate) -> Vec<&WorkEntry> {
        let interval = self.calendar.month_interval(month_anchor);
        self.entries
            .iter()
            .filter(|e| interval.contains(e.day(&self.calendar)))
            .collect()
    }

    pub fn has_entries(&self, day: NaiveDate) -> bool {
        self.entries.iter().any(|e| e.day(&self.calendar) == day)
    }

    pub fn totals_all(&self) -> Totals {
        Totals::of(&self.entries)
    }

    pub fn totals_on_day(&self, day: NaiveDate) -> Totals {
        Totals::of(self.entries_on_day(day))
    }

    pub fn totals_in_month(&self, month_anchor: NaiveDate) -> Totals {
        Totals::of(self.entries_in_month(month_anchor))
    }

    /// Per-day totals for the month of `month_anchor`, oldest day first
    pub fn daily_totals_in_month(&self, month_anchor: NaiveDate) -> Vec<(NaiveDate, Totals)> {
        let in_month: Vec<WorkEntry> = self
            .entries_in_month(month_anchor)
            .into_iter()
            .cloned()
            .collect();
        aggregate::daily_totals(&self.calendar, &in_month)
    }

    fn notify(&mut self, change: &StoreChange) {
        for observer in self.observers.iter_mut() {
            observer.entries_changed(change);
        }
    }
}
