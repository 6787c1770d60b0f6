//! Tracker use cases over an opened data directory

use crate::application::entry_form::EntryForm;
use crate::application::entry_store::{EntryStore, StoreChange};
use crate::domain::{build_grid, MonthGrid, WorkEntry};
use crate::error::{Result, WorkTrackError};
use crate::infrastructure::{
    Config, FileKeyValueStore, FileSystemRepository, PersistenceService, Preferences,
    TrackerRepository,
};
use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, info};
use uuid::Uuid;

/// Field overrides for a new entry; unset fields come from the last used values
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub rate: Option<String>,
}

/// Service for recording and querying work entries
pub struct TrackerService {
    config: Config,
    kv: FileKeyValueStore,
    store: EntryStore<PersistenceService<FileKeyValueStore>>,
}

impl TrackerService {
    pub fn open(repository: &FileSystemRepository) -> Result<Self> {
        let config = repository.load_config()?;
        let kv = repository.kv_store();
        let mut store = EntryStore::load(PersistenceService::new(kv.clone()), config.calendar());
        store.subscribe(|change: &StoreChange| match change {
            StoreChange::Added(entry) => debug!(id = %entry.id, "observer: entry added"),
            StoreChange::Deleted(entry) => debug!(id = %entry.id, "observer: entry deleted"),
            StoreChange::Unchanged => {}
        });

        Ok(TrackerService { config, kv, store })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &EntryStore<PersistenceService<FileKeyValueStore>> {
        &self.store
    }

    pub fn preferences(&self) -> Preferences {
        Preferences::load(&self.kv)
    }

    pub fn today(&self) -> NaiveDate {
        self.store.calendar().today()
    }

    /// Validate and record an entry for `day`, then remember its values for next time
    pub fn add_entry(&mut self, day: NaiveDate, overrides: NewEntry) -> Result<WorkEntry> {
        let mut preferences = self.preferences();
        let form = self.prepare_form(day, overrides);

        let entry = form
            .submit(self.store.calendar())
            .map_err(|e| WorkTrackError::InvalidEntry(e.to_string()))?;
        self.store.add_entry(entry.clone())?;

        preferences.remember(form.start_time, form.end_time, &form.hourly_rate_text);
        preferences.save(&self.kv)?;
        Ok(entry)
    }

    /// The form `add_entry` would submit, without saving anything
    pub fn prepare_form(&self, day: NaiveDate, overrides: NewEntry) -> EntryForm {
        let mut form = EntryForm::new(day, &self.preferences());
        if let Some(start) = overrides.start {
            form.start_time = start;
        }
        if let Some(end) = overrides.end {
            form.end_time = end;
        }
        if let Some(rate) = overrides.rate {
            form.hourly_rate_text = rate;
        }
        form
    }

    /// Delete by full id or unique prefix; unknown ids are ignored
    pub fn delete_entry(&mut self, id_or_prefix: &str) -> Result<StoreChange> {
        let target = match self.store.find_by_prefix(id_or_prefix)? {
            Some(entry) => Some(entry.id),
            None => Uuid::parse_str(id_or_prefix.trim()).ok(),
        };
        match target {
            Some(id) => self.store.delete_entry(id),
            None => {
                info!(id = id_or_prefix, "no entry to delete");
                Ok(StoreChange::Unchanged)
            }
        }
    }

    pub fn month_grid(&self, month_anchor: NaiveDate, selected: NaiveDate) -> MonthGrid {
        build_grid(self.store.calendar(), month_anchor, selected, |day| {
            self.store.has_entries(day)
        })
    }
}
