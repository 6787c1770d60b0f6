//! Entry collection persistence

use crate::domain::WorkEntry;
use crate::error::Result;
use crate::infrastructure::kv_store::KeyValueStore;
use tracing::{debug, warn};

/// Storage key holding the JSON-encoded entry list
pub const ENTRIES_KEY: &str = "work_entries";

/// Loads and saves the complete entry collection
pub trait EntryPersistence {
    /// Stored entries; missing or unreadable data yields an empty list
    fn load_entries(&self) -> Vec<WorkEntry>;

    /// Replace the stored collection
    fn save_entries(&self, entries: &[WorkEntry]) -> Result<()>;
}

/// JSON encoding of the entry list under [`ENTRIES_KEY`]
#[derive(Debug, Clone)]
pub struct PersistenceService<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PersistenceService<S> {
    pub fn new(store: S) -> Self {
        PersistenceService { store }
    }
}

impl<S: KeyValueStore> EntryPersistence for PersistenceService<S> {
    fn load_entries(&self) -> Vec<WorkEntry> {
        let bytes = match self.store.get(ENTRIES_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!("no stored entries under '{}'", ENTRIES_KEY);
                return Vec::new();
            }
            Err(e) => {
                warn!(error = %e, "failed to read stored entries, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_slice::<Vec<WorkEntry>>(&bytes) {
            Ok(entries) => {
                debug!(count = entries.len(), "loaded entries");
                entries
            }
            Err(e) => {
                warn!(error = %e, "stored entries are malformed, starting empty");
                Vec::new()
            }
        }
    }

    fn save_entries(&self, entries: &[WorkEntry]) -> Result<()> {
        let bytes = serde_json::to_vec(entries)?;
        self.store.set(ENTRIES_KEY, &bytes)?;
        debug!(count = entries.len(), "saved entries");
        Ok(())
    }
}
