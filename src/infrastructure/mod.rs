//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod kv_store;
pub mod persistence;
pub mod preferences;
pub mod repository;

pub use config::{Appearance, Config};
pub use kv_store::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use persistence::{EntryPersistence, PersistenceService, ENTRIES_KEY};
pub use preferences::Preferences;
pub use repository::{FileSystemRepository, TrackerRepository};
