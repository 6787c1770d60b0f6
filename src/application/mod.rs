//! Application layer - Use cases and orchestration

pub mod entry_form;
pub mod entry_store;
pub mod init;
pub mod manage_config;
pub mod tracker;

pub use entry_form::{EntryForm, FormSummary, ValidationError};
pub use entry_store::{EntryObserver, EntryStore, StoreChange};
pub use init::InitService;
pub use manage_config::ConfigService;
pub use tracker::{NewEntry, TrackerService};
