//! worktrack - personal work time tracker
//!
//! Records work sessions against calendar days and totals hours and
//! earnings per day, month and overall. Entries live as one JSON document
//! in a local key-value store under `.worktrack/`.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::WorkTrackError;
