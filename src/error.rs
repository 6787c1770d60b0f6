//! Error types for worktrack

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for worktrack application
#[derive(Debug, Error)]
pub enum WorkTrackError {
    #[error("Not a worktrack directory: {0}")]
    NotWorkTrackDirectory(PathBuf),

    #[error("Invalid date reference: {0}")]
    InvalidDateReference(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("Ambiguous entry id: {0}")]
    AmbiguousEntryId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl WorkTrackError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            WorkTrackError::NotWorkTrackDirectory(_) => 2,
            WorkTrackError::InvalidDateReference(_) | WorkTrackError::InvalidMonth(_) => 3,
            WorkTrackError::InvalidEntry(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            WorkTrackError::NotWorkTrackDirectory(path) => {
                format!(
                    "Not a worktrack directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'worktrack init' in this directory to start tracking\n\
                    • Navigate to an existing worktrack directory\n\
                    • Set WORKTRACK_ROOT environment variable to your data path",
                    path.display()
                )
            }
            WorkTrackError::InvalidDateReference(ref_str) => {
                format!(
                    "Invalid date reference: '{}'\n\n\
                    Valid date references:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, next friday, etc.\n\
                    • Specific dates: DD-MM-YYYY or YYYY-MM-DD\n\n\
                    Examples:\n\
                    worktrack list yesterday\n\
                    worktrack add 2025-01-15 --start 09:00 --end 17:00",
                    ref_str
                )
            }
            WorkTrackError::InvalidMonth(month) => {
                format!(
                    "Invalid month: '{}'\n\n\
                    Expected format: YYYY-MM\n\
                    Example: worktrack month 2025-01",
                    month
                )
            }
            WorkTrackError::InvalidEntry(msg) => {
                format!(
                    "{}\n\n\
                    Ensure end time is after start time and hourly rate is valid.\n\
                    Example: worktrack add today --start 09:00 --end 17:00 --rate 20",
                    msg
                )
            }
            WorkTrackError::AmbiguousEntryId(prefix) => {
                format!(
                    "Entry id prefix '{}' matches more than one entry\n\n\
                    Use 'worktrack list <date>' to see full entry ids",
                    prefix
                )
            }
            WorkTrackError::Config(msg) => {
                if msg.contains("Invalid weekday") {
                    format!(
                        "{}\n\n\
                        Valid weekdays: monday, tuesday, ..., sunday\n\
                        Example: worktrack config first_weekday sunday",
                        msg
                    )
                } else if msg.contains("Invalid appearance") {
                    format!(
                        "{}\n\n\
                        Valid appearances: light, dark, system\n\
                        Example: worktrack config appearance dark",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using WorkTrackError
pub type Result<T> = std::result::Result<T, WorkTrackError>;
