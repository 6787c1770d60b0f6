//! Initialize tracker use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, TrackerRepository};
use chrono::Weekday;
use std::fs;
use std::path::Path;
use tracing::info;

/// Service for creating a new tracker data directory
pub struct InitService;

impl InitService {
    /// Initialize a new tracker at the specified path.
    pub fn execute(path: &Path, first_weekday: Weekday, currency: &str) -> Result<Config> {
        // Create the directory if it doesn't exist
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let repo = FileSystemRepository::new(path.to_path_buf());

        // Initialize .worktrack directory
        repo.initialize()?;

        let config = Config::new(first_weekday, currency);
        repo.save_config(&config)?;

        info!(path = %path.display(), "initialized tracker");
        Ok(config)
    }
}
