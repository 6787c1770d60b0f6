//! Config management use case

use crate::domain::calendar::{parse_weekday, weekday_name};
use crate::error::{Result, WorkTrackError};
use crate::infrastructure::{Appearance, Config, FileSystemRepository, TrackerRepository};
use std::str::FromStr;

/// Keys readable through `worktrack config`
pub const CONFIG_KEYS: [&str; 4] = ["first_weekday", "currency", "appearance", "created"];

/// Service for managing tracker configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "first_weekday" => Ok(weekday_name(config.first_weekday).to_string()),
            "currency" => Ok(config.currency.clone()),
            "appearance" => Ok(config.appearance.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(WorkTrackError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key,
                CONFIG_KEYS.join(", ")
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "first_weekday" => {
                config.first_weekday = parse_weekday(value)?;
            }
            "currency" => {
                let code = value.trim();
                if code.is_empty() {
                    return Err(WorkTrackError::Config(
                        "Currency cannot be empty".to_string(),
                    ));
                }
                config.currency = code.to_string();
            }
            "appearance" => {
                config.appearance = Appearance::from_str(value).map_err(WorkTrackError::Config)?;
            }
            "created" => {
                return Err(WorkTrackError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(WorkTrackError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: first_weekday, currency, appearance",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
