//! Configuration management

use crate::domain::calendar::weekday_format;
use crate::domain::Calendar;
use crate::error::{Result, WorkTrackError};
use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Name of the per-tracker data directory
pub const DATA_DIR: &str = ".worktrack";

/// Color scheme preference for rendered output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    Dark,
    /// Follow the terminal
    #[default]
    System,
}

impl FromStr for Appearance {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Appearance::Light),
            "dark" => Ok(Appearance::Dark),
            "system" => Ok(Appearance::System),
            _ => Err(format!("Invalid appearance: {}", s)),
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
            Appearance::System => "system",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(with = "weekday_format", default = "default_first_weekday")]
    pub first_weekday: Weekday,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub appearance: Appearance,
    pub created: DateTime<Utc>,
}

fn default_first_weekday() -> Weekday {
    Weekday::Mon
}

fn default_currency() -> String {
    "PLN".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            first_weekday: default_first_weekday(),
            currency: default_currency(),
            appearance: Appearance::default(),
            created: Utc::now(),
        }
    }
}

impl Config {
    pub fn new(first_weekday: Weekday, currency: &str) -> Self {
        Config {
            first_weekday,
            currency: currency.to_string(),
            ..Config::default()
        }
    }

    /// Load config from .worktrack/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(DATA_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                WorkTrackError::NotWorkTrackDirectory(path.to_path_buf())
            } else {
                WorkTrackError::Io(e)
            }
        })?;

        debug!(path = %config_path.display(), "loaded config");
        toml::from_str(&contents)
            .map_err(|e| WorkTrackError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .worktrack/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let data_dir = path.join(DATA_DIR);
        let config_path = data_dir.join("config.toml");

        if !data_dir.exists() {
            fs::create_dir(&data_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        debug!(path = %config_path.display(), "saved config");
        Ok(())
    }

    /// Calendar in the local time zone starting weeks on the configured day
    pub fn calendar(&self) -> Calendar {
        Calendar::local(self.first_weekday)
    }
}
