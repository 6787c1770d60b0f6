//! Last-used entry form values

use crate::error::Result;
use crate::infrastructure::kv_store::KeyValueStore;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const PREFERENCES_KEY: &str = "last_used_values";

/// Values prefilled into the next entry form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Rate exactly as last typed
    pub hourly_rate_text: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or(NaiveTime::MIN),
            hourly_rate_text: String::new(),
        }
    }
}

impl Preferences {
    /// Stored preferences, or defaults when absent or unreadable
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        match store.get(PREFERENCES_KEY) {
            Ok(Some(bytes)) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                warn!(error = %e, "stored preferences are malformed, using defaults");
                Preferences::default()
            }),
            Ok(None) => Preferences::default(),
            Err(e) => {
                warn!(error = %e, "failed to read preferences, using defaults");
                Preferences::default()
            }
        }
    }

    pub fn save<S: KeyValueStore>(&self, store: &S) -> Result<()> {
        let bytes = serde_json::to_vec(self)?;
        store.set(PREFERENCES_KEY, &bytes)
    }

    /// Record the values of a successfully saved entry
    pub fn remember(&mut self, start_time: NaiveTime, end_time: NaiveTime, hourly_rate_text: &str) {
        self.start_time = start_time;
        self.end_time = end_time;
        self.hourly_rate_text = hourly_rate_text.to_string();
    }
}
