//! Tracker directory discovery and layout

use crate::error::{Result, WorkTrackError};
use crate::infrastructure::config::{Config, DATA_DIR};
use crate::infrastructure::kv_store::FileKeyValueStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at the tracker root
pub const ROOT_ENV: &str = "WORKTRACK_ROOT";

/// Abstract repository for tracker operations
pub trait TrackerRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .worktrack/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .worktrack/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .worktrack directory exists
    fn is_initialized(&self) -> bool;

    /// Create .worktrack directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of TrackerRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Find the tracker root: WORKTRACK_ROOT first, then walk up from the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_data_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(WorkTrackError::Config(format!(
                    "{} is set to '{}' but no {} directory found. \
                    Run 'worktrack init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    DATA_DIR,
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing .worktrack is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_data_dir(dir))
            .map(|dir| FileSystemRepository::new(dir.to_path_buf()))
            .ok_or_else(|| WorkTrackError::NotWorkTrackDirectory(start.to_path_buf()))
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR)
    }

    /// Key-value store kept inside the data directory
    pub fn kv_store(&self) -> FileKeyValueStore {
        FileKeyValueStore::new(self.data_dir())
    }

    fn has_data_dir(path: &Path) -> bool {
        path.join(DATA_DIR).is_dir()
    }
}

impl TrackerRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_data_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let data_dir = self.data_dir();

        if data_dir.exists() {
            return Err(WorkTrackError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&data_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_data_dir() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());
        repo.initialize().unwrap();
        assert!(repo.is_initialized());
        assert!(temp.path().join(".worktrack").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();
        assert!(repo.initialize().is_err());
    }

    #[test]
    fn test_discover_from_nested_directory() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let nested = temp.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();

        let found = FileSystemRepository::discover_from(&nested).unwrap();
        assert_eq!(found.root, temp.path());
    }

    #[test]
    fn test_discover_without_data_dir_fails() {
        let temp = TempDir::new().unwrap();
        match FileSystemRepository::discover_from(temp.path()) {
            Err(WorkTrackError::NotWorkTrackDirectory(path)) => assert_eq!(path, temp.path()),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(found) => {
                // A .worktrack directory above the temp dir would satisfy discovery
                assert_ne!(found.root, temp.path());
            }
        }
    }

    #[test]
    fn test_config_round_trip_through_repository() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let config = Config::new(chrono::Weekday::Sun, "PLN");
        repo.save_config(&config).unwrap();
        assert_eq!(
            repo.load_config().unwrap().first_weekday,
            chrono::Weekday::Sun
        );
    }

    #[test]
    fn test_kv_store_lives_in_data_dir() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        assert_eq!(repo.kv_store().dir(), temp.path().join(".worktrack"));
    }
}
