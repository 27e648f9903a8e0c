//! Application configuration
//!
//! Loaded from a TOML file. Every key is optional; a missing file yields the
//! defaults.
//!
//! ```toml
//! data_file = "data/studytracker.json"
//! prefs_file = "preferences.json"
//! log_level = "info"
//! ```

use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Paths and logging settings of the application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Tracker data file
    pub data_file: PathBuf,
    /// User preferences file
    pub prefs_file: PathBuf,
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data/studytracker.json"),
            prefs_file: PathBuf::from("preferences.json"),
            log_level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With tracker data file
    #[inline]
    #[must_use]
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    /// With preferences file
    #[inline]
    #[must_use]
    pub fn with_prefs_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.prefs_file = path.into();
        self
    }

    /// With log level
    #[inline]
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Load from a TOML file, falling back to defaults if it does not exist
    ///
    /// # Errors
    /// Returns [`StorageError::Config`] if the file exists but cannot be read
    /// or parsed.
    pub fn load(path: &Path) -> Result<Self, StorageError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(StorageError::config(path, e.to_string())),
        };

        toml::from_str(&text).map_err(|e| StorageError::config(path, e.to_string()))
    }

    /// Write as TOML
    ///
    /// # Errors
    /// Returns [`StorageError`] if serializing or writing fails.
    pub fn save(&self, path: &Path) -> Result<(), StorageError> {
        let text = toml::to_string_pretty(self).map_err(|e| StorageError::config(path, e.to_string()))?;
        fs::write(path, text).map_err(|e| StorageError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load(&dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "log_level = \"debug\"\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.data_file, AppConfig::default().data_file);
    }

    #[test]
    fn round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let config = AppConfig::new()
            .with_data_file("spots.json")
            .with_prefs_file("prefs.json")
            .with_log_level("info");

        config.save(&path).unwrap();
        assert_eq!(AppConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "data_file = [1, 2").unwrap();

        assert!(matches!(
            AppConfig::load(&path),
            Err(StorageError::Config { .. })
        ));
    }
}
