//! Study Spot Storage
//!
//! Persists the tracker and user preferences as JSON files and loads the
//! application configuration from TOML.
//!
//! # Overview
//!
//! - **TrackerStorage / PrefsStorage**: load and save one kind of data
//! - **StorageManager**: both, backed by JSON files
//! - **AppConfig**: file locations and log level

#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod json;
pub mod sample;

pub use config::{AppConfig, DEFAULT_CONFIG_FILE};
pub use error::StorageError;
pub use json::{JsonPrefsStorage, JsonTrackerStorage, SerializableTracker};
pub use sample::sample_tracker;

use spot_model::{Tracker, UserPrefs};
use std::path::Path;

/// Loads and saves the tracker
pub trait TrackerStorage {
    /// File backing the tracker
    fn tracker_path(&self) -> &Path;

    /// Load the tracker; `None` if nothing has been saved yet
    ///
    /// # Errors
    /// Returns [`StorageError`] if the data exists but cannot be read or
    /// converted.
    fn load_tracker(&self) -> Result<Option<Tracker>, StorageError>;

    /// Save the tracker
    ///
    /// # Errors
    /// Returns [`StorageError`] if writing fails.
    fn save_tracker(&self, tracker: &Tracker) -> Result<(), StorageError>;
}

/// Loads and saves user preferences
pub trait PrefsStorage {
    /// File backing the preferences
    fn prefs_path(&self) -> &Path;

    /// Load preferences; `None` if nothing has been saved yet
    ///
    /// # Errors
    /// Returns [`StorageError`] if the data exists but cannot be read.
    fn load_prefs(&self) -> Result<Option<UserPrefs>, StorageError>;

    /// Save preferences
    ///
    /// # Errors
    /// Returns [`StorageError`] if writing fails.
    fn save_prefs(&self, prefs: &UserPrefs) -> Result<(), StorageError>;
}

/// Storage for everything a session persists
pub trait Storage: TrackerStorage + PrefsStorage {}

impl<T: TrackerStorage + PrefsStorage> Storage for T {}

/// JSON-file storage of tracker and preferences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageManager {
    tracker: JsonTrackerStorage,
    prefs: JsonPrefsStorage,
}

impl StorageManager {
    #[inline]
    #[must_use]
    pub fn new(tracker: JsonTrackerStorage, prefs: JsonPrefsStorage) -> Self {
        Self { tracker, prefs }
    }

    /// Create storage at the locations named by `config`
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            JsonTrackerStorage::new(&config.data_file),
            JsonPrefsStorage::new(&config.prefs_file),
        )
    }
}

impl TrackerStorage for StorageManager {
    fn tracker_path(&self) -> &Path {
        self.tracker.tracker_path()
    }

    fn load_tracker(&self) -> Result<Option<Tracker>, StorageError> {
        self.tracker.load_tracker()
    }

    fn save_tracker(&self, tracker: &Tracker) -> Result<(), StorageError> {
        self.tracker.save_tracker(tracker)
    }
}

impl PrefsStorage for StorageManager {
    fn prefs_path(&self) -> &Path {
        self.prefs.prefs_path()
    }

    fn load_prefs(&self) -> Result<Option<UserPrefs>, StorageError> {
        self.prefs.load_prefs()
    }

    fn save_prefs(&self, prefs: &UserPrefs) -> Result<(), StorageError> {
        self.prefs.save_prefs(prefs)
    }
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
