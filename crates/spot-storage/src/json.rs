//! JSON file storage for the tracker and preferences

use crate::error::StorageError;
use crate::{PrefsStorage, TrackerStorage};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use spot_model::{StudySpot, Tracker, UserPrefs};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// On-disk shape of the tracker
///
/// Only `spots` is stored; the favourites subset is rebuilt from the
/// favourite flags on load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SerializableTracker {
    #[serde(default)]
    pub spots: Vec<StudySpot>,
}

impl SerializableTracker {
    /// Convert to a tracker, rejecting duplicate spots
    ///
    /// # Errors
    /// Returns [`StorageError::DataConversion`] if two spots share a name.
    pub fn into_tracker(self) -> Result<Tracker, StorageError> {
        Tracker::from_spots(self.spots).map_err(|_| {
            StorageError::DataConversion("spots list contains duplicate study spot(s)".to_string())
        })
    }
}

impl From<&Tracker> for SerializableTracker {
    fn from(tracker: &Tracker) -> Self {
        Self {
            spots: tracker.spots().iter().cloned().collect(),
        }
    }
}

/// Parse tracker JSON text
///
/// # Errors
/// Returns [`StorageError`] if the text is malformed or the data is invalid.
pub fn tracker_from_json(text: &str, origin: &Path) -> Result<Tracker, StorageError> {
    serde_json::from_str::<SerializableTracker>(text)
        .map_err(|e| StorageError::json(origin, e))?
        .into_tracker()
}

/// Read and deserialize a JSON file; `None` if it does not exist
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StorageError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "data file not found");
            return Ok(None);
        }
        Err(e) => return Err(StorageError::io(path, e)),
    };

    serde_json::from_str(&text)
        .map(Some)
        .map_err(|e| StorageError::json(path, e))
}

/// Serialize to pretty JSON and write, creating parent directories
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
    }

    let text = serde_json::to_string_pretty(value).map_err(|e| StorageError::json(path, e))?;
    fs::write(path, text).map_err(|e| StorageError::io(path, e))?;
    tracing::debug!(path = %path.display(), "saved json file");
    Ok(())
}

/// Tracker stored as a JSON file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonTrackerStorage {
    path: PathBuf,
}

impl JsonTrackerStorage {
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TrackerStorage for JsonTrackerStorage {
    fn tracker_path(&self) -> &Path {
        &self.path
    }

    fn load_tracker(&self) -> Result<Option<Tracker>, StorageError> {
        read_json::<SerializableTracker>(&self.path)?
            .map(SerializableTracker::into_tracker)
            .transpose()
    }

    fn save_tracker(&self, tracker: &Tracker) -> Result<(), StorageError> {
        write_json(&self.path, &SerializableTracker::from(tracker))
    }
}

/// Preferences stored as a JSON file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPrefsStorage {
    path: PathBuf,
}

impl JsonPrefsStorage {
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PrefsStorage for JsonPrefsStorage {
    fn prefs_path(&self) -> &Path {
        &self.path
    }

    fn load_prefs(&self) -> Result<Option<UserPrefs>, StorageError> {
        read_json(&self.path)
    }

    fn save_prefs(&self, prefs: &UserPrefs) -> Result<(), StorageError> {
        write_json(&self.path, prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use spot_model::{Alias, AliasTable};
    use spot_test_utils::{typical_tracker, SpotBuilder};
    use tempfile::TempDir;

    #[test]
    fn tracker_round_trip_rebuilds_favourites() {
        let dir = TempDir::new().unwrap();
        let storage = JsonTrackerStorage::new(dir.path().join("nested/tracker.json"));
        let tracker = typical_tracker();

        storage.save_tracker(&tracker).unwrap();
        let loaded = storage.load_tracker().unwrap().unwrap();

        assert_eq!(loaded.spots().as_slice(), tracker.spots().as_slice());
        assert_eq!(loaded.favourites().len(), tracker.favourites().len());
        assert!(loaded.favourites().iter().all(StudySpot::is_favourite));
    }

    #[test]
    fn missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let storage = JsonTrackerStorage::new(dir.path().join("absent.json"));
        assert!(storage.load_tracker().unwrap().is_none());

        let prefs = JsonPrefsStorage::new(dir.path().join("absent.json"));
        assert!(prefs.load_prefs().unwrap().is_none());
    }

    #[test]
    fn duplicate_spots_rejected() {
        let spots = vec![
            SpotBuilder::new("Library").build(),
            SpotBuilder::new("LIBRARY").rating(2).build(),
        ];
        let text = serde_json::to_string(&SerializableTracker { spots }).unwrap();

        let err = tracker_from_json(&text, Path::new("t.json")).unwrap_err();
        assert!(matches!(err, StorageError::DataConversion(_)));
    }

    #[test]
    fn invalid_field_is_data_conversion() {
        let text = r#"{"spots":[{"name":"Library","rating":9,"address":"Central"}]}"#;
        let err = tracker_from_json(text, Path::new("t.json")).unwrap_err();
        assert!(matches!(err, StorageError::DataConversion(_)));
    }

    #[test]
    fn malformed_json_is_json_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tracker.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonTrackerStorage::new(&path).load_tracker().unwrap_err();
        assert!(matches!(err, StorageError::Json { .. }));
    }

    #[test]
    fn prefs_round_trip_keeps_alias_order() {
        let dir = TempDir::new().unwrap();
        let storage = JsonPrefsStorage::new(dir.path().join("prefs.json"));
        let aliases: AliasTable = vec![
            Alias::new("ls", "list").unwrap(),
            Alias::new("lf", "list -f").unwrap(),
        ]
        .into();
        let prefs = UserPrefs::new().with_aliases(aliases);

        storage.save_prefs(&prefs).unwrap();
        assert_eq!(storage.load_prefs().unwrap(), Some(prefs));
    }
}
