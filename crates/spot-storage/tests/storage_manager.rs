//! StorageManager against real files

use pretty_assertions::assert_eq;
use spot_model::{Alias, UserPrefs};
use spot_storage::{
    sample_tracker, AppConfig, PrefsStorage, StorageError, StorageManager, TrackerStorage,
};
use spot_test_utils::typical_tracker;
use std::fs;
use tempfile::TempDir;

fn manager_in(dir: &TempDir) -> StorageManager {
    let config = AppConfig::new()
        .with_data_file(dir.path().join("data/tracker.json"))
        .with_prefs_file(dir.path().join("prefs.json"));
    StorageManager::from_config(&config)
}

#[test]
fn fresh_directory_has_nothing_saved() {
    let dir = TempDir::new().unwrap();
    let storage = manager_in(&dir);

    assert!(storage.load_tracker().unwrap().is_none());
    assert!(storage.load_prefs().unwrap().is_none());
}

#[test]
fn saves_and_reloads_session_data() {
    let dir = TempDir::new().unwrap();
    let storage = manager_in(&dir);
    let tracker = typical_tracker();
    let mut prefs = UserPrefs::new();
    prefs.aliases.upsert(Alias::new("ls", "list -s").unwrap());

    storage.save_tracker(&tracker).unwrap();
    storage.save_prefs(&prefs).unwrap();

    let reloaded = manager_in(&dir);
    assert_eq!(reloaded.load_tracker().unwrap(), Some(tracker));
    assert_eq!(reloaded.load_prefs().unwrap(), Some(prefs));
}

#[test]
fn sample_tracker_saves_cleanly() {
    let dir = TempDir::new().unwrap();
    let storage = manager_in(&dir);
    let sample = sample_tracker().unwrap();

    storage.save_tracker(&sample).unwrap();
    assert_eq!(storage.load_tracker().unwrap(), Some(sample));
}

#[test]
fn invalid_alias_in_prefs_is_data_conversion() {
    let dir = TempDir::new().unwrap();
    let storage = manager_in(&dir);
    fs::write(
        storage.prefs_path(),
        r#"{"aliases":[{"alias":"list","command":"find x"}]}"#,
    )
    .unwrap();

    assert!(matches!(
        storage.load_prefs(),
        Err(StorageError::DataConversion(_))
    ));
}
