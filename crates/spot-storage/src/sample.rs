//! Sample data used when no tracker file exists yet

use crate::error::StorageError;
use crate::json::tracker_from_json;
use spot_model::Tracker;
use std::path::Path;

const SAMPLE_TRACKER: &str = r#"{
  "spots": [
    {
      "name": "Central Library",
      "rating": 4,
      "operating_hours": "0800-2200, 1000-1800",
      "address": "12 Kent Ridge Crescent",
      "is_favourite": true,
      "tags": ["quiet", "spacious"],
      "amenities": ["wifi", "charger", "aircon"]
    },
    {
      "name": "Starbucks Cafe",
      "rating": 3,
      "operating_hours": "0700-2300",
      "address": "3 Science Drive",
      "tags": ["coffee"],
      "amenities": ["wifi", "food"]
    },
    {
      "name": "Science Library",
      "rating": 5,
      "address": "11 Lower Kent Ridge Road",
      "tags": ["quiet"],
      "amenities": ["aircon"]
    },
    {
      "name": "Town Plaza",
      "rating": 2,
      "address": "University Town",
      "tags": ["crowded"],
      "amenities": ["food", "charger"]
    }
  ]
}"#;

/// Tracker with a few sample spots
///
/// # Errors
/// Returns [`StorageError`] only if the bundled sample data is invalid.
pub fn sample_tracker() -> Result<Tracker, StorageError> {
    tracker_from_json(SAMPLE_TRACKER, Path::new("<sample data>"))
}
