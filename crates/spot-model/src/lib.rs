//! Study Spot Model
//!
//! Records, value objects and the identity-aware collections behind the
//! study spot tracker.
//!
//! # Overview
//!
//! - **StudySpot**: immutable record; identity is the case-insensitive name
//! - **UniqueList**: ordered list with no two same-identity elements
//! - **Tracker**: all spots plus the favourites subset, kept in sync
//! - **AliasTable**: user-defined command shorthands
//! - **Model**: tracker, preferences and the filtered view
//!
//! # Example
//!
//! ```rust
//! use spot_model::{Address, Name, Rating, StudySpot, Tracker};
//!
//! let mut tracker = Tracker::new();
//! let spot = StudySpot::new(
//!     Name::new("Central Library").unwrap(),
//!     Rating::new(4).unwrap(),
//!     Address::new("Main Campus").unwrap(),
//! );
//! tracker.add_spot(spot.clone()).unwrap();
//!
//! let favourite = tracker.add_favourite(&spot).unwrap();
//! assert!(tracker.favourites().contains(&favourite));
//! ```

#![warn(unreachable_pub)]

pub mod alias;
pub mod error;
pub mod fields;
pub mod filter;
pub mod model;
pub mod prefs;
pub mod spot;
pub mod tracker;
pub mod unique_list;

// Re-exports
pub use alias::{is_command_word, split_command_word, Alias, AliasTable, COMMAND_WORDS};
pub use error::{AliasError, FieldError, ListError};
pub use fields::{Address, Amenity, Name, OperatingHours, Rating, StudiedHours, Tag, TimeRange};
pub use filter::SpotFilter;
pub use model::Model;
pub use prefs::UserPrefs;
pub use spot::StudySpot;
pub use tracker::Tracker;
pub use unique_list::{Identity, UniqueList};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the model
    pub use crate::{
        Alias, AliasTable, Identity, Model, Name, SpotFilter, StudySpot, Tracker, UniqueList,
        UserPrefs,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
