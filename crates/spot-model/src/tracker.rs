//! Record store owning all study spots and the favourites subset
//!
//! [`Tracker`] keeps two [`UniqueList`]s in sync: every spot in
//! `favourites` is present by identity in `spots` with its favourite flag
//! set. Every mutator validates against both lists before touching either,
//! so a failed operation leaves the tracker unchanged.

use crate::error::ListError;
use crate::fields::{Name, StudiedHours};
use crate::spot::StudySpot;
use crate::unique_list::{Identity, UniqueList};

/// All study spots plus the mirrored favourites subset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tracker {
    spots: UniqueList<StudySpot>,
    favourites: UniqueList<StudySpot>,
}

impl Tracker {
    /// Create empty tracker
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tracker from stored spots
    ///
    /// The favourites subset is rebuilt from the spots' favourite flags.
    ///
    /// # Errors
    /// Returns [`ListError::Duplicate`] if two spots share an identity.
    pub fn from_spots(spots: Vec<StudySpot>) -> Result<Self, ListError> {
        let favourites: Vec<StudySpot> =
            spots.iter().filter(|s| s.is_favourite()).cloned().collect();
        Ok(Self {
            spots: UniqueList::from_items(spots)?,
            favourites: UniqueList::from_items(favourites)?,
        })
    }

    /// Replace all data with a copy of `other`
    pub fn reset_data(&mut self, other: &Tracker) {
        self.clone_from(other);
    }

    /// All spots in insertion order
    #[inline]
    #[must_use]
    pub fn spots(&self) -> &UniqueList<StudySpot> {
        &self.spots
    }

    /// Favourite spots in the order they were favourited
    #[inline]
    #[must_use]
    pub fn favourites(&self) -> &UniqueList<StudySpot> {
        &self.favourites
    }

    /// Check whether a spot with the same identity exists
    #[inline]
    #[must_use]
    pub fn has_spot(&self, spot: &StudySpot) -> bool {
        self.spots.contains(spot)
    }

    /// Look up a spot by name identity
    #[must_use]
    pub fn find_spot(&self, name: &Name) -> Option<&StudySpot> {
        self.spots.find(|spot| spot.name().is_same_identity(name))
    }

    /// Check whether `spot` is mirrored in favourites
    #[inline]
    #[must_use]
    pub fn is_mirrored_favourite(&self, spot: &StudySpot) -> bool {
        self.favourites.contains(spot)
    }

    /// Add a new spot
    ///
    /// A spot flagged as favourite is also added to favourites.
    ///
    /// # Errors
    /// Returns [`ListError::Duplicate`] if the identity is already present.
    pub fn add_spot(&mut self, spot: StudySpot) -> Result<(), ListError> {
        if self.spots.contains(&spot) {
            return Err(ListError::Duplicate);
        }
        if spot.is_favourite() {
            self.favourites.add(spot.clone())?;
        }
        self.spots.add(spot)?;
        tracing::debug!(total = self.spots.len(), "spot added");
        Ok(())
    }

    /// Remove the spot equal to `spot`
    ///
    /// The favourites mirror of the spot is removed too.
    ///
    /// # Errors
    /// Returns [`ListError::NotFound`] if no spot equals `spot`.
    pub fn remove_spot(&mut self, spot: &StudySpot) -> Result<(), ListError> {
        let removed = self.spots.remove(spot)?;
        if let Some(mirrored) = self.favourites.get(&removed).cloned() {
            self.favourites.remove(&mirrored)?;
        }
        tracing::debug!(total = self.spots.len(), "spot removed");
        Ok(())
    }

    /// Replace `target` with `edited`
    ///
    /// If `target` is mirrored in favourites the mirror is replaced by the
    /// same value.
    ///
    /// # Errors
    /// - [`ListError::NotFound`] if `target` is not present
    /// - [`ListError::Duplicate`] if `edited` collides with a different spot
    pub fn set_spot(&mut self, target: &StudySpot, edited: StudySpot) -> Result<(), ListError> {
        self.spots.check_set(target, &edited)?;
        let mirrored = self.favourites.contains(target);
        if mirrored {
            self.favourites.check_set(target, &edited)?;
            self.favourites.set(target, edited.clone())?;
        }
        self.spots.set(target, edited)?;
        Ok(())
    }

    /// Flag `target` as favourite and mirror it
    ///
    /// Returns the new value of the spot.
    ///
    /// # Errors
    /// - [`ListError::NotFound`] if `target` is not present
    /// - [`ListError::Duplicate`] if it is already mirrored in favourites
    pub fn add_favourite(&mut self, target: &StudySpot) -> Result<StudySpot, ListError> {
        let current = self.spots.get(target).ok_or(ListError::NotFound)?.clone();
        if self.favourites.contains(&current) {
            return Err(ListError::Duplicate);
        }

        let favourite = current.clone().with_favourite(true);
        self.spots.set(&current, favourite.clone())?;
        self.favourites.add(favourite.clone())?;
        tracing::debug!(favourites = self.favourites.len(), "favourite added");
        Ok(favourite)
    }

    /// Clear the favourite flag of `target` and drop its mirror
    ///
    /// Returns the new value of the spot.
    ///
    /// # Errors
    /// Returns [`ListError::NotFound`] if `target` is not present or not
    /// mirrored in favourites.
    pub fn remove_favourite(&mut self, target: &StudySpot) -> Result<StudySpot, ListError> {
        let current = self.spots.get(target).ok_or(ListError::NotFound)?.clone();
        let mirrored = self.favourites.get(&current).ok_or(ListError::NotFound)?.clone();

        let plain = current.clone().with_favourite(false);
        self.favourites.remove(&mirrored)?;
        self.spots.set(&current, plain.clone())?;
        tracing::debug!(favourites = self.favourites.len(), "favourite removed");
        Ok(plain)
    }

    /// Reset the studied hours of every spot to zero
    pub fn reset_all_hours(&mut self) {
        let reset = |spot: &StudySpot| spot.clone().with_studied_hours(StudiedHours::ZERO);
        self.spots.map_in_place(reset);
        self.favourites.map_in_place(reset);
    }

    /// Total number of spots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Address, Rating};
    use pretty_assertions::assert_eq;

    fn spot(name: &str) -> StudySpot {
        StudySpot::new(
            Name::new(name).unwrap(),
            Rating::new(4).unwrap(),
            Address::new("Central").unwrap(),
        )
    }

    fn names(list: &UniqueList<StudySpot>) -> Vec<&str> {
        list.iter().map(|s| s.name().as_str()).collect()
    }

    #[test]
    fn add_favourite_spot_mirrors_it() {
        let mut tracker = Tracker::new();
        tracker.add_spot(spot("Library").with_favourite(true)).unwrap();
        tracker.add_spot(spot("Cafe")).unwrap();

        assert_eq!(names(tracker.spots()), vec!["Library", "Cafe"]);
        assert_eq!(names(tracker.favourites()), vec!["Library"]);
    }

    #[test]
    fn add_duplicate_leaves_tracker_unchanged() {
        let mut tracker = Tracker::new();
        tracker.add_spot(spot("Library")).unwrap();
        let before = tracker.clone();

        let result = tracker.add_spot(spot("LIBRARY").with_favourite(true));
        assert_eq!(result, Err(ListError::Duplicate));
        assert_eq!(tracker, before);
    }

    #[test]
    fn set_spot_updates_favourite_mirror() {
        let mut tracker = Tracker::new();
        tracker.add_spot(spot("Library")).unwrap();
        let fav = tracker.add_favourite(&spot("Library")).unwrap();

        let edited = fav.clone().with_rating(Rating::new(5).unwrap());
        tracker.set_spot(&fav, edited.clone()).unwrap();

        assert_eq!(tracker.spots().as_slice(), &[edited.clone()]);
        assert_eq!(tracker.favourites().as_slice(), &[edited]);
    }

    #[test]
    fn set_spot_rejects_collision() {
        let mut tracker = Tracker::from_spots(vec![spot("Library"), spot("Cafe")]).unwrap();
        let before = tracker.clone();

        let result = tracker.set_spot(&spot("Cafe"), spot("library"));
        assert_eq!(result, Err(ListError::Duplicate));
        assert_eq!(tracker, before);
    }

    #[test]
    fn favourite_then_unfavourite() {
        let mut tracker = Tracker::from_spots(vec![spot("Library")]).unwrap();

        let fav = tracker.add_favourite(&spot("Library")).unwrap();
        assert!(fav.is_favourite());
        assert_eq!(tracker.add_favourite(&fav), Err(ListError::Duplicate));

        let plain = tracker.remove_favourite(&fav).unwrap();
        assert!(!plain.is_favourite());
        assert!(tracker.favourites().is_empty());
        assert_eq!(tracker.remove_favourite(&plain), Err(ListError::NotFound));
    }

    #[test]
    fn remove_spot_cascades_to_favourites() {
        let mut tracker = Tracker::new();
        tracker.add_spot(spot("Library").with_favourite(true)).unwrap();

        let stored = tracker.spots().as_slice()[0].clone();
        tracker.remove_spot(&stored).unwrap();

        assert!(tracker.is_empty());
        assert!(tracker.favourites().is_empty());
    }

    #[test]
    fn remove_spot_requires_exact_value() {
        let mut tracker = Tracker::from_spots(vec![spot("Library")]).unwrap();
        let different = spot("Library").with_rating(Rating::new(1).unwrap());

        assert_eq!(tracker.remove_spot(&different), Err(ListError::NotFound));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn from_spots_rebuilds_favourites() {
        let tracker = Tracker::from_spots(vec![
            spot("Library").with_favourite(true),
            spot("Cafe"),
            spot("Park").with_favourite(true),
        ])
        .unwrap();

        assert_eq!(names(tracker.favourites()), vec!["Library", "Park"]);
    }

    #[test]
    fn reset_all_hours_updates_both_lists() {
        let mut tracker = Tracker::from_spots(vec![
            spot("Library")
                .with_favourite(true)
                .with_studied_hours(StudiedHours::new(4)),
            spot("Cafe").with_studied_hours(StudiedHours::new(2)),
        ])
        .unwrap();

        tracker.reset_all_hours();

        assert!(tracker.spots().iter().all(|s| s.studied_hours() == StudiedHours::ZERO));
        assert_eq!(tracker.favourites().as_slice()[0], tracker.spots().as_slice()[0]);
    }

    #[test]
    fn find_spot_by_name_identity() {
        let tracker = Tracker::from_spots(vec![spot("Central Library")]).unwrap();
        let name = Name::new("central LIBRARY").unwrap();

        assert!(tracker.find_spot(&name).is_some());
        assert!(tracker.find_spot(&Name::new("Cafe").unwrap()).is_none());
    }
}
