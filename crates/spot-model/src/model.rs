//! In-memory model operated on by commands
//!
//! [`Model`] owns the [`Tracker`], the [`UserPrefs`] (including the alias
//! table) and the current [`SpotFilter`]. The filtered view is a read-only
//! projection recomputed from the tracker on every access.

use crate::alias::AliasTable;
use crate::fields::Name;
use crate::filter::SpotFilter;
use crate::prefs::UserPrefs;
use crate::spot::StudySpot;
use crate::tracker::Tracker;

/// State of a single session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    tracker: Tracker,
    prefs: UserPrefs,
    filter: SpotFilter,
}

impl Model {
    /// Create model from loaded data
    #[inline]
    #[must_use]
    pub fn new(tracker: Tracker, prefs: UserPrefs) -> Self {
        Self {
            tracker,
            prefs,
            filter: SpotFilter::show_all(),
        }
    }

    #[inline]
    #[must_use]
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    #[inline]
    pub fn tracker_mut(&mut self) -> &mut Tracker {
        &mut self.tracker
    }

    /// Replace all tracker data and show every spot
    pub fn set_tracker(&mut self, tracker: &Tracker) {
        self.tracker.reset_data(tracker);
        self.filter = SpotFilter::show_all();
    }

    #[inline]
    #[must_use]
    pub fn prefs(&self) -> &UserPrefs {
        &self.prefs
    }

    #[inline]
    #[must_use]
    pub fn aliases(&self) -> &AliasTable {
        &self.prefs.aliases
    }

    #[inline]
    pub fn aliases_mut(&mut self) -> &mut AliasTable {
        &mut self.prefs.aliases
    }

    /// Current filter of the visible list
    #[inline]
    #[must_use]
    pub fn filter(&self) -> &SpotFilter {
        &self.filter
    }

    /// Change the visible list
    pub fn update_filter(&mut self, filter: SpotFilter) {
        self.filter = filter;
    }

    /// Spots currently visible
    #[must_use]
    pub fn filtered_spots(&self) -> Vec<&StudySpot> {
        self.filter.apply(self.tracker.spots())
    }

    /// Visible spot with the given name identity
    #[must_use]
    pub fn find_visible(&self, name: &Name) -> Option<&StudySpot> {
        self.tracker
            .spots()
            .iter()
            .filter(|spot| self.filter.matches(spot))
            .find(|spot| spot.name().is_same_identity(name))
    }
}
