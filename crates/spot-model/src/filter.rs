//! Predicates for the visible spot list

use crate::fields::{Amenity, Tag};
use crate::spot::StudySpot;
use std::collections::BTreeSet;

/// Selection and ordering of the visible spot list
///
/// The default filter shows every spot in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpotFilter {
    keywords: Vec<String>,
    favourites_only: bool,
    tags: BTreeSet<Tag>,
    amenities: BTreeSet<Amenity>,
    sort_by_hours: bool,
}

impl SpotFilter {
    /// Filter that shows every spot
    #[inline]
    #[must_use]
    pub fn show_all() -> Self {
        Self::default()
    }

    /// Match spots whose name contains any keyword, ignoring case
    #[must_use]
    pub fn name_keywords<S: AsRef<str>>(keywords: &[S]) -> Self {
        Self {
            keywords: keywords
                .iter()
                .map(|k| k.as_ref().trim().to_string())
                .filter(|k| !k.is_empty())
                .collect(),
            ..Self::default()
        }
    }

    /// Only favourite spots
    #[inline]
    #[must_use]
    pub fn favourites_only(mut self, enabled: bool) -> Self {
        self.favourites_only = enabled;
        self
    }

    /// Only spots carrying all of these tags
    #[inline]
    #[must_use]
    pub fn with_tags(mut self, tags: BTreeSet<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// Only spots offering all of these amenities
    #[inline]
    #[must_use]
    pub fn with_amenities(mut self, amenities: BTreeSet<Amenity>) -> Self {
        self.amenities = amenities;
        self
    }

    /// Order by studied hours, most first
    #[inline]
    #[must_use]
    pub fn sorted_by_hours(mut self, enabled: bool) -> Self {
        self.sort_by_hours = enabled;
        self
    }

    /// Check whether the filter shows everything unsorted
    #[must_use]
    pub fn is_show_all(&self) -> bool {
        *self == Self::default()
    }

    /// Test a single spot
    #[must_use]
    pub fn matches(&self, spot: &StudySpot) -> bool {
        (self.keywords.is_empty()
            || self.keywords.iter().any(|k| spot.name().contains_keyword(k)))
            && (!self.favourites_only || spot.is_favourite())
            && spot.has_all_tags(&self.tags)
            && spot.has_all_amenities(&self.amenities)
    }

    /// Select and order spots
    ///
    /// Sorting is stable, so spots with equal hours keep insertion order.
    pub fn apply<'a>(&self, spots: impl IntoIterator<Item = &'a StudySpot>) -> Vec<&'a StudySpot> {
        let mut selected: Vec<&StudySpot> =
            spots.into_iter().filter(|spot| self.matches(spot)).collect();
        if self.sort_by_hours {
            selected.sort_by(|a, b| b.studied_hours().cmp(&a.studied_hours()));
        }
        selected
    }
}
