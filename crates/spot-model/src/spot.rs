//! Study spot record
//!
//! Provides [`StudySpot`], an immutable value. Every change produces a new
//! value through the consuming `with_*` methods; the owning collection then
//! replaces the old value with the new one.

use crate::fields::{Address, Amenity, Name, OperatingHours, Rating, StudiedHours, Tag};
use crate::unique_list::Identity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

/// A named place to study
///
/// Identity is the name (see [`Identity::is_same_identity`]); equality
/// compares every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySpot {
    name: Name,
    rating: Rating,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    operating_hours: Option<OperatingHours>,
    address: Address,
    #[serde(default)]
    studied_hours: StudiedHours,
    #[serde(default)]
    is_favourite: bool,
    #[serde(default)]
    tags: BTreeSet<Tag>,
    #[serde(default)]
    amenities: BTreeSet<Amenity>,
}

impl StudySpot {
    /// Create spot with required fields
    #[inline]
    #[must_use]
    pub fn new(name: Name, rating: Rating, address: Address) -> Self {
        Self {
            name,
            rating,
            operating_hours: None,
            address,
            studied_hours: StudiedHours::ZERO,
            is_favourite: false,
            tags: BTreeSet::new(),
            amenities: BTreeSet::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &Name {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn rating(&self) -> Rating {
        self.rating
    }

    #[inline]
    #[must_use]
    pub fn operating_hours(&self) -> Option<&OperatingHours> {
        self.operating_hours.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn address(&self) -> &Address {
        &self.address
    }

    #[inline]
    #[must_use]
    pub fn studied_hours(&self) -> StudiedHours {
        self.studied_hours
    }

    #[inline]
    #[must_use]
    pub fn is_favourite(&self) -> bool {
        self.is_favourite
    }

    #[inline]
    #[must_use]
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    #[inline]
    #[must_use]
    pub fn amenities(&self) -> &BTreeSet<Amenity> {
        &self.amenities
    }

    /// With a different name
    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: Name) -> Self {
        self.name = name;
        self
    }

    /// With a different rating
    #[inline]
    #[must_use]
    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = rating;
        self
    }

    /// With a different address
    #[inline]
    #[must_use]
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    /// With operating hours (or none)
    #[inline]
    #[must_use]
    pub fn with_operating_hours(mut self, hours: Option<OperatingHours>) -> Self {
        self.operating_hours = hours;
        self
    }

    /// With a studied hours counter
    #[inline]
    #[must_use]
    pub fn with_studied_hours(mut self, hours: StudiedHours) -> Self {
        self.studied_hours = hours;
        self
    }

    /// With the favourite flag set or cleared
    #[inline]
    #[must_use]
    pub fn with_favourite(mut self, is_favourite: bool) -> Self {
        self.is_favourite = is_favourite;
        self
    }

    /// With a replaced tag set
    #[inline]
    #[must_use]
    pub fn with_tags(mut self, tags: BTreeSet<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// With a replaced amenity set
    #[inline]
    #[must_use]
    pub fn with_amenities(mut self, amenities: BTreeSet<Amenity>) -> Self {
        self.amenities = amenities;
        self
    }

    /// Check whether the spot carries every given tag
    #[must_use]
    pub fn has_all_tags<'a>(&self, tags: impl IntoIterator<Item = &'a Tag>) -> bool {
        tags.into_iter().all(|tag| self.tags.contains(tag))
    }

    /// Check whether the spot offers every given amenity
    #[must_use]
    pub fn has_all_amenities<'a>(&self, amenities: impl IntoIterator<Item = &'a Amenity>) -> bool {
        amenities.into_iter().all(|amenity| self.amenities.contains(amenity))
    }
}

impl Identity for StudySpot {
    fn is_same_identity(&self, other: &Self) -> bool {
        self.name.is_same_identity(&other.name)
    }
}

impl Display for StudySpot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}; Rating: {}", self.name, self.rating)?;
        if let Some(hours) = &self.operating_hours {
            write!(f, "; Operating Hours: {hours}")?;
        }
        write!(
            f,
            "; Address: {}; Studied Hours: {}",
            self.address, self.studied_hours
        )?;
        if self.is_favourite {
            f.write_str("; Favourite")?;
        }
        if !self.tags.is_empty() {
            f.write_str("; Tags: ")?;
            for tag in &self.tags {
                write!(f, "{tag}")?;
            }
        }
        if !self.amenities.is_empty() {
            let amenities: Vec<&str> = self.amenities.iter().map(Amenity::as_str).collect();
            write!(f, "; Amenities: {}", amenities.join(", "))?;
        }
        Ok(())
    }
}
