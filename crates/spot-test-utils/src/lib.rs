//! Testing utilities for the study spot tracker workspace
//!
//! Shared fixtures and builders.

#![allow(missing_docs)]

use spot_model::{
    Address, Amenity, Model, Name, OperatingHours, Rating, StudiedHours, StudySpot, Tag, Tracker,
    UserPrefs,
};

/// Builds a [`StudySpot`] with sensible defaults
///
/// Panics on invalid field values, which is what a test wants.
#[derive(Debug, Clone)]
pub struct SpotBuilder {
    name: String,
    rating: u8,
    address: String,
    hours: Option<String>,
    tags: Vec<String>,
    amenities: Vec<Amenity>,
    favourite: bool,
    studied: u32,
}

impl SpotBuilder {
    pub const DEFAULT_RATING: u8 = 4;
    pub const DEFAULT_ADDRESS: &'static str = "Main Campus";

    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rating: Self::DEFAULT_RATING,
            address: Self::DEFAULT_ADDRESS.to_string(),
            hours: None,
            tags: Vec::new(),
            amenities: Vec::new(),
            favourite: false,
            studied: 0,
        }
    }

    pub fn rating(mut self, rating: u8) -> Self {
        self.rating = rating;
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    pub fn hours(mut self, hours: &str) -> Self {
        self.hours = Some(hours.to_string());
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn amenities(mut self, amenities: &[Amenity]) -> Self {
        self.amenities = amenities.to_vec();
        self
    }

    pub fn favourite(mut self) -> Self {
        self.favourite = true;
        self
    }

    pub fn studied(mut self, hours: u32) -> Self {
        self.studied = hours;
        self
    }

    pub fn build(self) -> StudySpot {
        StudySpot::new(
            Name::new(&self.name).unwrap(),
            Rating::new(self.rating).unwrap(),
            Address::new(&self.address).unwrap(),
        )
        .with_operating_hours(self.hours.map(|h| OperatingHours::new(&h).unwrap()))
        .with_tags(self.tags.iter().map(|t| Tag::new(t).unwrap()).collect())
        .with_amenities(self.amenities.into_iter().collect())
        .with_favourite(self.favourite)
        .with_studied_hours(StudiedHours::new(self.studied))
    }
}

/// Spots covering favourites, tags, amenities and logged hours
pub fn typical_spots() -> Vec<StudySpot> {
    vec![
        SpotBuilder::new("Central Library")
            .rating(5)
            .address("12 Kent Ridge Crescent")
            .hours("0800-2200, 1000-1800")
            .tags(&["quiet", "spacious"])
            .amenities(&[Amenity::Wifi, Amenity::Charger, Amenity::Aircon])
            .favourite()
            .studied(12)
            .build(),
        SpotBuilder::new("Starbucks Cafe")
            .rating(3)
            .address("3 Science Drive")
            .tags(&["coffee"])
            .amenities(&[Amenity::Wifi, Amenity::Food])
            .studied(4)
            .build(),
        SpotBuilder::new("Science Library")
            .rating(4)
            .tags(&["quiet"])
            .amenities(&[Amenity::Aircon])
            .favourite()
            .studied(20)
            .build(),
        SpotBuilder::new("Town Plaza")
            .rating(2)
            .address("University Town")
            .tags(&["crowded"])
            .amenities(&[Amenity::Food, Amenity::Charger])
            .build(),
        SpotBuilder::new("Hall Lounge")
            .rating(3)
            .address("Residence Block 4")
            .amenities(&[Amenity::Wifi, Amenity::Food, Amenity::Aircon])
            .studied(4)
            .build(),
    ]
}

pub fn typical_tracker() -> Tracker {
    Tracker::from_spots(typical_spots()).unwrap()
}

pub fn typical_model() -> Model {
    Model::new(typical_tracker(), UserPrefs::new())
}
