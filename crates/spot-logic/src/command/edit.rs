use super::CommandResult;
use crate::error::CommandError;
use spot_model::{
    Address, Amenity, Identity, Model, Name, OperatingHours, Rating, SpotFilter, StudySpot, Tag,
};
use std::collections::BTreeSet;

/// Changes to apply to a study spot
///
/// Set-valued fields are edited incrementally: the spot's current set is
/// cleared first if `clear_*` is set, then additions are applied, then
/// removals. `clear_operating_hours` removes the hours altogether.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSpotDescriptor {
    pub name: Option<Name>,
    pub rating: Option<Rating>,
    pub address: Option<Address>,
    pub operating_hours: Option<OperatingHours>,
    pub clear_operating_hours: bool,
    pub clear_tags: bool,
    pub tags_to_add: BTreeSet<Tag>,
    pub tags_to_remove: BTreeSet<Tag>,
    pub clear_amenities: bool,
    pub amenities_to_add: BTreeSet<Amenity>,
    pub amenities_to_remove: BTreeSet<Amenity>,
}

impl EditSpotDescriptor {
    /// Check whether any field would change
    #[must_use]
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.rating.is_some()
            || self.address.is_some()
            || self.operating_hours.is_some()
            || self.clear_operating_hours
            || self.clear_tags
            || !self.tags_to_add.is_empty()
            || !self.tags_to_remove.is_empty()
            || self.clear_amenities
            || !self.amenities_to_add.is_empty()
            || !self.amenities_to_remove.is_empty()
    }

    /// Build the edited value of `spot`
    ///
    /// Studied hours and the favourite flag are carried over unchanged.
    #[must_use]
    pub fn apply(&self, spot: &StudySpot) -> StudySpot {
        let mut tags = if self.clear_tags {
            BTreeSet::new()
        } else {
            spot.tags().clone()
        };
        tags.extend(self.tags_to_add.iter().cloned());
        tags.retain(|tag| !self.tags_to_remove.contains(tag));

        let mut amenities = if self.clear_amenities {
            BTreeSet::new()
        } else {
            spot.amenities().clone()
        };
        amenities.extend(self.amenities_to_add.iter().copied());
        amenities.retain(|amenity| !self.amenities_to_remove.contains(amenity));

        let operating_hours = if self.clear_operating_hours {
            None
        } else {
            self.operating_hours.or(spot.operating_hours().copied())
        };

        spot.clone()
            .with_name(self.name.clone().unwrap_or_else(|| spot.name().clone()))
            .with_rating(self.rating.unwrap_or(spot.rating()))
            .with_address(self.address.clone().unwrap_or_else(|| spot.address().clone()))
            .with_operating_hours(operating_hours)
            .with_tags(tags)
            .with_amenities(amenities)
    }
}

/// Edits the study spot with the given name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    target: Name,
    descriptor: EditSpotDescriptor,
}

impl EditCommand {
    pub const WORD: &'static str = "edit";
    pub const USAGE: &'static str = "edit: Edits the details of the study spot identified by its name. \
        Existing values will be overwritten by the input values. \
        t/ and m/ add tags and amenities, rt/ and rm/ remove them, an empty t/ or m/ clears them. \
        An empty o/ removes the operating hours.\n\
        Parameters: spot/NAME [n/NAME] [r/RATING] [a/ADDRESS] [o/OPERATING_HOURS] \
        [t/TAG]... [rt/TAG]... [m/AMENITY]... [rm/AMENITY]...\n\
        Example: edit spot/Central Library r/5 rt/crowded";

    #[inline]
    #[must_use]
    pub fn new(target: Name, descriptor: EditSpotDescriptor) -> Self {
        Self { target, descriptor }
    }

    /// Name of the spot to edit
    #[inline]
    #[must_use]
    pub fn target(&self) -> &Name {
        &self.target
    }

    #[inline]
    #[must_use]
    pub fn descriptor(&self) -> &EditSpotDescriptor {
        &self.descriptor
    }

    pub(crate) fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = model
            .tracker()
            .find_spot(&self.target)
            .cloned()
            .ok_or_else(|| CommandError::SpotNotFound(self.target.to_string()))?;

        let edited = self.descriptor.apply(&target);
        if !target.is_same_identity(&edited) && model.tracker().has_spot(&edited) {
            return Err(CommandError::DuplicateSpot);
        }

        model.tracker_mut().set_spot(&target, edited.clone())?;
        model.update_filter(SpotFilter::show_all());
        tracing::info!(spot = %target.name(), edited = %edited.name(), "study spot edited");

        Ok(CommandResult::message(format!("Edited study spot: {edited}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use spot_test_utils::SpotBuilder;

    fn model_with(spots: Vec<StudySpot>) -> Model {
        let mut model = Model::default();
        for spot in spots {
            model.tracker_mut().add_spot(spot).unwrap();
        }
        model
    }

    fn tag(raw: &str) -> Tag {
        Tag::new(raw).unwrap()
    }

    #[test]
    fn edit_favourite_keeps_mirror_in_sync() {
        let mut model = model_with(vec![SpotBuilder::new("Library").favourite().build()]);
        let descriptor = EditSpotDescriptor {
            rating: Some(Rating::new(5).unwrap()),
            ..Default::default()
        };

        EditCommand::new(Name::new("Library").unwrap(), descriptor)
            .execute(&mut model)
            .unwrap();

        let favourites = model.tracker().favourites();
        assert_eq!(favourites.len(), 1);
        assert_eq!(favourites.as_slice()[0].rating().value(), 5);
        assert_eq!(favourites.as_slice(), model.tracker().spots().as_slice());
    }

    #[test]
    fn edit_rejects_collision_with_other_spot() {
        let mut model = model_with(vec![
            SpotBuilder::new("Library").build(),
            SpotBuilder::new("Cafe").build(),
        ]);
        let descriptor = EditSpotDescriptor {
            name: Some(Name::new("CAFE").unwrap()),
            ..Default::default()
        };

        let result = EditCommand::new(Name::new("Library").unwrap(), descriptor).execute(&mut model);
        assert_eq!(result, Err(CommandError::DuplicateSpot));
    }

    #[test]
    fn edit_allows_renaming_case_of_same_spot() {
        let mut model = model_with(vec![SpotBuilder::new("library").build()]);
        let descriptor = EditSpotDescriptor {
            name: Some(Name::new("Library").unwrap()),
            ..Default::default()
        };

        EditCommand::new(Name::new("library").unwrap(), descriptor)
            .execute(&mut model)
            .unwrap();
        assert_eq!(model.tracker().spots().as_slice()[0].name().as_str(), "Library");
    }

    #[test]
    fn edit_missing_spot() {
        let mut model = Model::default();
        let descriptor = EditSpotDescriptor {
            rating: Some(Rating::new(1).unwrap()),
            ..Default::default()
        };
        let result = EditCommand::new(Name::new("Nowhere").unwrap(), descriptor).execute(&mut model);
        assert!(matches!(result, Err(CommandError::SpotNotFound(_))));
    }

    #[test]
    fn descriptor_edits_sets_incrementally() {
        let spot = SpotBuilder::new("Library")
            .tags(&["quiet", "crowded"])
            .amenities(&[Amenity::Wifi])
            .build();

        let descriptor = EditSpotDescriptor {
            tags_to_add: BTreeSet::from([tag("cold")]),
            tags_to_remove: BTreeSet::from([tag("crowded")]),
            amenities_to_add: BTreeSet::from([Amenity::Food]),
            ..Default::default()
        };
        let edited = descriptor.apply(&spot);

        assert_eq!(edited.tags(), &BTreeSet::from([tag("cold"), tag("quiet")]));
        assert_eq!(edited.amenities(), &BTreeSet::from([Amenity::Food, Amenity::Wifi]));
    }

    #[test]
    fn descriptor_clear_then_add() {
        let spot = SpotBuilder::new("Library").tags(&["quiet", "crowded"]).build();
        let descriptor = EditSpotDescriptor {
            clear_tags: true,
            tags_to_add: BTreeSet::from([tag("new")]),
            ..Default::default()
        };

        assert_eq!(descriptor.apply(&spot).tags(), &BTreeSet::from([tag("new")]));
    }

    #[test]
    fn descriptor_clears_operating_hours() {
        let spot = SpotBuilder::new("Library").hours("0900-2200").build();
        let descriptor = EditSpotDescriptor {
            clear_operating_hours: true,
            ..Default::default()
        };

        assert!(descriptor.is_any_field_edited());
        assert_eq!(descriptor.apply(&spot).operating_hours(), None);

        let kept = EditSpotDescriptor {
            rating: Some(Rating::new(2).unwrap()),
            ..Default::default()
        };
        assert_eq!(kept.apply(&spot).operating_hours(), spot.operating_hours());
    }

    #[test]
    fn descriptor_preserves_hours_and_favourite() {
        let spot = SpotBuilder::new("Library").favourite().studied(12).build();
        let descriptor = EditSpotDescriptor {
            address: Some(Address::new("Elsewhere").unwrap()),
            ..Default::default()
        };
        let edited = descriptor.apply(&spot);

        assert!(edited.is_favourite());
        assert_eq!(edited.studied_hours().value(), 12);
        assert!(descriptor.is_any_field_edited());
        assert!(!EditSpotDescriptor::default().is_any_field_edited());
    }
}
