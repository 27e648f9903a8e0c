use super::{spots_listed, CommandResult};
use spot_model::{Amenity, Model, SpotFilter, Tag};
use std::collections::BTreeSet;

/// Shows spots, optionally narrowed to favourites, tags and amenities
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCommand {
    favourites_only: bool,
    sort_by_hours: bool,
    tags: BTreeSet<Tag>,
    amenities: BTreeSet<Amenity>,
}

impl ListCommand {
    pub const WORD: &'static str = "list";
    pub const USAGE: &'static str = "list: Lists study spots. -f shows only favourites, \
        -s sorts by studied hours, tags and amenities must all be present.\n\
        Parameters: [-f] [-s] [t/TAG]... [m/AMENITY]...\n\
        Example: list -f t/quiet m/wifi";

    pub const SHOW_ALL_MESSAGE: &'static str = "Listed all study spots";

    /// List every spot
    #[inline]
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn favourites_only(mut self, enabled: bool) -> Self {
        self.favourites_only = enabled;
        self
    }

    #[inline]
    #[must_use]
    pub fn sorted_by_hours(mut self, enabled: bool) -> Self {
        self.sort_by_hours = enabled;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_tags(mut self, tags: BTreeSet<Tag>) -> Self {
        self.tags = tags;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_amenities(mut self, amenities: BTreeSet<Amenity>) -> Self {
        self.amenities = amenities;
        self
    }

    fn filter(&self) -> SpotFilter {
        SpotFilter::show_all()
            .favourites_only(self.favourites_only)
            .sorted_by_hours(self.sort_by_hours)
            .with_tags(self.tags.clone())
            .with_amenities(self.amenities.clone())
    }

    pub(crate) fn execute(&self, model: &mut Model) -> CommandResult {
        let filter = self.filter();
        let show_all = filter.is_show_all();
        model.update_filter(filter);

        if show_all {
            CommandResult::message(Self::SHOW_ALL_MESSAGE)
        } else {
            CommandResult::message(spots_listed(model.filtered_spots().len()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spot_test_utils::typical_model;

    #[test]
    fn list_all_resets_filter() {
        let mut model = typical_model();
        model.update_filter(SpotFilter::name_keywords(&["zzz"]));

        let result = ListCommand::all().execute(&mut model);
        assert_eq!(result.feedback, ListCommand::SHOW_ALL_MESSAGE);
        assert_eq!(model.filtered_spots().len(), model.tracker().len());
    }

    #[test]
    fn list_favourites_only() {
        let mut model = typical_model();
        let result = ListCommand::all().favourites_only(true).execute(&mut model);

        let visible = model.filtered_spots();
        assert_eq!(visible.len(), model.tracker().favourites().len());
        assert!(visible.iter().all(|spot| spot.is_favourite()));
        assert_eq!(result.feedback, spots_listed(visible.len()));
    }

    #[test]
    fn list_sorted_by_hours() {
        let mut model = typical_model();
        ListCommand::all().sorted_by_hours(true).execute(&mut model);

        let hours: Vec<u32> = model
            .filtered_spots()
            .iter()
            .map(|spot| spot.studied_hours().value())
            .collect();
        let mut expected = hours.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(hours, expected);
    }

    #[test]
    fn list_requires_all_amenities() {
        let mut model = typical_model();
        ListCommand::all()
            .with_amenities(BTreeSet::from([Amenity::Wifi, Amenity::Food]))
            .execute(&mut model);

        assert!(model.filtered_spots().iter().all(|spot| {
            spot.amenities().contains(&Amenity::Wifi) && spot.amenities().contains(&Amenity::Food)
        }));
    }
}
