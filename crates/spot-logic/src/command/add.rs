use super::CommandResult;
use crate::error::CommandError;
use spot_model::{Model, SpotFilter, StudySpot};

/// Adds a new study spot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    spot: StudySpot,
}

impl AddCommand {
    pub const WORD: &'static str = "add";
    pub const USAGE: &'static str = "add: Adds a study spot to the study tracker.\n\
        Parameters: n/NAME r/RATING a/ADDRESS [o/OPERATING_HOURS] [t/TAG]... [m/AMENITY]... [-f]\n\
        Example: add n/Central Library r/4 a/Main Campus o/0900-2200, 1000-1800 t/quiet m/wifi";

    #[inline]
    #[must_use]
    pub fn new(spot: StudySpot) -> Self {
        Self { spot }
    }

    #[inline]
    #[must_use]
    pub fn spot(&self) -> &StudySpot {
        &self.spot
    }

    pub(crate) fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if model.tracker().has_spot(&self.spot) {
            return Err(CommandError::DuplicateSpot);
        }

        model.tracker_mut().add_spot(self.spot.clone())?;
        model.update_filter(SpotFilter::show_all());
        tracing::info!(spot = %self.spot.name(), "study spot added");

        Ok(CommandResult::message(format!(
            "New study spot added: {}",
            self.spot
        )))
    }
}
