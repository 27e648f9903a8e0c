use super::CommandResult;
use crate::error::CommandError;
use spot_model::{Model, Name, StudySpot};

fn find_target(model: &Model, name: &Name) -> Result<StudySpot, CommandError> {
    model
        .tracker()
        .find_spot(name)
        .cloned()
        .ok_or_else(|| CommandError::SpotNotFound(name.to_string()))
}

/// Marks a study spot as favourite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavouriteCommand {
    name: Name,
}

impl FavouriteCommand {
    pub const WORD: &'static str = "fav";
    pub const USAGE: &'static str = "fav: Adds the study spot identified by its name to favourites.\n\
        Parameters: n/NAME\n\
        Example: fav n/Central Library";

    #[inline]
    #[must_use]
    pub fn new(name: Name) -> Self {
        Self { name }
    }

    pub(crate) fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = find_target(model, &self.name)?;
        if target.is_favourite() {
            return Err(CommandError::AlreadyFavourite(target.name().to_string()));
        }

        let favourite = model.tracker_mut().add_favourite(&target)?;
        tracing::info!(spot = %favourite.name(), "study spot favourited");

        Ok(CommandResult::message(format!(
            "Added {} to favourites!",
            favourite.name()
        )))
    }
}

/// Removes a study spot from favourites
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfavouriteCommand {
    name: Name,
}

impl UnfavouriteCommand {
    pub const WORD: &'static str = "unfav";
    pub const USAGE: &'static str = "unfav: Removes the study spot identified by its name from favourites.\n\
        Parameters: n/NAME\n\
        Example: unfav n/Central Library";

    #[inline]
    #[must_use]
    pub fn new(name: Name) -> Self {
        Self { name }
    }

    pub(crate) fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = find_target(model, &self.name)?;
        if !target.is_favourite() {
            return Err(CommandError::NotFavourite(target.name().to_string()));
        }

        let plain = model.tracker_mut().remove_favourite(&target)?;
        tracing::info!(spot = %plain.name(), "study spot unfavourited");

        Ok(CommandResult::message(format!(
            "Removed {} from favourites!",
            plain.name()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spot_test_utils::SpotBuilder;

    fn model_with(spot: StudySpot) -> Model {
        let mut model = Model::default();
        model.tracker_mut().add_spot(spot).unwrap();
        model
    }

    #[test]
    fn favourite_sets_flag_and_mirrors() {
        let mut model = model_with(SpotBuilder::new("Library").build());
        let cmd = FavouriteCommand::new(Name::new("library").unwrap());

        let result = cmd.execute(&mut model).unwrap();
        assert_eq!(result.feedback, "Added Library to favourites!");
        assert!(model.tracker().spots().as_slice()[0].is_favourite());
        assert_eq!(model.tracker().favourites().len(), 1);

        assert_eq!(
            cmd.execute(&mut model),
            Err(CommandError::AlreadyFavourite("Library".to_string()))
        );
    }

    #[test]
    fn unfavourite_clears_flag_and_mirror() {
        let mut model = model_with(SpotBuilder::new("Library").favourite().build());
        let cmd = UnfavouriteCommand::new(Name::new("Library").unwrap());

        cmd.execute(&mut model).unwrap();
        assert!(!model.tracker().spots().as_slice()[0].is_favourite());
        assert!(model.tracker().favourites().is_empty());

        assert_eq!(
            cmd.execute(&mut model),
            Err(CommandError::NotFavourite("Library".to_string()))
        );
    }

    #[test]
    fn favourite_missing_spot() {
        let mut model = Model::default();
        let cmd = FavouriteCommand::new(Name::new("Nowhere").unwrap());
        assert!(matches!(
            cmd.execute(&mut model),
            Err(CommandError::SpotNotFound(_))
        ));
    }
}
