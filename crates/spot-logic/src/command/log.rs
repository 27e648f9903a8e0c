use super::CommandResult;
use crate::error::CommandError;
use spot_model::{Model, Name, StudiedHours};

/// How a log command changes the studied hours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// Add hours to the counter
    Add(StudiedHours),
    /// Replace the counter (`-o`)
    Override(StudiedHours),
    /// Set the counter to zero (`-r`)
    Reset,
}

/// Logs studied hours at a spot, or resets every spot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogCommand {
    /// Change one spot's counter
    Spot { name: Name, mode: LogMode },
    /// Reset every spot's counter (`-ra`)
    ResetAll,
}

impl LogCommand {
    pub const WORD: &'static str = "log";
    pub const USAGE: &'static str = "log: Logs hours studied at the study spot identified by its name. \
        By default the hours are added to the current total. \
        -o overrides the total, -r resets it, -ra resets the hours of every study spot.\n\
        Parameters: n/NAME h/HOURS | n/NAME h/HOURS -o | n/NAME -r | -ra\n\
        Example: log n/Central Library h/3";

    pub(crate) fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let (name, mode) = match self {
            Self::ResetAll => {
                model.tracker_mut().reset_all_hours();
                tracing::info!("studied hours reset for all spots");
                return Ok(CommandResult::message(
                    "Reset studied hours of all study spots",
                ));
            }
            Self::Spot { name, mode } => (name, mode),
        };

        let target = model
            .tracker()
            .find_spot(name)
            .cloned()
            .ok_or_else(|| CommandError::SpotNotFound(name.to_string()))?;

        let (hours, feedback) = match *mode {
            LogMode::Add(added) => {
                let total = target.studied_hours().checked_add(added).ok_or_else(|| {
                    CommandError::HoursOverflow {
                        name: target.name().to_string(),
                        added: added.value(),
                    }
                })?;
                let feedback = format!(
                    "Logged {added} hours at {}. Total studied hours: {total}",
                    target.name()
                );
                (total, feedback)
            }
            LogMode::Override(hours) => {
                let feedback = format!("Set studied hours at {} to {hours}", target.name());
                (hours, feedback)
            }
            LogMode::Reset => {
                let feedback = format!("Reset studied hours at {}", target.name());
                (StudiedHours::ZERO, feedback)
            }
        };

        let edited = target.clone().with_studied_hours(hours);
        model.tracker_mut().set_spot(&target, edited)?;
        tracing::info!(spot = %target.name(), hours = hours.value(), "studied hours logged");

        Ok(CommandResult::message(feedback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spot_test_utils::SpotBuilder;

    fn log(name: &str, mode: LogMode) -> LogCommand {
        LogCommand::Spot {
            name: Name::new(name).unwrap(),
            mode,
        }
    }

    fn hours_of(model: &Model) -> u32 {
        model.tracker().spots().as_slice()[0].studied_hours().value()
    }

    #[test]
    fn log_modes_in_sequence() {
        let mut model = Model::default();
        model
            .tracker_mut()
            .add_spot(SpotBuilder::new("Library").build())
            .unwrap();

        log("Library", LogMode::Add(StudiedHours::new(3)))
            .execute(&mut model)
            .unwrap();
        log("Library", LogMode::Add(StudiedHours::new(2)))
            .execute(&mut model)
            .unwrap();
        assert_eq!(hours_of(&model), 5);

        log("Library", LogMode::Override(StudiedHours::new(1)))
            .execute(&mut model)
            .unwrap();
        assert_eq!(hours_of(&model), 1);

        log("Library", LogMode::Reset).execute(&mut model).unwrap();
        assert_eq!(hours_of(&model), 0);
    }

    #[test]
    fn log_updates_favourite_mirror() {
        let mut model = Model::default();
        model
            .tracker_mut()
            .add_spot(SpotBuilder::new("Library").favourite().build())
            .unwrap();

        log("Library", LogMode::Add(StudiedHours::new(4)))
            .execute(&mut model)
            .unwrap();

        let favourite = &model.tracker().favourites().as_slice()[0];
        assert_eq!(favourite.studied_hours().value(), 4);
    }

    #[test]
    fn log_overflow_leaves_hours() {
        let mut model = Model::default();
        model
            .tracker_mut()
            .add_spot(SpotBuilder::new("Library").studied(u32::MAX).build())
            .unwrap();

        let result = log("Library", LogMode::Add(StudiedHours::new(1))).execute(&mut model);
        assert!(matches!(result, Err(CommandError::HoursOverflow { .. })));
        assert_eq!(hours_of(&model), u32::MAX);
    }

    #[test]
    fn log_reset_all() {
        let mut model = Model::default();
        model
            .tracker_mut()
            .add_spot(SpotBuilder::new("Library").studied(3).build())
            .unwrap();
        model
            .tracker_mut()
            .add_spot(SpotBuilder::new("Cafe").studied(8).favourite().build())
            .unwrap();

        LogCommand::ResetAll.execute(&mut model).unwrap();

        let tracker = model.tracker();
        assert!(tracker.spots().iter().all(|s| s.studied_hours().value() == 0));
        assert!(tracker.favourites().iter().all(|s| s.studied_hours().value() == 0));
    }

    #[test]
    fn log_missing_spot() {
        let mut model = Model::default();
        let result = log("Nowhere", LogMode::Reset).execute(&mut model);
        assert!(matches!(result, Err(CommandError::SpotNotFound(_))));
    }
}
