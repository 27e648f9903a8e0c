use super::CommandResult;
use crate::error::CommandError;
use spot_model::{Model, Tracker};

/// Removes every study spot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const WORD: &'static str = "clear";
    pub const USAGE: &'static str = "clear: Removes all study spots.\nExample: clear";
    pub const MESSAGE: &'static str = "Study tracker has been cleared!";

    pub(crate) fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let removed = model.tracker().len();
        model.set_tracker(&Tracker::new());
        tracing::info!(removed, "study tracker cleared");
        Ok(CommandResult::message(Self::MESSAGE))
    }
}
