use super::CommandResult;
use crate::error::CommandError;
use spot_model::{Model, Name};

/// Deletes a study spot visible in the current list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    name: Name,
}

impl DeleteCommand {
    pub const WORD: &'static str = "delete";
    pub const USAGE: &'static str = "delete: Deletes the study spot identified by its name in the displayed list.\n\
        Parameters: n/NAME\n\
        Example: delete n/Central Library";

    #[inline]
    #[must_use]
    pub fn new(name: Name) -> Self {
        Self { name }
    }

    pub(crate) fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = model
            .find_visible(&self.name)
            .cloned()
            .ok_or_else(|| CommandError::SpotNotFound(self.name.to_string()))?;

        model.tracker_mut().remove_spot(&target)?;
        tracing::info!(spot = %target.name(), "study spot deleted");

        Ok(CommandResult::message(format!("Deleted study spot: {target}")))
    }
}
