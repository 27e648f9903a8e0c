use super::{spots_listed, CommandResult};
use spot_model::{Model, SpotFilter};

/// Shows spots whose name contains any of the keywords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keywords: Vec<String>,
}

impl FindCommand {
    pub const WORD: &'static str = "find";
    pub const USAGE: &'static str = "find: Finds all study spots whose names contain any of \
        the specified keywords (case-insensitive) and displays them as a list.\n\
        Parameters: KEYWORD [MORE_KEYWORDS]...\n\
        Example: find library cafe";

    #[must_use]
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    #[inline]
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub(crate) fn execute(&self, model: &mut Model) -> CommandResult {
        model.update_filter(SpotFilter::name_keywords(&self.keywords));
        CommandResult::message(spots_listed(model.filtered_spots().len()))
    }
}
