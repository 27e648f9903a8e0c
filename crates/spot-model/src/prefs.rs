//! User preferences persisted between sessions

use crate::alias::AliasTable;
use serde::{Deserialize, Serialize};

/// Preferences of the single user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPrefs {
    /// User-defined command aliases
    #[serde(default)]
    pub aliases: AliasTable,
}

impl UserPrefs {
    /// Create default preferences
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With an alias table
    #[inline]
    #[must_use]
    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }
}
