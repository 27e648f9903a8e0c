//! Study spot name, the identity key of a record

use crate::error::FieldError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Name of a study spot
///
/// Stored trimmed. Two names denote the same spot when they are equal
/// ignoring case, see [`Name::is_same_identity`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Constraints message reported on invalid input
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    /// Validate and create a name
    ///
    /// # Errors
    /// Returns [`FieldError`] if the trimmed value is blank or contains
    /// characters other than alphanumerics and spaces.
    pub fn new(raw: &str) -> Result<Self, FieldError> {
        let trimmed = raw.trim();
        if Self::is_valid(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(FieldError::new("name", Self::MESSAGE_CONSTRAINTS))
        }
    }

    /// Check whether `raw` is a valid name
    #[must_use]
    pub fn is_valid(raw: &str) -> bool {
        let trimmed = raw.trim();
        !trimmed.is_empty() && trimmed.chars().all(|c| c.is_alphanumeric() || c == ' ')
    }

    /// Name text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive, trimmed equality
    #[must_use]
    pub fn is_same_identity(&self, other: &Self) -> bool {
        self.0.trim().to_lowercase() == other.0.trim().to_lowercase()
    }

    /// Case-insensitive substring match
    #[must_use]
    pub fn contains_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.trim();
        !keyword.is_empty() && self.0.to_lowercase().contains(&keyword.to_lowercase())
    }
}

impl TryFrom<String> for Name {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl FromStr for Name {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
