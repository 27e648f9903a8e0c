//! Study spot rating

use crate::error::FieldError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Rating from 1 to 5 inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Constraints message reported on invalid input
    pub const MESSAGE_CONSTRAINTS: &'static str = "Rating should be a single digit from 1 to 5";

    /// Lowest valid rating
    pub const MIN: u8 = 1;

    /// Highest valid rating
    pub const MAX: u8 = 5;

    /// Create rating from a number
    ///
    /// # Errors
    /// Returns [`FieldError`] if `value` is outside `1..=5`.
    pub fn new(value: u8) -> Result<Self, FieldError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Self::error())
        }
    }

    /// Rating value
    #[inline]
    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
    }

    fn error() -> FieldError {
        FieldError::new("rating", Self::MESSAGE_CONSTRAINTS)
    }
}

impl FromStr for Rating {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() != 1 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(Self::error());
        }
        let value = trimmed.parse::<u8>().map_err(|_| Self::error())?;
        Self::new(value)
    }
}

impl TryFrom<u8> for Rating {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_parses_valid_digits() {
        for raw in ["1", "3", " 5 "] {
            assert!(raw.parse::<Rating>().is_ok(), "{raw} should parse");
        }
    }

    #[test]
    fn rating_rejects_out_of_range() {
        for raw in ["0", "6", "10", "-1", "", "a", "3.5"] {
            assert!(raw.parse::<Rating>().is_err(), "{raw} should fail");
        }
    }
}
