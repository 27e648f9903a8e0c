//! Hours studied at a spot

use crate::error::FieldError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Non-negative counter of studied hours
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StudiedHours(u32);

impl StudiedHours {
    /// Constraints message reported on invalid input
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Hours should be a non-negative whole number that is not too large";

    /// Zero hours
    pub const ZERO: Self = Self(0);

    /// Create from a count
    #[inline]
    #[must_use]
    pub const fn new(hours: u32) -> Self {
        Self(hours)
    }

    /// Hour count
    #[inline]
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Add hours, `None` on overflow
    #[inline]
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }
}

impl FromStr for StudiedHours {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(FieldError::new("hours", Self::MESSAGE_CONSTRAINTS));
        }
        trimmed
            .parse::<u32>()
            .map(Self)
            .map_err(|_| FieldError::new("hours", Self::MESSAGE_CONSTRAINTS))
    }
}

impl Display for StudiedHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
