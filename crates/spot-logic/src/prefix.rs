//! Prefix markers and flags of the command language

use crate::error::ParseError;
use std::fmt::{self, Display, Formatter};

/// Literal marker tagging the text that follows it as a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(&'static str);

impl Prefix {
    /// Create a prefix marker
    #[inline]
    #[must_use]
    pub const fn new(marker: &'static str) -> Self {
        Self(marker)
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Check whether this is the flag marker
    #[inline]
    #[must_use]
    pub fn is_flag_marker(&self) -> bool {
        *self == PREFIX_FLAG
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_RATING: Prefix = Prefix::new("r/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_OPERATING_HOURS: Prefix = Prefix::new("o/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_REMOVE_TAG: Prefix = Prefix::new("rt/");
pub const PREFIX_AMENITY: Prefix = Prefix::new("m/");
pub const PREFIX_REMOVE_AMENITY: Prefix = Prefix::new("rm/");
pub const PREFIX_ALIAS: Prefix = Prefix::new("al/");
pub const PREFIX_COMMAND: Prefix = Prefix::new("cmd/");
pub const PREFIX_HOURS: Prefix = Prefix::new("h/");
pub const PREFIX_EDIT_SPOT: Prefix = Prefix::new("spot/");

/// Marker introducing a flag such as `-f`
///
/// Recognized only when the whole word after it is one of the command's
/// flags, so other dashes in free text stay part of the value.
pub const PREFIX_FLAG: Prefix = Prefix::new("-");

/// Positional flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Flag {
    /// `-f`: favourite
    Favourite,
    /// `-s`: sort by studied hours
    Sort,
    /// `-o`: override studied hours
    Override,
    /// `-r`: reset studied hours
    Reset,
    /// `-ra`: reset studied hours of every spot
    ResetAll,
}

impl Flag {
    /// Flag text without the marker
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Favourite => "f",
            Self::Sort => "s",
            Self::Override => "o",
            Self::Reset => "r",
            Self::ResetAll => "ra",
        }
    }

    /// Parse the text following a flag marker, restricted to `allowed`
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidFlag`] if the text is not one of the
    /// allowed flags.
    pub fn parse(raw: &str, allowed: &[Flag]) -> Result<Self, ParseError> {
        let raw = raw.trim();
        allowed
            .iter()
            .copied()
            .find(|flag| flag.as_str() == raw)
            .ok_or_else(|| ParseError::InvalidFlag {
                flag: raw.to_string(),
                allowed: allowed
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" "),
            })
    }
}

impl Display for Flag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", PREFIX_FLAG, self.as_str())
    }
}
