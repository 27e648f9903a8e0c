//! Opening hours of a study spot

use crate::error::FieldError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

static HOURS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})-(\d{4})(?:\s*,\s*(\d{4})-(\d{4}))?$").expect("valid hours pattern")
});

/// Opening and closing time in `HHMM` form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    /// Opening time, minutes after midnight
    pub opens: u16,
    /// Closing time, minutes after midnight
    pub closes: u16,
}

impl TimeRange {
    fn parse(opens: &str, closes: &str) -> Option<Self> {
        let opens = parse_hhmm(opens)?;
        let closes = parse_hhmm(closes)?;
        (opens < closes).then_some(Self { opens, closes })
    }
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{:02}-{:02}{:02}",
            self.opens / 60,
            self.opens % 60,
            self.closes / 60,
            self.closes % 60
        )
    }
}

fn parse_hhmm(raw: &str) -> Option<u16> {
    let hours: u16 = raw.get(..2)?.parse().ok()?;
    let minutes: u16 = raw.get(2..)?.parse().ok()?;
    (hours < 24 && minutes < 60).then_some(hours * 60 + minutes)
}

/// Weekday hours with optional separate weekend hours
///
/// Written as `0900-2200` or `0900-2200, 1000-1800`. When weekend hours
/// are omitted the spot keeps its weekday hours all week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OperatingHours {
    weekday: TimeRange,
    weekend: Option<TimeRange>,
}

impl OperatingHours {
    /// Constraints message reported on invalid input
    pub const MESSAGE_CONSTRAINTS: &'static str = "Operating hours should be given as HHMM-HHMM for \
        weekdays, optionally followed by a comma and HHMM-HHMM for weekends. \
        Opening time must be earlier than closing time";

    /// Validate and create operating hours
    ///
    /// # Errors
    /// Returns [`FieldError`] if the text does not match the expected format,
    /// contains an invalid time, or a range closes before it opens.
    pub fn new(raw: &str) -> Result<Self, FieldError> {
        let error = || FieldError::new("operating hours", Self::MESSAGE_CONSTRAINTS);
        let caps = HOURS_PATTERN.captures(raw.trim()).ok_or_else(error)?;

        let weekday = TimeRange::parse(&caps[1], &caps[2]).ok_or_else(error)?;
        let weekend = match (caps.get(3), caps.get(4)) {
            (Some(opens), Some(closes)) => {
                Some(TimeRange::parse(opens.as_str(), closes.as_str()).ok_or_else(error)?)
            }
            _ => None,
        };

        Ok(Self { weekday, weekend })
    }

    /// Weekday hours
    #[inline]
    #[must_use]
    pub fn weekday(&self) -> TimeRange {
        self.weekday
    }

    /// Weekend hours, falling back to weekday hours
    #[inline]
    #[must_use]
    pub fn weekend(&self) -> TimeRange {
        self.weekend.unwrap_or(self.weekday)
    }
}

impl TryFrom<String> for OperatingHours {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<OperatingHours> for String {
    fn from(hours: OperatingHours) -> Self {
        hours.to_string()
    }
}

impl FromStr for OperatingHours {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for OperatingHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.weekend {
            Some(weekend) => write!(f, "{}, {}", self.weekday, weekend),
            None => write!(f, "{}", self.weekday),
        }
    }
}
