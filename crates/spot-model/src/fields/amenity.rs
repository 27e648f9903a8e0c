//! Amenities offered at a study spot

use crate::error::FieldError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Known amenity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Amenity {
    /// Wireless internet
    Wifi,
    /// Power sockets
    Charger,
    /// Food available nearby
    Food,
    /// Air conditioning
    Aircon,
}

impl Amenity {
    /// Constraints message reported on invalid input
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Amenities should be one of: wifi, charger, food, aircon";

    /// All amenity kinds
    pub const ALL: [Amenity; 4] = [Self::Wifi, Self::Charger, Self::Food, Self::Aircon];

    /// Lowercase keyword
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wifi => "wifi",
            Self::Charger => "charger",
            Self::Food => "food",
            Self::Aircon => "aircon",
        }
    }
}

impl FromStr for Amenity {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|amenity| amenity.as_str() == lowered)
            .ok_or_else(|| FieldError::new("amenity", Self::MESSAGE_CONSTRAINTS))
    }
}

impl Display for Amenity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
