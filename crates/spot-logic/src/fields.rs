//! Field parsers turning token text into value objects

use crate::error::ParseError;
use crate::prefix::Flag;
use spot_model::{Address, Amenity, Name, OperatingHours, Rating, StudiedHours, Tag};
use std::collections::BTreeSet;

pub fn parse_name(raw: &str) -> Result<Name, ParseError> {
    Ok(Name::new(raw)?)
}

pub fn parse_rating(raw: &str) -> Result<Rating, ParseError> {
    Ok(raw.parse::<Rating>()?)
}

pub fn parse_address(raw: &str) -> Result<Address, ParseError> {
    Ok(Address::new(raw)?)
}

pub fn parse_operating_hours(raw: &str) -> Result<OperatingHours, ParseError> {
    Ok(OperatingHours::new(raw)?)
}

pub fn parse_hours(raw: &str) -> Result<StudiedHours, ParseError> {
    Ok(raw.parse::<StudiedHours>()?)
}

/// Parse every tag value into a set
pub fn parse_tags(values: &[String]) -> Result<BTreeSet<Tag>, ParseError> {
    values
        .iter()
        .map(|v| Tag::new(v).map_err(ParseError::from))
        .collect()
}

/// Parse every amenity value into a set
pub fn parse_amenities(values: &[String]) -> Result<BTreeSet<Amenity>, ParseError> {
    values
        .iter()
        .map(|v| v.parse::<Amenity>().map_err(ParseError::from))
        .collect()
}

/// Parse flag values, restricted to `allowed`
pub fn parse_flags(values: &[String], allowed: &[Flag]) -> Result<BTreeSet<Flag>, ParseError> {
    values.iter().map(|v| Flag::parse(v, allowed)).collect()
}

/// Split a set-valued field into a reset marker and the values to apply
///
/// An empty value (`t/` with nothing after it) means "clear the set first".
#[must_use]
pub fn split_reset(values: &[String]) -> (bool, Vec<String>) {
    let reset = values.iter().any(String::is_empty);
    let rest = values.iter().filter(|v| !v.is_empty()).cloned().collect();
    (reset, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_tags_collects_unique() {
        let tags = parse_tags(&strings(&["quiet", "cold", "quiet"])).unwrap();
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn parse_tags_rejects_invalid() {
        let err = parse_tags(&strings(&["quiet", "no spaces"])).unwrap_err();
        assert_eq!(err.to_string(), Tag::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn parse_amenities_rejects_unknown() {
        assert!(parse_amenities(&strings(&["wifi", "pool"])).is_err());
    }

    #[test]
    fn split_reset_detects_empty() {
        let (reset, rest) = split_reset(&strings(&["", "quiet"]));
        assert!(reset);
        assert_eq!(rest, strings(&["quiet"]));

        let (reset, rest) = split_reset(&strings(&["cold"]));
        assert!(!reset);
        assert_eq!(rest.len(), 1);
    }

    #[test]
    fn parse_rating_reports_constraints() {
        let err = parse_rating("9").unwrap_err();
        assert_eq!(err.to_string(), Rating::MESSAGE_CONSTRAINTS);
    }
}
