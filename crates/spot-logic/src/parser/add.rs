use super::{require_fields, CommandParser};
use crate::command::{AddCommand, Command};
use crate::error::ParseError;
use crate::fields::{
    parse_address, parse_amenities, parse_flags, parse_name, parse_operating_hours, parse_rating,
    parse_tags,
};
use crate::prefix::{
    Flag, PREFIX_ADDRESS, PREFIX_AMENITY, PREFIX_FLAG, PREFIX_NAME, PREFIX_OPERATING_HOURS,
    PREFIX_RATING, PREFIX_TAG,
};
use crate::tokenizer::tokenize_with_flags;
use spot_model::StudySpot;

const ADD_FLAGS: [Flag; 1] = [Flag::Favourite];

/// `add n/NAME r/RATING a/ADDRESS [o/HOURS] [t/TAG]... [m/AMENITY]... [-f]`
#[derive(Debug, Clone, Copy, Default)]
pub struct AddParser;

impl CommandParser for AddParser {
    fn word(&self) -> &'static str {
        AddCommand::WORD
    }

    fn parse(&self, args: &str) -> Result<Command, ParseError> {
        let map = tokenize_with_flags(
            args,
            &[
                PREFIX_NAME,
                PREFIX_RATING,
                PREFIX_ADDRESS,
                PREFIX_OPERATING_HOURS,
                PREFIX_TAG,
                PREFIX_AMENITY,
            ],
            &ADD_FLAGS,
        );
        require_fields(
            &map,
            &[PREFIX_NAME, PREFIX_RATING, PREFIX_ADDRESS],
            AddCommand::USAGE,
        )?;

        let name = parse_name(map.value(PREFIX_NAME).unwrap_or_default())?;
        let rating = parse_rating(map.value(PREFIX_RATING).unwrap_or_default())?;
        let address = parse_address(map.value(PREFIX_ADDRESS).unwrap_or_default())?;
        let operating_hours = map
            .value(PREFIX_OPERATING_HOURS)
            .map(parse_operating_hours)
            .transpose()?;
        let tags = parse_tags(map.all_values(PREFIX_TAG))?;
        let amenities = parse_amenities(map.all_values(PREFIX_AMENITY))?;
        let flags = parse_flags(map.all_values(PREFIX_FLAG), &ADD_FLAGS)?;

        let spot = StudySpot::new(name, rating, address)
            .with_operating_hours(operating_hours)
            .with_tags(tags)
            .with_amenities(amenities)
            .with_favourite(flags.contains(&Flag::Favourite));

        Ok(Command::Add(AddCommand::new(spot)))
    }
}
