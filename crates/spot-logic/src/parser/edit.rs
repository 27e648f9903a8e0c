use super::{require_fields, CommandParser};
use crate::command::{Command, EditCommand, EditSpotDescriptor};
use crate::error::ParseError;
use crate::fields::{
    parse_address, parse_amenities, parse_name, parse_operating_hours, parse_rating, parse_tags,
    split_reset,
};
use crate::prefix::{
    PREFIX_ADDRESS, PREFIX_AMENITY, PREFIX_EDIT_SPOT, PREFIX_NAME, PREFIX_OPERATING_HOURS,
    PREFIX_RATING, PREFIX_REMOVE_AMENITY, PREFIX_REMOVE_TAG, PREFIX_TAG,
};
use crate::tokenizer::tokenize;

/// `edit spot/NAME [n/] [r/] [a/] [o/] [t/]... [rt/]... [m/]... [rm/]...`
#[derive(Debug, Clone, Copy, Default)]
pub struct EditParser;

impl CommandParser for EditParser {
    fn word(&self) -> &'static str {
        EditCommand::WORD
    }

    fn parse(&self, args: &str) -> Result<Command, ParseError> {
        let map = tokenize(
            args,
            &[
                PREFIX_EDIT_SPOT,
                PREFIX_NAME,
                PREFIX_RATING,
                PREFIX_ADDRESS,
                PREFIX_OPERATING_HOURS,
                PREFIX_TAG,
                PREFIX_REMOVE_TAG,
                PREFIX_AMENITY,
                PREFIX_REMOVE_AMENITY,
            ],
        );
        require_fields(&map, &[PREFIX_EDIT_SPOT], EditCommand::USAGE)?;

        let target = parse_name(map.value(PREFIX_EDIT_SPOT).unwrap_or_default())?;
        let (clear_tags, tags_to_add) = split_reset(map.all_values(PREFIX_TAG));
        let (clear_amenities, amenities_to_add) = split_reset(map.all_values(PREFIX_AMENITY));
        let operating_hours = map.value(PREFIX_OPERATING_HOURS);
        let clear_operating_hours = operating_hours == Some("");

        let descriptor = EditSpotDescriptor {
            name: map.value(PREFIX_NAME).map(parse_name).transpose()?,
            rating: map.value(PREFIX_RATING).map(parse_rating).transpose()?,
            address: map.value(PREFIX_ADDRESS).map(parse_address).transpose()?,
            operating_hours: operating_hours
                .filter(|raw| !raw.is_empty())
                .map(parse_operating_hours)
                .transpose()?,
            clear_operating_hours,
            clear_tags,
            tags_to_add: parse_tags(&tags_to_add)?,
            tags_to_remove: parse_tags(map.all_values(PREFIX_REMOVE_TAG))?,
            clear_amenities,
            amenities_to_add: parse_amenities(&amenities_to_add)?,
            amenities_to_remove: parse_amenities(map.all_values(PREFIX_REMOVE_AMENITY))?,
        };

        if !descriptor.is_any_field_edited() {
            return Err(ParseError::NoFieldEdited);
        }

        Ok(Command::Edit(EditCommand::new(target, descriptor)))
    }
}
