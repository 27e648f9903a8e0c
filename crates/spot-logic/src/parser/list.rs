use super::{require_fields, CommandParser};
use crate::command::{Command, ListCommand};
use crate::error::ParseError;
use crate::fields::{parse_amenities, parse_flags, parse_tags};
use crate::prefix::{Flag, PREFIX_AMENITY, PREFIX_FLAG, PREFIX_TAG};
use crate::tokenizer::tokenize_with_flags;

const LIST_FLAGS: [Flag; 2] = [Flag::Favourite, Flag::Sort];

/// `list [-f] [-s] [t/TAG]... [m/AMENITY]...`
#[derive(Debug, Clone, Copy, Default)]
pub struct ListParser;

impl CommandParser for ListParser {
    fn word(&self) -> &'static str {
        ListCommand::WORD
    }

    fn parse(&self, args: &str) -> Result<Command, ParseError> {
        let map = tokenize_with_flags(args, &[PREFIX_TAG, PREFIX_AMENITY], &LIST_FLAGS);
        require_fields(&map, &[], ListCommand::USAGE)?;

        let flags = parse_flags(map.all_values(PREFIX_FLAG), &LIST_FLAGS)?;
        let tags = parse_tags(map.all_values(PREFIX_TAG))?;
        let amenities = parse_amenities(map.all_values(PREFIX_AMENITY))?;

        Ok(Command::List(
            ListCommand::all()
                .favourites_only(flags.contains(&Flag::Favourite))
                .sorted_by_hours(flags.contains(&Flag::Sort))
                .with_tags(tags)
                .with_amenities(amenities),
        ))
    }
}
