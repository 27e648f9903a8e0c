use super::{require_fields, CommandParser};
use crate::command::{Command, DeleteCommand, FavouriteCommand, UnfavouriteCommand};
use crate::error::ParseError;
use crate::fields::parse_name;
use crate::prefix::PREFIX_NAME;
use crate::tokenizer::tokenize;
use spot_model::Name;

fn parse_target(args: &str, usage: &'static str) -> Result<Name, ParseError> {
    let map = tokenize(args, &[PREFIX_NAME]);
    require_fields(&map, &[PREFIX_NAME], usage)?;
    parse_name(map.value(PREFIX_NAME).unwrap_or_default())
}

/// `delete n/NAME`
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteParser;

impl CommandParser for DeleteParser {
    fn word(&self) -> &'static str {
        DeleteCommand::WORD
    }

    fn parse(&self, args: &str) -> Result<Command, ParseError> {
        let name = parse_target(args, DeleteCommand::USAGE)?;
        Ok(Command::Delete(DeleteCommand::new(name)))
    }
}

/// `fav n/NAME`
#[derive(Debug, Clone, Copy, Default)]
pub struct FavouriteParser;

impl CommandParser for FavouriteParser {
    fn word(&self) -> &'static str {
        FavouriteCommand::WORD
    }

    fn parse(&self, args: &str) -> Result<Command, ParseError> {
        let name = parse_target(args, FavouriteCommand::USAGE)?;
        Ok(Command::Favourite(FavouriteCommand::new(name)))
    }
}

/// `unfav n/NAME`
#[derive(Debug, Clone, Copy, Default)]
pub struct UnfavouriteParser;

impl CommandParser for UnfavouriteParser {
    fn word(&self) -> &'static str {
        UnfavouriteCommand::WORD
    }

    fn parse(&self, args: &str) -> Result<Command, ParseError> {
        let name = parse_target(args, UnfavouriteCommand::USAGE)?;
        Ok(Command::Unfavourite(UnfavouriteCommand::new(name)))
    }
}
