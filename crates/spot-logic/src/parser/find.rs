use super::CommandParser;
use crate::command::{Command, FindCommand};
use crate::error::ParseError;

/// `find KEYWORD [KEYWORD]...`
#[derive(Debug, Clone, Copy, Default)]
pub struct FindParser;

impl CommandParser for FindParser {
    fn word(&self) -> &'static str {
        FindCommand::WORD
    }

    fn parse(&self, args: &str) -> Result<Command, ParseError> {
        let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
        if keywords.is_empty() {
            return Err(ParseError::invalid_format(FindCommand::USAGE));
        }
        Ok(Command::Find(FindCommand::new(keywords)))
    }
}
