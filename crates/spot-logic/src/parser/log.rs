use super::{require_fields, CommandParser};
use crate::command::{Command, LogCommand, LogMode};
use crate::error::ParseError;
use crate::fields::{parse_flags, parse_hours, parse_name};
use crate::prefix::{Flag, PREFIX_FLAG, PREFIX_HOURS, PREFIX_NAME};
use crate::tokenizer::tokenize_with_flags;

const LOG_FLAGS: [Flag; 3] = [Flag::Override, Flag::Reset, Flag::ResetAll];

/// `log n/NAME h/HOURS [-o]`, `log n/NAME -r` or `log -ra`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogParser;

impl CommandParser for LogParser {
    fn word(&self) -> &'static str {
        LogCommand::WORD
    }

    fn parse(&self, args: &str) -> Result<Command, ParseError> {
        let map = tokenize_with_flags(args, &[PREFIX_NAME, PREFIX_HOURS], &LOG_FLAGS);
        require_fields(&map, &[], LogCommand::USAGE)?;

        let flags = parse_flags(map.all_values(PREFIX_FLAG), &LOG_FLAGS)?;
        if flags.len() > 1 {
            return Err(ParseError::ConflictingFlags(
                LOG_FLAGS.map(|f| f.to_string()).join(" "),
            ));
        }
        let flag = flags.into_iter().next();

        let has_name = map.contains(PREFIX_NAME);
        let has_hours = map.contains(PREFIX_HOURS);
        let expected = match flag {
            Some(Flag::ResetAll) => !has_name && !has_hours,
            Some(Flag::Reset) => has_name && !has_hours,
            _ => has_name && has_hours,
        };
        if !expected {
            return Err(ParseError::invalid_format(LogCommand::USAGE));
        }

        if flag == Some(Flag::ResetAll) {
            return Ok(Command::Log(LogCommand::ResetAll));
        }

        let name = parse_name(map.value(PREFIX_NAME).unwrap_or_default())?;
        let mode = match flag {
            Some(Flag::Reset) => LogMode::Reset,
            Some(Flag::Override) => LogMode::Override(parse_hours(
                map.value(PREFIX_HOURS).unwrap_or_default(),
            )?),
            _ => LogMode::Add(parse_hours(map.value(PREFIX_HOURS).unwrap_or_default())?),
        };

        Ok(Command::Log(LogCommand::Spot { name, mode }))
    }
}
