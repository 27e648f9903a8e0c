use super::CommandParser;
use crate::command::{Command, ClearCommand, EXIT_USAGE, HELP_USAGE};
use crate::error::ParseError;

fn require_no_arguments(args: &str, usage: &'static str) -> Result<(), ParseError> {
    if args.trim().is_empty() {
        Ok(())
    } else {
        Err(ParseError::invalid_format(usage))
    }
}

/// `clear`
#[derive(Debug, Clone, Copy, Default)]
pub struct ClearParser;

impl CommandParser for ClearParser {
    fn word(&self) -> &'static str {
        ClearCommand::WORD
    }

    fn parse(&self, args: &str) -> Result<Command, ParseError> {
        require_no_arguments(args, ClearCommand::USAGE)?;
        Ok(Command::Clear(ClearCommand))
    }
}

/// `help`
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpParser;

impl CommandParser for HelpParser {
    fn word(&self) -> &'static str {
        "help"
    }

    fn parse(&self, args: &str) -> Result<Command, ParseError> {
        require_no_arguments(args, HELP_USAGE)?;
        Ok(Command::Help)
    }
}

/// `exit`
#[derive(Debug, Clone, Copy, Default)]
pub struct ExitParser;

impl CommandParser for ExitParser {
    fn word(&self) -> &'static str {
        "exit"
    }

    fn parse(&self, args: &str) -> Result<Command, ParseError> {
        require_no_arguments(args, EXIT_USAGE)?;
        Ok(Command::Exit)
    }
}
