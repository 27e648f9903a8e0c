//! Command parsers
//!
//! One parser per command word. Each parser receives the argument text that
//! followed the command word (after alias expansion), tokenizes it with the
//! prefixes the command understands and builds a [`Command`].
//!
//! Parsers are stateless and registered by command word in the
//! [`CommandDispatcher`](crate::CommandDispatcher).

use crate::command::Command;
use crate::error::ParseError;
use crate::tokenizer::ArgumentMultimap;
use crate::prefix::Prefix;

mod add;
mod alias;
mod edit;
mod find;
mod list;
mod log;
mod simple;
mod single_name;

pub use add::AddParser;
pub use alias::{AliasParser, UnaliasParser};
pub use edit::EditParser;
pub use find::FindParser;
pub use list::ListParser;
pub use log::LogParser;
pub use simple::{ClearParser, ExitParser, HelpParser};
pub use single_name::{DeleteParser, FavouriteParser, UnfavouriteParser};

/// Turns the argument text of one command word into a [`Command`]
pub trait CommandParser: Send + Sync + 'static {
    /// Command word this parser handles
    fn word(&self) -> &'static str;

    /// Parse argument text
    ///
    /// # Errors
    /// Returns [`ParseError`] if the text does not match the command's format
    /// or a field fails validation.
    fn parse(&self, args: &str) -> Result<Command, ParseError>;
}

/// Reject free text before the first prefix and require every `required` prefix
pub(crate) fn require_fields(
    map: &ArgumentMultimap,
    required: &[Prefix],
    usage: &'static str,
) -> Result<(), ParseError> {
    if !map.preamble().is_empty() || !map.contains_all(required) {
        return Err(ParseError::invalid_format(usage));
    }
    Ok(())
}
