//! Command word resolution and dispatch
//!
//! [`CommandDispatcher`] resolves the first word of a line of input, expands
//! it through the [`AliasTable`] when it is not a command word, and hands the
//! remaining text to the parser registered for the resolved word.
//!
//! Expansion happens at most once. An alias can only be created for a phrase
//! that starts with a command word, so the expanded word never needs another
//! alias lookup.

use crate::command::Command;
use crate::error::ParseError;
use crate::parser::{
    AddParser, AliasParser, ClearParser, CommandParser, DeleteParser, EditParser, ExitParser,
    FavouriteParser, FindParser, HelpParser, ListParser, LogParser, UnaliasParser,
    UnfavouriteParser,
};
use spot_model::{is_command_word, split_command_word, AliasTable};
use std::collections::HashMap;
use std::fmt;

/// Command word and argument text after alias expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    /// Reserved command word
    pub word: String,
    /// Argument text for the command's parser
    pub args: String,
}

/// Resolve the command word of `input`, expanding an alias once
///
/// # Errors
/// - [`ParseError::EmptyInput`] if the input is blank
/// - [`ParseError::UnknownCommand`] if the first word is neither a command
///   word nor a defined alias
pub fn resolve(input: &str, aliases: &AliasTable) -> Result<ResolvedInput, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let (head, tail) = split_command_word(input);
    if is_command_word(head) {
        return Ok(ResolvedInput {
            word: head.to_string(),
            args: tail.to_string(),
        });
    }

    let alias = aliases
        .get(head)
        .ok_or_else(|| ParseError::UnknownCommand(head.to_string()))?;

    let word = alias.command_word();
    if !is_command_word(word) {
        return Err(ParseError::UnknownCommand(word.to_string()));
    }
    tracing::debug!(alias = head, expansion = alias.command_phrase(), "expanded alias");

    Ok(ResolvedInput {
        word: word.to_string(),
        args: format!(" {} {}", alias.arguments(), tail.trim_start()),
    })
}

/// Registry of command parsers keyed by command word
pub struct CommandDispatcher {
    parsers: HashMap<&'static str, Box<dyn CommandParser>>,
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for CommandDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words = self.words();
        words.sort_unstable();
        f.debug_struct("CommandDispatcher")
            .field("words", &words)
            .finish()
    }
}

impl CommandDispatcher {
    /// Create dispatcher with no parsers
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Create dispatcher with a parser for every command word
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register(AddParser);
        dispatcher.register(AliasParser);
        dispatcher.register(ClearParser);
        dispatcher.register(DeleteParser);
        dispatcher.register(EditParser);
        dispatcher.register(ExitParser);
        dispatcher.register(FavouriteParser);
        dispatcher.register(FindParser);
        dispatcher.register(HelpParser);
        dispatcher.register(ListParser);
        dispatcher.register(LogParser);
        dispatcher.register(UnaliasParser);
        dispatcher.register(UnfavouriteParser);
        dispatcher
    }

    /// Register a parser under its command word, replacing any previous one
    pub fn register<P: CommandParser>(&mut self, parser: P) {
        self.parsers.insert(parser.word(), Box::new(parser));
    }

    /// Check if a parser is registered for `word`
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.parsers.contains_key(word)
    }

    /// Command words with a registered parser
    #[must_use]
    pub fn words(&self) -> Vec<&'static str> {
        self.parsers.keys().copied().collect()
    }

    /// Parse one line of input
    ///
    /// Depends only on `input`, `aliases` and the registered parsers.
    ///
    /// # Errors
    /// Returns [`ParseError`] if the command word cannot be resolved or its
    /// parser rejects the arguments.
    pub fn parse(&self, input: &str, aliases: &AliasTable) -> Result<Command, ParseError> {
        let resolved = resolve(input, aliases)?;
        let parser = self
            .parsers
            .get(resolved.word.as_str())
            .ok_or_else(|| ParseError::UnknownCommand(resolved.word.clone()))?;

        tracing::debug!(command = %resolved.word, "dispatching command");
        parser.parse(&resolved.args)
    }
}
