//! Executable commands
//!
//! [`Command`] is a tagged enum with one payload struct per command kind.
//! [`Command::execute`] runs it against a [`Model`]. Each execution checks
//! its precondition against the model as it is at that moment, so re-running
//! a mutating command whose precondition no longer holds fails instead of
//! silently succeeding.

use crate::error::CommandError;
use spot_model::Model;

mod add;
mod alias;
mod clear;
mod delete;
mod edit;
mod favourite;
mod find;
mod list;
mod log;

pub use add::AddCommand;
pub use alias::{AliasCommand, UnaliasCommand};
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditSpotDescriptor};
pub use favourite::{FavouriteCommand, UnfavouriteCommand};
pub use find::FindCommand;
pub use list::ListCommand;
pub use log::{LogCommand, LogMode};

/// Outcome of a successful command, consumed by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Message shown to the user
    pub feedback: String,
    /// Caller should show help
    pub show_help: bool,
    /// Caller should show the alias settings
    pub show_aliases: bool,
    /// Caller should end the session
    pub exit: bool,
}

impl CommandResult {
    /// Plain feedback message
    #[inline]
    #[must_use]
    pub fn message(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            ..Self::default()
        }
    }

    /// Also ask the caller to show help
    #[inline]
    #[must_use]
    pub fn with_help(mut self) -> Self {
        self.show_help = true;
        self
    }

    /// Also ask the caller to show the alias settings
    #[inline]
    #[must_use]
    pub fn with_aliases(mut self) -> Self {
        self.show_aliases = true;
        self
    }

    /// Also ask the caller to exit
    #[inline]
    #[must_use]
    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self
    }
}

pub const HELP_USAGE: &str = "help: Shows program usage instructions.\nExample: help";
pub const HELP_MESSAGE: &str = "Opened help window.";
pub const EXIT_USAGE: &str = "exit: Exits the program.\nExample: exit";
pub const EXIT_MESSAGE: &str = "Exiting Study Tracker as requested ...";

/// A parsed, executable command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Alias(AliasCommand),
    Clear(ClearCommand),
    Delete(DeleteCommand),
    Edit(EditCommand),
    Exit,
    Favourite(FavouriteCommand),
    Find(FindCommand),
    Help,
    List(ListCommand),
    Log(LogCommand),
    Unalias(UnaliasCommand),
    Unfavourite(UnfavouriteCommand),
}

impl Command {
    /// Command word invoking this command
    #[must_use]
    pub fn word(&self) -> &'static str {
        match self {
            Self::Add(_) => AddCommand::WORD,
            Self::Alias(_) => AliasCommand::WORD,
            Self::Clear(_) => ClearCommand::WORD,
            Self::Delete(_) => DeleteCommand::WORD,
            Self::Edit(_) => EditCommand::WORD,
            Self::Exit => "exit",
            Self::Favourite(_) => FavouriteCommand::WORD,
            Self::Find(_) => FindCommand::WORD,
            Self::Help => "help",
            Self::List(_) => ListCommand::WORD,
            Self::Log(_) => LogCommand::WORD,
            Self::Unalias(_) => UnaliasCommand::WORD,
            Self::Unfavourite(_) => UnfavouriteCommand::WORD,
        }
    }

    /// Check whether executing can change the model
    #[must_use]
    pub fn is_mutating(&self) -> bool {
        !matches!(
            self,
            Self::Exit | Self::Find(_) | Self::Help | Self::List(_)
        ) && !matches!(self, Self::Alias(AliasCommand::Show))
    }

    /// Execute against the model
    ///
    /// # Errors
    /// Returns [`CommandError`] if the command's precondition does not hold.
    /// The model is unchanged on error.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        tracing::debug!(command = self.word(), "executing command");
        match self {
            Self::Add(cmd) => cmd.execute(model),
            Self::Alias(cmd) => cmd.execute(model),
            Self::Clear(cmd) => cmd.execute(model),
            Self::Delete(cmd) => cmd.execute(model),
            Self::Edit(cmd) => cmd.execute(model),
            Self::Exit => Ok(CommandResult::message(EXIT_MESSAGE).with_exit()),
            Self::Favourite(cmd) => cmd.execute(model),
            Self::Find(cmd) => Ok(cmd.execute(model)),
            Self::Help => Ok(CommandResult::message(HELP_MESSAGE).with_help()),
            Self::List(cmd) => Ok(cmd.execute(model)),
            Self::Log(cmd) => cmd.execute(model),
            Self::Unalias(cmd) => cmd.execute(model),
            Self::Unfavourite(cmd) => cmd.execute(model),
        }
    }
}

/// Feedback for a filtered list of `count` spots
pub(crate) fn spots_listed(count: usize) -> String {
    match count {
        1 => "1 study spot listed!".to_string(),
        n => format!("{n} study spots listed!"),
    }
}
