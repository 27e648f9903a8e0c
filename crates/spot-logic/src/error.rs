//! Error types for the command layer
//!
//! Two user-visible kinds:
//! - [`ParseError`]: the command text is malformed
//! - [`CommandError`]: well-formed input violates a model precondition
//!
//! [`LogicError`] additionally carries storage failures raised after a
//! command has already changed the in-memory model.

use spot_model::{AliasError, FieldError, ListError};
use spot_storage::StorageError;

/// Malformed command text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input was blank
    #[error("Please enter a command. Type 'help' to see what commands are available.")]
    EmptyInput,

    /// First word is neither a command word nor an alias
    #[error("Unknown command: '{0}'")]
    UnknownCommand(String),

    /// Required prefix missing or unexpected text present
    #[error("Invalid command format!\n{usage}")]
    InvalidFormat {
        /// Usage of the command being parsed
        usage: &'static str,
    },

    /// Field value failed validation
    #[error("{0}")]
    InvalidField(#[from] FieldError),

    /// Alias definition failed validation
    #[error("{0}")]
    InvalidAlias(#[from] AliasError),

    /// Flag not accepted by the command
    #[error("Unknown flag '-{flag}'. Allowed flags: {allowed}")]
    InvalidFlag {
        /// Text following the flag marker
        flag: String,
        /// Flags the command accepts
        allowed: String,
    },

    /// Mutually exclusive flags given together
    #[error("Only one of {0} may be given at a time")]
    ConflictingFlags(String),

    /// Edit without any field to change
    #[error("At least one field to edit must be provided.")]
    NoFieldEdited,
}

impl ParseError {
    /// Create invalid format error for a command usage
    #[inline]
    #[must_use]
    pub fn invalid_format(usage: &'static str) -> Self {
        Self::InvalidFormat { usage }
    }
}

/// Well-formed command rejected by the model
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Identity already present
    #[error("This study spot already exists in the study tracker")]
    DuplicateSpot,

    /// No spot with the given name
    #[error("The study spot '{0}' could not be found")]
    SpotNotFound(String),

    /// Spot already a favourite
    #[error("{0} is already in your favourites")]
    AlreadyFavourite(String),

    /// Spot not a favourite
    #[error("{0} is not in your favourites")]
    NotFavourite(String),

    /// Studied hours would exceed the counter range
    #[error("Logging {added} more hours at {name} is too large to record")]
    HoursOverflow {
        /// Spot name
        name: String,
        /// Hours being added
        added: u32,
    },

    /// No alias for the given token
    #[error("The alias '{0}' does not exist")]
    AliasNotFound(String),

    /// Model rejected a change after validation
    #[error("study tracker rejected the change: {0}")]
    Model(#[from] ListError),
}

/// Any failure while handling one line of input
#[derive(Debug, thiserror::Error)]
pub enum LogicError {
    /// Input could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Command could not be executed
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Command executed but saving failed; in-memory state is kept
    #[error("Could not save data to file: {0}")]
    Storage(#[from] StorageError),
}

impl LogicError {
    /// Check if the in-memory model was changed despite the error
    #[inline]
    #[must_use]
    pub fn model_changed(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_format_includes_usage() {
        let err = ParseError::invalid_format("add: Adds a study spot.");
        assert!(err.to_string().starts_with("Invalid command format!"));
        assert!(err.to_string().contains("add: Adds"));
    }

    #[test]
    fn field_error_reported_verbatim() {
        let err: ParseError = FieldError::new("rating", "Rating should be 1 to 5").into();
        assert_eq!(err.to_string(), "Rating should be 1 to 5");
    }

    #[test]
    fn logic_error_model_changed() {
        let parse: LogicError = ParseError::EmptyInput.into();
        assert!(!parse.model_changed());

        let storage: LogicError = StorageError::DataConversion("bad".to_string()).into();
        assert!(storage.model_changed());
    }
}
