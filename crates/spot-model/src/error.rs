//! Error types for the model layer
//!
//! Provides error handling for:
//! - Field validation (value objects built from raw text)
//! - Identity-aware list operations
//! - Alias validation

/// A raw value failed the constraints of its field
///
/// Carries the fixed, human-readable constraints message of the field so it
/// can be reported to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
    /// Field that rejected the value
    pub field: &'static str,
    /// Constraints message of that field
    pub message: &'static str,
}

impl FieldError {
    /// Create new field error
    #[inline]
    #[must_use]
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Errors from [`UniqueList`](crate::UniqueList) operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// Element with the same identity already present
    #[error("operation would result in duplicate entries")]
    Duplicate,

    /// Element not present
    #[error("entry not found")]
    NotFound,
}

/// Alias validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AliasError {
    /// User token is blank or not alphanumeric
    #[error("Alias names should only contain alphanumeric characters and should not be blank")]
    InvalidToken,

    /// User token shadows a command word
    #[error("'{0}' is a command word and cannot be used as an alias")]
    ReservedToken(String),

    /// Expansion does not start with a command word
    #[error("An alias must expand to a command starting with a valid command word")]
    InvalidCommand,

    /// Expansion starts with an alias management word
    #[error("An alias cannot expand to the '{0}' command")]
    SelfReference(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_displays_message() {
        let err = FieldError::new("rating", "Rating should be a number from 1 to 5");
        assert_eq!(err.to_string(), "Rating should be a number from 1 to 5");
    }

    #[test]
    fn alias_error_display() {
        let err = AliasError::ReservedToken("list".to_string());
        assert!(err.to_string().contains("'list'"));
    }
}
