//! User-defined command aliases
//!
//! An [`Alias`] maps a short user token to a command phrase. The phrase must
//! start with a reserved command word other than the alias management words,
//! so expanding an alias always lands on a command word and never on another
//! alias.

use crate::error::AliasError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Reserved command words, in alphabetical order
pub const COMMAND_WORDS: [&str; 13] = [
    "add", "alias", "clear", "delete", "edit", "exit", "fav", "find", "help", "list", "log",
    "unalias", "unfav",
];

/// Command words an alias may not expand to
pub const ALIAS_MANAGEMENT_WORDS: [&str; 2] = ["alias", "unalias"];

/// Check whether `word` is a reserved command word
#[inline]
#[must_use]
pub fn is_command_word(word: &str) -> bool {
    COMMAND_WORDS.contains(&word)
}

/// Split text into its first whitespace-delimited word and the remainder
///
/// The remainder keeps its leading whitespace.
#[must_use]
pub fn split_command_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(end) => (&input[..end], &input[end..]),
        None => (input, ""),
    }
}

/// A user token standing for a command phrase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAlias", into = "RawAlias")]
pub struct Alias {
    user_token: String,
    command_phrase: String,
}

/// Unvalidated serialized form of [`Alias`]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawAlias {
    alias: String,
    command: String,
}

impl Alias {
    /// Validate and create an alias
    ///
    /// # Errors
    /// - [`AliasError::InvalidToken`] if the token is blank or not alphanumeric
    /// - [`AliasError::ReservedToken`] if the token is a command word
    /// - [`AliasError::InvalidCommand`] if the phrase does not start with a
    ///   command word
    /// - [`AliasError::SelfReference`] if the phrase starts with `alias` or
    ///   `unalias`
    pub fn new(user_token: &str, command_phrase: &str) -> Result<Self, AliasError> {
        let user_token = user_token.trim();
        if user_token.is_empty() || !user_token.chars().all(char::is_alphanumeric) {
            return Err(AliasError::InvalidToken);
        }
        if is_command_word(user_token) {
            return Err(AliasError::ReservedToken(user_token.to_string()));
        }

        let command_phrase = command_phrase.trim();
        let (word, _) = split_command_word(command_phrase);
        if ALIAS_MANAGEMENT_WORDS.contains(&word) {
            return Err(AliasError::SelfReference(word.to_string()));
        }
        if !is_command_word(word) {
            return Err(AliasError::InvalidCommand);
        }

        Ok(Self {
            user_token: user_token.to_string(),
            command_phrase: command_phrase.to_string(),
        })
    }

    /// Token typed by the user
    #[inline]
    #[must_use]
    pub fn user_token(&self) -> &str {
        &self.user_token
    }

    /// Full expansion phrase
    #[inline]
    #[must_use]
    pub fn command_phrase(&self) -> &str {
        &self.command_phrase
    }

    /// Leading command word of the expansion
    #[inline]
    #[must_use]
    pub fn command_word(&self) -> &str {
        split_command_word(&self.command_phrase).0
    }

    /// Argument text following the command word
    #[inline]
    #[must_use]
    pub fn arguments(&self) -> &str {
        split_command_word(&self.command_phrase).1.trim()
    }
}

impl TryFrom<RawAlias> for Alias {
    type Error = AliasError;

    fn try_from(raw: RawAlias) -> Result<Self, Self::Error> {
        Self::new(&raw.alias, &raw.command)
    }
}

impl From<Alias> for RawAlias {
    fn from(alias: Alias) -> Self {
        Self {
            alias: alias.user_token,
            command: alias.command_phrase,
        }
    }
}

impl Display for Alias {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.user_token, self.command_phrase)
    }
}

/// Aliases keyed by exact user token, in definition order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Alias>", into = "Vec<Alias>")]
pub struct AliasTable {
    aliases: IndexMap<String, Alias>,
}

impl AliasTable {
    /// Create empty table
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Alias for an exact user token
    #[inline]
    #[must_use]
    pub fn get(&self, user_token: &str) -> Option<&Alias> {
        self.aliases.get(user_token)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, user_token: &str) -> bool {
        self.aliases.contains_key(user_token)
    }

    /// Insert an alias, replacing any alias with the same token in place
    ///
    /// Returns the replaced alias.
    pub fn upsert(&mut self, alias: Alias) -> Option<Alias> {
        self.aliases.insert(alias.user_token.clone(), alias)
    }

    /// Remove the alias for a token, keeping the order of the rest
    pub fn remove(&mut self, user_token: &str) -> Option<Alias> {
        self.aliases.shift_remove(user_token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alias> {
        self.aliases.values()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl From<Vec<Alias>> for AliasTable {
    fn from(aliases: Vec<Alias>) -> Self {
        let mut table = Self::new();
        for alias in aliases {
            table.upsert(alias);
        }
        table
    }
}

impl From<AliasTable> for Vec<Alias> {
    fn from(table: AliasTable) -> Self {
        table.aliases.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_splits_phrase() {
        let alias = Alias::new("lf", "list  -f t/quiet").unwrap();
        assert_eq!(alias.command_word(), "list");
        assert_eq!(alias.arguments(), "-f t/quiet");
    }

    #[test]
    fn alias_rejects_reserved_tokens() {
        for word in COMMAND_WORDS {
            assert_eq!(
                Alias::new(word, "list"),
                Err(AliasError::ReservedToken(word.to_string()))
            );
        }
    }

    #[test]
    fn alias_rejects_self_reference() {
        assert!(matches!(
            Alias::new("a", "alias al/b cmd/list"),
            Err(AliasError::SelfReference(_))
        ));
        assert!(matches!(
            Alias::new("u", "unalias al/b"),
            Err(AliasError::SelfReference(_))
        ));
    }

    #[test]
    fn alias_rejects_bad_input() {
        assert_eq!(Alias::new("", "list"), Err(AliasError::InvalidToken));
        assert_eq!(Alias::new("l s", "list"), Err(AliasError::InvalidToken));
        assert_eq!(Alias::new("ls", ""), Err(AliasError::InvalidCommand));
        assert_eq!(Alias::new("ls", "ls"), Err(AliasError::InvalidCommand));
        assert_eq!(Alias::new("ls", "LIST"), Err(AliasError::InvalidCommand));
    }

    #[test]
    fn table_upsert_replaces_in_place() {
        let mut table = AliasTable::new();
        table.upsert(Alias::new("a", "list").unwrap());
        table.upsert(Alias::new("b", "find lib").unwrap());
        let replaced = table.upsert(Alias::new("a", "list -f").unwrap());

        assert_eq!(replaced.unwrap().command_phrase(), "list");
        let tokens: Vec<&str> = table.iter().map(Alias::user_token).collect();
        assert_eq!(tokens, vec!["a", "b"]);
        assert_eq!(table.get("a").unwrap().arguments(), "-f");
    }

    #[test]
    fn table_serde_roundtrip() {
        let mut table = AliasTable::new();
        table.upsert(Alias::new("ls", "list").unwrap());

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"[{"alias":"ls","command":"list"}]"#);
        let restored: AliasTable = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, table);
    }

    #[test]
    fn table_deserialize_rejects_invalid_alias() {
        let json = r#"[{"alias":"list","command":"list"}]"#;
        assert!(serde_json::from_str::<AliasTable>(json).is_err());
    }

    #[test]
    fn split_command_word_keeps_remainder() {
        assert_eq!(split_command_word("  add n/A"), ("add", " n/A"));
        assert_eq!(split_command_word("list"), ("list", ""));
        assert_eq!(split_command_word(""), ("", ""));
    }
}
