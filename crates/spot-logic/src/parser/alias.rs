use super::{require_fields, CommandParser};
use crate::command::{AliasCommand, Command, UnaliasCommand};
use crate::error::ParseError;
use crate::prefix::{PREFIX_ALIAS, PREFIX_COMMAND};
use crate::tokenizer::tokenize;
use spot_model::Alias;

/// `alias al/TOKEN cmd/PHRASE`, or bare `alias`
#[derive(Debug, Clone, Copy, Default)]
pub struct AliasParser;

impl CommandParser for AliasParser {
    fn word(&self) -> &'static str {
        AliasCommand::WORD
    }

    fn parse(&self, args: &str) -> Result<Command, ParseError> {
        if args.trim().is_empty() {
            return Ok(Command::Alias(AliasCommand::Show));
        }

        let map = tokenize(args, &[PREFIX_ALIAS, PREFIX_COMMAND]);
        require_fields(&map, &[PREFIX_ALIAS, PREFIX_COMMAND], AliasCommand::USAGE)?;
        if map.all_values(PREFIX_ALIAS).len() > 1 || map.all_values(PREFIX_COMMAND).len() > 1 {
            return Err(ParseError::invalid_format(AliasCommand::USAGE));
        }

        let alias = Alias::new(
            map.value(PREFIX_ALIAS).unwrap_or_default(),
            map.value(PREFIX_COMMAND).unwrap_or_default(),
        )?;
        Ok(Command::Alias(AliasCommand::Define(alias)))
    }
}

/// `unalias al/TOKEN`
#[derive(Debug, Clone, Copy, Default)]
pub struct UnaliasParser;

impl CommandParser for UnaliasParser {
    fn word(&self) -> &'static str {
        UnaliasCommand::WORD
    }

    fn parse(&self, args: &str) -> Result<Command, ParseError> {
        let map = tokenize(args, &[PREFIX_ALIAS]);
        require_fields(&map, &[PREFIX_ALIAS], UnaliasCommand::USAGE)?;

        let token = map.value(PREFIX_ALIAS).unwrap_or_default();
        if token.is_empty() {
            return Err(ParseError::invalid_format(UnaliasCommand::USAGE));
        }
        Ok(Command::Unalias(UnaliasCommand::new(token)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spot_model::AliasError;

    #[test]
    fn parse_define_keeps_phrase_arguments() {
        let cmd = AliasParser.parse(" al/ls cmd/list -f t/quiet").unwrap();
        let expected = Alias::new("ls", "list -f t/quiet").unwrap();
        assert_eq!(cmd, Command::Alias(AliasCommand::Define(expected)));
    }

    #[test]
    fn parse_bare_alias_shows_table() {
        assert_eq!(AliasParser.parse("  "), Ok(Command::Alias(AliasCommand::Show)));
    }

    #[test]
    fn parse_rejects_reserved_and_self_reference() {
        assert_eq!(
            AliasParser.parse("al/list cmd/find x"),
            Err(ParseError::InvalidAlias(AliasError::ReservedToken(
                "list".to_string()
            )))
        );
        assert_eq!(
            AliasParser.parse("al/un cmd/unalias x"),
            Err(ParseError::InvalidAlias(AliasError::SelfReference(
                "unalias".to_string()
            )))
        );
    }

    #[test]
    fn parse_rejects_repeated_prefixes() {
        let invalid = Err(ParseError::invalid_format(AliasCommand::USAGE));
        assert_eq!(AliasParser.parse("al/x cmd/find al/y"), invalid);
        assert_eq!(AliasParser.parse("al/x cmd/find cmd/list"), invalid);
        assert_eq!(AliasParser.parse("al/x al/y cmd/find"), invalid);
    }

    #[test]
    fn parse_requires_both_prefixes() {
        assert_eq!(
            AliasParser.parse("al/ls"),
            Err(ParseError::invalid_format(AliasCommand::USAGE))
        );
    }

    #[test]
    fn parse_unalias() {
        assert_eq!(
            UnaliasParser.parse(" al/ls"),
            Ok(Command::Unalias(UnaliasCommand::new("ls")))
        );
        assert!(UnaliasParser.parse("al/").is_err());
        assert!(UnaliasParser.parse("ls").is_err());
    }
}
