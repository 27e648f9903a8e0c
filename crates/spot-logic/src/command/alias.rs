use super::CommandResult;
use crate::error::CommandError;
use spot_model::{Alias, Model};

/// Defines an alias, or lists the current ones
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasCommand {
    /// Add or replace an alias
    Define(Alias),
    /// Show the alias table
    Show,
}

impl AliasCommand {
    pub const WORD: &'static str = "alias";
    pub const USAGE: &'static str = "alias: Creates a shorthand for a command. \
        Redefining an existing alias replaces it. Without parameters, lists all aliases. \
        al/ and cmd/ may each be given once, and the command cannot contain them.\n\
        Parameters: [al/ALIAS cmd/COMMAND]\n\
        Example: alias al/ls cmd/list -f";

    pub(crate) fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let alias = match self {
            Self::Show => return Ok(show_aliases(model)),
            Self::Define(alias) => alias,
        };

        let previous = model.aliases_mut().upsert(alias.clone());
        tracing::info!(
            alias = alias.user_token(),
            command = alias.command_phrase(),
            replaced = previous.is_some(),
            "alias defined"
        );

        let feedback = match previous {
            Some(old) => format!("Alias updated: {alias} (was: {})", old.command_phrase()),
            None => format!("New alias added: {alias}"),
        };
        Ok(CommandResult::message(feedback))
    }
}

fn show_aliases(model: &Model) -> CommandResult {
    let aliases = model.aliases();
    let feedback = if aliases.is_empty() {
        "No aliases defined".to_string()
    } else {
        let lines: Vec<String> = aliases.iter().map(ToString::to_string).collect();
        format!("Aliases:\n{}", lines.join("\n"))
    };
    CommandResult::message(feedback).with_aliases()
}

/// Removes an alias
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaliasCommand {
    token: String,
}

impl UnaliasCommand {
    pub const WORD: &'static str = "unalias";
    pub const USAGE: &'static str = "unalias: Removes an alias.\n\
        Parameters: al/ALIAS\n\
        Example: unalias al/ls";

    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub(crate) fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let removed = model
            .aliases_mut()
            .remove(&self.token)
            .ok_or_else(|| CommandError::AliasNotFound(self.token.clone()))?;
        tracing::info!(alias = removed.user_token(), "alias removed");

        Ok(CommandResult::message(format!("Removed alias: {removed}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn define(model: &mut Model, token: &str, phrase: &str) -> CommandResult {
        AliasCommand::Define(Alias::new(token, phrase).unwrap())
            .execute(model)
            .unwrap()
    }

    #[test]
    fn define_then_redefine_in_place() {
        let mut model = Model::default();
        define(&mut model, "ls", "list");
        define(&mut model, "f", "find");

        let result = define(&mut model, "ls", "list -f");
        assert!(result.feedback.starts_with("Alias updated"));

        let tokens: Vec<&str> = model.aliases().iter().map(Alias::user_token).collect();
        assert_eq!(tokens, vec!["ls", "f"]);
        assert_eq!(model.aliases().get("ls").unwrap().command_phrase(), "list -f");
    }

    #[test]
    fn show_sets_signal() {
        let mut model = Model::default();
        let empty = AliasCommand::Show.execute(&mut model).unwrap();
        assert!(empty.show_aliases);
        assert_eq!(empty.feedback, "No aliases defined");

        define(&mut model, "ls", "list");
        let listed = AliasCommand::Show.execute(&mut model).unwrap();
        assert!(listed.feedback.contains("ls: list"));
    }

    #[test]
    fn unalias_removes_or_fails() {
        let mut model = Model::default();
        define(&mut model, "ls", "list");

        UnaliasCommand::new("ls").execute(&mut model).unwrap();
        assert!(model.aliases().is_empty());

        assert_eq!(
            UnaliasCommand::new("ls").execute(&mut model),
            Err(CommandError::AliasNotFound("ls".to_string()))
        );
    }
}
