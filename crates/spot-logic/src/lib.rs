//! Study Spot Command Logic
//!
//! The command language of the study spot tracker: tokenizer, alias
//! expansion, command parsers, executable commands and the session
//! orchestrator.
//!
//! # Overview
//!
//! - **tokenize**: splits argument text into prefix/value pairs
//! - **CommandDispatcher**: resolves the command word, expanding an alias once
//! - **Command**: parsed command, executed against a [`Model`](spot_model::Model)
//! - **Logic**: parses, executes and saves
//!
//! # Example
//!
//! ```rust
//! use spot_logic::CommandDispatcher;
//! use spot_model::{Alias, AliasTable, Model};
//!
//! let dispatcher = CommandDispatcher::with_defaults();
//! let mut aliases = AliasTable::new();
//! aliases.upsert(Alias::new("ls", "list").unwrap());
//!
//! let mut model = Model::default();
//! let add = dispatcher.parse("add n/Central Library r/4 a/Main Campus -f", &aliases).unwrap();
//! add.execute(&mut model).unwrap();
//!
//! let list = dispatcher.parse("ls -f", &aliases).unwrap();
//! let result = list.execute(&mut model).unwrap();
//! assert_eq!(result.feedback, "1 study spot listed!");
//! ```

#![warn(unreachable_pub)]

pub mod command;
pub mod dispatcher;
pub mod error;
pub mod fields;
pub mod logic;
pub mod parser;
pub mod prefix;
pub mod tokenizer;

// Re-exports
pub use command::{
    AddCommand, AliasCommand, ClearCommand, Command, CommandResult, DeleteCommand, EditCommand,
    EditSpotDescriptor, FavouriteCommand, FindCommand, ListCommand, LogCommand, LogMode,
    UnaliasCommand, UnfavouriteCommand,
};
pub use dispatcher::{resolve, CommandDispatcher, ResolvedInput};
pub use error::{CommandError, LogicError, ParseError};
pub use logic::Logic;
pub use parser::CommandParser;
pub use prefix::{Flag, Prefix};
pub use tokenizer::{tokenize, tokenize_with_flags, ArgumentMultimap};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
