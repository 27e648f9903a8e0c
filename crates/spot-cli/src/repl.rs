//! Console loop and result rendering

use spot_logic::command::{EXIT_USAGE, HELP_USAGE};
use spot_logic::{
    AddCommand, AliasCommand, ClearCommand, CommandResult, DeleteCommand, EditCommand,
    FavouriteCommand, FindCommand, ListCommand, Logic, LogCommand, UnaliasCommand,
    UnfavouriteCommand,
};
use spot_storage::Storage;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "> ";

/// Usage of every command, shown by `help`
pub(crate) fn help_text() -> String {
    [
        AddCommand::USAGE,
        DeleteCommand::USAGE,
        EditCommand::USAGE,
        FavouriteCommand::USAGE,
        UnfavouriteCommand::USAGE,
        LogCommand::USAGE,
        FindCommand::USAGE,
        ListCommand::USAGE,
        AliasCommand::USAGE,
        UnaliasCommand::USAGE,
        ClearCommand::USAGE,
        HELP_USAGE,
        EXIT_USAGE,
    ]
    .join("\n\n")
}

/// Write the outcome of one command and the visible spots
pub(crate) fn render<S: Storage>(
    out: &mut impl Write,
    logic: &Logic<S>,
    result: &CommandResult,
) -> io::Result<()> {
    writeln!(out, "{}", result.feedback)?;
    if result.show_help {
        writeln!(out, "\n{}", help_text())?;
    }
    if result.exit || result.show_help || result.show_aliases {
        return Ok(());
    }

    for (index, spot) in logic.filtered_spots().iter().enumerate() {
        writeln!(out, "{:>3}. {spot}", index + 1)?;
    }
    Ok(())
}

/// Read commands until `exit` or end of input
///
/// Returns the number of lines that failed.
pub(crate) fn run<S: Storage>(
    logic: &mut Logic<S>,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<usize> {
    let mut failures = 0;
    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            match logic.execute(&line) {
                Ok(result) => {
                    render(out, logic, &result)?;
                    if result.exit {
                        return Ok(failures);
                    }
                }
                Err(e) => {
                    failures += 1;
                    if e.model_changed() {
                        tracing::warn!(error = %e, "change kept in memory only");
                    }
                    writeln!(out, "{e}")?;
                }
            }
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(failures)
}
