//! `spot`: console front end of the study spot tracker

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use spot_logic::Logic;
use spot_storage::{AppConfig, StorageManager, DEFAULT_CONFIG_FILE};
use std::io::{self, Write};
use std::path::PathBuf;

mod logging;
mod repl;

fn cli() -> Command {
    Command::new("spot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Track study spots, favourites and studied hours")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_CONFIG_FILE)
                .help("Configuration file (TOML)"),
        )
        .arg(
            Arg::new("data")
                .long("data")
                .short('d')
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Tracker data file, overrides the configuration"),
        )
        .arg(
            Arg::new("prefs")
                .long("prefs")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Preferences file, overrides the configuration"),
        )
        .subcommand(Command::new("repl").about("Read commands from standard input (default)"))
        .subcommand(
            Command::new("run")
                .about("Execute a single command and exit")
                .arg(
                    Arg::new("command")
                        .required(true)
                        .num_args(1..)
                        .trailing_var_arg(true)
                        .allow_hyphen_values(true)
                        .action(ArgAction::Append)
                        .help("Command line, e.g. list -f"),
                ),
        )
}

fn load_config(matches: &ArgMatches) -> Result<AppConfig> {
    let path = matches
        .get_one::<PathBuf>("config")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let mut config = AppConfig::load(&path)
        .with_context(|| format!("loading configuration from {}", path.display()))?;

    if let Some(data) = matches.get_one::<PathBuf>("data") {
        config = config.with_data_file(data);
    }
    if let Some(prefs) = matches.get_one::<PathBuf>("prefs") {
        config = config.with_prefs_file(prefs);
    }
    Ok(config)
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    let config = load_config(&matches)?;
    logging::init(&config.log_level);
    tracing::debug!(?config, "configuration loaded");

    let mut logic = Logic::load(StorageManager::from_config(&config));
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match matches.subcommand() {
        Some(("run", args)) => {
            let line = args
                .get_many::<String>("command")
                .map(|words| words.cloned().collect::<Vec<_>>().join(" "))
                .unwrap_or_default();

            let result = logic.execute(&line).context("command failed")?;
            repl::render(&mut out, &logic, &result)?;
        }
        _ => {
            writeln!(out, "Study Tracker {} - type 'help' for commands", spot_logic::VERSION)?;
            let failures = repl::run(&mut logic, io::stdin().lock(), &mut out)?;
            tracing::debug!(failures, "session ended");
        }
    }

    out.flush()?;
    Ok(())
}
