//! The keypath Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use crate::cli::args::{Command, KeypathArgs, SetTarget};
use crate::cli::document::{parse_value, CliError, Document};
use crate::keypath::{
    exists, key_paths, set_any, try_get_at, try_set_at_available, SetAvailableOptions, SetOptions,
};
use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

pub mod args;
pub mod document;
pub mod output;

/// Environment variable holding the log filter, e.g. `KEYPATH_LOG=debug`.
pub const LOG_ENV: &str = "KEYPATH_LOG";

/// The main entry point for the CLI.
pub fn run() {
    init_logging();
    let args = KeypathArgs::parse();

    match dispatch(args.command) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            output::print_error(e);
            process::exit(1);
        }
    }
}

/// Installs a stderr `tracing` subscriber filtered by [`LOG_ENV`].
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Runs one subcommand. `Ok(false)` means a negative answer, not an error.
pub fn dispatch(command: Command) -> Result<bool, CliError> {
    match command {
        Command::Exists { file, path } => {
            let document = Document::load(&file)?;
            let found = exists(&document.record, path.as_str());
            output::print_exists(found);
            Ok(found)
        }
        Command::Get { file, path } => {
            let document = Document::load(&file)?;
            let value = try_get_at(&document.record, path.as_str())?;
            output::print_value(value);
            Ok(true)
        }
        Command::Set {
            target,
            no_create,
            replace,
        } => handle_set(target, Command::set_options(no_create, replace)),
        Command::SetAvailable { target, no_create } => {
            handle_set_available(target, Command::set_available_options(no_create))
        }
        Command::Paths { file } => {
            let document = Document::load(&file)?;
            output::print_paths(&key_paths(&document.record));
            Ok(true)
        }
    }
}

/// Handles the `set` subcommand.
fn handle_set(target: SetTarget, options: SetOptions) -> Result<bool, CliError> {
    let mut document = Document::load(&target.file)?;
    let value = parse_value(&target.value);
    set_any(&mut document.record, target.path.as_str(), value, options)?;
    finish_write(&document, target.write)
}

/// Handles the `set-available` subcommand.
fn handle_set_available(
    target: SetTarget,
    options: SetAvailableOptions,
) -> Result<bool, CliError> {
    let mut document = Document::load(&target.file)?;
    let value = parse_value(&target.value);
    try_set_at_available(&mut document.record, target.path.as_str(), value, options)?;
    finish_write(&document, target.write)
}

fn finish_write(document: &Document, write: bool) -> Result<bool, CliError> {
    if write {
        document.save()?;
        output::print_updated(&document.source);
    } else {
        output::print_document(&document.render()?);
    }
    Ok(true)
}
