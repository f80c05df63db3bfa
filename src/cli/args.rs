//! Defines the command-line arguments and subcommands for the keypath CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use crate::keypath::{SetAvailableOptions, SetOptions};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "keypath",
    version,
    about = "Read and write nested values in JSON and YAML documents by dotted key path."
)]
pub struct KeypathArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check whether a property exists at a key path.
    Exists {
        /// The document to inspect (`-` reads JSON from stdin).
        #[arg(required = true)]
        file: PathBuf,
        /// The dotted key path, e.g. `server.port`.
        path: String,
    },
    /// Print the value at an available key path.
    Get {
        /// The document to inspect (`-` reads JSON from stdin).
        #[arg(required = true)]
        file: PathBuf,
        /// The dotted key path, e.g. `server.port`.
        path: String,
    },
    /// Set a value at any key path.
    Set {
        #[command(flatten)]
        target: SetTarget,
        /// Fail instead of creating missing intermediate records.
        #[arg(long)]
        no_create: bool,
        /// Overwrite intermediate values that are not records.
        #[arg(long)]
        replace: bool,
    },
    /// Set a value at an available key path.
    SetAvailable {
        #[command(flatten)]
        target: SetTarget,
        /// Fail instead of creating missing intermediate records.
        #[arg(long)]
        no_create: bool,
    },
    /// List every key path present in a document.
    Paths {
        /// The document to inspect (`-` reads JSON from stdin).
        #[arg(required = true)]
        file: PathBuf,
    },
}

/// Arguments shared by the setters.
#[derive(Debug, Args)]
pub struct SetTarget {
    /// The document to update (`-` reads JSON from stdin).
    #[arg(required = true)]
    pub file: PathBuf,
    /// The dotted key path, e.g. `server.port`.
    pub path: String,
    /// The new value, parsed as JSON; anything that is not JSON is a string.
    pub value: String,
    /// Write the updated document back to the file instead of printing it.
    #[arg(short, long)]
    pub write: bool,
}

impl Command {
    pub fn set_options(no_create: bool, replace: bool) -> SetOptions {
        SetOptions::default()
            .create_missing_properties(!no_create)
            .replace_existing_properties(replace)
    }

    pub fn set_available_options(no_create: bool) -> SetAvailableOptions {
        SetAvailableOptions::default().create_missing_properties(!no_create)
    }
}
