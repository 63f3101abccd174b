//! Command-line interface for contactbook.
//!
//! This module provides the CLI structure for the `contactbook` binary.
//! Without a subcommand the binary runs the interactive menu.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, ConfigCommand, DeleteCommand, ListCommand, SearchCommand, UpdateCommand,
};

use crate::logging::Verbosity;

/// contactbook - A small contact directory in a JSON file
///
/// Run without a command for the interactive menu, or use one of the
/// commands below for one-off operations.
#[derive(Debug, Parser)]
#[command(name = "contactbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the contacts file (overrides configuration)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the interactive menu (the default)
    Menu,

    /// Add a contact
    Add(AddCommand),

    /// List all contacts
    List(ListCommand),

    /// Search contacts by name or phone
    Search(SearchCommand),

    /// Update a contact's phone or email
    Update(UpdateCommand),

    /// Delete contacts by name
    Delete(DeleteCommand),

    /// View configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::from_count(self.verbose)
        }
    }
}
