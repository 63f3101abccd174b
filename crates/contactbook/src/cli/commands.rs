//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::contact::SortField;

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Contact name
    #[arg(short, long)]
    pub name: String,

    /// Phone number (7-15 digits)
    #[arg(short, long)]
    pub phone: String,

    /// Email address
    #[arg(short, long)]
    pub email: String,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Field to sort by: name, phone or email (defaults to the configured sort field)
    #[arg(short, long, value_name = "FIELD")]
    pub sort_by: Option<SortField>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Search command arguments.
#[derive(Debug, Args)]
pub struct SearchCommand {
    /// Text to look for in names (any case) or phone numbers
    pub term: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Update command arguments.
#[derive(Debug, Args)]
pub struct UpdateCommand {
    /// Name of the contact to update (case-insensitive)
    pub name: String,

    /// New phone number
    #[arg(short, long)]
    pub phone: Option<String>,

    /// New email address
    #[arg(short, long)]
    pub email: Option<String>,
}

/// Delete command arguments.
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Name of the contacts to delete (case-insensitive)
    pub name: String,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
