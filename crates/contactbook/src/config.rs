//! Configuration management for contactbook.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::contact::SortField;
use crate::error::{Error, Result};
use crate::storage::DEFAULT_INDENT;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory name under the user's config dir.
const APP_DIR_NAME: &str = "contactbook";

/// Default contacts file name, relative to the working directory.
const CONTACTS_FILE_NAME: &str = "contacts.json";

/// Largest accepted indent width.
const MAX_INDENT: usize = 16;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `CONTACTBOOK_`, sections split on `__`)
/// 2. TOML config file at `~/.config/contactbook/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Display configuration.
    pub display: DisplayConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the contacts file.
    /// Defaults to `contacts.json` in the working directory.
    pub contacts_path: Option<PathBuf>,
    /// Spaces per indent level in the saved file.
    pub indent: usize,
}

/// Display-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Field the menu's "View Contacts" listing is sorted by.
    pub default_sort: SortField,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            contacts_path: None,
            indent: DEFAULT_INDENT,
        }
    }
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// A config file that does not exist is skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);
        Self::from_figment(Self::figment(config_file))
    }

    /// Load and validate one specific configuration file.
    ///
    /// Unlike [`Config::load_from`], a missing file is an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file does not exist, or an
    /// error if loading, parsing or validation fails.
    pub fn check_file(config_file: PathBuf) -> Result<Self> {
        if !config_file.is_file() {
            return Err(Error::ConfigNotFound { path: config_file });
        }
        Self::from_figment(Self::figment(config_file))
    }

    fn figment(config_file: PathBuf) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed("CONTACTBOOK_").split("__"))
    }

    fn from_figment(figment: Figment) -> Result<Self> {
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.storage.indent > MAX_INDENT {
            return Err(Error::ConfigValidation {
                message: format!(
                    "indent ({}) cannot be greater than {MAX_INDENT}",
                    self.storage.indent
                ),
            });
        }

        if let Some(path) = &self.storage.contacts_path {
            if path.as_os_str().is_empty() {
                return Err(Error::ConfigValidation {
                    message: "contacts_path must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Get the contacts file path, resolving defaults if not set.
    #[must_use]
    pub fn contacts_path(&self) -> PathBuf {
        self.storage
            .contacts_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(CONTACTS_FILE_NAME))
    }
}
