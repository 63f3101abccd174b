//! Error types for contactbook.
//!
//! Validation failures (bad phone or email input) are kept apart from I/O,
//! serialization, and configuration failures so the menu can report them
//! as user-correctable.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for contactbook operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Validation Errors ===
    /// Phone number is not 7-15 ASCII digits.
    #[error("invalid phone number '{phone}': must be 7-15 digits")]
    InvalidPhone {
        /// The rejected input.
        phone: String,
    },

    /// Email does not contain both '@' and '.'.
    #[error("invalid email format '{email}'")]
    InvalidEmail {
        /// The rejected input.
        email: String,
    },

    /// A sort field name that is not one of `name`, `phone`, `email`.
    #[error("unknown sort field '{0}' (expected name, phone or email)")]
    UnknownSortField(String),

    // === Storage Errors ===
    /// Failed to read the contacts file.
    #[error("failed to read {path}: {source}")]
    ReadFile {
        /// Path to the contacts file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the contacts file.
    #[error("failed to write {path}: {source}")]
    WriteFile {
        /// Path to the contacts file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// A configuration file that was asked for explicitly does not exist.
    #[error("configuration file not found: {path}")]
    ConfigNotFound {
        /// Path that was checked.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Console or other stream I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for contactbook operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an invalid phone error.
    #[must_use]
    pub fn invalid_phone(phone: impl Into<String>) -> Self {
        Self::InvalidPhone {
            phone: phone.into(),
        }
    }

    /// Create an invalid email error.
    #[must_use]
    pub fn invalid_email(email: impl Into<String>) -> Self {
        Self::InvalidEmail {
            email: email.into(),
        }
    }

    /// Check if this error is caused by bad user input rather than the system.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidPhone { .. } | Self::InvalidEmail { .. } | Self::UnknownSortField(_)
        )
    }
}
