//! Storage layer for contactbook.
//!
//! The whole collection lives in one JSON file. Every read loads the full
//! array and every write replaces the file with the full array; there is no
//! locking and no incremental update.

pub mod format;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::contact::Contact;
use crate::error::{Error, Result};

pub use format::DEFAULT_INDENT;

/// File-backed store for the contact collection.
#[derive(Debug, Clone)]
pub struct ContactStore {
    /// Path to the contacts file.
    path: PathBuf,
    /// Spaces per indent level when writing.
    indent: usize,
}

impl ContactStore {
    /// Create a store for the file at `path`.
    ///
    /// Nothing is touched on disk until the first save.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            indent: DEFAULT_INDENT,
        }
    }

    /// Set the number of spaces used per indent level when saving.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Get the path to the contacts file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the collection, treating any failure as an empty collection.
    ///
    /// A missing file is the normal first-run state. An unreadable or
    /// malformed file is logged as a warning and otherwise ignored; the next
    /// save overwrites it.
    #[must_use]
    pub fn load(&self) -> Vec<Contact> {
        match self.try_load() {
            Ok(contacts) => contacts,
            Err(e) => {
                warn!(
                    "Error reading contacts file {}, starting fresh: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Load the collection, reporting read and parse failures.
    ///
    /// A missing file is not an error and yields an empty collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn try_load(&self) -> Result<Vec<Contact>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No contacts file at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(Error::ReadFile {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let contacts = format::decode(&bytes)?;
        debug!(
            "Loaded {} contacts from {}",
            contacts.len(),
            self.path.display()
        );
        Ok(contacts)
    }

    /// Overwrite the file with the full collection.
    ///
    /// Creates the parent directories if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written. The
    /// failure is also logged.
    pub fn save(&self, contacts: &[Contact]) -> Result<()> {
        self.write(contacts).map_err(|e| {
            error!("Error saving contacts to {}: {}", self.path.display(), e);
            e
        })
    }

    fn write(&self, contacts: &[Contact]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let bytes = format::encode(contacts, self.indent)?;
        std::fs::write(&self.path, bytes).map_err(|source| Error::WriteFile {
            path: self.path.clone(),
            source,
        })?;

        info!(
            "Saved {} contacts to {}",
            contacts.len(),
            self.path.display()
        );
        Ok(())
    }
}
