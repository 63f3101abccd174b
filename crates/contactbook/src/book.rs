//! Record operations over the stored contact collection.
//!
//! Each operation loads the full collection from the store, works on it in
//! memory, and writes it back only when something changed.

use tracing::{debug, info};

use crate::contact::{Contact, ContactUpdate, SortField};
use crate::error::Result;
use crate::storage::ContactStore;
use crate::validation::{validate_email, validate_phone};

/// The contact directory.
#[derive(Debug, Clone)]
pub struct ContactBook {
    store: ContactStore,
}

impl ContactBook {
    /// Create a contact book on top of the given store.
    #[must_use]
    pub fn new(store: ContactStore) -> Self {
        Self { store }
    }

    /// Get the underlying store.
    #[must_use]
    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    /// Append a new contact.
    ///
    /// Fields are trimmed, then the phone and email are validated before the
    /// collection is loaded, so invalid input never touches the file.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a bad phone or email, or a storage
    /// error if saving fails.
    pub fn add(&self, contact: Contact) -> Result<()> {
        let contact = contact.trimmed();
        validate_phone(&contact.phone)?;
        validate_email(&contact.email)?;

        let mut contacts = self.store.load();
        info!("Adding contact '{}'", contact.name);
        contacts.push(contact);
        self.store.save(&contacts)
    }

    /// All contacts, ordered by `sort_by`.
    ///
    /// The sort is stable, so records with equal keys keep their stored
    /// order. An empty collection is returned as-is.
    #[must_use]
    pub fn list(&self, sort_by: SortField) -> Vec<Contact> {
        let mut contacts = self.store.load();
        if contacts.is_empty() {
            return contacts;
        }

        contacts.sort_by(|a, b| a.field(sort_by).cmp(b.field(sort_by)));
        contacts
    }

    /// Contacts whose name contains `term` case-insensitively, or whose phone
    /// contains `term` verbatim.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<Contact> {
        let term = term.trim().to_lowercase();
        let results: Vec<Contact> = self
            .store
            .load()
            .into_iter()
            .filter(|c| c.name.to_lowercase().contains(&term) || c.phone.contains(&term))
            .collect();

        debug!("Search for '{}' matched {} contacts", term, results.len());
        results
    }

    /// The first contact whose name matches `name` case-insensitively.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<Contact> {
        self.store
            .load()
            .into_iter()
            .find(|c| c.name_matches(name))
    }

    /// Apply `update` to the first contact named `name`.
    ///
    /// Returns the updated record, or `None` if no contact has that name.
    /// Blank fields in `update` keep the stored values.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a new value is invalid, in which case
    /// nothing is saved, or a storage error if saving fails.
    pub fn update(&self, name: &str, update: &ContactUpdate) -> Result<Option<Contact>> {
        let mut contacts = self.store.load();
        let Some(contact) = contacts.iter_mut().find(|c| c.name_matches(name)) else {
            debug!("No contact named '{}' to update", name.trim());
            return Ok(None);
        };

        if update.is_empty() {
            debug!("Nothing to change for '{}'", contact.name);
            return Ok(Some(contact.clone()));
        }

        let phone = update.phone();
        let email = update.email();
        if let Some(phone) = phone {
            validate_phone(phone)?;
        }
        if let Some(email) = email {
            validate_email(email)?;
        }

        if let Some(phone) = phone {
            contact.phone = phone.to_string();
        }
        if let Some(email) = email {
            contact.email = email.to_string();
        }
        let updated = contact.clone();

        info!("Updating contact '{}'", updated.name);
        self.store.save(&contacts)?;
        Ok(Some(updated))
    }

    /// Remove every contact whose name matches `name` case-insensitively.
    ///
    /// Returns the number of contacts removed. Nothing is written when no
    /// contact matched.
    ///
    /// # Errors
    ///
    /// Returns a storage error if saving fails.
    pub fn delete(&self, name: &str) -> Result<usize> {
        let mut contacts = self.store.load();
        let before = contacts.len();
        contacts.retain(|c| !c.name_matches(name));

        let removed = before - contacts.len();
        if removed == 0 {
            debug!("No contact named '{}' to delete", name.trim());
            return Ok(0);
        }

        info!("Deleting {} contact(s) named '{}'", removed, name.trim());
        self.store.save(&contacts)?;
        Ok(removed)
    }
}
