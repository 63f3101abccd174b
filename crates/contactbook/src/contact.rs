//! Core contact types for contactbook.
//!
//! This module defines the stored record, the field used to order listings,
//! and the partial update applied by the update operation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A single name/phone/email record.
///
/// Serialized with exactly the keys `name`, `phone` and `email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Display name. Not unique.
    pub name: String,
    /// Phone number, 7-15 digits.
    pub phone: String,
    /// Email address.
    pub email: String,
}

impl Contact {
    /// Create a new contact from its three fields.
    #[must_use]
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Copy of this contact with surrounding whitespace removed from every field.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self::new(self.name.trim(), self.phone.trim(), self.email.trim())
    }

    /// Case-insensitive exact name comparison. Both sides are trimmed.
    #[must_use]
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }

    /// Get the value of the given field.
    #[must_use]
    pub fn field(&self, field: SortField) -> &str {
        match field {
            SortField::Name => &self.name,
            SortField::Phone => &self.phone,
            SortField::Email => &self.email,
        }
    }
}

impl std::fmt::Display for Contact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name: {} | Phone: {} | Email: {}",
            self.name, self.phone, self.email
        )
    }
}

/// The field a contact listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Order by name.
    #[default]
    Name,
    /// Order by phone number.
    Phone,
    /// Order by email address.
    Email,
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Phone => write!(f, "phone"),
            Self::Email => write!(f, "email"),
        }
    }
}

impl FromStr for SortField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "phone" => Ok(Self::Phone),
            "email" => Ok(Self::Email),
            _ => Err(Error::UnknownSortField(s.to_string())),
        }
    }
}

/// Replacement values for an existing contact.
///
/// A field that is `None` or blank keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    /// New phone number.
    pub phone: Option<String>,
    /// New email address.
    pub email: Option<String>,
}

impl ContactUpdate {
    /// Build an update from raw prompt answers, where empty means "keep".
    #[must_use]
    pub fn from_input(phone: &str, email: &str) -> Self {
        Self {
            phone: non_blank(phone),
            email: non_blank(email),
        }
    }

    /// The trimmed new phone number, if one was given.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref().map(str::trim).filter(|p| !p.is_empty())
    }

    /// The trimmed new email address, if one was given.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().map(str::trim).filter(|e| !e.is_empty())
    }

    /// Check whether this update changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phone().is_none() && self.email().is_none()
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_display() {
        let contact = Contact::new("Ada", "5551234", "ada@example.com");
        assert_eq!(
            contact.to_string(),
            "Name: Ada | Phone: 5551234 | Email: ada@example.com"
        );
    }

    #[test]
    fn test_contact_json_keys() {
        let contact = Contact::new("Ada", "5551234", "ada@example.com");
        let json = serde_json::to_value(&contact).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 3);
        assert_eq!(obj["name"], "Ada");
        assert_eq!(obj["phone"], "5551234");
        assert_eq!(obj["email"], "ada@example.com");
    }

    #[test]
    fn test_contact_trimmed() {
        let contact = Contact::new("  Ada ", " 5551234", "ada@example.com  ");
        assert_eq!(
            contact.trimmed(),
            Contact::new("Ada", "5551234", "ada@example.com")
        );
    }

    #[test]
    fn test_name_matches_ignores_case_and_padding() {
        let contact = Contact::new("Ada Lovelace", "5551234", "ada@example.com");
        assert!(contact.name_matches("ada lovelace"));
        assert!(contact.name_matches("  ADA LOVELACE "));
        assert!(!contact.name_matches("ada"));
    }

    #[test]
    fn test_field_accessor() {
        let contact = Contact::new("Ada", "5551234", "ada@example.com");
        assert_eq!(contact.field(SortField::Name), "Ada");
        assert_eq!(contact.field(SortField::Phone), "5551234");
        assert_eq!(contact.field(SortField::Email), "ada@example.com");
    }

    #[test]
    fn test_sort_field_from_str() {
        assert_eq!("name".parse::<SortField>().unwrap(), SortField::Name);
        assert_eq!("PHONE".parse::<SortField>().unwrap(), SortField::Phone);
        assert_eq!(" email ".parse::<SortField>().unwrap(), SortField::Email);
        assert!(matches!(
            "age".parse::<SortField>(),
            Err(Error::UnknownSortField(_))
        ));
    }

    #[test]
    fn test_sort_field_display_round_trips_through_serde() {
        for field in [SortField::Name, SortField::Phone, SortField::Email] {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{field}\""));
        }
    }

    #[test]
    fn test_sort_field_default() {
        assert_eq!(SortField::default(), SortField::Name);
    }

    #[test]
    fn test_update_from_input_blank_keeps() {
        let update = ContactUpdate::from_input("", "   ");
        assert!(update.is_empty());
        assert_eq!(update, ContactUpdate::default());
    }

    #[test]
    fn test_update_from_input_trims() {
        let update = ContactUpdate::from_input(" 5550000 ", "new@example.com");
        assert_eq!(update.phone(), Some("5550000"));
        assert_eq!(update.email(), Some("new@example.com"));
        assert!(!update.is_empty());
    }

    #[test]
    fn test_update_accessors_skip_blank_values() {
        let update = ContactUpdate {
            phone: Some("  ".to_string()),
            email: None,
        };
        assert!(update.phone().is_none());
        assert!(update.is_empty());
    }
}
