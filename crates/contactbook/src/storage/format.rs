//! On-disk JSON format for the contact collection.
//!
//! The file is a single JSON array of `{name, phone, email}` objects,
//! pretty-printed with a configurable number of spaces.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::contact::Contact;
use crate::error::Result;

/// Indent used when none is configured.
pub const DEFAULT_INDENT: usize = 4;

/// Serialize a collection as an indented JSON array with a trailing newline.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode(contacts: &[Contact], indent: usize) -> Result<Vec<u8>> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    contacts.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Parse a collection from JSON bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not a JSON array of contacts.
pub fn decode(bytes: &[u8]) -> Result<Vec<Contact>> {
    Ok(serde_json::from_slice(bytes)?)
}
