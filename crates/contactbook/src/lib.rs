//! `contactbook` - A single-user contact directory stored in a JSON file
//!
//! This library provides the contact record, field validation, the JSON
//! file store, the add/list/search/update/delete operations and the
//! interactive menu that drives them.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod book;
pub mod cli;
pub mod config;
pub mod contact;
pub mod error;
pub mod logging;
pub mod menu;
pub mod storage;
pub mod validation;

pub use book::ContactBook;
pub use config::Config;
pub use contact::{Contact, ContactUpdate, SortField};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use menu::Menu;
pub use storage::ContactStore;
