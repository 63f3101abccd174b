//! Interactive numbered menu.
//!
//! The loop prints the menu, reads a choice, runs the matching operation and
//! starts over. It ends on the exit choice or when input runs out. Errors from
//! an operation are reported and the loop carries on; only a broken console
//! stream ends it with an error.

use std::io::{BufRead, Write};

use tracing::{debug, error};

use crate::book::ContactBook;
use crate::contact::{Contact, ContactUpdate, SortField};
use crate::error::{Error, Result};

const MENU: &str = "\
====== Smart Contact Book ======
1. Add Contact
2. View Contacts
3. Search Contact
4. Update Contact
5. Delete Contact
6. Exit
================================";

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Add a contact.
    Add,
    /// List all contacts.
    View,
    /// Search by name or phone.
    Search,
    /// Update a contact's phone or email.
    Update,
    /// Delete contacts by name.
    Delete,
    /// Leave the menu.
    Exit,
}

impl Choice {
    /// Parse a menu selection (`1`-`6`), ignoring surrounding whitespace.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::View),
            "3" => Some(Self::Search),
            "4" => Some(Self::Update),
            "5" => Some(Self::Delete),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// What the loop does after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

/// The menu loop over a contact book and a pair of console streams.
#[derive(Debug)]
pub struct Menu<R, W> {
    book: ContactBook,
    sort_by: SortField,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a menu reading choices from `input` and printing to `output`.
    ///
    /// `sort_by` orders the "View Contacts" listing.
    pub fn new(book: ContactBook, sort_by: SortField, input: R, output: W) -> Self {
        Self {
            book,
            sort_by,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading from or writing to the console fails.
    /// Operation failures are printed and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                debug!("Input closed, leaving menu");
                return Ok(());
            };

            let Some(choice) = Choice::parse(&line) else {
                writeln!(self.output, "Invalid choice! Please try again.")?;
                continue;
            };

            match self.dispatch(choice) {
                Ok(Step::Continue) => {}
                Ok(Step::Exit) => return Ok(()),
                Err(e @ Error::Io(_)) => return Err(e),
                Err(e) => self.report(&e)?,
            }
        }
    }

    fn dispatch(&mut self, choice: Choice) -> Result<Step> {
        debug!("Menu choice: {:?}", choice);
        match choice {
            Choice::Add => self.add_contact(),
            Choice::View => self.view_contacts(),
            Choice::Search => self.search_contact(),
            Choice::Update => self.update_contact(),
            Choice::Delete => self.delete_contact(),
            Choice::Exit => {
                writeln!(self.output, "Exiting Contact Book... Goodbye!")?;
                Ok(Step::Exit)
            }
        }
    }

    fn report(&mut self, err: &Error) -> Result<()> {
        if err.is_validation() {
            writeln!(self.output, "Error: {err}")?;
        } else {
            error!("Operation failed: {}", err);
            writeln!(self.output, "Unexpected error: {err}")?;
        }
        Ok(())
    }

    /// Print `label`, then read one line. `None` means end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
    /// garbled line never ends the loop.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    fn add_contact(&mut self) -> Result<Step> {
        let Some(name) = self.prompt("Enter Name: ")? else {
            return Ok(Step::Exit);
        };
        let Some(phone) = self.prompt("Enter Phone: ")? else {
            return Ok(Step::Exit);
        };
        let Some(email) = self.prompt("Enter Email: ")? else {
            return Ok(Step::Exit);
        };

        self.book.add(Contact::new(name, phone, email))?;
        writeln!(self.output, "Contact added successfully!")?;
        Ok(Step::Continue)
    }

    fn view_contacts(&mut self) -> Result<Step> {
        let contacts = self.book.list(self.sort_by);
        if contacts.is_empty() {
            writeln!(self.output, "No contacts found.")?;
            return Ok(Step::Continue);
        }

        self.print_block("--- Contact List ---", &contacts)?;
        Ok(Step::Continue)
    }

    fn search_contact(&mut self) -> Result<Step> {
        let Some(term) = self.prompt("Enter name or phone to search: ")? else {
            return Ok(Step::Exit);
        };

        let results = self.book.search(&term);
        if results.is_empty() {
            writeln!(self.output, "No matching contact found.")?;
        } else {
            self.print_block("--- Search Results ---", &results)?;
        }
        Ok(Step::Continue)
    }

    fn update_contact(&mut self) -> Result<Step> {
        let Some(name) = self.prompt("Enter name of contact to update: ")? else {
            return Ok(Step::Exit);
        };

        let Some(current) = self.book.find(&name) else {
            writeln!(self.output, "Contact not found.")?;
            return Ok(Step::Continue);
        };

        writeln!(self.output, "Leave field empty to keep current value.")?;
        let Some(phone) = self.prompt(&format!("New Phone ({}): ", current.phone))? else {
            return Ok(Step::Exit);
        };
        let Some(email) = self.prompt(&format!("New Email ({}): ", current.email))? else {
            return Ok(Step::Exit);
        };

        match self
            .book
            .update(&name, &ContactUpdate::from_input(&phone, &email))?
        {
            Some(_) => writeln!(self.output, "Contact updated successfully!")?,
            None => writeln!(self.output, "Contact not found.")?,
        }
        Ok(Step::Continue)
    }

    fn delete_contact(&mut self) -> Result<Step> {
        let Some(name) = self.prompt("Enter name of contact to delete: ")? else {
            return Ok(Step::Exit);
        };

        if self.book.delete(&name)? == 0 {
            writeln!(self.output, "Contact not found.")?;
        } else {
            writeln!(self.output, "Contact deleted successfully!")?;
        }
        Ok(Step::Continue)
    }

    fn print_block(&mut self, title: &str, contacts: &[Contact]) -> Result<()> {
        writeln!(self.output, "\n{title}")?;
        for contact in contacts {
            writeln!(self.output, "{contact}")?;
        }
        writeln!(self.output, "{}\n", "-".repeat(title.chars().count()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ContactStore;

    fn create_test_book() -> (tempfile::TempDir, ContactBook) {
        let dir = tempfile::tempdir().unwrap();
        let store = ContactStore::new(dir.path().join("contacts.json"));
        (dir, ContactBook::new(store))
    }

    /// Feed `script` to a menu and return everything it printed.
    fn run_script(book: &ContactBook, script: &str) -> String {
        let mut output = Vec::new();
        let mut menu = Menu::new(book.clone(), SortField::Name, script.as_bytes(), &mut output);
        menu.run().unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_choice_parse() {
        assert_eq!(Choice::parse("1"), Some(Choice::Add));
        assert_eq!(Choice::parse(" 2 "), Some(Choice::View));
        assert_eq!(Choice::parse("3"), Some(Choice::Search));
        assert_eq!(Choice::parse("4"), Some(Choice::Update));
        assert_eq!(Choice::parse("5"), Some(Choice::Delete));
        assert_eq!(Choice::parse("6"), Some(Choice::Exit));
        assert_eq!(Choice::parse("7"), None);
        assert_eq!(Choice::parse(""), None);
        assert_eq!(Choice::parse("add"), None);
    }

    #[test]
    fn test_exit() {
        let (_dir, book) = create_test_book();
        let out = run_script(&book, "6\n");

        assert!(out.contains("====== Smart Contact Book ======"));
        assert!(out.contains("Exiting Contact Book... Goodbye!"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_dir, book) = create_test_book();
        let out = run_script(&book, "");
        assert!(out.ends_with("Choose an option: "));
    }

    #[test]
    fn test_invalid_choice_reprints_menu() {
        let (_dir, book) = create_test_book();
        let out = run_script(&book, "9\n6\n");

        assert!(out.contains("Invalid choice! Please try again."));
        assert_eq!(out.matches("1. Add Contact").count(), 2);
    }

    #[test]
    fn test_add_then_view() {
        let (_dir, book) = create_test_book();
        let out = run_script(
            &book,
            "1\nGrace Hopper\n5559876\ngrace@navy.mil\n\
             1\nAda Lovelace\n5551234\nada@example.com\n\
             2\n6\n",
        );

        assert_eq!(out.matches("Contact added successfully!").count(), 2);
        let ada = out.find("Name: Ada Lovelace | Phone: 5551234").unwrap();
        let grace = out.find("Name: Grace Hopper | Phone: 5559876").unwrap();
        assert!(ada < grace);
        assert!(out.contains("--- Contact List ---"));
    }

    #[test]
    fn test_add_invalid_phone_reports_error() {
        let (_dir, book) = create_test_book();
        let out = run_script(&book, "1\nBad\n12a\nbad@example.com\n6\n");

        assert!(out.contains("Error: invalid phone number '12a'"));
        assert!(!out.contains("Contact added successfully!"));
        assert!(book.store().load().is_empty());
    }

    #[test]
    fn test_view_empty() {
        let (_dir, book) = create_test_book();
        let out = run_script(&book, "2\n6\n");

        assert!(out.contains("No contacts found."));
        assert!(!out.contains("--- Contact List ---"));
    }

    #[test]
    fn test_view_uses_configured_sort() {
        let (_dir, book) = create_test_book();
        book.add(Contact::new("Ada", "9999999", "a@example.com"))
            .unwrap();
        book.add(Contact::new("Zed", "1111111", "z@example.com"))
            .unwrap();

        let mut output = Vec::new();
        Menu::new(book.clone(), SortField::Phone, "2\n6\n".as_bytes(), &mut output)
            .run()
            .unwrap();
        let out = String::from_utf8(output).unwrap();

        assert!(out.find("Name: Zed").unwrap() < out.find("Name: Ada").unwrap());
    }

    #[test]
    fn test_search_by_phone_substring() {
        let (_dir, book) = create_test_book();
        book.add(Contact::new("Ada", "5551234", "ada@example.com"))
            .unwrap();

        let out = run_script(&book, "3\n1234\n6\n");
        assert!(out.contains("--- Search Results ---"));
        assert!(out.contains("Name: Ada | Phone: 5551234 | Email: ada@example.com"));
    }

    #[test]
    fn test_search_not_found() {
        let (_dir, book) = create_test_book();
        let out = run_script(&book, "3\nnobody\n6\n");
        assert!(out.contains("No matching contact found."));
    }

    #[test]
    fn test_update_shows_current_values_and_keeps_blank() {
        let (_dir, book) = create_test_book();
        book.add(Contact::new("Ada", "5551234", "ada@example.com"))
            .unwrap();

        let out = run_script(&book, "4\nada\n\nnew@example.com\n6\n");

        assert!(out.contains("Leave field empty to keep current value."));
        assert!(out.contains("New Phone (5551234): "));
        assert!(out.contains("New Email (ada@example.com): "));
        assert!(out.contains("Contact updated successfully!"));
        assert_eq!(
            book.store().load(),
            vec![Contact::new("Ada", "5551234", "new@example.com")]
        );
    }

    #[test]
    fn test_update_invalid_email_reports_error() {
        let (_dir, book) = create_test_book();
        book.add(Contact::new("Ada", "5551234", "ada@example.com"))
            .unwrap();

        let out = run_script(&book, "4\nAda\n5550000\nbroken\n6\n");

        assert!(out.contains("Error: invalid email format 'broken'"));
        assert_eq!(
            book.store().load(),
            vec![Contact::new("Ada", "5551234", "ada@example.com")]
        );
    }

    #[test]
    fn test_update_not_found() {
        let (_dir, book) = create_test_book();
        let out = run_script(&book, "4\nNobody\n6\n");

        assert!(out.contains("Contact not found."));
        assert!(!out.contains("New Phone"));
    }

    #[test]
    fn test_delete() {
        let (_dir, book) = create_test_book();
        book.add(Contact::new("Ada", "5551234", "ada@example.com"))
            .unwrap();

        let out = run_script(&book, "5\nADA\n6\n");
        assert!(out.contains("Contact deleted successfully!"));
        assert!(book.store().load().is_empty());
    }

    #[test]
    fn test_delete_not_found() {
        let (_dir, book) = create_test_book();
        let out = run_script(&book, "5\nNobody\n6\n");
        assert!(out.contains("Contact not found."));
    }

    #[test]
    fn test_invalid_utf8_line_does_not_end_loop() {
        let (_dir, book) = create_test_book();
        let script: &[u8] = b"1\nAda\xff\n5551234\nada@example.com\n6\n";

        let mut output = Vec::new();
        let result = Menu::new(book.clone(), SortField::Name, script, &mut output).run();
        let out = String::from_utf8(output).unwrap();

        assert!(result.is_ok());
        assert!(out.contains("Contact added successfully!"));
        assert!(out.contains("Exiting Contact Book... Goodbye!"));
        assert_eq!(book.store().load()[0].name, "Ada\u{FFFD}");
    }

    #[test]
    fn test_invalid_utf8_choice_is_invalid_choice() {
        let (_dir, book) = create_test_book();
        let script: &[u8] = b"\xff\n6\n";

        let mut output = Vec::new();
        let result = Menu::new(book, SortField::Name, script, &mut output).run();
        let out = String::from_utf8(output).unwrap();

        assert!(result.is_ok());
        assert!(out.contains("Invalid choice! Please try again."));
        assert!(out.contains("Exiting Contact Book... Goodbye!"));
    }

    #[test]
    fn test_end_of_input_mid_operation_exits() {
        let (_dir, book) = create_test_book();
        let out = run_script(&book, "1\nAda\n");

        assert!(out.ends_with("Enter Phone: "));
        assert!(book.store().load().is_empty());
    }

    #[test]
    fn test_storage_failure_is_reported_and_loop_continues() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes every save fail.
        let book = ContactBook::new(ContactStore::new(dir.path()));

        let out = run_script(&book, "1\nAda\n5551234\nada@example.com\n6\n");

        assert!(out.contains("Unexpected error: failed to write"));
        assert!(out.contains("Exiting Contact Book... Goodbye!"));
    }
}
