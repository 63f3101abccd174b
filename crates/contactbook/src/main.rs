//! `contactbook` - CLI for the contact directory
//!
//! Without a command this runs the interactive menu on stdin/stdout. The
//! commands perform a single operation and exit, with a non-zero status when
//! the input is invalid or the named contact does not exist.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::{bail, Context};
use clap::Parser;

use contactbook::cli::{
    AddCommand, Cli, Command, ConfigCommand, ListCommand, SearchCommand, UpdateCommand,
};
use contactbook::{init_logging, Config, Contact, ContactBook, ContactStore, ContactUpdate, Menu};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;
    let contacts_path = cli.file.clone().unwrap_or_else(|| config.contacts_path());
    let store = ContactStore::new(contacts_path).with_indent(config.storage.indent);
    let book = ContactBook::new(store);

    match cli.command {
        None | Some(Command::Menu) => run_menu(book, &config),
        Some(Command::Add(cmd)) => handle_add(&book, cmd),
        Some(Command::List(cmd)) => handle_list(&book, &config, &cmd),
        Some(Command::Search(cmd)) => handle_search(&book, &cmd),
        Some(Command::Update(cmd)) => handle_update(&book, cmd),
        Some(Command::Delete(cmd)) => handle_delete(&book, &cmd.name),
        Some(Command::Config(cmd)) => handle_config(&config, cmd),
    }
}

fn run_menu(book: ContactBook, config: &Config) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut menu = Menu::new(
        book,
        config.display.default_sort,
        stdin.lock(),
        stdout.lock(),
    );
    menu.run()?;
    Ok(())
}

fn handle_add(book: &ContactBook, cmd: AddCommand) -> anyhow::Result<()> {
    book.add(Contact::new(cmd.name, cmd.phone, cmd.email))?;
    println!("Contact added successfully!");
    Ok(())
}

fn handle_list(book: &ContactBook, config: &Config, cmd: &ListCommand) -> anyhow::Result<()> {
    let sort_by = cmd.sort_by.unwrap_or(config.display.default_sort);
    let contacts = book.list(sort_by);
    print_contacts(&contacts, cmd.json, "No contacts found.")
}

fn handle_search(book: &ContactBook, cmd: &SearchCommand) -> anyhow::Result<()> {
    let results = book.search(&cmd.term);
    print_contacts(&results, cmd.json, "No matching contact found.")
}

fn handle_update(book: &ContactBook, cmd: UpdateCommand) -> anyhow::Result<()> {
    let update = ContactUpdate {
        phone: cmd.phone,
        email: cmd.email,
    };
    match book.update(&cmd.name, &update)? {
        Some(contact) => {
            println!("Contact updated successfully!");
            println!("{contact}");
            Ok(())
        }
        None => bail!("contact '{}' not found", cmd.name),
    }
}

fn handle_delete(book: &ContactBook, name: &str) -> anyhow::Result<()> {
    let removed = book.delete(name)?;
    if removed == 0 {
        bail!("contact '{name}' not found");
    }
    println!("Contact deleted successfully! ({removed} removed)");
    Ok(())
}

fn print_contacts(contacts: &[Contact], json: bool, empty_message: &str) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(contacts)?);
    } else if contacts.is_empty() {
        println!("{empty_message}");
    } else {
        for contact in contacts {
            println!("{contact}");
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Contacts path:  {}", config.contacts_path().display());
                println!("  Indent:         {}", config.storage.indent);
                println!();
                println!("[Display]");
                println!("  Default sort:   {}", config.display.default_sort);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::check_file(path) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => bail!("configuration error: {e}"),
            }
        }
    }
    Ok(())
}
