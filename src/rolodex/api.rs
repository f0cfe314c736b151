//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every rolodex operation, whatever UI sits on top of it.
//!
//! `RolodexApi` owns the session's [`AddressBook`] and [`RolodexConfig`]. There
//! is exactly one book per session and nothing else holds on to it.
//!
//! The API:
//! - **Dispatches** to the matching command function
//! - **Applies configuration** (lookahead window, Feb 29 policy)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints, never reads the clock and never formats output. The caller
//! supplies "today" for the birthday query so tests can pin it.

use crate::book::AddressBook;
use crate::commands;
use crate::config::RolodexConfig;
use crate::error::Result;
use chrono::NaiveDate;

pub struct RolodexApi {
    book: AddressBook,
    config: RolodexConfig,
}

impl RolodexApi {
    pub fn new(config: RolodexConfig) -> Self {
        Self {
            book: AddressBook::new(),
            config,
        }
    }

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.book, name, phone)
    }

    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        commands::change::run(&mut self.book, name, old, new)
    }

    pub fn phones(&self, name: &str) -> Result<CmdResult> {
        commands::phone::run(&self.book, name)
    }

    pub fn all(&self) -> Result<CmdResult> {
        commands::all::run(&self.book)
    }

    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> Result<CmdResult> {
        commands::birthday::add(&mut self.book, name, birthday)
    }

    pub fn show_birthday(&self, name: &str) -> Result<CmdResult> {
        commands::birthday::show(&self.book, name)
    }

    pub fn birthdays(&self, today: NaiveDate) -> Result<CmdResult> {
        commands::birthdays::run(
            &self.book,
            today,
            self.config.lookahead_days,
            self.config.leap_day,
        )
    }

    pub fn config(&self) -> &RolodexConfig {
        &self.config
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
