//! # Rolodex Architecture
//!
//! Rolodex is a small **UI-agnostic contact book**: names, phone numbers and
//! birthdays, plus a query for birthdays coming up in the next few days. The
//! interactive prompt in `main.rs` is one client of the library, not the
//! library itself.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads command lines, parses them, prints results         │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session's AddressBook and config                │
//! │  - One method per command, returns Result<CmdResult>        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic over the AddressBook                      │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model.rs, book.rs)                                   │
//! │  - Validated Phone / Birthday values, Record                │
//! │  - AddressBook and the upcoming-birthday window             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors
//!
//! Everything fallible returns [`error::Result`]. Invalid phones and dates are
//! rejected when a record is mutated, so a record in the book is always valid.
//! Missing contacts and phones are ordinary errors the CLI reports before
//! reading the next line.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`book`]: The address book and upcoming birthdays
//! - [`model`]: `Phone`, `Birthday`, `Record`
//! - [`config`]: `config.json` loading
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
