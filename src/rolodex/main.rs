//! # Rolodex CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! $ rolodex --today 18.06.2024
//! Welcome to the assistant bot!
//! Enter a command: add Alice 1234567890
//! Contact added.
//! Enter a command: add-birthday Alice 20.06.1990
//! Birthday added for Alice.
//! Enter a command: birthdays
//! Birthdays in the next week:
//! Alice (Thursday, 20.06)
//! Enter a command: exit
//! Good bye!
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic; see the library docs.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
