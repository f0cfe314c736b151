//! # CLI Layer
//!
//! This module is **one possible UI client** for rolodex: an interactive
//! prompt that reads one command per line.
//!
//! It is the only place that:
//! - Reads stdin and writes stdout
//! - Parses arguments (process flags and prompt lines, both through clap)
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `setup.rs`: clap definitions for process flags and prompt lines
//! - `commands.rs`: context setup, the session loop and per-command handlers
//! - `render.rs`: `CmdResult` to terminal text

mod commands;
mod render;
mod setup;

pub use commands::run;
