//! # Rendering
//!
//! Turns `CmdResult` data into terminal text. Every function returns a `String`
//! ending in a newline (or an empty string) so the session loop decides where
//! it goes. Colors come from `colored`, which honors `NO_COLOR`.

use colored::Colorize;
use rolodex::api::{CmdMessage, MessageLevel};
use rolodex::book::UpcomingBirthday;
use rolodex::error::RolodexError;
use rolodex::model::Record;
use unicode_width::UnicodeWidthStr;

pub const NO_CONTACTS: &str = "No contacts saved.";
pub const INVALID_COMMAND: &str = "Invalid command.";

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let line = match message.level {
                MessageLevel::Info => message.content.normal(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", line)
        })
        .collect()
}

pub fn render_error(err: &RolodexError) -> String {
    render_messages(&[CmdMessage::error(err.to_string())])
}

pub fn render_phones(record: &Record) -> String {
    format!("{}'s phones: {}\n", record.name().bold(), record.phones_line())
}

/// One `name: phones` line per contact, phones aligned in a column.
pub fn render_all(records: &[Record]) -> String {
    if records.is_empty() {
        return format!("{}\n", NO_CONTACTS.dimmed());
    }

    let name_width = records
        .iter()
        .map(|r| r.name().width())
        .max()
        .unwrap_or(0);

    records
        .iter()
        .map(|record| {
            let padding = " ".repeat(name_width - record.name().width());
            format!(
                "{}:{} {}\n",
                record.name().bold(),
                padding,
                record.phones_line()
            )
        })
        .collect()
}

/// "in the next week", "in the next 3 days", "today" ...
pub fn window_phrase(days: u32) -> String {
    match days {
        0 => "today".to_string(),
        1 => "in the next day".to_string(),
        7 => "in the next week".to_string(),
        n => format!("in the next {} days", n),
    }
}

pub fn render_upcoming(upcoming: &[UpcomingBirthday], days: u32) -> String {
    let phrase = window_phrase(days);
    if upcoming.is_empty() {
        return format!("No birthdays {}.\n", phrase);
    }

    let mut output = format!("Birthdays {}:\n", phrase);
    for entry in upcoming {
        output.push_str(&entry.name);
        output.push('\n');
    }
    output
}
