use crate::book::AddressBook;
use crate::commands::helpers::{find_record, find_record_mut};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Sets (or overwrites) the birthday of an existing contact.
pub fn add(book: &mut AddressBook, name: &str, birthday: &str) -> Result<CmdResult> {
    let record = find_record_mut(book, name)?;
    record.set_birthday(birthday)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Birthday added for {}.", name)))
        .with_affected_records(vec![record.clone()]))
}

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = find_record(book, name)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::info(format!(
            "{}'s birthday: {}",
            name,
            record.formatted_birthday()
        )))
        .with_listed_records(vec![record.clone()]))
}
