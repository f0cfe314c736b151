use crate::book::AddressBook;
use crate::commands::helpers::find_record_mut;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RolodexError, Result};

pub fn run(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let record = find_record_mut(book, name)?;

    if !record.replace_phone(old, new)? {
        return Err(RolodexError::PhoneNotFound(old.to_string()));
    }

    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Phone updated."))
        .with_affected_records(vec![record.clone()]))
}
