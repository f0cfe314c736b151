use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;

/// Adds `phone` to the contact called `name`, creating the contact first if needed.
///
/// The phone is validated before anything is stored, so a rejected phone never
/// leaves an empty contact behind.
pub fn run(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if let Some(record) = book.find_mut(name) {
        if record.phones().iter().any(|p| *p == *phone) {
            result.add_message(CmdMessage::warning(format!(
                "{} already has {}, adding it again.",
                name, phone
            )));
        }
        record.add_phone(phone)?;
        result.add_message(CmdMessage::success("Contact updated."));
        return Ok(result.with_affected_records(vec![record.clone()]));
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    tracing::info!(name, "contact created");
    book.add_record(record.clone());

    result.add_message(CmdMessage::success("Contact added."));
    Ok(result.with_affected_records(vec![record]))
}
