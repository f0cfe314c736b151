use crate::book::AddressBook;
use crate::commands::helpers::find_record;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn run(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = find_record(book, name)?;
    Ok(CmdResult::default().with_listed_records(vec![record.clone()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::error::RolodexError;

    #[test]
    fn lists_the_contact() {
        let mut book = AddressBook::new();
        add::run(&mut book, "Alice", "1111111111").unwrap();

        let res = run(&book, "Alice").unwrap();
        assert_eq!(res.listed_records.len(), 1);
        assert_eq!(res.listed_records[0].phones_line(), "1111111111");
    }

    #[test]
    fn missing_contact() {
        let book = AddressBook::new();
        assert!(matches!(
            run(&book, "Bob"),
            Err(RolodexError::ContactNotFound(_))
        ));
    }
}
