use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::error::Result;

pub fn run(book: &AddressBook) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_records(book.records().cloned().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    #[test]
    fn empty_book_lists_nothing() {
        let book = AddressBook::new();
        assert!(run(&book).unwrap().listed_records.is_empty());
    }

    #[test]
    fn lists_every_contact_by_name() {
        let mut book = AddressBook::new();
        add::run(&mut book, "Bob", "2222222222").unwrap();
        add::run(&mut book, "Alice", "1111111111").unwrap();

        let res = run(&book).unwrap();
        let names: Vec<_> = res.listed_records.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["Alice", "Bob"]);
    }
}
