use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::LeapDayPolicy;
use chrono::NaiveDate;

pub fn run(
    book: &AddressBook,
    today: NaiveDate,
    days: u32,
    leap_day: LeapDayPolicy,
) -> Result<CmdResult> {
    let upcoming = book.upcoming_birthdays(today, days, leap_day);
    tracing::debug!(%today, days, found = upcoming.len(), "upcoming birthdays");
    Ok(CmdResult::default().with_upcoming(upcoming))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, birthday};

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reports_contacts_in_window() {
        let mut book = AddressBook::new();
        add::run(&mut book, "Alice", "1234567890").unwrap();
        add::run(&mut book, "Bob", "0987654321").unwrap();
        add::run(&mut book, "Carol", "1111111111").unwrap();
        birthday::add(&mut book, "Alice", "20.06.1990").unwrap();
        birthday::add(&mut book, "Bob", "30.06.1985").unwrap();

        let res = run(&book, date(18, 6, 2024), 7, LeapDayPolicy::default()).unwrap();
        let names: Vec<_> = res.upcoming.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Alice"]);
        assert_eq!(res.upcoming[0].date, date(20, 6, 2024));

        let res = run(&book, date(1, 1, 2024), 7, LeapDayPolicy::default()).unwrap();
        assert!(res.upcoming.is_empty());
    }
}
