//! # Address Book
//!
//! [`AddressBook`] is the directory of contacts: a map from name to [`Record`]
//! that only exposes the operations the command layer needs. It is not a
//! general purpose map; there is no removal and no key rewriting.
//!
//! ## Upcoming birthdays
//!
//! A birthday is "upcoming" when its month and day, moved into the reference
//! date's year, fall inside the closed window `[reference, reference + days]`.
//!
//! The window never wraps into the next year. From a reference date of
//! December 29, a January 2 birthday is re-anchored to January 2 of the *same*
//! year, which lies before the reference date, so it is not reported.
//!
//! Feb 29 birthdays in non-leap years follow the configured [`LeapDayPolicy`].

use crate::model::{LeapDayPolicy, Record};
use chrono::{Datelike, Days, NaiveDate};
use std::collections::BTreeMap;

pub const DEFAULT_LOOKAHEAD_DAYS: u32 = 7;

/// A contact whose birthday falls inside the lookahead window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// The birthday moved into the reference year.
    pub date: NaiveDate,
}

#[derive(Debug, Default)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `record` under its name, replacing any record already there.
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name().to_string(), record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// All records, ordered by name.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose birthday falls within `days` days of `reference`,
    /// both ends inclusive, sorted by date and then by name.
    pub fn upcoming_birthdays(
        &self,
        reference: NaiveDate,
        days: u32,
        leap_day: LeapDayPolicy,
    ) -> Vec<UpcomingBirthday> {
        // a window past the last representable date ends there
        let window_end = reference
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX);

        let mut upcoming: Vec<UpcomingBirthday> = self
            .records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let Some(date) = birthday.in_year(reference.year(), leap_day) else {
                    tracing::warn!(name = record.name(), "skipping Feb 29 birthday");
                    return None;
                };
                (reference <= date && date <= window_end).then(|| UpcomingBirthday {
                    name: record.name().to_string(),
                    date,
                })
            })
            .collect();

        upcoming.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
        upcoming
    }
}
