use crate::error::{RolodexError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const PHONE_LEN: usize = 10;
pub const DATE_FORMAT: &str = "%d.%m.%Y";
pub const NO_BIRTHDAY: &str = "No birthday set";

/// A phone number: exactly ten ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Phone {
    type Err = RolodexError;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() != PHONE_LEN || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RolodexError::InvalidPhone(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Phone {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// What to do with a Feb 29 birthday when the target year has no Feb 29.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeapDayPolicy {
    #[default]
    MarchFirst,
    FebruaryLast,
    Skip,
}

/// A birthday parsed from a strict `DD.MM.YYYY` literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The same month and day in `year`.
    ///
    /// Feb 29 in a non-leap year is resolved through `policy`; `None` means
    /// the birthday does not occur in that year.
    pub fn in_year(&self, year: i32, policy: LeapDayPolicy) -> Option<NaiveDate> {
        if let Some(date) = self.0.with_year(year) {
            return Some(date);
        }
        match policy {
            LeapDayPolicy::MarchFirst => NaiveDate::from_ymd_opt(year, 3, 1),
            LeapDayPolicy::FebruaryLast => NaiveDate::from_ymd_opt(year, 2, 28),
            LeapDayPolicy::Skip => None,
        }
    }
}

/// Checks the `DD.MM.YYYY` shape before handing off to chrono, which on its
/// own accepts single-digit days and months and signed years.
fn has_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

/// Parses a strict `DD.MM.YYYY` date. Years start at 0001.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    if !has_date_shape(s) {
        return Err(RolodexError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .filter(|date| date.year() >= 1)
        .ok_or_else(|| RolodexError::InvalidDate(s.to_string()))
}

impl FromStr for Birthday {
    type Err = RolodexError;

    fn from_str(s: &str) -> Result<Self> {
        parse_date(s).map(Self)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// One contact: a name, its phones in insertion order and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RolodexError::InvalidName);
        }
        Ok(Self {
            name,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<()> {
        let phone = raw.parse()?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replaces the first phone equal to `old` with `new`, keeping its position.
    ///
    /// Returns `Ok(false)` when no phone matches; `new` is only validated once
    /// a match has been found.
    pub fn replace_phone(&mut self, old: &str, new: &str) -> Result<bool> {
        let Some(slot) = self.phones.iter_mut().find(|p| **p == *old) else {
            return Ok(false);
        };
        *slot = new.parse()?;
        Ok(true)
    }

    pub fn set_birthday(&mut self, raw: &str) -> Result<()> {
        self.birthday = Some(raw.parse()?);
        Ok(())
    }

    pub fn formatted_birthday(&self) -> String {
        self.birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| NO_BIRTHDAY.to_string())
    }

    /// Phones joined for display, e.g. `1234567890, 0987654321`.
    pub fn phones_line(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
