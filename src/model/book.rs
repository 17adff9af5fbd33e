use std::fmt;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::warn;

use super::record::Record;
use crate::error::{BookError, BookResult};
use crate::validation::DATE_FORMAT;

/// How far ahead `upcoming_birthdays` looks, inclusive of both ends.
pub const BIRTHDAY_WINDOW_DAYS: u64 = 7;

/// A birthday that falls within the upcoming window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// The day to congratulate: the birthday itself, or the Monday after if it lands on a weekend.
    pub celebration_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.celebration_date.format(DATE_FORMAT))
    }
}

/// All contacts, keyed by name, in insertion order.
///
/// Replacing a record keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record`, replacing any record with the same name. Returns the replaced record.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.position_of(record.name()) {
            Some(idx) => Some(std::mem::replace(&mut self.records[idx], record)),
            None => {
                self.records.push(record);
                None
            }
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    /// Like `find_mut`, but a miss is an error.
    pub fn get_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.find_mut(name).ok_or(BookError::NoSuchContact)
    }

    /// Removes the record for `name` if present.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.position_of(name).map(|idx| self.records.remove(idx))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays whose occurrence in `today`'s year lies in `[today, today + 7 days]`.
    ///
    /// Weekend occurrences are moved to the following Monday, which may fall past the
    /// window. Occurrences that already passed this year are not rolled into next year,
    /// and Feb 29 birthdays have no occurrence in a non-leap year.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let horizon = today + Days::new(BIRTHDAY_WINDOW_DAYS);

        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let Some(occurrence) = birthday.date().with_year(today.year()) else {
                    warn!(name = record.name(), year = today.year(), "no Feb 29 this year, birthday skipped");
                    return None;
                };
                if occurrence < today || occurrence > horizon {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    celebration_date: shift_off_weekend(occurrence),
                })
            })
            .collect()
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }
}

fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Days::new(2),
        Weekday::Sun => date + Days::new(1),
        _ => date,
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .records
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>();
        f.write_str(&lines.join("\n"))
    }
}
