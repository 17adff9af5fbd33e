use std::fmt;

use serde::{Deserialize, Serialize};

use super::field::{Birthday, Name, Phone};
use crate::error::{BookError, BookResult};

/// One person in the address book: a name, phone numbers, and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn create(name: &str) -> BookResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// Rebuilds a record from already-validated parts (storage, import).
    pub fn restore(name: Name, phones: Vec<Phone>, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones,
            birthday,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    pub fn add_phone(&mut self, number: &str) -> BookResult<()> {
        self.phones.push(Phone::parse(number)?);
        Ok(())
    }

    /// Removes the first matching number. Returns whether anything was removed.
    pub fn remove_phone(&mut self, number: &str) -> bool {
        match self.position_of(number) {
            Some(idx) => {
                self.phones.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Replaces `old` with `new`. The replacement goes to the end of the list.
    /// On any error the phone list is left untouched.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let idx = self.position_of(old).ok_or(BookError::PhoneNotFound)?;
        let replacement = Phone::parse(new)?;
        self.phones.remove(idx);
        self.phones.push(replacement);
        Ok(())
    }

    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| *p == number)
    }

    /// Sets the birthday from a DD.MM.YYYY string. A birthday can only be set once.
    pub fn set_birthday(&mut self, date: &str) -> BookResult<()> {
        if self.birthday.is_some() {
            return Err(BookError::AlreadySet);
        }
        self.birthday = Some(Birthday::parse(date)?);
        Ok(())
    }

    fn position_of(&self, number: &str) -> Option<usize> {
        self.phones.iter().position(|p| p == number)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| "No birthday set".into());
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}
