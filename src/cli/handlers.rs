//! Command handlers. Each takes the command's arguments and the address book and
//! returns the message to show; the dispatcher turns errors into their message text.

use chrono::NaiveDate;

use crate::error::{BookError, BookResult};
use crate::model::{AddressBook, Phone, Record};
use crate::validation;

fn arg<'a>(args: &[&'a str], idx: usize) -> BookResult<&'a str> {
    args.get(idx).copied().ok_or(BookError::InsufficientArguments)
}

/// `add <name> <phone>`: creates the contact if needed, then appends the phone.
pub fn add(args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    let name = validation::non_blank(arg(args, 0)?, "name")?;
    let phone = arg(args, 1)?;

    let message = if book.find(&name).is_some() {
        "Contact updated."
    } else {
        book.add_record(Record::create(&name)?);
        "Contact added."
    };
    book.get_mut(&name)?.add_phone(phone)?;
    Ok(message.into())
}

/// `change <name> <old> <new>`
pub fn change(args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    let name = arg(args, 0)?;
    let old_phone = arg(args, 1)?;
    let new_phone = arg(args, 2)?;

    let record = book.find_mut(name).ok_or(BookError::ContactNotFound)?;
    record.edit_phone(old_phone, new_phone)?;
    Ok("Phone number updated.".into())
}

/// `phone <name>`
pub fn phone(args: &[&str], book: &AddressBook) -> BookResult<String> {
    let name = arg(args, 0)?;
    let record = book.find(name).ok_or(BookError::ContactNotFound)?;
    let phones = record
        .phones()
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("{}: {}", name, phones))
}

/// `all`
pub fn show_all(book: &AddressBook) -> BookResult<String> {
    Ok(book.to_string())
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    let name = arg(args, 0)?;
    let date = arg(args, 1)?;

    let record = book.find_mut(name).ok_or(BookError::ContactNotFound)?;
    record.set_birthday(date)?;
    Ok("Birthday added.".into())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], book: &AddressBook) -> BookResult<String> {
    let name = arg(args, 0)?;
    let birthday = book
        .find(name)
        .and_then(Record::birthday)
        .ok_or(BookError::BirthdayNotFound)?;
    Ok(format!("{}: {}", name, birthday))
}

/// `birthdays`
pub fn birthdays(book: &AddressBook, today: NaiveDate) -> BookResult<String> {
    let upcoming = book.upcoming_birthdays(today);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".into());
    }
    Ok(upcoming
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `remove-phone <name> <phone>`
pub fn remove_phone(args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    let name = arg(args, 0)?;
    let number = arg(args, 1)?;

    if book.get_mut(name)?.remove_phone(number) {
        Ok("Phone removed.".into())
    } else {
        Ok("Phone not found.".into())
    }
}

/// `delete <name>`
pub fn delete(args: &[&str], book: &mut AddressBook) -> BookResult<String> {
    let name = arg(args, 0)?;
    book.delete(name).ok_or(BookError::NoSuchContact)?;
    Ok("Contact deleted.".into())
}
