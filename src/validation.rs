use chrono::NaiveDate;

use crate::error::{BookError, BookResult};

/// Day.month.year, as typed at the prompt and shown back to the user.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> BookResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(BookError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Validates that a phone number is exactly ten ASCII digits.
pub fn phone_digits(value: &str) -> BookResult<String> {
    if value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(value.to_string())
    } else {
        Err(BookError::InvalidPhone)
    }
}

/// Parses a birthday written as DD.MM.YYYY.
pub fn parse_birthday(value: &str) -> BookResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| BookError::InvalidDateFormat)
}
