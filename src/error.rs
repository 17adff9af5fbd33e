use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("Phone number must contain exactly 10 digits.")]
    InvalidPhone,

    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidDateFormat,

    #[error("Birthday is already set.")]
    AlreadySet,

    #[error("Old phone number not found.")]
    PhoneNotFound,

    #[error("Contact not found.")]
    ContactNotFound,

    #[error("No such contact.")]
    NoSuchContact,

    #[error("Birthday not found.")]
    BirthdayNotFound,

    #[error("Not enough arguments.")]
    InsufficientArguments,

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type BookResult<T> = Result<T, BookError>;
