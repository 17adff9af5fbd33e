pub mod field;
pub mod record;
pub mod book;

// Re-exports for convenience
pub use field::{Birthday, Name, Phone};
pub use record::Record;
pub use book::{AddressBook, UpcomingBirthday, BIRTHDAY_WINDOW_DAYS};
