pub mod schema;
pub mod record_repo;

use std::path::Path;

use rusqlite::Connection;
use tracing::{debug, info};

use crate::error::BookResult;
use crate::model::AddressBook;

/// Loads the address book stored at `path`. A missing file is an empty book.
pub fn load_book(path: &Path) -> BookResult<AddressBook> {
    if !path.exists() {
        info!(path = %path.display(), "no data file, starting with an empty address book");
        return Ok(AddressBook::new());
    }

    let conn = Connection::open(path)?;
    schema::initialize(&conn)?;
    read_book(&conn)
}

/// Writes the whole address book to `path`, replacing whatever was stored there.
pub fn save_book(path: &Path, book: &AddressBook) -> BookResult<()> {
    let mut conn = Connection::open(path)?;
    schema::initialize(&conn)?;
    write_book(&mut conn, book)?;
    info!(path = %path.display(), records = book.len(), "saved address book");
    Ok(())
}

pub fn read_book(conn: &Connection) -> BookResult<AddressBook> {
    let mut book = AddressBook::new();
    for record in record_repo::find_all(conn)? {
        book.add_record(record);
    }
    debug!(records = book.len(), "loaded address book");
    Ok(book)
}

pub fn write_book(conn: &mut Connection, book: &AddressBook) -> BookResult<()> {
    let tx = conn.transaction()?;
    record_repo::delete_all(&tx)?;
    for (position, record) in book.records().iter().enumerate() {
        record_repo::insert(&tx, position, record)?;
    }
    tx.commit()?;
    Ok(())
}
