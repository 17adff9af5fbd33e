use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::BookResult;
use crate::model::{AddressBook, Record};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub added: usize,
    pub replaced: usize,
}

/// Writes every record to `json_path` as a pretty-printed JSON array.
pub fn export_json(book: &AddressBook, json_path: &Path) -> BookResult<()> {
    let mut writer = BufWriter::new(File::create(json_path)?);
    serde_json::to_writer_pretty(&mut writer, book.records())?;
    writer.flush()?;
    info!(path = %json_path.display(), records = book.len(), "exported address book");
    Ok(())
}

/// Reads a JSON array of records from `json_path` and merges it into `book`.
/// Records whose name already exists replace the stored one.
pub fn import_json(book: &mut AddressBook, json_path: &Path) -> BookResult<ImportStats> {
    let reader = BufReader::new(File::open(json_path)?);
    let records: Vec<Record> = serde_json::from_reader(reader)?;

    let mut stats = ImportStats::default();
    for record in records {
        match book.add_record(record) {
            Some(_) => stats.replaced += 1,
            None => stats.added += 1,
        }
    }
    info!(path = %json_path.display(), added = stats.added, replaced = stats.replaced, "imported records");
    Ok(stats)
}
