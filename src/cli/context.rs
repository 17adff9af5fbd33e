use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::db;
use crate::error::BookResult;
use crate::model::AddressBook;

/// State owned by the interactive session: the loaded book and where it lives on disk.
pub struct CLIContext {
    pub book: AddressBook,
    pub data_path: PathBuf,
}

impl CLIContext {
    pub fn new(book: AddressBook, data_path: PathBuf) -> Self {
        Self { book, data_path }
    }

    pub fn load(data_path: &Path) -> BookResult<Self> {
        let book = db::load_book(data_path)?;
        Ok(Self::new(book, data_path.to_path_buf()))
    }

    pub fn save(&self) -> BookResult<()> {
        db::save_book(&self.data_path, &self.book)
    }

    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Prompt on `output` and read one line from `input`. Returns None on EOF.
pub fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> BookResult<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut buf = String::new();
    match input.read_line(&mut buf)? {
        0 => Ok(None),
        _ => Ok(Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string())),
    }
}
