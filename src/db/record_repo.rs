use chrono::NaiveDate;
use rusqlite::{params, Connection};

use crate::error::{BookError, BookResult};
use crate::model::{Birthday, Name, Phone, Record};

pub fn insert(conn: &Connection, position: usize, record: &Record) -> BookResult<()> {
    conn.execute(
        "INSERT INTO contacts (position, name, birthday) VALUES (?1, ?2, ?3)",
        params![
            position as i64,
            record.name(),
            record.birthday().map(|b| b.date().to_string()),
        ],
    )?;

    let mut stmt = conn.prepare(
        "INSERT INTO phones (contact_name, position, number) VALUES (?1, ?2, ?3)",
    )?;
    for (idx, phone) in record.phones().iter().enumerate() {
        stmt.execute(params![record.name(), idx as i64, phone.as_str()])?;
    }
    Ok(())
}

pub fn delete_all(conn: &Connection) -> BookResult<()> {
    conn.execute("DELETE FROM phones", [])?;
    conn.execute("DELETE FROM contacts", [])?;
    Ok(())
}

/// All records in stored order.
pub fn find_all(conn: &Connection) -> BookResult<Vec<Record>> {
    let mut stmt = conn.prepare("SELECT name, birthday FROM contacts ORDER BY position")?;

    let rows = stmt
        .query_map([], |row| {
            let name: String = row.get(0)?;
            let birthday: Option<String> = row.get(1)?;
            Ok((name, birthday))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(name, birthday)| -> BookResult<Record> {
            let phones = find_phones(conn, &name)?;
            let birthday = birthday.as_deref().map(parse_stored_date).transpose()?;
            Ok(Record::restore(Name::new(&name)?, phones, birthday))
        })
        .collect()
}

pub fn count(conn: &Connection) -> BookResult<usize> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM contacts", [], |row| row.get(0))?;
    Ok(n as usize)
}

fn find_phones(conn: &Connection, name: &str) -> BookResult<Vec<Phone>> {
    let mut stmt = conn.prepare(
        "SELECT number FROM phones WHERE contact_name = ?1 ORDER BY position",
    )?;

    let phones = stmt
        .query_map(params![name], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?
        .iter()
        .map(|number| Phone::parse(number))
        .collect::<BookResult<Vec<_>>>()?;

    Ok(phones)
}

fn parse_stored_date(s: &str) -> BookResult<Birthday> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(Birthday::from)
        .map_err(|e| BookError::Other(format!("Invalid stored birthday '{}': {}", s, e)))
}
