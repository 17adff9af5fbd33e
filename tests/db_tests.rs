use addressbook::db::*;
use addressbook::model::*;
use addressbook::transfer;
use tempfile::TempDir;

fn alice() -> Record {
    let mut record = Record::create("Alice").unwrap();
    record.add_phone("1234567890").unwrap();
    record.set_birthday("01.01.2000").unwrap();
    record
}

fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(alice());

    let mut bob = Record::create("Bob").unwrap();
    bob.add_phone("5559876543").unwrap();
    bob.add_phone("5551234567").unwrap();
    bob.add_phone("5559876543").unwrap();
    book.add_record(bob);

    book.add_record(Record::create("Carol").unwrap());
    book
}

// ==========================================================================
// CONNECTION-LEVEL TESTS
// ==========================================================================

#[test]
fn write_then_read_in_memory() {
    let mut conn = schema::test_connection();
    let book = sample_book();

    write_book(&mut conn, &book).unwrap();
    assert_eq!(record_repo::count(&conn).unwrap(), 3);
    assert_eq!(read_book(&conn).unwrap(), book);
}

#[test]
fn write_replaces_previous_contents() {
    let mut conn = schema::test_connection();
    write_book(&mut conn, &sample_book()).unwrap();

    let mut smaller = AddressBook::new();
    smaller.add_record(alice());
    write_book(&mut conn, &smaller).unwrap();

    assert_eq!(record_repo::count(&conn).unwrap(), 1);
    assert_eq!(read_book(&conn).unwrap(), smaller);
}

#[test]
fn read_rejects_corrupt_phone() {
    let conn = schema::test_connection();
    conn.execute("INSERT INTO contacts (position, name, birthday) VALUES (0, 'Alice', NULL)", [])
        .unwrap();
    conn.execute(
        "INSERT INTO phones (contact_name, position, number) VALUES ('Alice', 0, '12')",
        [],
    )
    .unwrap();

    assert!(read_book(&conn).is_err());
}

#[test]
fn read_rejects_corrupt_birthday() {
    let conn = schema::test_connection();
    conn.execute(
        "INSERT INTO contacts (position, name, birthday) VALUES (0, 'Alice', 'someday')",
        [],
    )
    .unwrap();

    assert!(read_book(&conn).is_err());
}

// ==========================================================================
// FILE ROUND-TRIPS
// ==========================================================================

#[test]
fn load_missing_file_yields_empty_book() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("addressbook.db");

    let book = load_book(&path).unwrap();
    assert!(book.is_empty());
    assert!(!path.exists());
}

#[test]
fn save_then_load_reproduces_single_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("addressbook.db");

    let mut book = AddressBook::new();
    book.add_record(alice());
    save_book(&path, &book).unwrap();

    let loaded = load_book(&path).unwrap();
    let record = loaded.find("Alice").unwrap();
    assert_eq!(record.phones(), &[Phone::parse("1234567890").unwrap()]);
    assert_eq!(record.birthday().unwrap().to_string(), "01.01.2000");
    assert_eq!(loaded, book);
}

#[test]
fn save_then_load_keeps_order_and_duplicates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("addressbook.db");

    save_book(&path, &sample_book()).unwrap();
    let loaded = load_book(&path).unwrap();

    let names: Vec<&str> = loaded.records().iter().map(Record::name).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    let bob: Vec<&str> = loaded.find("Bob").unwrap().phones().iter().map(Phone::as_str).collect();
    assert_eq!(bob, vec!["5559876543", "5551234567", "5559876543"]);
}

#[test]
fn saving_an_emptied_book_clears_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("addressbook.db");

    save_book(&path, &sample_book()).unwrap();
    save_book(&path, &AddressBook::new()).unwrap();

    assert!(load_book(&path).unwrap().is_empty());
}

// ==========================================================================
// JSON TRANSFER
// ==========================================================================

#[test]
fn export_then_import_into_empty_book() {
    let dir = TempDir::new().unwrap();
    let json_path = dir.path().join("contacts.json");
    let book = sample_book();

    transfer::export_json(&book, &json_path).unwrap();

    let mut imported = AddressBook::new();
    let stats = transfer::import_json(&mut imported, &json_path).unwrap();
    assert_eq!(stats, transfer::ImportStats { added: 3, replaced: 0 });
    assert_eq!(imported, book);
}

#[test]
fn import_replaces_existing_names() {
    let dir = TempDir::new().unwrap();
    let json_path = dir.path().join("contacts.json");
    std::fs::write(
        &json_path,
        r#"[{"name": "Alice", "phones": ["0000000000"], "birthday": null},
            {"name": "Dave", "phones": [], "birthday": "1985-07-04"}]"#,
    )
    .unwrap();

    let mut book = sample_book();
    let stats = transfer::import_json(&mut book, &json_path).unwrap();

    assert_eq!(stats, transfer::ImportStats { added: 1, replaced: 1 });
    assert_eq!(book.records()[0].name(), "Alice");
    assert_eq!(book.find("Alice").unwrap().birthday(), None);
    assert_eq!(book.find("Dave").unwrap().birthday().unwrap().to_string(), "04.07.1985");
}

#[test]
fn import_rejects_invalid_phone() {
    let dir = TempDir::new().unwrap();
    let json_path = dir.path().join("contacts.json");
    std::fs::write(&json_path, r#"[{"name": "Eve", "phones": ["abc"], "birthday": null}]"#).unwrap();

    let mut book = AddressBook::new();
    assert!(transfer::import_json(&mut book, &json_path).is_err());
    assert!(book.is_empty());
}
