use super::*;
use crate::types::{Property, RecordId};
use redb::ReadableDatabase;
use tempfile::TempDir;

const TEST_POSTINGS: PostingTable = PostingTable::new("test_postings");

fn create_test_db() -> (redb::Database, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db = redb::Database::create(temp_dir.path().join("test.redb")).unwrap();
    let write_txn = db.begin_write().unwrap();
    TEST_POSTINGS.init(&write_txn).unwrap();
    write_txn.commit().unwrap();
    (db, temp_dir)
}

fn name(s: &str) -> FieldName {
    FieldName::try_from(s).unwrap()
}

fn id(n: u64) -> RecordId {
    RecordId::try_new(n).unwrap()
}

fn document(values: &[&str]) -> Document {
    Document::new().with(Property::multiple(
        name("search"),
        values.iter().map(|v| v.to_string()),
    ))
}

#[test]
fn test_insert_and_lookup() {
    let (db, _temp) = create_test_db();

    let write_txn = db.begin_write().unwrap();
    let written = TEST_POSTINGS
        .insert_document(&write_txn, id(3), &document(&["ab", "bc"]))
        .unwrap();
    TEST_POSTINGS
        .insert_document(&write_txn, id(1), &document(&["ab"]))
        .unwrap();
    write_txn.commit().unwrap();

    assert_eq!(written, 2);

    let read_txn = db.begin_read().unwrap();
    assert_eq!(
        TEST_POSTINGS.record_ids(&read_txn, &name("search"), "ab").unwrap(),
        vec![id(1), id(3)]
    );
    assert_eq!(
        TEST_POSTINGS.record_ids(&read_txn, &name("search"), "bc").unwrap(),
        vec![id(3)]
    );
    assert!(
        TEST_POSTINGS
            .record_ids(&read_txn, &name("search"), "a")
            .unwrap()
            .is_empty()
    );
    assert_eq!(TEST_POSTINGS.len(&read_txn).unwrap(), 3);
}

#[test]
fn test_lookup_does_not_match_value_prefixes() {
    let (db, _temp) = create_test_db();

    let write_txn = db.begin_write().unwrap();
    TEST_POSTINGS
        .insert_document(&write_txn, id(1), &document(&["* ab", "* abc", "* a"]))
        .unwrap();
    write_txn.commit().unwrap();

    let read_txn = db.begin_read().unwrap();
    assert_eq!(
        TEST_POSTINGS.record_ids(&read_txn, &name("search"), "* ab").unwrap(),
        vec![id(1)]
    );
    assert_eq!(TEST_POSTINGS.len(&read_txn).unwrap(), 3);
}

#[test]
fn test_remove_document() {
    let (db, _temp) = create_test_db();
    let doc = document(&["ab", "bc"]);

    let write_txn = db.begin_write().unwrap();
    TEST_POSTINGS.insert_document(&write_txn, id(1), &doc).unwrap();
    TEST_POSTINGS.insert_document(&write_txn, id(2), &doc).unwrap();
    write_txn.commit().unwrap();

    let write_txn = db.begin_write().unwrap();
    TEST_POSTINGS.remove_document(&write_txn, id(1), &doc).unwrap();
    write_txn.commit().unwrap();

    let read_txn = db.begin_read().unwrap();
    assert_eq!(
        TEST_POSTINGS.record_ids(&read_txn, &name("search"), "ab").unwrap(),
        vec![id(2)]
    );
    assert_eq!(TEST_POSTINGS.len(&read_txn).unwrap(), 2);
}
