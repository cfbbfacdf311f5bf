use super::*;
use redb::{Key, Value};

fn posting(property: &str, value: &str, id: u64) -> PostingKey {
    PostingKey::new(
        FieldName::try_from(property).unwrap(),
        value,
        RecordId::try_new(id).unwrap(),
    )
}

fn compare(l: &PostingKey, r: &PostingKey) -> Ordering {
    let bytes_l = <PostingKey as Value>::as_bytes(l);
    let bytes_r = <PostingKey as Value>::as_bytes(r);
    <PostingKey as Key>::compare(&bytes_l, &bytes_r)
}

#[test]
fn posting_key_bytes_decode() {
    let key = posting("search", "f 田中", 7);
    let bytes = <PostingKey as Value>::as_bytes(&key);
    assert_eq!(<PostingKey as Value>::from_bytes(&bytes), key);
}

#[test]
fn posting_key_orders_by_property_then_value_then_id() {
    let keys = [
        posting("a", "zz", 9),
        posting("b", "", 1),
        posting("b", "a", 1),
        posting("b", "a", 2),
        posting("b", "a", 300),
        posting("b", "ab", 1),
        posting("b", "b", 1),
        posting("search", "* 中太", 5),
        posting("search", "* 田中", 1),
    ];

    for (i, l) in keys.iter().enumerate() {
        for (j, r) in keys.iter().enumerate() {
            assert_eq!(compare(l, r), i.cmp(&j), "Comparing {:?} and {:?}", l, r);
        }
    }
}

#[test]
fn posting_key_bounds_enclose_every_record() {
    let property = FieldName::try_from("search").unwrap();
    let first = PostingKey::first(&property, "* ab");
    let last = PostingKey::last(&property, "* ab");

    for id in [1, 2, 1 << 40, u64::MAX] {
        let key = posting("search", "* ab", id);
        assert_ne!(compare(&first, &key), Ordering::Greater);
        assert_ne!(compare(&key, &last), Ordering::Greater);
    }

    // Neighbouring values fall outside the range.
    assert_eq!(compare(&posting("search", "* a", 1), &first), Ordering::Less);
    assert_eq!(compare(&posting("search", "* abc", 1), &last), Ordering::Greater);
}
