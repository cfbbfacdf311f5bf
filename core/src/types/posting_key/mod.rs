use crate::types::{FieldName, RecordId};
use redb::TypeName;
use std::cmp::Ordering;

/// One posting entry: `record_id` carries `value` in its indexed `property`.
///
/// Entries sort by `(property, value, record_id)`, so all records carrying a
/// value form one contiguous range ordered by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostingKey {
    pub property: FieldName,
    pub value: String,
    pub record_id: RecordId,
}

impl PostingKey {
    pub fn new(property: FieldName, value: impl Into<String>, record_id: RecordId) -> Self {
        Self {
            property,
            value: value.into(),
            record_id,
        }
    }

    /// Smallest key of the posting list for `(property, value)`.
    pub fn first(property: &FieldName, value: &str) -> Self {
        Self::new(property.clone(), value, RecordId::first())
    }

    /// Largest key of the posting list for `(property, value)`.
    pub fn last(property: &FieldName, value: &str) -> Self {
        Self::new(property.clone(), value, RecordId::last())
    }
}

/// Splits encoded bytes into `(property, value, record_id)` slices.
fn split_parts(data: &[u8]) -> (&[u8], &[u8], &[u8]) {
    let (len, data) = data.split_first_chunk::<2>().unwrap();
    let (property, data) = data.split_at(u16::from_be_bytes(*len) as usize);
    let (len, data) = data.split_first_chunk::<4>().unwrap();
    let (value, record_id) = data.split_at(u32::from_be_bytes(*len) as usize);
    (property, value, record_id)
}

impl redb::Key for PostingKey {
    fn compare(data1: &[u8], data2: &[u8]) -> Ordering {
        let (property1, value1, id1) = split_parts(data1);
        let (property2, value2, id2) = split_parts(data2);

        // UTF-8 byte order is code point order.
        property1
            .cmp(property2)
            .then_with(|| value1.cmp(value2))
            .then_with(|| <RecordId as redb::Key>::compare(id1, id2))
    }
}

impl redb::Value for PostingKey {
    type SelfType<'a> = PostingKey;
    type AsBytes<'a> = Vec<u8>;

    fn fixed_width() -> Option<usize> {
        None
    }

    fn from_bytes<'a>(data: &'a [u8]) -> Self::SelfType<'a>
    where
        Self: 'a,
    {
        let (property, value, record_id) = split_parts(data);
        let property = std::str::from_utf8(property).expect("invalid UTF-8 in posting property");
        let value = std::str::from_utf8(value).expect("invalid UTF-8 in posting value");

        PostingKey {
            property: FieldName::try_from(property).unwrap(),
            value: value.to_string(),
            record_id: <RecordId as redb::Value>::from_bytes(record_id),
        }
    }

    fn as_bytes<'a, 'b: 'a>(value: &'a Self::SelfType<'b>) -> Self::AsBytes<'a>
    where
        Self: 'b,
    {
        let property = value.property.as_bytes();
        let term = value.value.as_bytes();
        let property_len = u16::try_from(property.len()).expect("property name too long");
        let term_len = u32::try_from(term.len()).expect("posting value too long");

        let mut bytes = Vec::with_capacity(2 + property.len() + 4 + term.len() + 8);
        bytes.extend_from_slice(&property_len.to_be_bytes());
        bytes.extend_from_slice(property);
        bytes.extend_from_slice(&term_len.to_be_bytes());
        bytes.extend_from_slice(term);
        bytes.extend_from_slice(&<RecordId as redb::Value>::as_bytes(&value.record_id));
        bytes
    }

    fn type_name() -> TypeName {
        TypeName::new("gramdex::PostingKey")
    }
}

#[cfg(test)]
mod tests;
