//! Record indexer: derives a record's token set and lays the record out as a
//! store document.
//!
//! The token set is a pure function of the record's fields and the field-tag
//! table. It is recomputed in full on every write and stored next to the
//! fields as one multi-valued indexed property; the fields themselves are
//! stored unindexed.

use crate::field_tags::FieldTagTable;
use crate::record::Record;
use crate::tokenizer::{NGrams, expand};
use gramdex_core::types::{Document, FieldName, Property, PropertyValue};
use std::collections::BTreeSet;

/// The searchable tokens of one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet(BTreeSet<String>);

impl TokenSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0.into_iter().collect()
    }
}

impl Extend<String> for TokenSet {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl FromIterator<String> for TokenSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Tokenizes every field of the table present in `record`.
///
/// Each field contributes its bigrams under the global sentinel and under its
/// own tag. Fields outside the table, and values shorter than a bigram,
/// contribute nothing.
pub fn build_token_set(record: &Record, table: &FieldTagTable) -> TokenSet {
    let mut tokens = TokenSet::default();

    for (field, tag) in table.iter() {
        let Some(text) = record.get(field) else {
            continue;
        };
        tokens.extend(expand(
            NGrams::bigrams(text),
            &[table.global_sentinel(), tag],
        ));
    }

    tokens
}

/// Lays out `record` and its tokens as a store document.
pub fn to_document(record: &Record, tokens: TokenSet, token_property: &FieldName) -> Document {
    let mut document: Document = record
        .fields()
        .map(|(field, value)| Property::text(field.clone(), value).noindex())
        .fold(Document::new(), Document::with);

    document.push(Property::multiple(token_property.clone(), tokens.into_vec()));
    document
}

/// Recovers the record fields of a stored document, dropping the token
/// property.
pub fn from_document(document: &Document, token_property: &FieldName) -> Record {
    document
        .properties
        .iter()
        .filter(|p| p.name != *token_property)
        .filter_map(|p| match &p.value {
            PropertyValue::Text(text) => Some((p.name.clone(), text.clone())),
            PropertyValue::Multiple(_) => None,
        })
        .collect()
}
