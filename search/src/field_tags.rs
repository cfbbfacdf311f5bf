//! Field-tag table: which record fields are searchable and under which tag.

use crate::error::SearchError;
use gramdex_core::types::FieldName;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default prefix of the field-agnostic namespace.
pub const DEFAULT_GLOBAL_SENTINEL: &str = "*";

/// Maps each indexed field to its namespace tag.
///
/// Every field's bigrams are indexed twice: under the shared global sentinel,
/// so free text matches any field, and under the field's own tag, so a query
/// can be scoped to that field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldTagTable {
    #[serde(default = "default_global_sentinel")]
    global_sentinel: String,
    fields: Vec<FieldTag>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldTag {
    pub field: FieldName,
    pub tag: String,
}

impl FieldTagTable {
    /// Builds and validates a table.
    pub fn new(
        global_sentinel: impl Into<String>,
        fields: impl IntoIterator<Item = (FieldName, String)>,
    ) -> Result<Self, SearchError> {
        let table = Self {
            global_sentinel: global_sentinel.into(),
            fields: fields
                .into_iter()
                .map(|(field, tag)| FieldTag { field, tag })
                .collect(),
        };
        table.validate()?;
        Ok(table)
    }

    /// Checks the invariants token namespacing relies on.
    ///
    /// Tags are joined to grams with a single space, so neither a tag nor the
    /// sentinel may be empty or contain whitespace. Tags must be distinct from
    /// each other and from the sentinel.
    pub fn validate(&self) -> Result<(), SearchError> {
        let invalid = |message: String| -> Result<(), SearchError> {
            Err(SearchError::InvalidArgument(message))
        };

        if self.fields.is_empty() {
            return invalid("field-tag table has no fields".to_string());
        }
        if !is_valid_tag(&self.global_sentinel) {
            return invalid(format!(
                "global sentinel {:?} must be non-empty and contain no whitespace",
                self.global_sentinel
            ));
        }

        let mut fields = HashSet::new();
        let mut tags = HashSet::new();
        for FieldTag { field, tag } in &self.fields {
            if !is_valid_tag(tag) {
                return invalid(format!(
                    "tag {tag:?} of field {field} must be non-empty and contain no whitespace"
                ));
            }
            if *tag == self.global_sentinel {
                return invalid(format!("tag of field {field} collides with the global sentinel"));
            }
            if !fields.insert(field) {
                return invalid(format!("field {field} is listed twice"));
            }
            if !tags.insert(tag) {
                return invalid(format!("tag {tag:?} is used by more than one field"));
            }
        }

        Ok(())
    }

    pub fn global_sentinel(&self) -> &str {
        &self.global_sentinel
    }

    /// Returns the tag of `field`, if it is indexed.
    pub fn tag(&self, field: &FieldName) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.field == *field)
            .map(|f| f.tag.as_str())
    }

    /// Iterates `(field, tag)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &str)> {
        self.fields.iter().map(|f| (&f.field, f.tag.as_str()))
    }

    pub fn contains(&self, field: &FieldName) -> bool {
        self.tag(field).is_some()
    }
}

impl Default for FieldTagTable {
    /// The person roster: family name, given name and email.
    fn default() -> Self {
        let field = |name: &str, tag: &str| FieldTag {
            // SAFETY: static names are trimmed, non-empty and short.
            field: unsafe { FieldName::new_unchecked(name.to_string()) },
            tag: tag.to_string(),
        };

        Self {
            global_sentinel: default_global_sentinel(),
            fields: vec![
                field("family_name", "f"),
                field("given_name", "g"),
                field("email", "e"),
            ],
        }
    }
}

fn default_global_sentinel() -> String {
    DEFAULT_GLOBAL_SENTINEL.to_string()
}

fn is_valid_tag(tag: &str) -> bool {
    !tag.is_empty() && !tag.chars().any(char::is_whitespace)
}
