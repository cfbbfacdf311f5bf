//! Search queries and their translation into required tokens.

use crate::error::SearchError;
use crate::field_tags::FieldTagTable;
use crate::tokenizer::{NGrams, expand};
use gramdex_core::types::{FieldName, Filter};
use std::collections::{BTreeMap, BTreeSet};

/// Query terms supplied by a client.
///
/// Free text matches any indexed field; a per-field term only matches the
/// field it names. All terms must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub free_text: Option<String>,
    pub fields: BTreeMap<FieldName, String>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn free_text(mut self, text: impl Into<String>) -> Self {
        self.free_text = Some(text.into());
        self
    }

    pub fn field(mut self, field: FieldName, term: impl Into<String>) -> Self {
        self.fields.insert(field, term.into());
        self
    }
}

/// Tokens a record must all carry to match, as a set.
///
/// Empty means unconstrained: every record matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredTokens(BTreeSet<String>);

impl RequiredTokens {
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

    /// One equality filter per token against the token property.
    pub fn into_filters(self, token_property: &FieldName) -> Vec<Filter> {
        self.0
            .into_iter()
            .map(|token| Filter::eq(token_property.clone(), token))
            .collect()
    }
}

/// Collects the tokens `query` requires.
///
/// Free text is tokenized under the global sentinel only; each non-empty
/// per-field term under its field's tag only. The result is the union.
///
/// Matching is by bigram membership, not adjacency: a record matches when it
/// carries every required bigram somewhere, even if those bigrams never occur
/// side by side in one of its values.
pub fn build_query(query: &SearchQuery, table: &FieldTagTable) -> Result<RequiredTokens, SearchError> {
    let mut tokens = BTreeSet::new();

    if let Some(text) = &query.free_text {
        tokens.extend(expand(NGrams::bigrams(text), &[table.global_sentinel()]));
    }

    for (field, term) in &query.fields {
        let tag = table
            .tag(field)
            .ok_or_else(|| SearchError::UnknownField(field.clone()))?;
        if term.is_empty() {
            continue;
        }
        tokens.extend(expand(NGrams::bigrams(term), &[tag]));
    }

    Ok(RequiredTokens(tokens))
}
