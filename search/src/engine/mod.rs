use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::index::{build_token_set, from_document, to_document};
use crate::query::{SearchQuery, build_query};
use crate::record::Record;
use crate::results::SearchHit;
use gramdex_core::DocumentStore;
use gramdex_core::types::{Document, RecordId};
use tracing::debug;

/// Bigram search over records kept in a [`DocumentStore`].
///
/// Writes derive the token set and store it with the record in one `put`.
/// Searches turn the query into required tokens and run one conjunctive
/// store query.
pub struct SearchEngine<S> {
    store: S,
    config: SearchConfig,
}

impl<S: DocumentStore> SearchEngine<S> {
    /// Returns `InvalidArgument` if the config fails validation.
    pub fn new(store: S, config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self { store, config })
    }
}

/// Write operations.
impl<S: DocumentStore> SearchEngine<S> {
    /// Creates a record, or replaces the record at `id` together with its
    /// whole token set.
    pub fn put(&mut self, id: Option<RecordId>, record: &Record) -> Result<RecordId, SearchError> {
        let document = self.document(record)?;
        let id = self.store.put(id, &document)?;
        Ok(id)
    }

    /// Creates several records, returning their ids in input order.
    pub fn put_many(&mut self, records: &[Record]) -> Result<Vec<RecordId>, SearchError> {
        let documents = records
            .iter()
            .map(|record| self.document(record))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.store.put_many(&documents)?)
    }

    pub fn delete(&mut self, id: RecordId) -> Result<Option<Record>, SearchError> {
        let removed = self.store.delete(id)?;
        Ok(removed.map(|document| from_document(&document, &self.config.token_property)))
    }

    fn document(&self, record: &Record) -> Result<Document, SearchError> {
        let token_property = &self.config.token_property;
        if record.contains(token_property) {
            return Err(SearchError::InvalidArgument(format!(
                "record field {token_property} collides with the token property"
            )));
        }

        let tokens = build_token_set(record, &self.config.field_tags);
        debug!(fields = record.len(), tokens = tokens.len(), "indexed record");
        Ok(to_document(record, tokens, token_property))
    }
}

/// Read operations.
impl<S: DocumentStore> SearchEngine<S> {
    pub fn get(&self, id: RecordId) -> Result<Option<Record>, SearchError> {
        let document = self.store.get(id)?;
        Ok(document.map(|document| from_document(&document, &self.config.token_property)))
    }

    /// Returns the records matching every term of `query`, in store order.
    ///
    /// A query without terms returns every record. `result_limit` only trims
    /// the returned hits; the store still loads every match.
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, SearchError> {
        let required = build_query(query, &self.config.field_tags)?;
        debug!(required = required.len(), "built query");

        let filters = required.into_filters(&self.config.token_property);
        let limit = self.config.result_limit.unwrap_or(usize::MAX);

        let hits = self
            .store
            .query(&filters)?
            .into_iter()
            .take(limit)
            .map(|(id, document)| SearchHit {
                id,
                record: from_document(&document, &self.config.token_property),
            })
            .collect();
        Ok(hits)
    }
}
