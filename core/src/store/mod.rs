//! Document store boundary.
//!
//! The search layer only ever talks to a [`DocumentStore`]: it hands over a
//! document whose properties are already flagged indexed or stored-only, and
//! asks for the documents that satisfy every filter of a conjunctive query.

use crate::types::{Document, Filter, RecordId};
use thiserror::Error;

pub(crate) mod db;

/// Opaque failure surfaced by a store implementation.
#[derive(Debug, Error)]
#[error("store failure: {0}")]
pub struct StoreError(#[source] Box<dyn std::error::Error + Send + Sync + 'static>);

impl StoreError {
    pub fn new(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Box::new(error))
    }
}

impl From<db::error::DatabaseError> for StoreError {
    fn from(error: db::error::DatabaseError) -> Self {
        Self::new(error)
    }
}

pub trait DocumentStore {
    /// Creates or replaces a document.
    ///
    /// With `id == None` the store allocates a fresh id. With `Some(id)` the
    /// document at `id` is replaced as a whole, or created there if absent.
    fn put(&mut self, id: Option<RecordId>, document: &Document) -> Result<RecordId, StoreError>;

    /// Creates several documents, returning their ids in input order.
    fn put_many(&mut self, documents: &[Document]) -> Result<Vec<RecordId>, StoreError> {
        documents.iter().map(|d| self.put(None, d)).collect()
    }

    fn get(&self, id: RecordId) -> Result<Option<Document>, StoreError>;

    /// Removes a document together with its posting entries.
    fn delete(&mut self, id: RecordId) -> Result<Option<Document>, StoreError>;

    /// Returns every document matching all `filters`, ordered by id.
    ///
    /// An empty filter list matches every document.
    fn query(&self, filters: &[Filter]) -> Result<Vec<(RecordId, Document)>, StoreError>;
}
