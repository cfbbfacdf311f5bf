//! Database layer for gramdex storage.
//!
//! This module handles all redb operations including:
//! - Document storage (RecordId → VersionedDocument)
//! - Posting entries for indexed properties
//! - Record id allocation

use crate::store::db::error::DatabaseError;
use crate::store::db::posting_table::PostingTable;
use crate::store::{DocumentStore, StoreError};
use crate::types::document::versioned_document::VersionedDocument;
use crate::types::{Document, Filter, RecordId, StoreConfig};
use redb::{ReadableDatabase, ReadableTable, Table, TableDefinition, WriteTransaction};
use std::collections::BTreeSet;
use tracing::{debug, info};

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum DatabaseError {
        #[error("Database error: {0}")]
        Redb(#[from] redb::DatabaseError),

        #[error("Table error: {0}")]
        TableError(#[from] redb::TableError),

        #[error("Storage error: {0}")]
        StorageError(#[from] redb::StorageError),

        #[error("Transaction error: {0}")]
        TransactionError(#[from] redb::TransactionError),

        #[error("Commit error: {0}")]
        CommitError(#[from] redb::CommitError),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Record id space exhausted")]
        IdSpaceExhausted,
    }
}

mod posting_table;

/// Document table: RecordId → VersionedDocument
const DOCUMENT_TABLE: TableDefinition<RecordId, VersionedDocument> =
    TableDefinition::new("documents");

/// Metadata table: &str → u64
const METADATA_TABLE: TableDefinition<&str, u64> = TableDefinition::new("metadata");

/// Metadata key holding the next id to allocate; zero once none is left.
const METADATA_KEY_NEXT_ID: &str = "next_id";

/// Posting entries of every indexed property.
const POSTINGS: PostingTable = PostingTable::new("postings");

/// The main database struct wrapping redb.
pub struct Database {
    db: redb::Database,
}

impl Database {
    /// Creates or opens a database using paths from the config.
    pub fn new(config: StoreConfig) -> Result<Self, DatabaseError> {
        std::fs::create_dir_all(&config.base_path)?;

        let path = config.db_path();
        let db = redb::Database::create(&path)?;

        // Initialize tables
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(DOCUMENT_TABLE)?;
            let _ = write_txn.open_table(METADATA_TABLE)?;
            POSTINGS.init(&write_txn)?;
        }
        write_txn.commit()?;

        info!(path = %path.display(), "opened document database");
        Ok(Self { db })
    }
}

/// Write operations.
impl Database {
    /// Creates or replaces a document.
    ///
    /// Replacing removes every posting entry of the previous version before the
    /// new ones are written, all in one transaction.
    pub fn put(
        &mut self,
        id: Option<RecordId>,
        document: &Document,
    ) -> Result<RecordId, DatabaseError> {
        let write_txn = self.db.begin_write()?;
        let id = Self::put_in(&write_txn, id, document)?;
        write_txn.commit()?;
        Ok(id)
    }

    /// Creates several documents in a single transaction.
    pub fn put_many(&mut self, documents: &[Document]) -> Result<Vec<RecordId>, DatabaseError> {
        let write_txn = self.db.begin_write()?;
        let ids = documents
            .iter()
            .map(|document| Self::put_in(&write_txn, None, document))
            .collect::<Result<Vec<_>, _>>()?;
        write_txn.commit()?;

        debug!(count = ids.len(), "stored document batch");
        Ok(ids)
    }

    /// Removes a document and its posting entries.
    ///
    /// Returns the removed document, or `None` if `id` was absent.
    pub fn delete(&mut self, id: RecordId) -> Result<Option<Document>, DatabaseError> {
        let write_txn = self.db.begin_write()?;

        let removed = {
            let mut document_table = write_txn.open_table(DOCUMENT_TABLE)?;
            let removed = document_table
                .remove(id)?
                .map(|g| g.value().into_latest());

            if let Some(document) = &removed {
                POSTINGS.remove_document(&write_txn, id, document)?;
            }
            removed
        };

        write_txn.commit()?;

        debug!(record_id = %id, found = removed.is_some(), "deleted document");
        Ok(removed)
    }

    fn put_in(
        txn: &WriteTransaction,
        id: Option<RecordId>,
        document: &Document,
    ) -> Result<RecordId, DatabaseError> {
        let id = match id {
            Some(id) => {
                Self::reserve_id(txn, id)?;
                id
            }
            None => Self::allocate_id(txn)?,
        };

        let mut document_table = txn.open_table(DOCUMENT_TABLE)?;

        let previous = document_table
            .remove(id)?
            .map(|g| g.value().into_latest());
        if let Some(previous) = &previous {
            POSTINGS.remove_document(txn, id, previous)?;
        }

        let postings = POSTINGS.insert_document(txn, id, document)?;
        document_table.insert(id, &VersionedDocument::V1(document.clone()))?;

        debug!(
            record_id = %id,
            replaced = previous.is_some(),
            postings,
            "stored document"
        );
        Ok(id)
    }

    /// Hands out the next unused id.
    fn allocate_id(txn: &WriteTransaction) -> Result<RecordId, DatabaseError> {
        let mut metadata_table = txn.open_table(METADATA_TABLE)?;

        let id = Self::next_id(&metadata_table)?.ok_or(DatabaseError::IdSpaceExhausted)?;
        Self::advance_next_id(&mut metadata_table, id)?;
        Ok(id)
    }

    /// Makes sure an explicitly chosen id is never allocated later.
    fn reserve_id(txn: &WriteTransaction, id: RecordId) -> Result<(), DatabaseError> {
        let mut metadata_table = txn.open_table(METADATA_TABLE)?;

        if Self::next_id(&metadata_table)?.is_some_and(|next| id >= next) {
            Self::advance_next_id(&mut metadata_table, id)?;
        }
        Ok(())
    }

    /// The id the allocator hands out next, or `None` once `RecordId::last()`
    /// has been used.
    fn next_id(
        metadata_table: &Table<'_, &'static str, u64>,
    ) -> Result<Option<RecordId>, DatabaseError> {
        let next = metadata_table
            .get(METADATA_KEY_NEXT_ID)?
            .map(|g| g.value())
            .unwrap_or(RecordId::first().into_inner());
        Ok(RecordId::try_new(next).ok())
    }

    fn advance_next_id(
        metadata_table: &mut Table<'_, &'static str, u64>,
        used: RecordId,
    ) -> Result<(), DatabaseError> {
        // Zero marks the id space as exhausted.
        let next = used.into_inner().checked_add(1).unwrap_or(0);
        metadata_table.insert(METADATA_KEY_NEXT_ID, next)?;
        Ok(())
    }
}

/// Read operations.
impl Database {
    /// Retrieves a document by id.
    pub fn get(&self, id: RecordId) -> Result<Option<Document>, DatabaseError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(DOCUMENT_TABLE)?;

        match table.get(id)? {
            None => Ok(None),
            Some(guard) => Ok(Some(guard.value().into_latest())),
        }
    }

    /// Returns all documents matching every filter, ascending by id.
    ///
    /// Posting lists are intersected smallest first; an empty filter list
    /// scans the whole document table.
    pub fn query(&self, filters: &[Filter]) -> Result<Vec<(RecordId, Document)>, DatabaseError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(DOCUMENT_TABLE)?;

        if filters.is_empty() {
            let documents = table
                .iter()?
                .map(|entry| {
                    let (id_guard, document_guard) = entry?;
                    Ok((id_guard.value(), document_guard.value().into_latest()))
                })
                .collect::<Result<Vec<_>, DatabaseError>>()?;

            debug!(matched = documents.len(), "unfiltered scan");
            return Ok(documents);
        }

        let distinct: BTreeSet<&Filter> = filters.iter().collect();
        let mut postings = distinct
            .iter()
            .map(|filter| POSTINGS.record_ids(&read_txn, &filter.property, &filter.value))
            .collect::<Result<Vec<_>, _>>()?;
        postings.sort_by_key(Vec::len);

        let mut postings = postings.into_iter();
        let mut matched = postings.next().unwrap_or_default();
        for list in postings {
            if matched.is_empty() {
                break;
            }
            matched.retain(|id| list.binary_search(id).is_ok());
        }

        let mut documents = Vec::with_capacity(matched.len());
        for id in matched {
            if let Some(guard) = table.get(id)? {
                documents.push((id, guard.value().into_latest()));
            }
        }

        debug!(
            filters = distinct.len(),
            matched = documents.len(),
            "filtered query"
        );
        Ok(documents)
    }

    /// Total number of posting entries across all properties.
    pub fn posting_count(&self) -> Result<u64, DatabaseError> {
        let read_txn = self.db.begin_read()?;
        POSTINGS.len(&read_txn)
    }
}

impl DocumentStore for Database {
    fn put(&mut self, id: Option<RecordId>, document: &Document) -> Result<RecordId, StoreError> {
        Ok(Database::put(self, id, document)?)
    }

    fn put_many(&mut self, documents: &[Document]) -> Result<Vec<RecordId>, StoreError> {
        Ok(Database::put_many(self, documents)?)
    }

    fn get(&self, id: RecordId) -> Result<Option<Document>, StoreError> {
        Ok(Database::get(self, id)?)
    }

    fn delete(&mut self, id: RecordId) -> Result<Option<Document>, StoreError> {
        Ok(Database::delete(self, id)?)
    }

    fn query(&self, filters: &[Filter]) -> Result<Vec<(RecordId, Document)>, StoreError> {
        Ok(Database::query(self, filters)?)
    }
}
