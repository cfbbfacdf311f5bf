use crate::store::db::error::DatabaseError;
use crate::types::{Document, FieldName, PostingKey, RecordId};
use redb::{
    ReadTransaction, ReadableTable, ReadableTableMetadata, TableDefinition, WriteTransaction,
};

/// Inverted index over indexed document properties.
///
/// Stores `PostingKey { property, value, record_id }` entries. The posting
/// list of one value is a single range scan, already sorted by record id.
pub struct PostingTable {
    definition: TableDefinition<'static, PostingKey, ()>,
}

impl PostingTable {
    pub const fn new(name: &'static str) -> Self {
        Self {
            definition: TableDefinition::new(name),
        }
    }

    pub fn init(&self, txn: &WriteTransaction) -> Result<(), DatabaseError> {
        txn.open_table(self.definition)?;
        Ok(())
    }

    /// Adds one entry per distinct indexed value of `document`.
    ///
    /// Returns the number of entries written.
    pub fn insert_document(
        &self,
        txn: &WriteTransaction,
        record_id: RecordId,
        document: &Document,
    ) -> Result<usize, DatabaseError> {
        let mut table = txn.open_table(self.definition)?;
        let entries = document.index_entries();

        for (property, value) in &entries {
            table.insert(PostingKey::new((*property).clone(), *value, record_id), &())?;
        }

        Ok(entries.len())
    }

    /// Removes the entries `insert_document` wrote for `document`.
    pub fn remove_document(
        &self,
        txn: &WriteTransaction,
        record_id: RecordId,
        document: &Document,
    ) -> Result<(), DatabaseError> {
        let mut table = txn.open_table(self.definition)?;

        for (property, value) in document.index_entries() {
            table.remove(PostingKey::new(property.clone(), value, record_id))?;
        }

        Ok(())
    }

    /// Returns the ids of all records carrying `value` in `property`, ascending.
    pub fn record_ids(
        &self,
        txn: &ReadTransaction,
        property: &FieldName,
        value: &str,
    ) -> Result<Vec<RecordId>, DatabaseError> {
        let table = txn.open_table(self.definition)?;

        table
            .range(PostingKey::first(property, value)..=PostingKey::last(property, value))?
            .map(|entry| {
                let (key_guard, _) = entry?;
                Ok(key_guard.value().record_id)
            })
            .collect()
    }

    pub fn len(&self, txn: &ReadTransaction) -> Result<u64, DatabaseError> {
        let table = txn.open_table(self.definition)?;
        Ok(table.len()?)
    }
}

#[cfg(test)]
mod tests;
