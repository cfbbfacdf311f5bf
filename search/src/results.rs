//! Search results types.

use crate::record::Record;
use gramdex_core::types::RecordId;
use serde::Serialize;

/// A matched record with its store id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub id: RecordId,
    pub record: Record,
}
