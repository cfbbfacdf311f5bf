use gramdex_core::StoreError;
use gramdex_core::types::FieldName;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// A caller broke a contract: zero window, malformed field-tag table,
    /// or a record that collides with the token property.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown field: {0}")]
    UnknownField(FieldName),

    /// Passed through from the store untouched.
    #[error(transparent)]
    Store(#[from] StoreError),
}
