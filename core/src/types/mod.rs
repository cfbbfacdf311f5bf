pub(crate) mod config;
pub use config::StoreConfig;

pub(crate) mod field_name;
pub use field_name::{FieldName, FieldNameError, MAX_FIELD_NAME_LENGTH};

pub(crate) mod record_id;
pub use record_id::{RecordId, RecordIdError, RecordIdParseError};

pub(crate) mod document;
pub use document::{Document, Property, PropertyValue};

pub(crate) mod filter;
pub use filter::Filter;

pub(crate) mod posting_key;
pub use posting_key::PostingKey;
