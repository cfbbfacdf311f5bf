pub mod store;
pub mod types;

pub use store::db::Database;
pub use store::db::error::DatabaseError;
pub use store::{DocumentStore, StoreError};
