//! Bigram search over a key-value document store.
//!
//! The store only answers equality filters on indexed properties, so substring
//! search is rebuilt from n-grams:
//!
//! - `tokenizer`: splits text into code-point bigrams, optionally namespaced
//!   as `"<prefix> <gram>"`.
//! - `index`: derives a record's token set (every field under the global
//!   sentinel and under its own tag) and stores it as one multi-valued
//!   indexed property beside the unindexed fields.
//! - `query`: turns free text and per-field terms into the same tokens and
//!   requires all of them.
//!
//! Matching is bag-of-bigrams. No ranking is applied; hits come back in store
//! order.

mod config;
mod engine;
mod error;
mod field_tags;
mod index;
mod query;
mod record;
mod results;
mod tokenizer;

pub use config::{ConfigError, SearchConfig};
pub use engine::SearchEngine;
pub use error::SearchError;
pub use field_tags::{DEFAULT_GLOBAL_SENTINEL, FieldTag, FieldTagTable};
pub use index::{TokenSet, build_token_set, from_document, to_document};
pub use query::{RequiredTokens, SearchQuery, build_query};
pub use record::Record;
pub use results::SearchHit;
pub use tokenizer::{BIGRAM, NGrams, PREFIX_SEPARATOR, prefixed, tokenize};
