use crate::error::SearchError;
use crate::field_tags::FieldTagTable;
use gramdex_core::types::FieldName;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Search settings, persisted as search.toml.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Name of the multi-valued property holding every record's tokens.
    #[serde(default = "default_token_property")]
    pub token_property: FieldName,
    /// Caps the number of hits returned by one search. Unlimited when unset.
    /// Applied to the store's matches, so it trims output but not lookup work.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_limit: Option<usize>,
    #[serde(default)]
    pub field_tags: FieldTagTable,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            token_property: default_token_property(),
            result_limit: None,
            field_tags: FieldTagTable::default(),
        }
    }
}

impl SearchConfig {
    /// Returns the config file path within the given data directory.
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("search.toml")
    }

    /// Loads and validates config from a TOML file. Returns the default config
    /// if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        self.field_tags.validate()?;

        if self.field_tags.contains(&self.token_property) {
            return Err(SearchError::InvalidArgument(format!(
                "token property {} is also an indexed field",
                self.token_property
            )));
        }
        if self.result_limit == Some(0) {
            return Err(SearchError::InvalidArgument(
                "result_limit must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

fn default_token_property() -> FieldName {
    // SAFETY: the literal is trimmed, non-empty and short.
    unsafe { FieldName::new_unchecked("search".to_string()) }
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    Invalid(#[from] SearchError),
}
