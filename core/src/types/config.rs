use std::path::PathBuf;

/// Store configuration for `Database` initialization.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub base_path: PathBuf,
}

impl StoreConfig {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.base_path.join("gramdex.redb")
    }
}
