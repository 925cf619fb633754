//! File-backed [`KeyValueStore`].
//!
//! One JSON document per key:
//! ```text
//! base_dir/
//! ├── savedBrandVoices.json
//! ├── generationHistory.json
//! └── scouting_agencies_websites.json
//! ```

use crate::paths::MaridPaths;
use crate::storage::AtomicFile;
use marid_core::error::{MaridError, Result};
use marid_core::store::KeyValueStore;
use std::path::{Path, PathBuf};

/// Durable store writing each key to its own file.
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `base_dir`, or at the platform store
    /// directory when `None`.
    pub fn new(base_dir: Option<&Path>) -> Result<Self> {
        let base_dir = match base_dir {
            Some(dir) => dir.to_path_buf(),
            None => MaridPaths::store_dir().map_err(|e| MaridError::config(e.to_string()))?,
        };
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn file_for(&self, key: &str) -> Result<AtomicFile> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(MaridError::config(format!("invalid storage key '{key}'")));
        }
        Ok(AtomicFile::new(self.base_dir.join(format!("{key}.json"))))
    }
}

impl KeyValueStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        self.file_for(key)?.load()
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let file = self.file_for(key)?;
        file.save(value)?;
        tracing::debug!(
            "[JsonFileStore] Wrote {} bytes to {}",
            value.len(),
            file.path().display()
        );
        Ok(())
    }
}
