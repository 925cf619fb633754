//! In-memory [`KeyValueStore`], used in tests and for ephemeral sessions.

use marid_core::error::{MaridError, Result};
use marid_core::store::KeyValueStore;
use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent write fail, as a full quota would.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Stores a raw value, bypassing serialization (e.g. to plant corrupt data).
    pub fn insert_raw(&self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        self.values
            .write()
            .map_err(|_| MaridError::internal("memory store lock poisoned"))?
            .insert(key.into(), value.into());
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|_| MaridError::internal("memory store lock poisoned"))?;
        Ok(values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(MaridError::io("storage quota exceeded"));
        }
        self.insert_raw(key, value)
    }
}
