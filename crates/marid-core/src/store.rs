//! Persisted key-value store.
//!
//! [`KeyValueStore`] is the raw backend contract (string values addressed by
//! key). [`PersistedStore`] layers JSON (de)serialization on top and never
//! fails towards its callers: a read problem yields the caller's default and a
//! write problem is logged and dropped. Callers update their in-memory copy
//! before calling `set`, so a failed write leaves memory and storage out of
//! step until the next successful write. Nothing here reconciles that.

use crate::error::{MaridError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Logical keys, one per owning component.
pub mod keys {
    /// Saved brand voices (`Vec<BrandVoice>`)
    pub const SAVED_BRAND_VOICES: &str = "savedBrandVoices";
    /// Generation history, newest first (`Vec<HistoryItem>`)
    pub const GENERATION_HISTORY: &str = "generationHistory";
    /// Scouting catalog (`Vec<Agency>`)
    pub const SCOUTING_AGENCIES: &str = "scouting_agencies_websites";
}

/// Raw durable storage of string values.
///
/// Implementations are expected to be cheap to call from async code; no
/// locking discipline beyond whole-value replacement is required.
pub trait KeyValueStore: Send + Sync {
    /// Returns `Ok(None)` when the key has never been written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Typed JSON view over a [`KeyValueStore`].
#[derive(Clone)]
pub struct PersistedStore {
    backend: Arc<dyn KeyValueStore>,
}

impl PersistedStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Reads and parses `key`, or returns `default` when the key is absent or
    /// unreadable.
    pub fn get<T>(&self, key: &str, default: T) -> T
    where
        T: DeserializeOwned,
    {
        match self.try_get::<T>(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                tracing::warn!("[PersistedStore] {}; falling back to default", e);
                default
            }
        }
    }

    /// Like [`get`](Self::get) but surfaces read failures.
    pub fn try_get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let raw = self
            .backend
            .read(key)
            .map_err(|e| storage_read(key, e.to_string()))?;

        match raw {
            Some(text) if !text.trim().is_empty() => serde_json::from_str(&text)
                .map(Some)
                .map_err(|e| storage_read(key, e.to_string())),
            _ => Ok(None),
        }
    }

    /// Serializes and writes `value`. Failures are logged, not returned.
    pub fn set<T>(&self, key: &str, value: &T)
    where
        T: Serialize + ?Sized,
    {
        if let Err(e) = self.try_set(key, value) {
            tracing::error!("[PersistedStore] {}", e);
        }
    }

    /// Like [`set`](Self::set) but surfaces write failures.
    pub fn try_set<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let text = serde_json::to_string(value).map_err(|e| storage_write(key, e.to_string()))?;
        self.backend
            .write(key, &text)
            .map_err(|e| storage_write(key, e.to_string()))
    }
}

fn storage_read(key: &str, message: String) -> MaridError {
    MaridError::StorageRead {
        key: key.to_string(),
        message,
    }
}

fn storage_write(key: &str, message: String) -> MaridError {
    MaridError::StorageWrite {
        key: key.to_string(),
        message,
    }
}
