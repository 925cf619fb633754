//! Saved brand voices.

use marid_core::brand_voice::BrandVoice;
use marid_core::error::{MaridError, Result};
use marid_core::store::{PersistedStore, keys};
use tokio::sync::RwLock;

/// Owns the `savedBrandVoices` key.
pub struct VoiceLibrary {
    store: PersistedStore,
    voices: RwLock<Vec<BrandVoice>>,
}

impl VoiceLibrary {
    pub fn new(store: PersistedStore) -> Self {
        let voices: Vec<BrandVoice> = store.get(keys::SAVED_BRAND_VOICES, Vec::new());
        Self {
            store,
            voices: RwLock::new(voices),
        }
    }

    pub async fn list(&self) -> Vec<BrandVoice> {
        self.voices.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<BrandVoice> {
        self.voices
            .read()
            .await
            .iter()
            .find(|voice| voice.id.as_deref() == Some(id))
            .cloned()
    }

    /// Stores a copy of `voice` under `name` with a fresh id.
    pub async fn save(&self, voice: &BrandVoice, name: &str) -> Result<BrandVoice> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MaridError::validation("voice_name"));
        }

        let saved = voice.saved_as(name);
        let mut voices = self.voices.write().await;
        voices.push(saved.clone());
        self.store.set(keys::SAVED_BRAND_VOICES, &*voices);
        tracing::info!("[VoiceLibrary] Saved voice '{}'", name);
        Ok(saved)
    }

    /// Removes exactly the voice with `id`.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let mut voices = self.voices.write().await;
        let before = voices.len();
        voices.retain(|voice| voice.id.as_deref() != Some(id));
        if voices.len() == before {
            return Err(MaridError::not_found("BrandVoice", id));
        }
        self.store.set(keys::SAVED_BRAND_VOICES, &*voices);
        Ok(())
    }
}
