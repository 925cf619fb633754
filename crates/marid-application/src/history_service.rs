//! Generation history (newest first).

use marid_core::error::{MaridError, Result};
use marid_core::history::HistoryItem;
use marid_core::store::{PersistedStore, keys};
use tokio::sync::RwLock;

/// Owns the `generationHistory` key.
///
/// The in-memory list is updated first and then written through; a failed
/// write is logged by the store and the in-memory list stays authoritative
/// for this process.
pub struct HistoryService {
    store: PersistedStore,
    items: RwLock<Vec<HistoryItem>>,
}

impl HistoryService {
    pub fn new(store: PersistedStore) -> Self {
        let items: Vec<HistoryItem> = store.get(keys::GENERATION_HISTORY, Vec::new());
        tracing::debug!("[HistoryService] Loaded {} items", items.len());
        Self {
            store,
            items: RwLock::new(items),
        }
    }

    pub async fn list(&self) -> Vec<HistoryItem> {
        self.items.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Option<HistoryItem> {
        self.items.read().await.iter().find(|item| item.id == id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    pub async fn prepend(&self, item: HistoryItem) {
        let mut items = self.items.write().await;
        tracing::info!("[HistoryService] Recording generation {}", item.id);
        items.insert(0, item);
        self.store.set(keys::GENERATION_HISTORY, &*items);
    }

    /// Replaces the image of the item with `id`.
    pub async fn attach_image(&self, id: &str, image: impl Into<String>) -> Result<()> {
        let mut items = self.items.write().await;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| MaridError::not_found("HistoryItem", id))?;
        item.generated_image = Some(image.into());
        self.store.set(keys::GENERATION_HISTORY, &*items);
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(MaridError::not_found("HistoryItem", id));
        }
        self.store.set(keys::GENERATION_HISTORY, &*items);
        Ok(())
    }

    pub async fn clear(&self) {
        let mut items = self.items.write().await;
        items.clear();
        self.store.set(keys::GENERATION_HISTORY, &*items);
        tracing::info!("[HistoryService] History cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{memory_store, sample_input, sample_response};

    fn item(idea: &str) -> HistoryItem {
        let mut input = sample_input();
        input.user_idea = idea.to_string();
        HistoryItem::new(input, sample_response(), None)
    }

    #[tokio::test]
    async fn test_prepend_keeps_newest_first() {
        let (_, store) = memory_store();
        let history = HistoryService::new(store.clone());

        history.prepend(item("first")).await;
        history.prepend(item("second")).await;

        let ideas: Vec<String> = history
            .list()
            .await
            .into_iter()
            .map(|i| i.user_input.user_idea)
            .collect();
        assert_eq!(ideas, vec!["second", "first"]);

        let reloaded = HistoryService::new(store);
        assert_eq!(reloaded.len().await, 2);
    }

    #[tokio::test]
    async fn test_attach_image_patches_by_id() {
        let (_, store) = memory_store();
        let history = HistoryService::new(store);
        let a = item("a");
        let b = HistoryItem {
            api_response: a.api_response.clone(),
            ..item("b")
        };
        history.prepend(a.clone()).await;
        history.prepend(b.clone()).await;

        history.attach_image(&a.id, "aW1n").await.unwrap();

        assert_eq!(history.get(&a.id).await.unwrap().generated_image.as_deref(), Some("aW1n"));
        assert!(history.get(&b.id).await.unwrap().generated_image.is_none());
        assert!(history.attach_image("missing", "x").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_and_clear() {
        let (_, store) = memory_store();
        let history = HistoryService::new(store);
        let a = item("a");
        history.prepend(a.clone()).await;
        history.prepend(item("b")).await;

        history.delete(&a.id).await.unwrap();
        assert_eq!(history.len().await, 1);
        assert!(history.delete(&a.id).await.is_err());

        history.clear().await;
        assert!(history.is_empty().await);
    }
}
