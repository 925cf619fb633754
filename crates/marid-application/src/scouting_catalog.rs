//! Saved agency links.

use marid_core::agency::{Agency, default_agencies};
use marid_core::error::{MaridError, Result};
use marid_core::store::{PersistedStore, keys};
use tokio::sync::RwLock;

/// Owns the `scouting_agencies_websites` key. Agencies are keyed by name.
pub struct ScoutingCatalog {
    store: PersistedStore,
    agencies: RwLock<Vec<Agency>>,
}

impl ScoutingCatalog {
    /// Loads the catalog, seeding the defaults when nothing is stored.
    pub fn new(store: PersistedStore) -> Self {
        let agencies = store.get(keys::SCOUTING_AGENCIES, default_agencies());
        Self {
            store,
            agencies: RwLock::new(agencies),
        }
    }

    pub async fn list(&self) -> Vec<Agency> {
        self.agencies.read().await.clone()
    }

    pub async fn add(&self, agency: Agency) -> Result<Agency> {
        agency.validate()?;
        let agency = Agency {
            name: agency.name.trim().to_string(),
            description: agency.description.trim().to_string(),
            website: agency.website.trim().to_string(),
        };

        let mut agencies = self.agencies.write().await;
        if agencies.iter().any(|a| a.name == agency.name) {
            return Err(MaridError::invalid_state(format!(
                "agency '{}' already exists",
                agency.name
            )));
        }
        agencies.push(agency.clone());
        self.store.set(keys::SCOUTING_AGENCIES, &*agencies);
        tracing::info!("[ScoutingCatalog] Added '{}'", agency.name);
        Ok(agency)
    }

    pub async fn delete(&self, name: &str) -> Result<()> {
        let name = name.trim();
        let mut agencies = self.agencies.write().await;
        let before = agencies.len();
        agencies.retain(|a| a.name != name);
        if agencies.len() == before {
            return Err(MaridError::not_found("Agency", name));
        }
        self.store.set(keys::SCOUTING_AGENCIES, &*agencies);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_store;

    #[tokio::test]
    async fn test_seeded_with_defaults() {
        let (_, store) = memory_store();
        let catalog = ScoutingCatalog::new(store);
        assert_eq!(catalog.list().await, default_agencies());
    }

    #[tokio::test]
    async fn test_add_validates_and_rejects_duplicates() {
        let (_, store) = memory_store();
        let catalog = ScoutingCatalog::new(store.clone());

        assert!(catalog.add(Agency::new(" ", "", "https://a.sa")).await.unwrap_err().is_validation());

        let added = catalog
            .add(Agency::new(" وكالة جديدة ", "وصف", " https://new.sa "))
            .await
            .unwrap();
        assert_eq!(added.name, "وكالة جديدة");
        assert!(catalog.add(Agency::new("وكالة جديدة", "", "https://x.sa")).await.is_err());

        let stored: Vec<Agency> = store.get(keys::SCOUTING_AGENCIES, Vec::new());
        assert_eq!(stored.len(), default_agencies().len() + 1);
    }

    #[tokio::test]
    async fn test_delete_by_name() {
        let (_, store) = memory_store();
        let catalog = ScoutingCatalog::new(store);
        let first = default_agencies().remove(0);

        catalog.delete(&first.name).await.unwrap();

        assert!(catalog.list().await.iter().all(|a| a.name != first.name));
        assert!(catalog.delete(&first.name).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_matches_trimmed_name() {
        let (_, store) = memory_store();
        let catalog = ScoutingCatalog::new(store.clone());
        assert!(catalog.list().await.iter().any(|a| a.name == "UM7"));

        catalog.delete(" UM7 ").await.unwrap();

        let stored: Vec<Agency> = store.get(keys::SCOUTING_AGENCIES, Vec::new());
        assert!(stored.iter().all(|a| a.name != "UM7"));
    }
}
