//! Wiring of configuration, storage and the generation client.

use anyhow::{Context as _, Result};
use marid_application::{MaridGenerationClient, SimulatedMetrics};
use marid_core::config::AppConfig;
use marid_core::store::PersistedStore;
use marid_infrastructure::{ConfigService, JsonFileStore, MaridPaths};
use marid_interaction::GeminiApiAgent;
use std::path::Path;
use std::sync::Arc;

pub struct AppContext {
    config_service: ConfigService,
    config: AppConfig,
    store: PersistedStore,
}

impl AppContext {
    pub fn load(config_dir: Option<&Path>) -> Result<Self> {
        let config_service = match config_dir {
            Some(dir) => ConfigService::with_dir(dir),
            None => ConfigService::new()?,
        };
        let config = config_service
            .load_config()
            .context("Failed to load config.toml")?;

        let backend = JsonFileStore::new(config.storage.data_dir.as_deref())?;
        tracing::debug!("[AppContext] Store at {}", backend.base_dir().display());

        Ok(Self {
            config_service,
            config,
            store: PersistedStore::new(Arc::new(backend)),
        })
    }

    pub fn store(&self) -> PersistedStore {
        self.store.clone()
    }

    /// Builds the generation client. Requires an API key.
    pub fn client(&self) -> Result<Arc<MaridGenerationClient>> {
        let api_key = match self.config_service.resolve_api_key() {
            Ok(key) => key,
            Err(e) => {
                if let Err(io) = MaridPaths::ensure_secret_file_at(self.config_service.secret_file()) {
                    tracing::warn!("[AppContext] Could not create secret template: {}", io);
                }
                return Err(e.into());
            }
        };

        let mut agent = GeminiApiAgent::from_config(&self.config, api_key)?;
        let model_override = self
            .config_service
            .load_secrets()?
            .gemini
            .and_then(|g| g.model_name)
            .filter(|name| !name.trim().is_empty());
        if let Some(model) = model_override {
            agent = agent.with_text_model(model);
        }
        tracing::debug!(
            "[AppContext] Using {} / {}",
            agent.text_model(),
            agent.image_model()
        );

        Ok(Arc::new(MaridGenerationClient::new(
            Arc::new(agent),
            Arc::new(SimulatedMetrics::default()),
        )))
    }
}
