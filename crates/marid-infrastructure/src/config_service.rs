//! Configuration service.
//!
//! Loads `config.toml` and `secret.json` and resolves the Gemini API key.
//! Lookup order for the key: `GEMINI_API_KEY`, then `API_KEY`, then the
//! secret file.

use crate::paths::MaridPaths;
use marid_core::config::{AppConfig, SecretConfig};
use marid_core::error::{MaridError, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Loads and caches configuration files.
#[derive(Debug, Clone)]
pub struct ConfigService {
    config_file: PathBuf,
    secret_file: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Uses the platform config directory.
    pub fn new() -> Result<Self> {
        let dir = MaridPaths::config_dir().map_err(|e| MaridError::config(e.to_string()))?;
        Ok(Self::with_dir(&dir))
    }

    /// Uses `dir/config.toml` and `dir/secret.json`.
    pub fn with_dir(dir: &Path) -> Self {
        Self {
            config_file: dir.join("config.toml"),
            secret_file: dir.join("secret.json"),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn secret_file(&self) -> &Path {
        &self.secret_file
    }

    /// Returns the configuration, reading it on first access.
    ///
    /// A missing file yields defaults; a malformed one is an error.
    pub fn load_config(&self) -> Result<AppConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|_| MaridError::internal("config cache lock poisoned"))?;
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = if self.config_file.exists() {
            let text = std::fs::read_to_string(&self.config_file)?;
            toml::from_str::<AppConfig>(&text)?
        } else {
            tracing::debug!(
                "[ConfigService] {} not found, using defaults",
                self.config_file.display()
            );
            AppConfig::default()
        };

        let mut write_lock = self
            .config
            .write()
            .map_err(|_| MaridError::internal("config cache lock poisoned"))?;
        *write_lock = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    /// Reads `secret.json`. A missing file yields an empty config.
    pub fn load_secrets(&self) -> Result<SecretConfig> {
        if !self.secret_file.exists() {
            return Ok(SecretConfig::default());
        }
        let text = std::fs::read_to_string(&self.secret_file)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Resolves the API key from the process environment or `secret.json`.
    pub fn resolve_api_key(&self) -> Result<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Same as [`resolve_api_key`](Self::resolve_api_key) with an injectable
    /// environment lookup.
    pub fn resolve_api_key_with<F>(&self, env: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        for name in API_KEY_ENV_VARS {
            if let Some(value) = env(name).filter(|v| !v.trim().is_empty()) {
                tracing::debug!("[ConfigService] Using API key from {}", name);
                return Ok(value.trim().to_string());
            }
        }

        let secrets = self.load_secrets()?;
        secrets
            .gemini
            .map(|g| g.api_key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                MaridError::config(format!(
                    "Gemini API key not configured. Set GEMINI_API_KEY or fill in {}",
                    self.secret_file.display()
                ))
            })
    }
}
