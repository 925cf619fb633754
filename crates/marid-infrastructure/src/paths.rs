//! Path management for Marid configuration and data files.
//!
//! ```text
//! ~/.config/marid/             # Config directory
//! ├── config.toml              # Application configuration
//! └── secret.json              # API keys
//!
//! ~/.local/share/marid/        # Data directory
//! └── store/                   # One JSON file per persisted key
//! ```

use marid_core::config::{DEFAULT_TEXT_MODEL, GeminiConfig, SecretConfig};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "marid";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

pub struct MaridPaths;

impl MaridPaths {
    /// Returns the configuration directory (e.g. `~/.config/marid/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the data directory (e.g. `~/.local/share/marid/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the secrets file.
    ///
    /// # Security Note
    ///
    /// The file should stay at mode 600; see [`ensure_secret_file_at`](Self::ensure_secret_file_at).
    pub fn secret_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("secret.json"))
    }

    pub fn store_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("store"))
    }

    /// Ensures the default secret file exists.
    pub fn ensure_secret_file() -> Result<PathBuf, std::io::Error> {
        let secret_path = Self::secret_file()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()))?;
        Self::ensure_secret_file_at(&secret_path)?;
        Ok(secret_path)
    }

    /// Creates `secret_path` with an empty Gemini template if it is missing.
    ///
    /// On Unix the new file gets permissions 600 (user read/write only).
    /// An existing file is left untouched.
    pub fn ensure_secret_file_at(secret_path: &Path) -> Result<(), std::io::Error> {
        if secret_path.exists() {
            return Ok(());
        }

        if let Some(parent) = secret_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let template = SecretConfig {
            gemini: Some(GeminiConfig {
                api_key: String::new(),
                model_name: Some(DEFAULT_TEXT_MODEL.to_string()),
            }),
        };
        let template_json = serde_json::to_string_pretty(&template).map_err(std::io::Error::other)?;

        std::fs::write(secret_path, template_json)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(secret_path, permissions)?;
        }

        tracing::info!("[MaridPaths] Created secret template at {}", secret_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_names() {
        if let Ok(config) = MaridPaths::config_file() {
            assert!(config.ends_with("marid/config.toml"));
        }
        if let Ok(store) = MaridPaths::store_dir() {
            assert!(store.ends_with("marid/store"));
        }
    }

    #[test]
    fn test_ensure_secret_file_creates_template() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cfg").join("secret.json");

        MaridPaths::ensure_secret_file_at(&path).unwrap();

        let parsed: SecretConfig =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.gemini.unwrap().api_key, "");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }

    #[test]
    fn test_ensure_secret_file_keeps_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("secret.json");
        std::fs::write(&path, r#"{"gemini":{"api_key":"k"}}"#).unwrap();

        MaridPaths::ensure_secret_file_at(&path).unwrap();

        assert!(std::fs::read_to_string(&path).unwrap().contains("\"k\""));
    }
}
