//! Configuration models.
//!
//! `config.toml` holds non-secret settings; `secret.json` holds API keys.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Root of `config.toml`. Every field has a default.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub gemini: GeminiSettings,
    pub storage: StorageSettings,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GeminiSettings {
    pub text_model: String,
    pub image_model: String,
    pub base_url: String,
    /// Request timeout in seconds; unset means the transport default
    pub timeout_secs: Option<u64>,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory for persisted keys; the platform data dir is used when unset
    pub data_dir: Option<PathBuf>,
}

/// Root of `secret.json`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct SecretConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini: Option<GeminiConfig>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
}
