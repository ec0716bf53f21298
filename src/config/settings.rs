//! User settings for NixCI
//!
//! Persists the handful of client preferences the onboarding flow needs:
//! API endpoint defaults, the seeded spoken language and UI timing.

use serde::{Deserialize, Serialize};

use super::paths::NixciPaths;
use crate::error::NixciError;

/// Keys the mobile client uses for its local key-value store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageKeys {
    pub auth_token: String,
    pub user_data: String,
    pub language: String,
    pub theme: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            auth_token: "auth_token".to_string(),
            user_data: "user_data".to_string(),
            language: "language".to_string(),
            theme: "theme".to_string(),
        }
    }
}

/// User settings for NixCI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the (future) registration API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Request timeout for the API, in milliseconds
    #[serde(default = "default_api_timeout_ms")]
    pub api_timeout_ms: u64,

    /// Language every new draft starts with
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Interval between TUI tick events, in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Local storage key names
    #[serde(default)]
    pub storage_keys: StorageKeys,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    "https://api.example.com".to_string()
}

fn default_api_timeout_ms() -> u64 {
    30_000
}

fn default_language() -> String {
    "English".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            api_timeout_ms: default_api_timeout_ms(),
            default_language: default_language(),
            tick_rate_ms: default_tick_rate_ms(),
            storage_keys: StorageKeys::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &NixciPaths) -> Result<Self, NixciError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| NixciError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                NixciError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &NixciPaths) -> Result<(), NixciError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| NixciError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| NixciError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
