//! Path management for NixCI
//!
//! Provides XDG-compliant path resolution for configuration and logs.
//!
//! ## Path Resolution Order
//!
//! 1. `NIXCI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/nixci` or `~/.config/nixci`
//! 3. Windows: `%APPDATA%\nixci`

use std::path::PathBuf;

use crate::error::NixciError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "NIXCI_DATA_DIR";

/// Manages all paths used by NixCI
#[derive(Debug, Clone)]
pub struct NixciPaths {
    /// Base directory for all NixCI data
    base_dir: PathBuf,
}

impl NixciPaths {
    /// Create a new NixciPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, NixciError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create NixciPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/nixci/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/nixci/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the submission log
    pub fn submission_log(&self) -> PathBuf {
        self.data_dir().join("submissions.log")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), NixciError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| NixciError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| NixciError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, NixciError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                NixciError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("nixci"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, NixciError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| NixciError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("nixci"))
}
