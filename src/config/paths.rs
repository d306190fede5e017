//! Path management for cardcycle
//!
//! ## Path Resolution Order
//!
//! 1. `CARDCYCLE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/cardcycle` or `~/.config/cardcycle`
//! 3. Windows: `%APPDATA%\cardcycle`

use std::path::PathBuf;

use crate::error::CardcycleError;

pub const DATA_DIR_ENV: &str = "CARDCYCLE_DATA_DIR";

/// Manages all paths used by cardcycle
#[derive(Debug, Clone)]
pub struct CardcyclePaths {
    base_dir: PathBuf,
}

impl CardcyclePaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, CardcycleError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/cardcycle/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the ledger snapshot
    pub fn ledger_file(&self) -> PathBuf {
        self.data_dir().join("ledger.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), CardcycleError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CardcycleError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CardcycleError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if cardcycle has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CardcycleError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                CardcycleError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("cardcycle"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CardcycleError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CardcycleError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("cardcycle"))
}
