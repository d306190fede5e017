//! User settings for cardcycle
//!
//! Display and dashboard preferences persisted as `config.json`.

use serde::{Deserialize, Serialize};

use super::paths::CardcyclePaths;
use crate::error::CardcycleError;

/// User settings for cardcycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Roll the net of all earlier months into the dashboard balance
    #[serde(default = "default_carry_over")]
    pub carry_over_enabled: bool,

    /// Currency symbol shown in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Number of months in the cumulative trend report
    #[serde(default = "default_trend_months")]
    pub trend_months: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_carry_over() -> bool {
    true
}

fn default_currency() -> String {
    "₩".to_string()
}

fn default_trend_months() -> u32 {
    6
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            carry_over_enabled: default_carry_over(),
            currency_symbol: default_currency(),
            trend_months: default_trend_months(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &CardcyclePaths) -> Result<Self, CardcycleError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not saved here; `init` decides when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| CardcycleError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| CardcycleError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CardcyclePaths) -> Result<(), CardcycleError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CardcycleError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| CardcycleError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
