//! User settings for finrep
//!
//! Manages user preferences: where the reporting API lives, which company to
//! report on, and how amounts are displayed.

use serde::{Deserialize, Serialize};

use super::paths::FinrepPaths;
use crate::error::ReportError;

/// User settings for finrep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the reporting API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Company whose reports are fetched
    #[serde(default = "default_company_id")]
    pub company_id: u64,

    /// Currency symbol shown in rendered tables
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_company_id() -> u64 {
    1
}

fn default_currency() -> String {
    "€".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            company_id: default_company_id(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FinrepPaths) -> Result<Self, ReportError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ReportError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ReportError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinrepPaths) -> Result<(), ReportError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| ReportError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
