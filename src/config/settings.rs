//! User settings for budget-sheets
//!
//! Manages user preferences: currency symbol, default categories per bucket,
//! log filter and an optional fixed month.

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;

/// User settings for budget-sheets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// tracing filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Categories offered by the "Default Categories" option for needs
    #[serde(default = "default_needs")]
    pub default_needs: Vec<String>,

    /// Categories offered by the "Default Categories" option for wants
    #[serde(default = "default_wants")]
    pub default_wants: Vec<String>,

    /// Budget this month instead of the current one (e.g. "March")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_override: Option<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_log_filter() -> String {
    "budget_sheets=warn".to_string()
}

pub(crate) fn default_needs() -> Vec<String> {
    ["Housing", "Vehicle", "Insurance", "Food", "Banking"]
        .into_iter()
        .map(String::from)
        .collect()
}

pub(crate) fn default_wants() -> Vec<String> {
    ["Entertainment", "Wellbeing", "Travel"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            log_filter: default_log_filter(),
            default_needs: default_needs(),
            default_wants: default_wants(),
            month_override: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
