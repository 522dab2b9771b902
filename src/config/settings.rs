//! User settings for Spendwise
//!
//! Manages user preferences: the expense category set, store file names,
//! display preferences and the advice policy.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::advice::AdvicePolicy;
use super::paths::SpendwisePaths;
use crate::error::SpendwiseError;
use crate::models::CategorySet;

/// User settings for Spendwise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for display and accepted on input
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Expense categories offered for new entries
    #[serde(default)]
    pub categories: CategorySet,

    /// Ledger CSV file, relative to the data directory unless absolute
    #[serde(default = "default_ledger_file")]
    pub ledger_file: String,

    /// Budget profile CSV file, relative to the data directory unless absolute
    #[serde(default = "default_budget_file")]
    pub budget_file: String,

    /// Threshold policy for spending advice
    #[serde(default)]
    pub advice: AdvicePolicy,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_ledger_file() -> String {
    "expenses.csv".to_string()
}

fn default_budget_file() -> String {
    "budget_data.csv".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            categories: CategorySet::default(),
            ledger_file: default_ledger_file(),
            budget_file: default_budget_file(),
            advice: AdvicePolicy::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SpendwisePaths) -> Result<Self, SpendwiseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                SpendwiseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SpendwiseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SpendwisePaths) -> Result<(), SpendwiseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SpendwiseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            SpendwiseError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Check the settings are internally consistent
    pub fn validate(&self) -> Result<(), SpendwiseError> {
        self.categories
            .validate()
            .map_err(|e| SpendwiseError::Config(e.to_string()))?;

        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(SpendwiseError::Config(format!(
                "Invalid date format: {}",
                self.date_format
            )));
        }

        if self.ledger_file.trim().is_empty() || self.budget_file.trim().is_empty() {
            return Err(SpendwiseError::Config("Store file names cannot be empty".into()));
        }

        self.advice.validate()
    }
}
