//! User settings for the budget tracker
//!
//! Holds the currency symbol used in reports, the ledger file name and the
//! categories created on first run (which also make up the menu's list).

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::Money;
use crate::storage::file_io::write_text_atomic;
use std::path::PathBuf;

/// A category created with an initial budget on first run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCategory {
    pub name: String,
    /// Initial budget in cents
    pub amount: Money,
}

impl SeedCategory {
    pub fn new(name: impl Into<String>, cents: i64) -> Self {
        Self {
            name: name.into(),
            amount: Money::from_cents(cents),
        }
    }
}

/// User settings for the budget tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Ledger file name, relative to the data directory unless absolute
    #[serde(default = "default_ledger_file")]
    pub ledger_file: String,

    /// Categories created on first run, in menu order
    #[serde(default = "default_seed_categories")]
    pub seed_categories: Vec<SeedCategory>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_ledger_file() -> String {
    "budgets.txt".to_string()
}

fn default_seed_categories() -> Vec<SeedCategory> {
    vec![
        SeedCategory::new("Social Budget", 400297),
        SeedCategory::new("Brotherhood", 333466),
        SeedCategory::new("House Budget", 287226),
        SeedCategory::new("Recruitment", 260112),
        SeedCategory::new("New Member Education", 117484),
        SeedCategory::new("Savings", 23437),
        SeedCategory::new("IFC Expenses", 300000),
        SeedCategory::new("Historian", 42350),
        SeedCategory::new("Philanthropy", 10000),
        SeedCategory::new("Scholarship", 10000),
        SeedCategory::new("Parent & Alumni", 10000),
    ]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            ledger_file: default_ledger_file(),
            seed_categories: default_seed_categories(),
        }
    }
}

impl Settings {
    /// Category names offered by the interactive menu, in menu order
    pub fn menu_categories(&self) -> Vec<String> {
        self.seed_categories.iter().map(|c| c.name.clone()).collect()
    }

    /// Full path of the ledger file
    pub fn ledger_path(&self, paths: &TrackerPaths) -> PathBuf {
        paths.ledger_file(&self.ledger_file)
    }

    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TrackerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Not persisted until `init` asks for it
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TrackerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        write_text_atomic(paths.settings_file(), &contents)
    }
}
