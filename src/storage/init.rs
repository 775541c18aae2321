//! Storage initialization
//!
//! Handles first-run setup and the default categories.

use crate::config::{SeedCategory, Settings, TrackerPaths};
use crate::error::TrackerError;
use crate::models::Ledger;

use super::LedgerStore;

/// Build a ledger holding only the seed categories with their budgets
pub fn seed_ledger(seeds: &[SeedCategory]) -> Ledger {
    let mut ledger = Ledger::new();
    for seed in seeds {
        ledger.set_budget(seed.name.clone(), seed.amount);
    }
    ledger
}

/// Initialize storage for a fresh installation
///
/// Writes the settings file and, if no ledger file exists yet, a ledger
/// holding the seed categories. Returns whether a ledger file was created.
pub fn initialize_storage(
    paths: &TrackerPaths,
    settings: &Settings,
    store: &LedgerStore,
) -> Result<bool, TrackerError> {
    paths.ensure_directories()?;

    if !paths.is_initialized() {
        settings.save(paths)?;
    }

    if store.exists() {
        return Ok(false);
    }

    store.save(&seed_ledger(&settings.seed_categories))?;
    Ok(true)
}
