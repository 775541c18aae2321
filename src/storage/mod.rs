//! Storage layer for the budget tracker
//!
//! Reads the ledger file once at startup and writes it back with an atomic
//! rename. A missing or unopenable file means "no data yet".

pub mod codec;
pub mod file_io;
pub mod init;

pub use file_io::{read_text_if_present, write_text_atomic};
pub use init::{initialize_storage, seed_ledger};

use std::path::{Path, PathBuf};

use crate::config::SeedCategory;
use crate::error::TrackerError;
use crate::models::Ledger;

/// Loads and saves the ledger file
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store for the ledger file at `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the ledger, or `None` if the file is missing or cannot be opened
    pub fn load(&self) -> Result<Option<Ledger>, TrackerError> {
        let Some(contents) = read_text_if_present(&self.path)? else {
            tracing::info!(path = %self.path.display(), "no ledger file found");
            return Ok(None);
        };

        let ledger = codec::decode(&contents).map_err(|e| match e {
            TrackerError::Storage(msg) => {
                TrackerError::Storage(format!("{}: {}", self.path.display(), msg))
            }
            other => other,
        })?;

        tracing::info!(
            path = %self.path.display(),
            categories = ledger.len(),
            transactions = ledger.transaction_count(),
            "loaded ledger"
        );
        Ok(Some(ledger))
    }

    /// Load the ledger, falling back to the seed categories when there is no data
    pub fn load_or_seed(&self, seeds: &[SeedCategory]) -> Result<Ledger, TrackerError> {
        match self.load()? {
            Some(ledger) => Ok(ledger),
            None => {
                tracing::info!(categories = seeds.len(), "starting from seed categories");
                Ok(seed_ledger(seeds))
            }
        }
    }

    /// Save the ledger to disk
    pub fn save(&self, ledger: &Ledger) -> Result<(), TrackerError> {
        let contents = codec::encode(ledger)?;
        write_text_atomic(&self.path, &contents)?;

        tracing::info!(
            path = %self.path.display(),
            categories = ledger.len(),
            "saved ledger"
        );
        Ok(())
    }
}
