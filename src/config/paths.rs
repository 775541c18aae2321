//! Path management for the budget tracker
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` on the command line (handled by the binary)
//! 2. `BUDGET_TRACKER_DATA_DIR` environment variable (if set)
//! 3. The platform data directory, e.g. `~/.local/share/budget-tracker` on Linux

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::TrackerError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "BUDGET_TRACKER_DATA_DIR";

/// Manages all paths used by the budget tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Base directory for settings and the ledger file
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Create a new TrackerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform data directory can be determined.
    pub fn new() -> Result<Self, TrackerError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create TrackerPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Resolve a ledger file name against the base directory
    ///
    /// Absolute paths are returned unchanged.
    pub fn ledger_file(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.base_dir.join(file_name)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if the tracker has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, TrackerError> {
    let dirs = ProjectDirs::from("com", "budget-tracker", "budget-tracker").ok_or_else(|| {
        TrackerError::Config("Could not determine a data directory; set BUDGET_TRACKER_DATA_DIR".into())
    })?;
    Ok(dirs.data_dir().to_path_buf())
}
