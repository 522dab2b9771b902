//! Storage layer for Spendwise
//!
//! Provides CSV file storage for the ledger and budget profile with atomic
//! whole-file replacement and automatic directory creation.

pub mod budget;
pub mod file_io;
pub mod ledger;

pub use budget::BudgetRepository;
pub use file_io::{open_if_exists, write_atomic};
pub use ledger::{read_ledger, write_ledger, LedgerRepository, LEDGER_COLUMNS};

use crate::config::paths::SpendwisePaths;
use crate::config::settings::Settings;
use crate::error::SpendwiseError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: SpendwisePaths,
    pub ledger: LedgerRepository,
    pub budget: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SpendwisePaths, settings: &Settings) -> Result<Self, SpendwiseError> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerRepository::new(paths.store_file(&settings.ledger_file)),
            budget: BudgetRepository::new(paths.store_file(&settings.budget_file)),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SpendwisePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), SpendwiseError> {
        self.ledger.load()?;
        Ok(())
    }
}
