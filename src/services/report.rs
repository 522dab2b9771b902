//! Report service
//!
//! Runs the aggregation and advice engine over the store's current snapshot
//! with the configured policy.

use crate::config::settings::Settings;
use crate::error::SpendwiseResult;
use crate::reports::{advise, breakdown, summarize, Advice, Breakdown, Summary};
use crate::storage::Storage;

/// Service for derived views over the ledger
pub struct ReportService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> ReportService<'a> {
    /// Create a new report service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Summary totals, `None` when the ledger is empty
    pub fn summary(&self) -> Option<Summary> {
        summarize(self.storage.ledger.snapshot())
    }

    /// Category breakdown, `None` when the ledger is empty
    pub fn breakdown(&self) -> Option<Breakdown> {
        breakdown(self.storage.ledger.snapshot())
    }

    /// Spending advice under the configured policy
    ///
    /// The budget profile is only read when the policy uses it.
    pub fn advice(&self) -> SpendwiseResult<Advice> {
        let profile = if self.settings.advice.uses_budget_profile() {
            self.storage.budget.load()?
        } else {
            None
        };

        advise(
            self.storage.ledger.snapshot(),
            profile.as_ref(),
            &self.settings.advice,
        )
    }
}
