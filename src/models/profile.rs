//! Budget profile model
//!
//! User-declared income and savings figures. They are independent of the
//! entry stream and only feed advice thresholds.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Declared income and savings, overwritten as a whole on every save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BudgetProfile {
    pub income: Money,
    pub savings: Money,
}

impl BudgetProfile {
    pub fn new(income: Money, savings: Money) -> Self {
        Self { income, savings }
    }

    /// Income has been declared with a usable (positive) value
    pub fn has_income(&self) -> bool {
        self.income.is_positive()
    }
}
