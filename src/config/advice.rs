//! Advice policy configuration
//!
//! The advice engine flags categories whose spend exceeds a threshold. How
//! that threshold is derived is configuration, so the policy can be swapped
//! without touching the aggregation code.

use serde::{Deserialize, Serialize};

use crate::error::SpendwiseError;
use crate::models::{BudgetProfile, Money};

/// Which threshold rule the advice engine applies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum AdvicePolicy {
    /// Flag categories above a fixed share of recorded income
    IncomeShare(IncomeShareRule),
    /// Per-category thresholds derived from the budget profile
    BudgetThresholds(ThresholdTable),
}

impl Default for AdvicePolicy {
    fn default() -> Self {
        Self::BudgetThresholds(ThresholdTable::default())
    }
}

impl AdvicePolicy {
    /// Short name used in CLI output
    pub fn name(&self) -> &'static str {
        match self {
            Self::IncomeShare(_) => "income_share",
            Self::BudgetThresholds(_) => "budget_thresholds",
        }
    }

    /// Whether this policy reads the budget profile
    pub fn uses_budget_profile(&self) -> bool {
        matches!(self, Self::BudgetThresholds(_))
    }

    pub fn validate(&self) -> Result<(), SpendwiseError> {
        match self {
            Self::IncomeShare(rule) => check_fraction("fraction", rule.fraction),
            Self::BudgetThresholds(table) => {
                check_fraction("discretionary_income_fraction", table.discretionary_income_fraction)?;
                check_fraction("essential_savings_fraction", table.essential_savings_fraction)?;
                if table.default_threshold.is_negative() || table.essential_fallback.is_negative() {
                    return Err(SpendwiseError::Config(
                        "Advice thresholds cannot be negative".into(),
                    ));
                }
                Ok(())
            }
        }
    }
}

fn check_fraction(field: &str, value: f64) -> Result<(), SpendwiseError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SpendwiseError::Config(format!(
            "Advice setting '{}' must be a non-negative number, got {}",
            field, value
        )))
    }
}

/// Flag a category when its spend exceeds `fraction` of total income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomeShareRule {
    pub fraction: f64,
}

impl Default for IncomeShareRule {
    fn default() -> Self {
        Self { fraction: 0.3 }
    }
}

/// Per-category thresholds driven by declared income and savings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdTable {
    /// Threshold for categories in neither list
    pub default_threshold: Money,
    /// Categories limited to a share of income
    pub discretionary: Vec<String>,
    pub discretionary_income_fraction: f64,
    /// Categories limited to a share of savings
    pub essential: Vec<String>,
    pub essential_savings_fraction: f64,
    /// Essential threshold when savings are zero or negative
    pub essential_fallback: Money,
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self {
            default_threshold: Money::from_units(50_000),
            discretionary: vec!["Entertainment".into(), "Food".into(), "Transport".into()],
            discretionary_income_fraction: 0.05,
            essential: vec!["Medical".into(), "Utilities".into()],
            essential_savings_fraction: 0.2,
            essential_fallback: Money::from_units(20_000),
        }
    }
}

/// A spending limit a category is compared against
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Limit {
    /// A share of some base amount, compared exactly
    Share { base: Money, fraction: f64 },
    /// A fixed amount
    Fixed(Money),
}

impl Limit {
    /// True when `spend` is strictly above the limit
    pub fn is_exceeded_by(&self, spend: Money) -> bool {
        match *self {
            Self::Share { base, fraction } => spend.exceeds_share(base, fraction),
            Self::Fixed(limit) => spend > limit,
        }
    }

    /// The limit rounded to the cent, for display
    pub fn amount(&self) -> Money {
        match *self {
            Self::Share { base, fraction } => base.scale(fraction),
            Self::Fixed(limit) => limit,
        }
    }
}

impl ThresholdTable {
    /// Limit a category's spend is compared against
    pub fn limit_for(&self, category: &str, profile: &BudgetProfile) -> Limit {
        if list_contains(&self.discretionary, category) {
            Limit::Share {
                base: profile.income,
                fraction: self.discretionary_income_fraction,
            }
        } else if list_contains(&self.essential, category) {
            if profile.savings.is_positive() {
                Limit::Share {
                    base: profile.savings,
                    fraction: self.essential_savings_fraction,
                }
            } else {
                Limit::Fixed(self.essential_fallback)
            }
        } else {
            Limit::Fixed(self.default_threshold)
        }
    }

    /// Threshold a category's spend is compared against, rounded to the cent
    pub fn threshold_for(&self, category: &str, profile: &BudgetProfile) -> Money {
        self.limit_for(category, profile).amount()
    }
}

fn list_contains(list: &[String], category: &str) -> bool {
    list.iter().any(|c| c.eq_ignore_ascii_case(category.trim()))
}
