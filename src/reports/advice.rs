//! Spending Advice
//!
//! Flags categories whose spend exceeds a threshold taken from the configured
//! [`AdvicePolicy`]. Advice reads the ledger and budget profile and changes
//! neither.

use crate::config::advice::{AdvicePolicy, IncomeShareRule, Limit, ThresholdTable};
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{BudgetProfile, Ledger, Money};

use super::breakdown::{breakdown, Breakdown};
use super::summary::summarize;

const NO_EXPENSES: &str = "You have no recorded expenses to analyze.";
const NO_PROFILE_INCOME: &str =
    "Income is not set. Please set your income to get more accurate advice.";
const NO_RECORDED_INCOME: &str =
    "No income has been recorded, so spending cannot be compared against it.";

/// A category whose spend exceeded its threshold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlaggedCategory {
    pub category: String,
    /// Spend as a positive magnitude
    pub magnitude: Money,
    /// Limit the spend was compared against, rounded to the cent
    pub threshold: Money,
}

impl FlaggedCategory {
    /// Flag a category when its spend is strictly above the limit
    fn check(category: &str, magnitude: Money, limit: Limit) -> Option<Self> {
        limit.is_exceeded_by(magnitude).then(|| Self {
            category: category.to_string(),
            magnitude,
            threshold: limit.amount(),
        })
    }

    /// Human-readable advice line
    pub fn describe(&self, symbol: &str) -> String {
        format!(
            "You are spending a lot on {} ({} against a limit of {}). Consider reviewing your expenses in this category.",
            self.category,
            self.magnitude.format_with_symbol(symbol),
            self.threshold.format_with_symbol(symbol)
        )
    }
}

/// Result of an advice run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    /// Flagged categories, in breakdown order
    pub flagged: Vec<FlaggedCategory>,
    /// Headline message; the all-clear sentence when nothing is flagged
    pub message: String,
}

impl Advice {
    fn from_flags(flagged: Vec<FlaggedCategory>, within_limits: &str) -> Self {
        let message = if flagged.is_empty() {
            within_limits.to_string()
        } else {
            "Consider reducing spending on the categories below.".to_string()
        };
        Self { flagged, message }
    }

    /// True when no category exceeded its threshold
    pub fn is_within_limits(&self) -> bool {
        self.flagged.is_empty()
    }

    /// One advice line per flagged category
    pub fn lines(&self, symbol: &str) -> Vec<String> {
        self.flagged.iter().map(|f| f.describe(symbol)).collect()
    }

    /// Format the advice for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = format!("{}\n", self.message);
        for line in self.lines(symbol) {
            output.push_str(&format!("- {}\n", line));
        }
        output
    }
}

/// Produce spending advice for a ledger under a policy
///
/// # Errors
///
/// Returns `InsufficientData` when the ledger is empty or the policy's income
/// input is missing or zero.
pub fn advise(
    ledger: &Ledger,
    profile: Option<&BudgetProfile>,
    policy: &AdvicePolicy,
) -> SpendwiseResult<Advice> {
    let spend = breakdown(ledger)
        .ok_or_else(|| SpendwiseError::InsufficientData(NO_EXPENSES.to_string()))?;

    match policy {
        AdvicePolicy::IncomeShare(rule) => advise_income_share(ledger, &spend, rule),
        AdvicePolicy::BudgetThresholds(table) => advise_thresholds(&spend, profile, table),
    }
}

fn advise_income_share(
    ledger: &Ledger,
    spend: &Breakdown,
    rule: &IncomeShareRule,
) -> SpendwiseResult<Advice> {
    let total_income = summarize(ledger)
        .map(|s| s.total_income)
        .unwrap_or_default();

    if !total_income.is_positive() {
        return Err(SpendwiseError::InsufficientData(
            NO_RECORDED_INCOME.to_string(),
        ));
    }

    let limit = Limit::Share {
        base: total_income,
        fraction: rule.fraction,
    };
    let flagged = spend
        .iter()
        .filter_map(|c| FlaggedCategory::check(&c.category, c.magnitude(), limit))
        .collect();

    Ok(Advice::from_flags(
        flagged,
        "Your spending is within reasonable limits based on your income.",
    ))
}

fn advise_thresholds(
    spend: &Breakdown,
    profile: Option<&BudgetProfile>,
    table: &ThresholdTable,
) -> SpendwiseResult<Advice> {
    let profile = profile
        .filter(|p| p.has_income())
        .ok_or_else(|| SpendwiseError::InsufficientData(NO_PROFILE_INCOME.to_string()))?;

    let flagged = spend
        .iter()
        .filter_map(|c| {
            let limit = table.limit_for(&c.category, profile);
            FlaggedCategory::check(&c.category, c.magnitude(), limit)
        })
        .collect();

    Ok(Advice::from_flags(
        flagged,
        "Your spending is within reasonable limits based on your income and savings.",
    ))
}
