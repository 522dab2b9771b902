//! Ledger entry model
//!
//! An entry is one recorded income or expense movement. The kind decides the
//! sign: income lives in `income_amount` (non-negative, `amount` is zero) and
//! expenses live in `amount` (non-positive, `income_amount` is zero).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::INCOME_LABEL;
use super::money::Money;

/// Whether an entry records money coming in or going out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A single immutable ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    date: NaiveDate,
    kind: EntryKind,
    category: String,
    amount: Money,
    income_amount: Money,
    description: String,
}

impl Entry {
    /// Create an income entry from a received amount
    ///
    /// The sign of `amount` is ignored; income is always recorded as a
    /// non-negative `income_amount`.
    pub fn income(date: NaiveDate, amount: Money) -> Self {
        Self {
            date,
            kind: EntryKind::Income,
            category: INCOME_LABEL.to_string(),
            amount: Money::zero(),
            income_amount: amount.abs(),
            description: String::new(),
        }
    }

    /// Create an expense entry from a spent magnitude
    ///
    /// The magnitude is stored negated, so `amount()` is never positive.
    pub fn expense(date: NaiveDate, category: impl Into<String>, magnitude: Money) -> Self {
        Self {
            date,
            kind: EntryKind::Expense,
            category: category.into(),
            amount: -magnitude.abs(),
            income_amount: Money::zero(),
            description: String::new(),
        }
    }

    /// Attach a free-text description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into().trim().to_string();
        self
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Signed amount: zero for income, non-positive for expenses
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Income received: non-negative for income, zero for expenses
    pub fn income_amount(&self) -> Money {
        self.income_amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_income(&self) -> bool {
        self.kind == EntryKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == EntryKind::Expense
    }

    /// Net effect on savings (positive for income, negative for expenses)
    pub fn net(&self) -> Money {
        self.income_amount + self.amount
    }
}
