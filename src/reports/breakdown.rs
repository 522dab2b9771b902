//! Category Breakdown
//!
//! Per-category spend over expense entries. Income is never part of the
//! breakdown, and only categories that actually appear are reported.

use std::collections::BTreeMap;
use std::io::Write;

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Ledger, Money};

/// Spend for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpend {
    /// Category label
    pub category: String,
    /// Sum of signed amounts (non-positive)
    pub total: Money,
    /// Number of expense entries in the category
    pub entry_count: usize,
}

impl CategorySpend {
    /// Spend as a positive magnitude
    pub fn magnitude(&self) -> Money {
        -self.total
    }
}

/// Spend per category, ordered by category label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breakdown {
    categories: Vec<CategorySpend>,
}

impl Breakdown {
    /// Categories in label order
    pub fn iter(&self) -> impl Iterator<Item = &CategorySpend> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// True when the ledger has entries but none of them are expenses
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Spend magnitude for a category, if it appears
    pub fn get(&self, category: &str) -> Option<Money> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(CategorySpend::magnitude)
    }

    /// Category to magnitude mapping
    pub fn to_map(&self) -> BTreeMap<String, Money> {
        self.categories
            .iter()
            .map(|c| (c.category.clone(), c.magnitude()))
            .collect()
    }

    /// Total spend across categories
    pub fn total_magnitude(&self) -> Money {
        self.categories.iter().map(CategorySpend::magnitude).sum()
    }

    /// Share of total spend for a category, in percent
    pub fn percentage(&self, spend: &CategorySpend) -> f64 {
        let total = self.total_magnitude();
        if total.is_zero() {
            0.0
        } else {
            spend.magnitude().cents() as f64 / total.cents() as f64 * 100.0
        }
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.is_empty() {
            return "No expenses recorded.\n".to_string();
        }

        let mut output = String::new();
        output.push_str(&format!(
            "{:<20} {:>14} {:>7} {:>7}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(51));
        output.push('\n');

        for spend in &self.categories {
            output.push_str(&format!(
                "{:<20} {:>14} {:>7} {:>6.1}%\n",
                spend.category,
                spend.magnitude().format_with_symbol(symbol),
                spend.entry_count,
                self.percentage(spend)
            ));
        }

        output.push_str(&"-".repeat(51));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "TOTAL",
            self.total_magnitude().format_with_symbol(symbol)
        ));

        output
    }

    /// Export the breakdown to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> SpendwiseResult<()> {
        let export_error = |e: csv::Error| SpendwiseError::Export(e.to_string());
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record(["Category", "Amount", "Count", "Percentage"])
            .map_err(export_error)?;

        for spend in &self.categories {
            csv_writer
                .write_record([
                    spend.category.clone(),
                    spend.magnitude().to_decimal_string(),
                    spend.entry_count.to_string(),
                    format!("{:.2}", self.percentage(spend)),
                ])
                .map_err(export_error)?;
        }

        csv_writer
            .flush()
            .map_err(|e| SpendwiseError::Export(e.to_string()))
    }
}

/// Break down spend by category; `None` means there are no entries yet
pub fn breakdown(ledger: &Ledger) -> Option<Breakdown> {
    if ledger.is_empty() {
        return None;
    }

    let mut grouped: BTreeMap<&str, (Money, usize)> = BTreeMap::new();
    for entry in ledger.expenses() {
        let slot = grouped
            .entry(entry.category())
            .or_insert((Money::zero(), 0));
        slot.0 += entry.amount();
        slot.1 += 1;
    }

    let categories = grouped
        .into_iter()
        .map(|(category, (total, entry_count))| CategorySpend {
            category: category.to_string(),
            total,
            entry_count,
        })
        .collect();

    Some(Breakdown { categories })
}

/// Format an optional breakdown, reporting the no-entries state explicitly
pub fn format_breakdown(breakdown: Option<&Breakdown>, symbol: &str) -> String {
    match breakdown {
        Some(breakdown) => breakdown.format_terminal(symbol),
        None => "No entries yet.\n".to_string(),
    }
}
