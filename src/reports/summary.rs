//! Ledger Summary
//!
//! Running totals over every entry: income received, expenses spent and the
//! resulting savings.

use crate::models::{Ledger, Money};

/// Totals over a non-empty ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Number of entries summarized
    pub entry_count: usize,
    /// Sum of income amounts
    pub total_income: Money,
    /// Sum of signed amounts (expenses are negative)
    pub total_expenses_signed: Money,
    /// Income minus expenses
    pub savings: Money,
}

impl Summary {
    /// Total spent, as a positive magnitude for display
    pub fn total_expenses(&self) -> Money {
        -self.total_expenses_signed
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        format!(
            "Total Income:   {:>14}\nTotal Expenses: {:>14}\nSavings:        {:>14}\n",
            self.total_income.format_with_symbol(symbol),
            self.total_expenses().format_with_symbol(symbol),
            self.savings.format_with_symbol(symbol),
        )
    }
}

/// Summarize a ledger; `None` means there are no entries yet
pub fn summarize(ledger: &Ledger) -> Option<Summary> {
    if ledger.is_empty() {
        return None;
    }

    let total_income: Money = ledger.iter().map(|e| e.income_amount()).sum();
    let total_expenses_signed: Money = ledger.iter().map(|e| e.amount()).sum();

    Some(Summary {
        entry_count: ledger.len(),
        total_income,
        total_expenses_signed,
        savings: total_income + total_expenses_signed,
    })
}

/// Format an optional summary, reporting the no-entries state explicitly
pub fn format_summary(summary: Option<&Summary>, symbol: &str) -> String {
    match summary {
        Some(summary) => summary.format_terminal(symbol),
        None => "No entries yet.\n".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entry;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
    }

    fn scenario_ledger() -> Ledger {
        Ledger::new()
            .append(Entry::income(day(), Money::from_units(5000)))
            .append(Entry::expense(day(), "Food", Money::from_units(200)))
            .append(Entry::expense(day(), "Transport", Money::from_units(100)))
    }

    #[test]
    fn test_summarize_scenario() {
        let summary = summarize(&scenario_ledger()).unwrap();

        assert_eq!(summary.entry_count, 3);
        assert_eq!(summary.total_income, Money::from_units(5000));
        assert_eq!(summary.total_expenses(), Money::from_units(300));
        assert_eq!(summary.total_expenses_signed, Money::from_units(-300));
        assert_eq!(summary.savings, Money::from_units(4700));
    }

    #[test]
    fn test_empty_ledger_has_no_summary() {
        assert!(summarize(&Ledger::new()).is_none());
        assert_eq!(format_summary(None, "$"), "No entries yet.\n");
    }

    #[test]
    fn test_append_is_monotonic() {
        let base = scenario_ledger();
        let before = summarize(&base).unwrap();

        let with_income = base.append(Entry::income(day(), Money::from_cents(1234)));
        let after = summarize(&with_income).unwrap();
        assert_eq!(after.total_income, before.total_income + Money::from_cents(1234));
        assert_eq!(after.total_expenses_signed, before.total_expenses_signed);

        let with_expense = base.append(Entry::expense(day(), "Other", Money::from_cents(99)));
        let after = summarize(&with_expense).unwrap();
        assert_eq!(after.total_income, before.total_income);
        assert_eq!(
            after.total_expenses(),
            before.total_expenses() + Money::from_cents(99)
        );
    }

    #[test]
    fn test_overspending_gives_negative_savings() {
        let ledger = Ledger::new()
            .append(Entry::income(day(), Money::from_units(100)))
            .append(Entry::expense(day(), "Food", Money::from_units(150)));

        let summary = summarize(&ledger).unwrap();
        assert_eq!(summary.savings, Money::from_units(-50));
    }

    #[test]
    fn test_format_terminal() {
        let output = summarize(&scenario_ledger()).unwrap().format_terminal("₹");
        assert!(output.contains("Total Income:"));
        assert!(output.contains("₹5000.00"));
        assert!(output.contains("₹300.00"));
        assert!(output.contains("₹4700.00"));
    }

    #[test]
    fn test_oversized_stored_amounts_saturate() {
        let huge = Money::from_cents(9_000_000_000_000_000_000);
        let ledger = Ledger::new()
            .append(Entry::expense(day(), "Food", huge))
            .append(Entry::expense(day(), "Food", huge));

        let summary = summarize(&ledger).unwrap();
        assert_eq!(summary.total_expenses(), Money::from_cents(i64::MAX));

        let breakdown = crate::reports::breakdown(&ledger).unwrap();
        assert_eq!(breakdown.get("Food"), Some(Money::from_cents(i64::MAX)));
    }
}
