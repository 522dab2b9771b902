//! Entry display formatting
//!
//! Renders ledger entries as a table and as one-line confirmations.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Entry, EntryKind};

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl EntryRow {
    fn new(entry: &Entry, symbol: &str, date_format: &str) -> Self {
        Self {
            date: entry.date().format(date_format).to_string(),
            kind: entry.kind().to_string(),
            category: entry.category().to_string(),
            amount: display_amount(entry, symbol),
            description: entry.description().to_string(),
        }
    }
}

/// Positive magnitude of an entry, whichever column it is stored in
fn display_amount(entry: &Entry, symbol: &str) -> String {
    match entry.kind() {
        EntryKind::Income => entry.income_amount().format_with_symbol(symbol),
        EntryKind::Expense => entry.amount().abs().format_with_symbol(symbol),
    }
}

/// Format entries as a table, oldest first
pub fn format_entry_table(entries: &[Entry], symbol: &str, date_format: &str) -> String {
    if entries.is_empty() {
        return "No entries yet.\n".to_string();
    }

    let rows: Vec<EntryRow> = entries
        .iter()
        .map(|e| EntryRow::new(e, symbol, date_format))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// One-line confirmation after an entry is recorded
pub fn format_entry_confirmation(entry: &Entry, symbol: &str, date_format: &str) -> String {
    let date = entry.date().format(date_format);
    match entry.kind() {
        EntryKind::Income => format!(
            "Recorded income of {} on {}",
            display_amount(entry, symbol),
            date
        ),
        EntryKind::Expense => format!(
            "Recorded {} expense of {} on {}",
            entry.category(),
            display_amount(entry, symbol),
            date
        ),
    }
}
