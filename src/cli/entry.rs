//! Entry CLI commands
//!
//! Implements the commands that record income and expenses and list the
//! ledger.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_entry_confirmation, format_entry_table};
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::reports::{format_summary, summarize};
use crate::services::{EntryService, NewEntryInput};
use crate::storage::ledger::parse_date;
use crate::storage::Storage;

/// Entry subcommands
#[derive(Subcommand)]
pub enum EntryCommands {
    /// Record income
    Income {
        /// Amount received (e.g., "2500" or "2500.00")
        amount: String,
        /// Entry date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text note
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// Record an expense
    Expense {
        /// Expense category (see `spendwise categories`)
        category: String,
        /// Amount spent, as a positive number
        amount: String,
        /// Entry date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text note
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// List recorded entries
    List {
        /// Show only the most recent N entries
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Handle an entry command
pub fn handle_entry_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: EntryCommands,
) -> SpendwiseResult<()> {
    match cmd {
        EntryCommands::Income {
            amount,
            date,
            description,
        } => {
            let input = with_options(NewEntryInput::income(amount), date, description)?;
            record(storage, settings, input)
        }

        EntryCommands::Expense {
            category,
            amount,
            date,
            description,
        } => {
            let input = with_options(NewEntryInput::expense(category, amount), date, description)?;
            record(storage, settings, input)
        }

        EntryCommands::List { limit } => {
            let ledger = storage.ledger.snapshot();
            let entries = match limit {
                Some(limit) => ledger.tail(limit),
                None => ledger.entries(),
            };
            print!(
                "{}",
                format_entry_table(entries, &settings.currency_symbol, &settings.date_format)
            );
            Ok(())
        }
    }
}

fn with_options(
    mut input: NewEntryInput,
    date: Option<String>,
    description: Option<String>,
) -> SpendwiseResult<NewEntryInput> {
    if let Some(date) = date {
        let parsed = parse_date(&date).map_err(|_| {
            SpendwiseError::Validation(format!("Invalid date: {}. Use YYYY-MM-DD", date))
        })?;
        input = input.on(parsed);
    }
    input.description = description;
    Ok(input)
}

/// Append an entry and show the refreshed summary
fn record(storage: &mut Storage, settings: &Settings, input: NewEntryInput) -> SpendwiseResult<()> {
    let (entry, ledger) = EntryService::new(storage, settings).add(input)?;
    let symbol = &settings.currency_symbol;

    println!(
        "{}",
        format_entry_confirmation(&entry, symbol, &settings.date_format)
    );
    println!();
    print!("{}", format_summary(summarize(&ledger).as_ref(), symbol));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_with_options_parses_date() {
        let input = with_options(
            NewEntryInput::income("10"),
            Some("2025-05-01".into()),
            Some("bonus".into()),
        )
        .unwrap();

        assert_eq!(input.date, NaiveDate::from_ymd_opt(2025, 5, 1));
        assert_eq!(input.description.as_deref(), Some("bonus"));
    }

    #[test]
    fn test_with_options_rejects_bad_date() {
        let err = with_options(NewEntryInput::income("10"), Some("yesterday".into()), None)
            .unwrap_err();
        assert!(err.is_validation());
    }
}
