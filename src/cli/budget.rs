//! Budget CLI commands
//!
//! Implements CLI commands for setting and showing the declared income and
//! savings that threshold-based advice works from.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::SpendwiseResult;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Save income and savings, replacing the previous figures
    Set {
        /// Declared income (e.g., "10000")
        #[arg(short, long)]
        income: String,
        /// Declared savings; may be zero
        #[arg(short, long)]
        savings: String,
    },

    /// Show the saved income and savings
    Show,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> SpendwiseResult<()> {
    let service = BudgetService::new(storage, settings);
    let symbol = &settings.currency_symbol;

    match cmd {
        BudgetCommands::Set { income, savings } => {
            let profile = service.save(&income, &savings)?;
            println!("Budget saved.");
            println!("  Income:  {}", profile.income.format_with_symbol(symbol));
            println!("  Savings: {}", profile.savings.format_with_symbol(symbol));
        }

        BudgetCommands::Show => match service.get()? {
            Some(profile) => {
                println!("Income:  {}", profile.income.format_with_symbol(symbol));
                println!("Savings: {}", profile.savings.format_with_symbol(symbol));
            }
            None => {
                println!("No budget set.");
                println!("Use 'spendwise budget set --income <amount> --savings <amount>' to set one.");
            }
        },
    }

    Ok(())
}
