//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod entry;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use entry::{handle_entry_command, EntryCommands};
pub use report::{handle_report_command, ReportCommands};
