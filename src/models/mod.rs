//! Core data models for Spendwise
//!
//! This module contains the data structures of the ledger domain: money
//! amounts, entries, the ledger snapshot, categories and the budget profile.

pub mod category;
pub mod entry;
pub mod ledger;
pub mod money;
pub mod profile;

pub use category::{is_income_label, CategorySet, DEFAULT_CATEGORIES, INCOME_LABEL};
pub use entry::{Entry, EntryKind};
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
pub use profile::BudgetProfile;
