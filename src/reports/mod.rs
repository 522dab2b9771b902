//! Reports module for Spendwise
//!
//! The aggregation and advice engine: pure functions over a ledger snapshot
//! producing summary totals, per-category breakdowns and spending advice.

pub mod advice;
pub mod breakdown;
pub mod summary;

pub use advice::{advise, Advice, FlaggedCategory};
pub use breakdown::{breakdown, format_breakdown, Breakdown, CategorySpend};
pub use summary::{format_summary, summarize, Summary};
