//! Service layer for Spendwise
//!
//! The service layer provides business logic on top of the storage layer,
//! handling input validation and feeding snapshots to the reports engine.

pub mod budget;
pub mod entry;
pub mod report;

pub use budget::BudgetService;
pub use entry::{check_amount_limit, parse_amount, EntryService, NewEntryInput, MAX_AMOUNT};
pub use report::ReportService;
