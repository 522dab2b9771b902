//! Spendwise - personal income and expense tracking
//!
//! This library records dated income and expense entries in a CSV ledger and
//! derives totals, per-category spending and budget advice from them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution, settings and the advice policy
//! - `error`: Custom error types
//! - `models`: Money, entries, the ledger snapshot and the budget profile
//! - `storage`: CSV file storage for the ledger and budget profile
//! - `reports`: Summary, breakdown and advice over a ledger snapshot
//! - `services`: Input validation and business logic
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `spendwise` binary
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use spendwise::config::{paths::SpendwisePaths, settings::Settings};
//! use spendwise::services::{EntryService, ReportService};
//! use spendwise::storage::Storage;
//!
//! let paths = SpendwisePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths, &settings)?;
//! storage.load_all()?;
//!
//! EntryService::new(&mut storage, &settings).add_expense("Food", "12.50")?;
//! let summary = ReportService::new(&storage, &settings).summary();
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SpendwiseError, SpendwiseResult};
