//! Configuration module for Spendwise
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution with an environment override
//! - User settings persistence
//! - The advice threshold policy

pub mod advice;
pub mod paths;
pub mod settings;

pub use advice::{AdvicePolicy, IncomeShareRule, Limit, ThresholdTable};
pub use paths::SpendwisePaths;
pub use settings::Settings;
