//! Custom error types for Spendwise
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Spendwise operations
#[derive(Error, Debug)]
pub enum SpendwiseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected user input (bad amount, unknown category, missing field)
    #[error("Validation error: {0}")]
    Validation(String),

    /// The ledger or budget store could not be read or written
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Advice was requested without the inputs it needs
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl SpendwiseError {
    /// Create a validation error for an amount that failed to parse
    pub fn invalid_amount(input: impl AsRef<str>) -> Self {
        Self::Validation(format!(
            "'{}' is not a valid amount. Please enter a number such as 12.50",
            input.as_ref()
        ))
    }

    /// Create a validation error for a category outside the configured set
    pub fn unknown_category(name: impl AsRef<str>) -> Self {
        Self::Validation(format!("Unknown category: {}", name.as_ref()))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an insufficient-data error
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData(_))
    }

    /// Check if this is a store failure
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_))
    }
}

impl From<std::io::Error> for SpendwiseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendwiseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for SpendwiseError {
    fn from(err: csv::Error) -> Self {
        Self::StoreUnavailable(err.to_string())
    }
}

/// Result type alias for Spendwise operations
pub type SpendwiseResult<T> = Result<T, SpendwiseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpendwiseError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_amount_error() {
        let err = SpendwiseError::invalid_amount("abc");
        assert!(err.is_validation());
        assert!(err.to_string().contains("'abc' is not a valid amount"));
    }

    #[test]
    fn test_unknown_category_error() {
        let err = SpendwiseError::unknown_category("Yachts");
        assert_eq!(err.to_string(), "Validation error: Unknown category: Yachts");
    }

    #[test]
    fn test_insufficient_data_error() {
        let err = SpendwiseError::InsufficientData("Income is not set".into());
        assert!(err.is_insufficient_data());
        assert_eq!(err.to_string(), "Insufficient data: Income is not set");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SpendwiseError = io_err.into();
        assert!(matches!(err, SpendwiseError::Io(_)));
    }
}
