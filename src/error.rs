//! Custom error types for the budget tracker
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::money::MoneyParseError;

/// The main error type for budget tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Input that cannot be stored or processed
    #[error("Validation error: {0}")]
    Validation(String),

    /// The category has never been given a budget
    #[error("No budget set for {0}")]
    NoBudget(String),

    /// Ledger file errors (malformed content, failed writes)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// User-supplied amounts that do not parse
    #[error("Parse error: {0}")]
    Parse(String),
}

impl TrackerError {
    /// Create a "no budget" error for a category
    pub fn no_budget(category: impl Into<String>) -> Self {
        Self::NoBudget(category.into())
    }

    /// Check if this is a "no budget set" error
    pub fn is_no_budget(&self) -> bool {
        matches!(self, Self::NoBudget(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<MoneyParseError> for TrackerError {
    fn from(err: MoneyParseError) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias for budget tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_no_budget_error() {
        let err = TrackerError::no_budget("Food");
        assert_eq!(err.to_string(), "No budget set for Food");
        assert!(err.is_no_budget());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TrackerError = io_err.into();
        assert!(matches!(err, TrackerError::Io(_)));
    }

    #[test]
    fn test_from_money_parse_error() {
        let err: TrackerError = MoneyParseError::InvalidFormat("abc".into()).into();
        assert_eq!(err.to_string(), "Parse error: Invalid money format: abc");
    }
}
