//! Custom error types for budget-sheets
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::{BucketKind, Money};

/// The main error type for budget-sheets operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A sheet or label could not be located in the store
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// The interactive input collaborator failed
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// A deficit larger than the savings balance; ends the session
    #[error(
        "Insufficient savings to cover {bucket} overspend: deficit {deficit}, savings {savings}"
    )]
    InsufficientSavings {
        bucket: BucketKind,
        deficit: Money,
        savings: Money,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl BudgetError {
    /// Create a "not found" error for sheets
    pub fn sheet_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Sheet",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for cell labels
    pub fn label_not_found(sheet: &str, label: &str) -> Self {
        Self::NotFound {
            entity_type: "Label",
            identifier: format!("'{}' in sheet '{}'", label, sheet),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error ends the session because savings ran out
    pub fn is_fatal_deficit(&self) -> bool {
        matches!(self, Self::InsufficientSavings { .. })
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<dialoguer::Error> for BudgetError {
    fn from(err: dialoguer::Error) -> Self {
        Self::Prompt(err.to_string())
    }
}

impl From<csv::Error> for BudgetError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for budget-sheets operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_label_not_found() {
        let err = BudgetError::label_not_found("needs", "Housing");
        assert_eq!(
            err.to_string(),
            "Label not found: 'Housing' in sheet 'needs'"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_insufficient_savings_error() {
        let err = BudgetError::InsufficientSavings {
            bucket: BucketKind::Needs,
            deficit: Money::from_cents(5000),
            savings: Money::from_cents(3000),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient savings to cover needs overspend: deficit $50.00, savings $30.00"
        );
        assert!(err.is_fatal_deficit());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BudgetError = io_err.into();
        assert!(matches!(err, BudgetError::Io(_)));
    }
}
