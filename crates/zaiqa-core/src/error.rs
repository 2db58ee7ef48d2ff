//! # Error Types
//!
//! Domain-specific error types for zaiqa-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  zaiqa-core errors (this file)                                      │
//! │  ├── ValidationError   - one field that failed validation           │
//! │  └── ValidationErrors  - every failure of one submission            │
//! │                                                                     │
//! │  zaiqa-db errors (separate crate)                                   │
//! │  └── StorageError      - persistence failures                       │
//! │                                                                     │
//! │  zaiqa-service errors (separate crate)                              │
//! │  └── ServiceError      - Validation | Storage, what callers see     │
//! │                                                                     │
//! │  Flow: ValidationErrors / StorageError → ServiceError → boundary    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Name the failing field in every message
//! 3. Errors are enum variants, never bare Strings

use serde::Serialize;
use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Validation Error
// =============================================================================

/// A single field that failed input validation.
///
/// Produced while turning raw form fields into an order draft, and by the
/// optional catalog cross-check. A submission can fail several of these at
/// once; see [`ValidationErrors`].
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative (zero is allowed).
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Text that should be a number is not one.
    #[error("{field} is not a valid number: {reason}")]
    InvalidNumber { field: String, reason: String },

    /// Strict mode only: value is not in the catalog.
    #[error("{field} '{value}' is not in the catalog")]
    NotInCatalog { field: String, value: String },

    /// Strict mode only: submitted price disagrees with the catalog.
    #[error("price for '{menu_item}' is {expected}, got {submitted}")]
    PriceMismatch {
        menu_item: String,
        expected: Money,
        submitted: Money,
    },
}

impl ValidationError {
    /// Creates a Required error for the named field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Creates an InvalidNumber error for the named field.
    pub fn invalid_number(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidNumber {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Aggregate
// =============================================================================

/// Every validation failure of one submission.
///
/// The submit contract reports all failed fields together rather than
/// stopping at the first, so a client can fix the whole form in one pass.
/// Guaranteed non-empty when returned as an `Err`.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    /// An empty collector.
    pub fn new() -> Self {
        ValidationErrors(Vec::new())
    }

    /// Records one failure.
    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// Records the failure of a `Result`, keeping the success value.
    pub fn capture<T>(&mut self, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.push(error);
                None
            }
        }
    }

    /// True when nothing failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded failures.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(value)` when nothing failed, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl Default for ValidationErrors {
    fn default() -> Self {
        ValidationErrors::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::required("name");
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");

        let err = ValidationError::PriceMismatch {
            menu_item: "Pizza".to_string(),
            expected: Money::from_paise(800),
            submitted: Money::from_paise(100),
        };
        assert_eq!(err.to_string(), "price for 'Pizza' is 8.0, got 1.0");
    }

    #[test]
    fn test_aggregate_joins_messages() {
        let mut errors = ValidationErrors::new();
        errors.push(ValidationError::required("name"));
        errors.push(ValidationError::required("address"));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.to_string(), "name is required; address is required");
    }

    #[test]
    fn test_capture_keeps_success_and_records_failure() {
        let mut errors = ValidationErrors::new();

        let ok: Result<i64, ValidationError> = Ok(5);
        assert_eq!(errors.capture(ok), Some(5));
        assert!(errors.is_empty());

        let bad: Result<i64, ValidationError> = Err(ValidationError::required("price"));
        assert_eq!(errors.capture(bad), None);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationErrors::new().into_result(7), Ok(7));

        let mut errors = ValidationErrors::new();
        errors.push(ValidationError::required("name"));
        assert!(errors.into_result(7).is_err());
    }
}
