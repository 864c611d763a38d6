//! # Error Types
//!
//! Domain-specific error types for pertashop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pertashop-core errors (this file)                                     │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  pertashop-store errors (separate crate)                               │
//! │  └── StoreError       - File read/write failures                       │
//! │                                                                         │
//! │  pertashop-cli errors (in app)                                         │
//! │  └── AppError         - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → Terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant here is raised BEFORE any state changes. A caller that
//! receives a `CoreError` can assume the inventory and ledger are untouched.

use thiserror::Error;

use crate::types::Liters;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The fuel type is not in the inventory.
    #[error("Fuel type not found: {0}")]
    FuelNotFound(String),

    /// Insufficient stock to complete a sale.
    ///
    /// ## User Workflow
    /// ```text
    /// Record sale (Pertamax, 6000 L)
    ///      │
    ///      ▼
    /// Check stock: available = 5000 L
    ///      │
    ///      ▼
    /// InsufficientStock { fuel: "Pertamax", available: 5000, requested: 6000 }
    ///      │
    ///      ▼
    /// Terminal shows: "Insufficient stock for Pertamax: ..."
    /// ```
    #[error("Insufficient stock for {fuel}: available {available} L, requested {requested} L")]
    InsufficientStock {
        fuel: String,
        available: Liters,
        requested: Liters,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates a FuelNotFound error.
    pub fn fuel_not_found(fuel: impl Into<String>) -> Self {
        CoreError::FuelNotFound(fuel.into())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when operator input doesn't meet requirements.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be greater than 0")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (not a number, not a date, ...).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    pub(crate) fn invalid_format(field: &str, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            fuel: "Pertamax".to_string(),
            available: Liters::from_whole(5000),
            requested: Liters::from_whole(6000),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Pertamax: available 5000 L, requested 6000 L"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be greater than 0");

        let err = ValidationError::invalid_format("date", "expected YYYY-MM-DD");
        assert_eq!(err.to_string(), "date has invalid format: expected YYYY-MM-DD");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "fuel".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
