//! # Validation Module
//!
//! Input parsing and validation for the Pertashop ledger.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Terminal prompt (pertashop-cli)                              │
//! │  └── Raw text: "200", "2024-05-01", "9500"                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── parse_liters / parse_price / parse_date  (format)                 │
//! │  └── validate_* (business rules: > 0, >= 0)                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Inventory / transaction (stock checks)                       │
//! │                                                                         │
//! │  Malformed input is rejected here, before any state is touched.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pertashop_core::validation::{parse_liters, validate_positive_liters};
//!
//! let liters = parse_liters("quantity", "200.5").unwrap();
//! assert!(validate_positive_liters("quantity", liters).is_ok());
//! assert!(parse_liters("quantity", "two hundred").is_err());
//! ```

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::types::Liters;
use crate::DATE_FORMAT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Parsers
// =============================================================================

/// Parses a liter quantity such as `200`, `200.5` or `1,500.25`.
///
/// `,` is accepted only as a thousands separator, the way the dashboard
/// prints quantities. A decimal comma (`12,5`) or a stray one (`1,2,3`) is
/// rejected rather than silently dropped.
pub fn parse_liters(field: &str, input: &str) -> ValidationResult<Liters> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let invalid = || ValidationError::invalid_format(field, format!("'{}' is not a number", trimmed));
    if !thousands_well_formed(trimmed) {
        return Err(invalid());
    }

    let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();
    Decimal::from_str(&cleaned)
        .map(Liters::from_decimal)
        .map_err(|_| invalid())
}

/// Commas may only split the whole part into groups of three digits.
fn thousands_well_formed(text: &str) -> bool {
    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
    if fraction.contains(',') {
        return false;
    }
    if !whole.contains(',') {
        return true;
    }

    let digits = whole.trim_start_matches(|c| c == '-' || c == '+');
    let all_digits = |group: &str| group.chars().all(|c| c.is_ascii_digit());
    let mut groups = digits.split(',');
    let head = groups.next().unwrap_or("");

    (1..=3).contains(&head.len())
        && all_digits(head)
        && groups.all(|group| group.len() == 3 && all_digits(group))
}

/// Parses a whole-Rupiah price such as `9500`.
///
/// Prices are integers per liter; fractional input is rejected.
pub fn parse_price(field: &str, input: &str) -> ValidationResult<i64> {
    let cleaned = input.trim();
    if cleaned.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let price = cleaned.parse::<i64>().map_err(|_| {
        ValidationError::invalid_format(field, format!("'{}' is not a whole number", cleaned))
    })?;
    validate_price(field, price)?;
    Ok(price)
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(field: &str, input: &str) -> ValidationResult<NaiveDate> {
    let cleaned = input.trim();
    if cleaned.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    NaiveDate::parse_from_str(cleaned, DATE_FORMAT)
        .map_err(|_| ValidationError::invalid_format(field, "expected YYYY-MM-DD"))
}

// =============================================================================
// Rules
// =============================================================================

/// Quantity must be strictly positive.
///
/// ## User Workflow
/// ```text
/// Operator enters liters: 0
///       │
///       ▼
/// validate_positive_liters ← THIS FUNCTION
///       │
///       ├── qty <= 0? → Error: "quantity must be greater than 0"
///       │
///       └── OK → stock check
/// ```
pub fn validate_positive_liters(field: &str, quantity: Liters) -> ValidationResult<()> {
    if !quantity.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Prices may be zero but never negative.
pub fn validate_price(field: &str, price: i64) -> ValidationResult<()> {
    if price < 0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
