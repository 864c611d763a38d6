//! # Repository Module
//!
//! File repository implementations for the Pertashop ledger.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repositories and their files                         │
//! │                                                                         │
//! │  Station engine                                                        │
//! │       │                                                                 │
//! │       │  storage.inventory().save(&inventory)                          │
//! │       ▼                                                                 │
//! │  InventoryRepository            LedgerRepository                       │
//! │  ├── load()                     ├── load()                             │
//! │  ├── load_or_default()          ├── load_or_empty()                    │
//! │  └── save(&Inventory)           └── append(&SaleRecord)                │
//! │       │                               │                                 │
//! │       ▼  full rewrite                 ▼  one row per sale              │
//! │  stok_bbm.csv                    penjualan.csv                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Numeric cells are kept as text in the row structs and parsed here into
//! exact decimals, so `4800`, `4800.0` and `4800.50` all load.

pub mod inventory;
pub mod ledger;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a decimal cell, accepting plain (`4800.5`) and scientific
/// (`1e-05`) notation.
pub(crate) fn parse_decimal(column: &str, text: &str) -> Result<Decimal, String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(format!("{} is empty", column));
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| format!("{} is not a number: '{}'", column, text))
}

/// Parses a non-negative decimal cell.
pub(crate) fn parse_quantity(column: &str, text: &str) -> Result<Decimal, String> {
    let value = parse_decimal(column, text)?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(format!("{} must not be negative: '{}'", column, text.trim()));
    }
    Ok(value)
}

/// Parses a whole-Rupiah price cell. `9000.0` is accepted, `9000.5` is not.
pub(crate) fn parse_price(column: &str, text: &str) -> Result<i64, String> {
    let value = parse_quantity(column, text)?;
    if !value.fract().is_zero() {
        return Err(format!("{} must be a whole number: '{}'", column, text.trim()));
    }
    value
        .trunc()
        .to_i64()
        .ok_or_else(|| format!("{} is out of range: '{}'", column, text.trim()))
}

/// Text written for a decimal cell (no trailing zeros).
pub(crate) fn format_decimal(value: Decimal) -> String {
    value.normalize().to_string()
}
