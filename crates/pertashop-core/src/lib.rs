//! # pertashop-core: Pure Business Logic for the Pertashop Ledger
//!
//! This crate is the **heart** of the Pertashop ledger. It contains the
//! stock, sale and report logic as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Pertashop Ledger Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Terminal (pertashop-cli)                       │   │
//! │  │    Menu ──► Dashboard / Sale / Report / Restock / Price        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Station engine                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ pertashop-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌─────────────┐  ┌──────────┐ │   │
//! │  │   │ inventory │  │  ledger   │  │ transaction │  │  report  │ │   │
//! │  │   │ FuelStock │  │SaleRecord │  │ SaleQuote   │  │ DateRange│ │   │
//! │  │   └───────────┘  └───────────┘  └─────────────┘  └──────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO CLOCK • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 pertashop-store (CSV files)                     │   │
//! │  │              stok_bbm.csv          penjualan.csv                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Liters, FuelStock, SaleRecord, StockStatus)
//! - [`money`] - Rupiah amounts with exact decimal arithmetic
//! - [`inventory`] - The in-memory inventory store
//! - [`ledger`] - The in-memory append-only sales ledger
//! - [`transaction`] - Sale quoting and restock alerts
//! - [`report`] - Date range filtering and aggregation
//! - [`validation`] - Input parsing and business rule validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use pertashop_core::{Inventory, Liters};
//! use pertashop_core::transaction::quote_sale;
//!
//! let inventory = Inventory::with_defaults();
//! let quote = quote_sale(&inventory, "Pertamax", Liters::from_whole(200)).unwrap();
//!
//! assert_eq!(quote.revenue.to_string(), "Rp 2.000.000");
//! assert_eq!(quote.profit.to_string(), "Rp 200.000");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod ledger;
pub mod money;
pub mod report;
pub mod transaction;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::{Inventory, PriceChange};
pub use ledger::Ledger;
pub use money::{format_rupiah, Money};
pub use report::{aggregate, filter_by_date_range, DateRange, SalesReport, SalesSummary};
pub use transaction::{RestockAlert, SaleQuote};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Format used for sale timestamps in the ledger file.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format used for report date bounds.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
