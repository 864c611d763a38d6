//! # Sales Transactions
//!
//! Turns "sell N liters of X" into a priced, checked quote.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Sale Flow                                       │
//! │                                                                         │
//! │  quote_sale(inventory, fuel, liters)                                   │
//! │     ├── liters > 0 ?                 else Validation(MustBePositive)    │
//! │     ├── fuel known ?                 else FuelNotFound                  │
//! │     ├── liters <= available ?        else InsufficientStock             │
//! │     └── price at CURRENT sale/purchase price                           │
//! │           revenue = liters × sale_price                                 │
//! │           cost    = liters × purchase_price                             │
//! │           profit  = revenue − cost                                      │
//! │                                                                         │
//! │  operator confirms ──► Inventory::apply_sale ──► SaleQuote::into_record │
//! │                                                                         │
//! │  quote_sale never mutates anything; declining the confirmation is free. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDateTime;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::inventory::Inventory;
use crate::money::Money;
use crate::types::{FuelStock, Liters, SaleRecord};
use crate::validation::validate_positive_liters;

/// A priced sale that has passed every check but is not yet committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleQuote {
    pub fuel: String,
    pub quantity: Liters,
    pub sale_price: Money,
    pub purchase_price: Money,
    pub revenue: Money,
    pub cost: Money,
    pub profit: Money,
}

impl SaleQuote {
    /// Freezes the quote into a ledger row at `timestamp`.
    pub fn into_record(self, timestamp: NaiveDateTime) -> SaleRecord {
        SaleRecord {
            timestamp,
            fuel: self.fuel,
            quantity: self.quantity,
            revenue: self.revenue,
            profit: self.profit,
        }
    }
}

/// Prices a sale against the current inventory.
///
/// ## Errors
/// - `Validation(MustBePositive)` when `quantity <= 0`
/// - `FuelNotFound` when `fuel` is not stocked
/// - `InsufficientStock` when `quantity` exceeds what is in the tank
/// - `Validation(InvalidFormat)` when revenue or cost is out of range
pub fn quote_sale(inventory: &Inventory, fuel: &str, quantity: Liters) -> CoreResult<SaleQuote> {
    validate_positive_liters("quantity", quantity)?;
    let stock = inventory.require(fuel)?;

    if quantity > stock.available {
        return Err(CoreError::InsufficientStock {
            fuel: fuel.to_string(),
            available: stock.available,
            requested: quantity,
        });
    }

    let sale_price = stock.sale();
    let purchase_price = stock.purchase();
    let too_large = || ValidationError::invalid_format("quantity", "too large");
    let revenue = sale_price.times_liters(quantity).ok_or_else(too_large)?;
    let cost = purchase_price.times_liters(quantity).ok_or_else(too_large)?;

    Ok(SaleQuote {
        fuel: fuel.to_string(),
        quantity,
        sale_price,
        purchase_price,
        revenue,
        cost,
        profit: revenue - cost,
    })
}

/// Raised after a sale leaves a tank below its restock threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestockAlert {
    pub fuel: String,
    pub available: Liters,
    pub minimum: Liters,
}

/// Checks a fuel's stock against its threshold (strictly below).
pub fn restock_alert(fuel: &str, stock: &FuelStock) -> Option<RestockAlert> {
    stock.needs_restock().then(|| RestockAlert {
        fuel: fuel.to_string(),
        available: stock.available,
        minimum: stock.minimum,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
