//! # Domain Types
//!
//! Core domain types used throughout the Pertashop ledger.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   FuelStock     │   │   SaleRecord    │   │  StockStatus    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  available      │   │  timestamp      │   │  Normal         │       │
//! │  │  purchase_price │   │  fuel (name)    │   │  Low            │       │
//! │  │  sale_price     │   │  quantity       │   │  Critical       │       │
//! │  │  minimum        │   │  revenue/profit │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │     Liters      │   Exact decimal quantity of fuel                  │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fuel types are keyed by name in the [`Inventory`](crate::Inventory); a
//! `FuelStock` does not carry its own name.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::money::{group_thousands, Money};

// =============================================================================
// Liters
// =============================================================================

/// A quantity of fuel in liters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Liters(Decimal);

impl Liters {
    /// Wraps an exact decimal quantity.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Liters(amount)
    }

    /// Creates a quantity from whole liters.
    #[inline]
    pub fn from_whole(liters: i64) -> Self {
        Liters(Decimal::from(liters))
    }

    /// Zero liters.
    #[inline]
    pub const fn zero() -> Self {
        Liters(Decimal::ZERO)
    }

    /// Returns the exact decimal quantity.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Adds two quantities, or `None` when the sum is out of range.
    #[inline]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Liters)
    }

    /// Strictly greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Formats for tables: two decimals, `,` thousands separator.
    ///
    /// ```rust
    /// use pertashop_core::Liters;
    ///
    /// assert_eq!(Liters::from_whole(4800).display(), "4,800.00");
    /// ```
    pub fn display(&self) -> String {
        let mut rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let text = rounded.abs().to_string();
        let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));
        format!("{}{}.{}", sign, group_thousands(whole, ','), frac)
    }
}

impl fmt::Display for Liters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

// Operators saturate at the Decimal range; use `checked_add` where an
// out-of-range result must be rejected.

impl Add for Liters {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Liters(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Liters {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Liters {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Liters(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Liters {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

// =============================================================================
// Fuel Stock
// =============================================================================

/// Stock and pricing for one fuel type.
///
/// ## Invariants
/// - `available >= 0` (sales that would go negative are rejected)
/// - Prices are whole Rupiah per liter and never negative
/// - `sale_price < purchase_price` is allowed (the operator is warned)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuelStock {
    /// Liters currently in the tank.
    pub available: Liters,

    /// What the station pays per liter.
    pub purchase_price: i64,

    /// What the customer pays per liter.
    pub sale_price: i64,

    /// Restock threshold.
    pub minimum: Liters,
}

impl FuelStock {
    /// Creates a stock entry.
    pub fn new(available: Liters, purchase_price: i64, sale_price: i64, minimum: Liters) -> Self {
        FuelStock {
            available,
            purchase_price,
            sale_price,
            minimum,
        }
    }

    /// Returns the purchase price as Money.
    #[inline]
    pub fn purchase(&self) -> Money {
        Money::from_rupiah(self.purchase_price)
    }

    /// Returns the sale price as Money.
    #[inline]
    pub fn sale(&self) -> Money {
        Money::from_rupiah(self.sale_price)
    }

    /// Per-liter margin (may be negative).
    #[inline]
    pub fn margin(&self) -> Money {
        self.sale() - self.purchase()
    }

    /// True when stock has dropped below the restock threshold.
    #[inline]
    pub fn needs_restock(&self) -> bool {
        self.available < self.minimum
    }

    /// Classifies the stock level for the dashboard.
    pub fn status(&self, low_stock_factor: Decimal) -> StockStatus {
        StockStatus::classify(self.available, self.minimum, low_stock_factor)
    }
}

/// The fuel types a fresh station starts with.
pub fn default_fuels() -> Vec<(String, FuelStock)> {
    vec![
        (
            "Pertamax".to_string(),
            FuelStock::new(Liters::from_whole(5000), 9000, 10000, Liters::from_whole(1000)),
        ),
        (
            "Pertalite".to_string(),
            FuelStock::new(Liters::from_whole(7000), 7000, 7500, Liters::from_whole(1500)),
        ),
    ]
}

// =============================================================================
// Stock Status
// =============================================================================

/// Dashboard classification of a stock level.
///
/// ```text
///   0 ──────── minimum ──────── minimum × factor ──────────►  liters
///   │  Critical   │      Low          │        Normal
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    /// Comfortably above the threshold.
    Normal,
    /// Within `factor` of the threshold.
    Low,
    /// At or below the threshold.
    Critical,
}

impl StockStatus {
    /// Classifies `available` against `minimum`.
    pub fn classify(available: Liters, minimum: Liters, low_stock_factor: Decimal) -> Self {
        if available <= minimum {
            StockStatus::Critical
        } else if available.amount() <= minimum.amount() * low_stock_factor {
            StockStatus::Low
        } else {
            StockStatus::Normal
        }
    }

    /// Label shown on the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Normal => "Normal",
            StockStatus::Low => "Low",
            StockStatus::Critical => "Critical",
        }
    }
}

/// The factor used when no configuration overrides it (1.5).
pub fn default_low_stock_factor() -> Decimal {
    Decimal::new(15, 1)
}

// =============================================================================
// Sale Record
// =============================================================================

/// One completed sale.
///
/// Uses the snapshot pattern: revenue and profit are frozen with the prices
/// in effect at the time of sale, so later price changes never rewrite history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleRecord {
    /// Local time of the sale, seconds precision.
    pub timestamp: NaiveDateTime,

    /// Fuel type name (not checked against the current inventory).
    pub fuel: String,

    /// Liters sold.
    pub quantity: Liters,

    /// `quantity × sale price`.
    pub revenue: Money,

    /// `revenue − quantity × purchase price`.
    pub profit: Money,
}

impl SaleRecord {
    /// Calendar date of the sale.
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_liters_display() {
        assert_eq!(Liters::from_whole(4800).display(), "4,800.00");
        assert_eq!(Liters::from_whole(0).display(), "0.00");
        assert_eq!(Liters::from_decimal(dec!(1234567.891)).display(), "1,234,567.89");
        assert_eq!(Liters::from_decimal(dec!(0.005)).display(), "0.01");
        assert_eq!(Liters::from_decimal(dec!(-12.5)).display(), "-12.50");
    }

    #[test]
    fn test_liters_plain_display_is_normalized() {
        assert_eq!(Liters::from_decimal(dec!(4800.0)).to_string(), "4800");
        assert_eq!(Liters::from_decimal(dec!(12.50)).to_string(), "12.5");
    }

    #[test]
    fn test_liters_arithmetic() {
        let mut tank = Liters::from_whole(5000);
        tank -= Liters::from_whole(200);
        assert_eq!(tank, Liters::from_whole(4800));
        tank += Liters::from_decimal(dec!(0.5));
        assert_eq!(tank, Liters::from_decimal(dec!(4800.5)));
        assert!(tank.is_positive());
        assert!(!Liters::zero().is_positive());
    }

    #[test]
    fn test_liters_out_of_range() {
        let max = Liters::from_decimal(Decimal::MAX);
        assert_eq!(max.checked_add(Liters::from_whole(1)), None);
        assert_eq!(max + Liters::from_whole(1), max);
        assert_eq!(
            Liters::from_whole(1).checked_add(Liters::from_whole(2)),
            Some(Liters::from_whole(3))
        );
    }

    #[test]
    fn test_stock_status() {
        let factor = default_low_stock_factor();
        let min = Liters::from_whole(1000);

        assert_eq!(StockStatus::classify(Liters::from_whole(800), min, factor), StockStatus::Critical);
        assert_eq!(StockStatus::classify(Liters::from_whole(1000), min, factor), StockStatus::Critical);
        assert_eq!(StockStatus::classify(Liters::from_whole(1001), min, factor), StockStatus::Low);
        assert_eq!(StockStatus::classify(Liters::from_whole(1500), min, factor), StockStatus::Low);
        assert_eq!(StockStatus::classify(Liters::from_whole(1501), min, factor), StockStatus::Normal);
    }

    #[test]
    fn test_fuel_stock_helpers() {
        let stock = FuelStock::new(Liters::from_whole(800), 9000, 10000, Liters::from_whole(1000));
        assert_eq!(stock.margin(), Money::from_rupiah(1000));
        assert!(stock.needs_restock());

        let at_threshold = FuelStock::new(Liters::from_whole(1000), 9000, 10000, Liters::from_whole(1000));
        assert!(!at_threshold.needs_restock());
    }

    #[test]
    fn test_default_fuels() {
        let fuels = default_fuels();
        assert_eq!(fuels.len(), 2);
        assert_eq!(fuels[0].0, "Pertamax");
        assert_eq!(fuels[0].1.sale_price, 10000);
        assert_eq!(fuels[1].0, "Pertalite");
        assert_eq!(fuels[1].1.minimum, Liters::from_whole(1500));
    }
}
