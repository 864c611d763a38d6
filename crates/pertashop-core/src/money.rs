//! # Money Module
//!
//! Provides the `Money` type for Rupiah amounts.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Prices are whole Rupiah per liter, but liters are fractional:          │
//! │    0.1 L × Rp 10.000 = Rp 1.000,0000000000002  (f64)  ❌               │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    0.1 L × Rp 10.000 = Rp 1.000 exactly                                 │
//! │    Revenue and profit written to penjualan.csv reload bit-for-bit      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Display Convention
//! There is exactly one display format, with no locale negotiation:
//! `Rp` + space + whole Rupiah with `.` as the thousands separator.
//!
//! ```rust
//! use pertashop_core::money::{format_rupiah, Money};
//!
//! assert_eq!(Money::from_rupiah(2_000_000).to_string(), "Rp 2.000.000");
//! assert_eq!(format_rupiah(Money::from_rupiah(-7_500)), "-Rp 7.500");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::types::Liters;

// =============================================================================
// Money Type
// =============================================================================

/// A Rupiah amount.
///
/// ## Where Money is Used
/// ```text
/// FuelStock.sale_price ──┬──► SaleQuote.revenue ──► SaleRecord.revenue
///                        │                                  │
/// FuelStock.purchase ────┴──► SaleQuote.cost ──► profit ────┤
///                                                           ▼
///                                             SalesSummary.total_revenue
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from whole Rupiah.
    #[inline]
    pub fn from_rupiah(rupiah: i64) -> Self {
        Money(Decimal::from(rupiah))
    }

    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the exact decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (a loss).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Multiplies a per-liter price by a quantity.
    ///
    /// Returns `None` when the product does not fit in a `Decimal`.
    ///
    /// ## Example
    /// ```rust
    /// use pertashop_core::{Liters, Money};
    ///
    /// let price = Money::from_rupiah(10_000);
    /// let revenue = price.times_liters(Liters::from_whole(200));
    /// assert_eq!(revenue, Some(Money::from_rupiah(2_000_000)));
    /// ```
    #[inline]
    pub fn times_liters(&self, quantity: Liters) -> Option<Money> {
        self.0.checked_mul(quantity.amount()).map(Money)
    }

    /// Rounds to whole Rupiah, half away from zero.
    pub fn round_rupiah(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats an amount as `Rp 1.234.567`.
///
/// The amount is rounded to whole Rupiah (half away from zero), grouped with
/// `.` every three digits and prefixed with `-` when negative.
pub fn format_rupiah(amount: Money) -> String {
    let rounded = amount.round_rupiah();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().trunc().normalize().to_string();
    format!("{}Rp {}", sign, group_thousands(&digits, '.'))
}

/// Inserts `separator` between every group of three digits, from the right.
pub(crate) fn group_thousands(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_rupiah(*self))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// Saturating, so report totals over a very large ledger clamp instead of
// panicking.

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
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
    fn test_display() {
        assert_eq!(Money::from_rupiah(2_000_000).to_string(), "Rp 2.000.000");
        assert_eq!(Money::from_rupiah(200_000).to_string(), "Rp 200.000");
        assert_eq!(Money::from_rupiah(7_500).to_string(), "Rp 7.500");
        assert_eq!(Money::from_rupiah(999).to_string(), "Rp 999");
        assert_eq!(Money::zero().to_string(), "Rp 0");
        assert_eq!(Money::from_rupiah(-1_000).to_string(), "-Rp 1.000");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        assert_eq!(Money::from_decimal(dec!(2497.5)).to_string(), "Rp 2.498");
        assert_eq!(Money::from_decimal(dec!(-2497.5)).to_string(), "-Rp 2.498");
        assert_eq!(Money::from_decimal(dec!(1000.49)).to_string(), "Rp 1.000");
        assert_eq!(Money::from_decimal(dec!(-0.4)).to_string(), "Rp 0");
    }

    #[test]
    fn test_display_keeps_trailing_zeros_of_whole_amounts() {
        // 2000000.0 as loaded from a file written by an older version
        assert_eq!(Money::from_decimal(dec!(2000000.0)).to_string(), "Rp 2.000.000");
        assert_eq!(Money::from_decimal(dec!(100)).to_string(), "Rp 100");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1", '.'), "1");
        assert_eq!(group_thousands("123", '.'), "123");
        assert_eq!(group_thousands("1234", ','), "1,234");
        assert_eq!(group_thousands("1234567", '.'), "1.234.567");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupiah(1000);
        let b = Money::from_rupiah(400);

        assert_eq!(a + b, Money::from_rupiah(1400));
        assert_eq!(a - b, Money::from_rupiah(600));
        assert_eq!(-(b - a), Money::from_rupiah(600));
        assert!((b - a).is_negative());
        assert!(!Money::zero().is_negative());
    }

    #[test]
    fn test_times_fractional_liters_is_exact() {
        let price = Money::from_rupiah(10_000);
        let revenue = price.times_liters(Liters::from_decimal(dec!(0.1)));
        assert_eq!(revenue, Some(Money::from_rupiah(1_000)));
    }

    #[test]
    fn test_times_liters_overflow() {
        let price = Money::from_rupiah(10_000);
        assert_eq!(price.times_liters(Liters::from_decimal(Decimal::MAX)), None);
    }

    #[test]
    fn test_totals_saturate() {
        let max = Money::from_decimal(Decimal::MAX);
        assert_eq!(max + Money::from_rupiah(1), max);
        let total: Money = [max, max].iter().sum();
        assert_eq!(total, max);
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_rupiah(1), Money::from_rupiah(2), Money::from_rupiah(3)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total, Money::from_rupiah(6));

        let empty: Vec<Money> = Vec::new();
        assert!(empty.into_iter().sum::<Money>().is_zero());
    }
}
