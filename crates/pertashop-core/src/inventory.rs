//! # Inventory Store
//!
//! The in-memory mapping of fuel-type name to stock and prices.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Inventory Lifecycle                               │
//! │                                                                         │
//! │  startup ── stok_bbm.csv present? ──yes──► Inventory::from_entries     │
//! │                    │                                                    │
//! │                    no (or unreadable)                                   │
//! │                    ▼                                                    │
//! │             Inventory::with_defaults  (Pertamax, Pertalite)             │
//! │                                                                         │
//! │  mutations: add_stock · set_prices · apply_sale                         │
//! │  each one is followed by a full rewrite of stok_bbm.csv                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Iteration order is insertion order, so the dashboard lists fuels in the
//! same order as the file.

use indexmap::IndexMap;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::transaction::SaleQuote;
use crate::types::{default_fuels, FuelStock, Liters};
use crate::validation::{validate_positive_liters, validate_price};

/// The fuel inventory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Inventory {
    fuels: IndexMap<String, FuelStock>,
}

/// Before/after snapshot of a price change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceChange {
    pub old_purchase: i64,
    pub old_sale: i64,
    pub new_purchase: i64,
    pub new_sale: i64,
}

impl PriceChange {
    /// True when the new prices sell each liter at a loss.
    pub fn sells_below_cost(&self) -> bool {
        self.new_sale < self.new_purchase
    }
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// The seed inventory used when no file exists.
    pub fn with_defaults() -> Self {
        Self::from_entries(default_fuels())
    }

    /// Builds an inventory from `(name, stock)` pairs, keeping their order.
    ///
    /// A repeated name keeps its first position and takes the last values.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, FuelStock)>,
    {
        Inventory {
            fuels: entries.into_iter().collect(),
        }
    }

    /// Looks up a fuel type.
    pub fn get(&self, name: &str) -> Option<&FuelStock> {
        self.fuels.get(name)
    }

    /// Looks up a fuel type, failing with `FuelNotFound`.
    pub fn require(&self, name: &str) -> CoreResult<&FuelStock> {
        self.fuels
            .get(name)
            .ok_or_else(|| CoreError::fuel_not_found(name))
    }

    fn require_mut(&mut self, name: &str) -> CoreResult<&mut FuelStock> {
        self.fuels
            .get_mut(name)
            .ok_or_else(|| CoreError::fuel_not_found(name))
    }

    /// Fuel names in display order.
    pub fn names(&self) -> Vec<String> {
        self.fuels.keys().cloned().collect()
    }

    /// Iterates `(name, stock)` in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FuelStock)> {
        self.fuels.iter().map(|(name, stock)| (name.as_str(), stock))
    }

    /// Number of fuel types.
    pub fn len(&self) -> usize {
        self.fuels.len()
    }

    /// True when there are no fuel types.
    pub fn is_empty(&self) -> bool {
        self.fuels.is_empty()
    }

    /// Adds delivered fuel to the tank.
    ///
    /// ## Returns
    /// The new available quantity.
    ///
    /// ## Errors
    /// - `Validation(MustBePositive)` when `amount <= 0`
    /// - `FuelNotFound` for an unknown fuel
    /// - `Validation(InvalidFormat)` when the new total is out of range
    pub fn add_stock(&mut self, name: &str, amount: Liters) -> CoreResult<Liters> {
        validate_positive_liters("amount", amount)?;
        let stock = self.require_mut(name)?;
        stock.available = stock
            .available
            .checked_add(amount)
            .ok_or_else(|| ValidationError::invalid_format("amount", "too large"))?;
        Ok(stock.available)
    }

    /// Replaces both prices of a fuel type.
    ///
    /// Selling below cost is NOT rejected here; the returned
    /// [`PriceChange::sells_below_cost`] lets the caller warn the operator.
    pub fn set_prices(&mut self, name: &str, purchase_price: i64, sale_price: i64) -> CoreResult<PriceChange> {
        validate_price("purchase price", purchase_price)?;
        validate_price("sale price", sale_price)?;

        let stock = self.require_mut(name)?;
        let change = PriceChange {
            old_purchase: stock.purchase_price,
            old_sale: stock.sale_price,
            new_purchase: purchase_price,
            new_sale: sale_price,
        };
        stock.purchase_price = purchase_price;
        stock.sale_price = sale_price;
        Ok(change)
    }

    /// Previews a price change without applying it.
    pub fn preview_prices(&self, name: &str, purchase_price: i64, sale_price: i64) -> CoreResult<PriceChange> {
        let mut scratch = self.clone();
        scratch.set_prices(name, purchase_price, sale_price)
    }

    /// Removes the quoted liters from the tank.
    ///
    /// The stock check is repeated so a stale quote can never drive the
    /// tank negative.
    pub fn apply_sale(&mut self, quote: &SaleQuote) -> CoreResult<Liters> {
        validate_positive_liters("quantity", quote.quantity)?;
        let stock = self.require_mut(&quote.fuel)?;
        if quote.quantity > stock.available {
            return Err(CoreError::InsufficientStock {
                fuel: quote.fuel.clone(),
                available: stock.available,
                requested: quote.quantity,
            });
        }
        stock.available -= quote.quantity;
        Ok(stock.available)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::quote_sale;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_keep_order() {
        let inventory = Inventory::with_defaults();
        assert_eq!(inventory.names(), vec!["Pertamax", "Pertalite"]);
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn test_add_stock_increases_by_exact_amount() {
        let mut inventory = Inventory::with_defaults();
        let after = inventory
            .add_stock("Pertalite", Liters::from_decimal(dec!(250.75)))
            .unwrap();

        assert_eq!(after, Liters::from_decimal(dec!(7250.75)));
        assert_eq!(inventory.get("Pertalite").unwrap().available, after);
    }

    #[test]
    fn test_add_stock_rejects_non_positive() {
        let mut inventory = Inventory::with_defaults();
        let before = inventory.clone();

        for amount in [Liters::zero(), Liters::from_whole(-10)] {
            let err = inventory.add_stock("Pertamax", amount).unwrap_err();
            assert!(matches!(
                err,
                CoreError::Validation(ValidationError::MustBePositive { .. })
            ));
        }
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_add_stock_unknown_fuel() {
        let mut inventory = Inventory::with_defaults();
        let err = inventory.add_stock("Solar", Liters::from_whole(10)).unwrap_err();
        assert!(matches!(err, CoreError::FuelNotFound(name) if name == "Solar"));
    }

    #[test]
    fn test_set_prices_allows_selling_below_cost() {
        let mut inventory = Inventory::with_defaults();
        let change = inventory.set_prices("Pertamax", 11000, 10500).unwrap();

        assert!(change.sells_below_cost());
        assert_eq!(change.old_purchase, 9000);
        assert_eq!(change.old_sale, 10000);
        let stock = inventory.get("Pertamax").unwrap();
        assert_eq!((stock.purchase_price, stock.sale_price), (11000, 10500));
    }

    #[test]
    fn test_set_prices_rejects_negative() {
        let mut inventory = Inventory::with_defaults();
        assert!(inventory.set_prices("Pertamax", -1, 10000).is_err());
        assert_eq!(inventory.get("Pertamax").unwrap().purchase_price, 9000);
    }

    #[test]
    fn test_preview_prices_leaves_inventory_untouched() {
        let inventory = Inventory::with_defaults();
        let change = inventory.preview_prices("Pertalite", 7200, 7700).unwrap();
        assert_eq!(change.new_sale, 7700);
        assert_eq!(inventory.get("Pertalite").unwrap().sale_price, 7500);
    }

    #[test]
    fn test_apply_sale_rechecks_stock() {
        let mut inventory = Inventory::with_defaults();
        let quote = quote_sale(&inventory, "Pertamax", Liters::from_whole(3000)).unwrap();

        inventory.apply_sale(&quote).unwrap();
        assert_eq!(inventory.get("Pertamax").unwrap().available, Liters::from_whole(2000));

        // The same quote applied again would overdraw the tank
        let err = inventory.apply_sale(&quote).unwrap_err();
        assert!(matches!(err, CoreError::InsufficientStock { .. }));
        assert_eq!(inventory.get("Pertamax").unwrap().available, Liters::from_whole(2000));
    }

    #[test]
    fn test_add_stock_out_of_range() {
        let mut inventory = Inventory::with_defaults();
        let before = inventory.clone();

        let huge = Liters::from_decimal(rust_decimal::Decimal::MAX);
        let err = inventory.add_stock("Pertamax", huge).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidFormat { ref reason, .. }) if reason == "too large"
        ));
        assert_eq!(inventory, before);
    }
}
