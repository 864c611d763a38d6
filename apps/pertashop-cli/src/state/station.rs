//! # Station Engine
//!
//! Owns the loaded inventory, the sales ledger and the storage handle, and
//! threads every mutation through them.
//!
//! ## Commit Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  record_sale(fuel, liters)                                             │
//! │                                                                         │
//! │  1. quote_sale            reject ≤ 0 / unknown / oversell              │
//! │  2. next = inventory.clone(); next.apply_sale(quote)                   │
//! │  3. save(next)            ──fail──► Err, memory untouched              │
//! │  4. append(record)        ──fail──► save(previous), Err,               │
//! │                                     memory untouched                   │
//! │  5. inventory = next; ledger.push(record)                              │
//! │  6. restock alert if available < minimum                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! In-memory state only changes after the files agree with it.

use chrono::{Local, NaiveDateTime, Timelike};
use tracing::{error, info, warn};

use pertashop_core::transaction::{quote_sale, restock_alert};
use pertashop_core::{
    DateRange, Inventory, Ledger, Liters, PriceChange, RestockAlert, SaleQuote, SaleRecord,
    SalesReport,
};
use pertashop_store::Storage;

use crate::error::AppResult;

/// What a committed sale produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleOutcome {
    pub record: SaleRecord,
    /// Liters left in the tank after the sale.
    pub remaining: Liters,
    /// Present when the tank dropped below its threshold.
    pub restock: Option<RestockAlert>,
}

/// The station's live state.
#[derive(Debug)]
pub struct Station {
    storage: Storage,
    inventory: Inventory,
    ledger: Ledger,
}

impl Station {
    /// Loads both files, degrading to defaults / empty on any load failure.
    pub fn open(storage: Storage) -> Self {
        let inventory = storage.inventory().load_or_default();
        let ledger = storage.ledger().load_or_empty();
        info!(
            fuels = inventory.len(),
            sales = ledger.len(),
            "Station state loaded"
        );
        Station {
            storage,
            inventory,
            ledger,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    // =========================================================================
    // Sales
    // =========================================================================

    /// Prices a sale without committing it.
    pub fn quote_sale(&self, fuel: &str, quantity: Liters) -> AppResult<SaleQuote> {
        Ok(quote_sale(&self.inventory, fuel, quantity)?)
    }

    /// Records a sale stamped with the current local time.
    pub fn record_sale(&mut self, fuel: &str, quantity: Liters) -> AppResult<SaleOutcome> {
        let now = Local::now().naive_local();
        let now = now.with_nanosecond(0).unwrap_or(now);
        self.record_sale_at(fuel, quantity, now)
    }

    /// Records a sale at `timestamp`.
    pub fn record_sale_at(
        &mut self,
        fuel: &str,
        quantity: Liters,
        timestamp: NaiveDateTime,
    ) -> AppResult<SaleOutcome> {
        let quote = quote_sale(&self.inventory, fuel, quantity)?;

        let mut next = self.inventory.clone();
        let remaining = next.apply_sale(&quote)?;
        let record = quote.into_record(timestamp);

        self.storage.inventory().save(&next)?;

        if let Err(e) = self.storage.ledger().append(&record) {
            // Put the inventory file back so it matches memory again
            if let Err(rollback) = self.storage.inventory().save(&self.inventory) {
                error!(error = %rollback, "Failed to restore inventory file after ledger failure");
            }
            return Err(e.into());
        }

        self.inventory = next;
        self.ledger.push(record.clone());

        info!(
            fuel = %record.fuel,
            liters = %record.quantity,
            revenue = %record.revenue,
            profit = %record.profit,
            "Sale recorded"
        );

        let restock = self
            .inventory
            .get(fuel)
            .and_then(|stock| restock_alert(fuel, stock));
        if let Some(alert) = &restock {
            warn!(
                fuel = %alert.fuel,
                available = %alert.available,
                minimum = %alert.minimum,
                "Stock below minimum, restock needed"
            );
        }

        Ok(SaleOutcome {
            record,
            remaining,
            restock,
        })
    }

    // =========================================================================
    // Stock and Prices
    // =========================================================================

    /// Adds delivered liters to a tank and persists the inventory.
    pub fn add_stock(&mut self, fuel: &str, amount: Liters) -> AppResult<Liters> {
        let mut next = self.inventory.clone();
        let available = next.add_stock(fuel, amount)?;
        self.storage.inventory().save(&next)?;
        self.inventory = next;

        info!(fuel = %fuel, added = %amount, available = %available, "Stock added");
        Ok(available)
    }

    /// Computes a price change without applying it.
    pub fn preview_prices(&self, fuel: &str, purchase_price: i64, sale_price: i64) -> AppResult<PriceChange> {
        Ok(self.inventory.preview_prices(fuel, purchase_price, sale_price)?)
    }

    /// Replaces both prices of a fuel and persists the inventory.
    pub fn set_prices(&mut self, fuel: &str, purchase_price: i64, sale_price: i64) -> AppResult<PriceChange> {
        let mut next = self.inventory.clone();
        let change = next.set_prices(fuel, purchase_price, sale_price)?;
        self.storage.inventory().save(&next)?;
        self.inventory = next;

        info!(
            fuel = %fuel,
            purchase = change.new_purchase,
            sale = change.new_sale,
            "Prices updated"
        );
        if change.sells_below_cost() {
            warn!(fuel = %fuel, "Sale price is below purchase price");
        }
        Ok(change)
    }

    // =========================================================================
    // Reports
    // =========================================================================

    /// Sales within `range` with their totals.
    pub fn report(&self, range: DateRange) -> SalesReport<'_> {
        SalesReport::build(self.ledger.records(), range)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::NaiveDate;
    use pertashop_core::Money;
    use pertashop_store::StorageConfig;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn open(tmp: &TempDir) -> Station {
        Station::open(Storage::open(StorageConfig::new(tmp.path())).unwrap())
    }

    fn available(station: &Station, fuel: &str) -> Liters {
        station.inventory().get(fuel).unwrap().available
    }

    #[test]
    fn test_fresh_directory_starts_from_defaults() {
        let tmp = TempDir::new().unwrap();
        let station = open(&tmp);

        assert_eq!(station.inventory(), &Inventory::with_defaults());
        assert!(station.ledger().is_empty());
    }

    #[test]
    fn test_sell_200_then_4000() {
        let tmp = TempDir::new().unwrap();
        let mut station = open(&tmp);

        let first = station
            .record_sale_at("Pertamax", Liters::from_whole(200), at(1, 9))
            .unwrap();
        assert_eq!(first.remaining, Liters::from_whole(4800));
        assert_eq!(first.record.revenue, Money::from_rupiah(2_000_000));
        assert_eq!(first.record.profit, Money::from_rupiah(200_000));
        assert!(first.restock.is_none());

        let second = station
            .record_sale_at("Pertamax", Liters::from_whole(4000), at(1, 10))
            .unwrap();
        assert_eq!(second.remaining, Liters::from_whole(800));
        let alert = second.restock.unwrap();
        assert_eq!(alert.available, Liters::from_whole(800));
        assert_eq!(alert.minimum, Liters::from_whole(1000));

        assert_eq!(station.ledger().len(), 2);
    }

    #[test]
    fn test_sale_survives_reopen() {
        let tmp = TempDir::new().unwrap();
        {
            let mut station = open(&tmp);
            station
                .record_sale_at("Pertalite", Liters::from_decimal(dec!(12.5)), at(2, 8))
                .unwrap();
        }

        let station = open(&tmp);
        assert_eq!(available(&station, "Pertalite"), Liters::from_decimal(dec!(6987.5)));
        assert_eq!(station.ledger().len(), 1);
        assert_eq!(station.ledger().records()[0].timestamp, at(2, 8));
    }

    #[test]
    fn test_rejected_sales_change_nothing() {
        let tmp = TempDir::new().unwrap();
        let mut station = open(&tmp);

        let err = station
            .record_sale_at("Pertamax", Liters::from_whole(6000), at(1, 9))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientStock);

        let err = station
            .record_sale_at("Pertamax", Liters::zero(), at(1, 9))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        assert_eq!(available(&station, "Pertamax"), Liters::from_whole(5000));
        assert!(station.ledger().is_empty());
        assert!(!station.storage().config().ledger_path().exists());
    }

    #[test]
    fn test_failed_ledger_append_rolls_back_inventory() {
        let tmp = TempDir::new().unwrap();
        let config = StorageConfig::new(tmp.path()).ledger_file("ledger");
        std::fs::create_dir(config.ledger_path()).unwrap();

        let mut station = Station::open(Storage::open(config).unwrap());
        station
            .storage()
            .inventory()
            .save(station.inventory())
            .unwrap();

        let err = station
            .record_sale_at("Pertamax", Liters::from_whole(200), at(1, 9))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PersistenceError);

        // Memory and disk both still show the pre-sale tank
        assert_eq!(available(&station, "Pertamax"), Liters::from_whole(5000));
        assert!(station.ledger().is_empty());
        let on_disk = station.storage().inventory().load().unwrap().unwrap();
        assert_eq!(on_disk, Inventory::with_defaults());
    }

    #[test]
    fn test_failed_inventory_save_changes_nothing() {
        let tmp = TempDir::new().unwrap();
        let config = StorageConfig::new(tmp.path()).inventory_file("tanks");
        std::fs::create_dir(config.inventory_path()).unwrap();

        let mut station = Station::open(Storage::open(config).unwrap());
        let err = station
            .add_stock("Pertalite", Liters::from_whole(100))
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::PersistenceError);
        assert_eq!(available(&station, "Pertalite"), Liters::from_whole(7000));
    }

    #[test]
    fn test_add_stock() {
        let tmp = TempDir::new().unwrap();
        let mut station = open(&tmp);

        let after = station
            .add_stock("Pertalite", Liters::from_whole(500))
            .unwrap();
        assert_eq!(after, Liters::from_whole(7500));

        let err = station.add_stock("Pertalite", Liters::from_whole(-1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(available(&open(&tmp), "Pertalite"), Liters::from_whole(7500));
    }

    #[test]
    fn test_set_prices_persists_and_keeps_history() {
        let tmp = TempDir::new().unwrap();
        let mut station = open(&tmp);
        station
            .record_sale_at("Pertamax", Liters::from_whole(10), at(1, 9))
            .unwrap();

        let preview = station.preview_prices("Pertamax", 9500, 9000).unwrap();
        assert!(preview.sells_below_cost());
        assert_eq!(station.inventory().get("Pertamax").unwrap().sale_price, 10000);

        station.set_prices("Pertamax", 9500, 9000).unwrap();
        let reopened = open(&tmp);
        let stock = reopened.inventory().get("Pertamax").unwrap();
        assert_eq!((stock.purchase_price, stock.sale_price), (9500, 9000));

        // Past sales keep the prices they were made at
        assert_eq!(reopened.ledger().records()[0].revenue, Money::from_rupiah(100_000));
    }

    #[test]
    fn test_report_range() {
        let tmp = TempDir::new().unwrap();
        let mut station = open(&tmp);
        station.record_sale_at("Pertamax", Liters::from_whole(10), at(1, 23)).unwrap();
        station.record_sale_at("Pertalite", Liters::from_whole(20), at(2, 0)).unwrap();
        station.record_sale_at("Pertamax", Liters::from_whole(30), at(3, 12)).unwrap();

        let day = |d| NaiveDate::from_ymd_opt(2024, 5, d).unwrap();
        let report = station.report(DateRange::new(day(1), day(2)));
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.summary.total_revenue, Money::from_rupiah(250_000));

        assert!(station.report(DateRange::new(day(4), day(1))).is_empty());
    }
}
