//! # Sales Ledger
//!
//! The append-only, in-memory list of completed sales in insertion order.
//! Rows are never edited or removed; the store appends each new row to
//! `penjualan.csv` as it is pushed here.

use crate::types::SaleRecord;

/// Every completed sale, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    records: Vec<SaleRecord>,
}

impl Ledger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps records loaded from disk.
    pub fn from_records(records: Vec<SaleRecord>) -> Self {
        Ledger { records }
    }

    /// Appends a sale.
    pub fn push(&mut self, record: SaleRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::Liters;
    use chrono::NaiveDate;

    fn record(day: u32, fuel: &str) -> SaleRecord {
        SaleRecord {
            timestamp: NaiveDate::from_ymd_opt(2024, 5, day)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            fuel: fuel.to_string(),
            quantity: Liters::from_whole(10),
            revenue: Money::from_rupiah(100_000),
            profit: Money::from_rupiah(10_000),
        }
    }

    #[test]
    fn test_push_preserves_order() {
        let mut ledger = Ledger::new();
        assert!(ledger.is_empty());

        ledger.push(record(1, "Pertamax"));
        ledger.push(record(2, "Pertalite"));

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.records()[0].fuel, "Pertamax");
        assert_eq!(ledger.records()[1].fuel, "Pertalite");
    }

    #[test]
    fn test_from_records_keeps_file_order() {
        let ledger = Ledger::from_records(vec![record(3, "A"), record(1, "B")]);
        let fuels: Vec<_> = ledger.records().iter().map(|r| r.fuel.as_str()).collect();
        assert_eq!(fuels, vec!["A", "B"]);
    }
}
