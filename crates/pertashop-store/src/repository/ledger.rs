//! # Ledger Repository
//!
//! Reads and appends to `penjualan.csv`.
//!
//! ```text
//! tanggal,jenis,jumlah_liter,pendapatan,keuntungan      ← written once
//! 2024-05-01 08:15:00,Pertamax,200,2000000,200000       ← one row per sale
//! ```
//!
//! The file is only ever appended to. A load failure degrades to an empty
//! ledger, never to a partially loaded one.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use crate::error::{StoreError, StoreResult};
use crate::repository::{format_decimal, parse_decimal, parse_quantity};
use pertashop_core::{Ledger, Liters, Money, SaleRecord, TIMESTAMP_FORMAT};

/// Header of the ledger file, in column order.
pub const LEDGER_HEADER: [&str; 5] = ["tanggal", "jenis", "jumlah_liter", "pendapatan", "keuntungan"];

#[derive(Debug, Serialize, Deserialize)]
struct LedgerRow {
    tanggal: String,
    jenis: String,
    jumlah_liter: String,
    pendapatan: String,
    keuntungan: String,
}

impl LedgerRow {
    fn from_record(record: &SaleRecord) -> Self {
        LedgerRow {
            tanggal: record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            jenis: record.fuel.clone(),
            jumlah_liter: format_decimal(record.quantity.amount()),
            pendapatan: format_decimal(record.revenue.amount()),
            keuntungan: format_decimal(record.profit.amount()),
        }
    }

    fn into_record(self) -> Result<SaleRecord, String> {
        let timestamp = NaiveDateTime::parse_from_str(self.tanggal.trim(), TIMESTAMP_FORMAT)
            .map_err(|_| format!("tanggal is not YYYY-MM-DD HH:MM:SS: '{}'", self.tanggal.trim()))?;

        Ok(SaleRecord {
            timestamp,
            fuel: self.jenis,
            quantity: Liters::from_decimal(parse_quantity("jumlah_liter", &self.jumlah_liter)?),
            revenue: Money::from_decimal(parse_decimal("pendapatan", &self.pendapatan)?),
            profit: Money::from_decimal(parse_decimal("keuntungan", &self.keuntungan)?),
        })
    }
}

/// Repository for the sales ledger file.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    path: PathBuf,
}

impl LedgerRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LedgerRepository { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every sale in file order. A missing file is an empty ledger.
    pub fn load(&self) -> StoreResult<Ledger> {
        if !self.path.exists() {
            return Ok(Ledger::new());
        }

        let file = File::open(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(file);
        let headers = reader
            .headers()
            .map_err(|e| StoreError::csv(&self.path, e))?
            .clone();

        let mut records = Vec::new();
        let mut raw = csv::StringRecord::new();
        while reader
            .read_record(&mut raw)
            .map_err(|e| StoreError::csv(&self.path, e))?
        {
            let line = raw.position().map(|p| p.line()).unwrap_or_default();
            let row: LedgerRow = raw
                .deserialize(Some(&headers))
                .map_err(|e| StoreError::csv(&self.path, e))?;
            records.push(
                row.into_record()
                    .map_err(|reason| StoreError::invalid(&self.path, line, reason))?,
            );
        }

        debug!(path = %self.path.display(), sales = records.len(), "Ledger loaded");
        Ok(Ledger::from_records(records))
    }

    /// Loads the ledger, degrading to empty on any failure.
    pub fn load_or_empty(&self) -> Ledger {
        self.load().unwrap_or_else(|e| {
            error!(error = %e, "Failed to load sales ledger, starting empty");
            Ledger::new()
        })
    }

    /// Appends one sale, writing the header first if the file is empty.
    pub fn append(&self, record: &SaleRecord) -> StoreResult<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::persist(&self.path, e))?;
        let is_empty = file
            .metadata()
            .map_err(|e| StoreError::persist(&self.path, e))?
            .len()
            == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if is_empty {
            writer
                .write_record(LEDGER_HEADER)
                .map_err(|e| StoreError::persist(&self.path, e))?;
        }
        writer
            .serialize(LedgerRow::from_record(record))
            .map_err(|e| StoreError::persist(&self.path, e))?;
        writer.flush().map_err(|e| StoreError::persist(&self.path, e))?;

        debug!(path = %self.path.display(), fuel = %record.fuel, "Sale appended");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::fs;
    use tempfile::TempDir;

    fn repo(tmp: &TempDir) -> LedgerRepository {
        LedgerRepository::new(tmp.path().join("penjualan.csv"))
    }

    fn sale(fuel: &str, liters: Liters, revenue: Money, profit: Money) -> SaleRecord {
        SaleRecord {
            timestamp: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(8, 15, 0)
                .unwrap(),
            fuel: fuel.to_string(),
            quantity: liters,
            revenue,
            profit,
        }
    }

    #[test]
    fn test_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(repo(&tmp).load().unwrap().is_empty());
    }

    #[test]
    fn test_header_written_once() {
        let tmp = TempDir::new().unwrap();
        let repo = repo(&tmp);
        let first = sale("Pertamax", Liters::from_whole(200), Money::from_rupiah(2_000_000), Money::from_rupiah(200_000));
        let second = sale("Pertalite", Liters::from_decimal(dec!(2.5)), Money::from_rupiah(18_750), Money::from_rupiah(1_250));

        repo.append(&first).unwrap();
        repo.append(&second).unwrap();

        let text = fs::read_to_string(repo.path()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "tanggal,jenis,jumlah_liter,pendapatan,keuntungan",
                "2024-05-01 08:15:00,Pertamax,200,2000000,200000",
                "2024-05-01 08:15:00,Pertalite,2.5,18750,1250",
            ]
        );

        let ledger = repo.load().unwrap();
        assert_eq!(ledger.records(), &[first, second]);
    }

    #[test]
    fn test_loads_float_text_from_older_files() {
        let tmp = TempDir::new().unwrap();
        let repo = repo(&tmp);
        fs::write(
            repo.path(),
            "tanggal,jenis,jumlah_liter,pendapatan,keuntungan\r\n\
             2024-05-01 08:15:00,Pertamax,200.0,2000000.0,200000.0\r\n",
        )
        .unwrap();

        let ledger = repo.load().unwrap();
        let record = &ledger.records()[0];
        assert_eq!(record.quantity, Liters::from_whole(200));
        assert_eq!(record.revenue, Money::from_rupiah(2_000_000));
        assert_eq!(record.revenue.to_string(), "Rp 2.000.000");
    }

    #[test]
    fn test_bad_row_degrades_to_empty() {
        let tmp = TempDir::new().unwrap();
        let repo = repo(&tmp);
        fs::write(
            repo.path(),
            "tanggal,jenis,jumlah_liter,pendapatan,keuntungan\n\
             2024-05-01 08:15:00,Pertamax,200,2000000,200000\n\
             yesterday,Pertamax,200,2000000,200000\n",
        )
        .unwrap();

        assert!(matches!(repo.load(), Err(StoreError::InvalidRecord { line: 3, .. })));
        assert!(repo.load_or_empty().is_empty());
    }

    #[test]
    fn test_append_to_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let repo = LedgerRepository::new(tmp.path());
        let record = sale("Pertamax", Liters::from_whole(1), Money::from_rupiah(10_000), Money::from_rupiah(1_000));

        assert!(matches!(repo.append(&record), Err(StoreError::Persist { .. })));
    }
}
