//! # Inventory Repository
//!
//! Reads and rewrites `stok_bbm.csv`.
//!
//! ## File Layout
//! ```text
//! jenis,stok_awal,harga_beli,harga_jual,stok_minimum
//! Pertamax,4800,9000,10000,1000
//! Pertalite,7000,7000,7500,1500
//! ```
//!
//! ## Atomic Rewrite
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  save(&inventory)                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  write header + rows ──► stok_bbm.csv.tmp ──► fsync                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  rename(stok_bbm.csv.tmp → stok_bbm.csv)                               │
//! │                                                                         │
//! │  A crash at any point leaves either the old file or the new file.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::error::{StoreError, StoreResult};
use crate::repository::{format_decimal, parse_price, parse_quantity};
use pertashop_core::{FuelStock, Inventory, Liters};

/// Header of the inventory file, in column order.
pub const INVENTORY_HEADER: [&str; 5] = ["jenis", "stok_awal", "harga_beli", "harga_jual", "stok_minimum"];

/// One line of `stok_bbm.csv`, cells as text.
#[derive(Debug, Serialize, Deserialize)]
struct InventoryRow {
    jenis: String,
    stok_awal: String,
    harga_beli: String,
    harga_jual: String,
    stok_minimum: String,
}

impl InventoryRow {
    fn from_stock(name: &str, stock: &FuelStock) -> Self {
        InventoryRow {
            jenis: name.to_string(),
            stok_awal: format_decimal(stock.available.amount()),
            harga_beli: stock.purchase_price.to_string(),
            harga_jual: stock.sale_price.to_string(),
            stok_minimum: format_decimal(stock.minimum.amount()),
        }
    }

    fn into_entry(self) -> Result<(String, FuelStock), String> {
        if self.jenis.trim().is_empty() {
            return Err("jenis is empty".to_string());
        }
        let stock = FuelStock::new(
            Liters::from_decimal(parse_quantity("stok_awal", &self.stok_awal)?),
            parse_price("harga_beli", &self.harga_beli)?,
            parse_price("harga_jual", &self.harga_jual)?,
            Liters::from_decimal(parse_quantity("stok_minimum", &self.stok_minimum)?),
        );
        Ok((self.jenis, stock))
    }
}

/// Repository for the inventory file.
///
/// ## Usage
/// ```rust,no_run
/// use pertashop_store::InventoryRepository;
///
/// let repo = InventoryRepository::new("stok_bbm.csv");
/// let mut inventory = repo.load_or_default();
/// inventory.add_stock("Pertamax", pertashop_core::Liters::from_whole(500))?;
/// repo.save(&inventory)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    path: PathBuf,
}

impl InventoryRepository {
    /// Creates a repository bound to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        InventoryRepository { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole file.
    ///
    /// ## Returns
    /// * `Ok(None)` - the file does not exist
    /// * `Ok(Some(inventory))` - every row parsed, in file order
    /// * `Err(StoreError)` - the file is unreadable or a row is malformed
    pub fn load(&self) -> StoreResult<Option<Inventory>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let file = File::open(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(file);
        let headers = reader
            .headers()
            .map_err(|e| StoreError::csv(&self.path, e))?
            .clone();

        let mut entries = Vec::new();
        let mut record = csv::StringRecord::new();
        while reader
            .read_record(&mut record)
            .map_err(|e| StoreError::csv(&self.path, e))?
        {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let row: InventoryRow = record
                .deserialize(Some(&headers))
                .map_err(|e| StoreError::csv(&self.path, e))?;
            let entry = row
                .into_entry()
                .map_err(|reason| StoreError::invalid(&self.path, line, reason))?;
            entries.push(entry);
        }

        debug!(path = %self.path.display(), fuels = entries.len(), "Inventory loaded");
        Ok(Some(Inventory::from_entries(entries)))
    }

    /// Loads the inventory, falling back to the default seed.
    ///
    /// A missing file is the normal first-run case. Any other failure is
    /// logged and also degrades to the defaults; it is never fatal.
    pub fn load_or_default(&self) -> Inventory {
        match self.load() {
            Ok(Some(inventory)) => inventory,
            Ok(None) => {
                info!(path = %self.path.display(), "No inventory file, starting from defaults");
                Inventory::with_defaults()
            }
            Err(e) => {
                error!(error = %e, "Failed to load inventory, using defaults");
                Inventory::with_defaults()
            }
        }
    }

    /// Overwrites the file with the full inventory, header first.
    pub fn save(&self, inventory: &Inventory) -> StoreResult<()> {
        let tmp = self.temp_path();

        let result = self
            .write_to(&tmp, inventory)
            .and_then(|()| fs::rename(&tmp, &self.path).map_err(|e| StoreError::persist(&self.path, e)));

        if result.is_err() {
            // Never leave a stray temp file next to the real one
            let _ = fs::remove_file(&tmp);
        } else {
            debug!(path = %self.path.display(), fuels = inventory.len(), "Inventory saved");
        }
        result
    }

    fn write_to(&self, tmp: &Path, inventory: &Inventory) -> StoreResult<()> {
        let file = File::create(tmp).map_err(|e| StoreError::persist(&self.path, e))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        writer
            .write_record(INVENTORY_HEADER)
            .map_err(|e| StoreError::persist(&self.path, e))?;
        for (name, stock) in inventory.iter() {
            writer
                .serialize(InventoryRow::from_stock(name, stock))
                .map_err(|e| StoreError::persist(&self.path, e))?;
        }

        let file = writer
            .into_inner()
            .map_err(|e| StoreError::persist(&self.path, e))?;
        file.sync_all().map_err(|e| StoreError::persist(&self.path, e))
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
