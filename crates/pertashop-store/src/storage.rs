//! # Storage Handle
//!
//! Resolves where the inventory and ledger files live and hands out
//! repositories bound to those paths.
//!
//! ```text
//! StorageConfig::new(dir)            ← data dir + file names
//!       │
//!       ▼
//! Storage::open(config)              ← creates dir if missing
//!       │
//!       ├── storage.inventory()  → InventoryRepository(<dir>/stok_bbm.csv)
//!       └── storage.ledger()     → LedgerRepository(<dir>/penjualan.csv)
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::repository::inventory::InventoryRepository;
use crate::repository::ledger::LedgerRepository;
use crate::{INVENTORY_FILE, LEDGER_FILE};

// =============================================================================
// Configuration
// =============================================================================

/// Storage configuration.
///
/// ## Example
/// ```rust
/// use pertashop_store::StorageConfig;
///
/// let config = StorageConfig::new("/var/lib/pertashop")
///     .inventory_file("tanks.csv");
/// assert!(config.inventory_path().ends_with("tanks.csv"));
/// assert!(config.ledger_path().ends_with("penjualan.csv"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory holding both files.
    pub data_dir: PathBuf,

    /// Inventory file name inside `data_dir`.
    /// Default: `stok_bbm.csv`
    pub inventory_file: String,

    /// Ledger file name inside `data_dir`.
    /// Default: `penjualan.csv`
    pub ledger_file: String,
}

impl StorageConfig {
    /// Creates a configuration with the default file names.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StorageConfig {
            data_dir: data_dir.into(),
            inventory_file: INVENTORY_FILE.to_string(),
            ledger_file: LEDGER_FILE.to_string(),
        }
    }

    /// Sets the inventory file name.
    pub fn inventory_file(mut self, name: impl Into<String>) -> Self {
        self.inventory_file = name.into();
        self
    }

    /// Sets the ledger file name.
    pub fn ledger_file(mut self, name: impl Into<String>) -> Self {
        self.ledger_file = name.into();
        self
    }

    pub fn inventory_path(&self) -> PathBuf {
        self.data_dir.join(&self.inventory_file)
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.data_dir.join(&self.ledger_file)
    }
}

// =============================================================================
// Storage
// =============================================================================

/// Handle to the data directory.
#[derive(Debug, Clone)]
pub struct Storage {
    config: StorageConfig,
}

impl Storage {
    /// Opens the data directory, creating it if it does not exist.
    pub fn open(config: StorageConfig) -> StoreResult<Self> {
        if !config.data_dir.as_os_str().is_empty() && !config.data_dir.exists() {
            fs::create_dir_all(&config.data_dir).map_err(|e| StoreError::io(&config.data_dir, e))?;
            info!(path = %config.data_dir.display(), "Created data directory");
        }

        debug!(
            inventory = %config.inventory_path().display(),
            ledger = %config.ledger_path().display(),
            "Storage opened"
        );
        Ok(Storage { config })
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    /// Returns the inventory file repository.
    pub fn inventory(&self) -> InventoryRepository {
        InventoryRepository::new(self.config.inventory_path())
    }

    /// Returns the sales ledger repository.
    pub fn ledger(&self) -> LedgerRepository {
        LedgerRepository::new(self.config.ledger_path())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_builder() {
        let config = StorageConfig::new("/tmp/x")
            .inventory_file("a.csv")
            .ledger_file("b.csv");

        assert_eq!(config.inventory_path(), PathBuf::from("/tmp/x/a.csv"));
        assert_eq!(config.ledger_path(), PathBuf::from("/tmp/x/b.csv"));
    }

    #[test]
    fn test_open_creates_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("nested").join("data");

        let storage = Storage::open(StorageConfig::new(&dir)).unwrap();
        assert!(dir.is_dir());
        assert_eq!(storage.data_dir(), dir.as_path());
        assert_eq!(storage.inventory().path(), dir.join("stok_bbm.csv").as_path());
    }
}
