//! # pertashop-store: CSV Persistence for the Pertashop Ledger
//!
//! This crate reads and writes the two flat files that hold the station's
//! state between runs.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Pertashop Data Flow                                │
//! │                                                                         │
//! │  Station engine (record_sale, add_stock, set_prices)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  pertashop-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐                  │   │
//! │  │   │   Storage     │    │   Repositories     │                  │   │
//! │  │   │ (storage.rs)  │───►│ InventoryRepository│  rewrite         │   │
//! │  │   │ data dir +    │    │ LedgerRepository   │  append          │   │
//! │  │   │ file names    │    └────────────────────┘                  │   │
//! │  │   └───────────────┘                                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │   <data_dir>/stok_bbm.csv        <data_dir>/penjualan.csv              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`storage`] - Data directory handle and file naming
//! - [`repository`] - Inventory and ledger file repositories
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pertashop_store::{Storage, StorageConfig};
//!
//! let storage = Storage::open(StorageConfig::new("./data"))?;
//! let inventory = storage.inventory().load_or_default();
//! let ledger = storage.ledger().load_or_empty();
//! # Ok::<(), pertashop_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod storage;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use storage::{Storage, StorageConfig};

pub use repository::inventory::InventoryRepository;
pub use repository::ledger::LedgerRepository;

/// Default inventory file name.
pub const INVENTORY_FILE: &str = "stok_bbm.csv";

/// Default ledger file name.
pub const LEDGER_FILE: &str = "penjualan.csv";
