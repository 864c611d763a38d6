//! # State Module
//!
//! Everything the app holds for the length of a run.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐   ┌──────────────────────────────┐   │
//! │  │          AppConfig           │   │           Station            │   │
//! │  │                              │   │                              │   │
//! │  │  storage: data dir, files    │──►│  Storage (file handles)      │   │
//! │  │  display: store name,        │   │  Inventory (in memory)       │   │
//! │  │           low stock factor   │   │  Ledger (in memory)          │   │
//! │  └──────────────────────────────┘   └──────────────────────────────┘   │
//! │                                                                         │
//! │  AppConfig is read-only after startup. Station is the only owner of    │
//! │  mutable state and is passed by `&mut` to the flows that change it.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod station;

pub use config::{AppConfig, ConfigError, DisplaySettings, StorageSettings, CONFIG_FILE};
pub use station::{SaleOutcome, Station};
