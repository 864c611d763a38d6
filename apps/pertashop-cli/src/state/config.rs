//! # Application Configuration
//!
//! Where the data files live and how the terminal presents them.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line (highest priority)                                    │
//! │     --data-dir /srv/pertashop                                          │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     PERTASHOP_DATA_DIR=/srv/pertashop                                  │
//! │     PERTASHOP_STORE_NAME="Pertashop Sukamaju"                          │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config PATH, else                                                │
//! │     ~/.config/pertashop/pertashop.toml (Linux)                         │
//! │     ~/Library/Application Support/id.pertashop.pertashop/... (macOS)   │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     current directory, stok_bbm.csv, penjualan.csv                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # pertashop.toml
//! [storage]
//! data_dir = "."
//! inventory_file = "stok_bbm.csv"
//! ledger_file = "penjualan.csv"
//!
//! [display]
//! store_name = "Pertashop"
//! low_stock_factor = "1.5"
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use pertashop_core::default_low_stock_factor;
use pertashop_store::{StorageConfig, INVENTORY_FILE, LEDGER_FILE};

/// Name of the configuration file.
pub const CONFIG_FILE: &str = "pertashop.toml";

// =============================================================================
// Errors
// =============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// =============================================================================
// Sections
// =============================================================================

/// Where the ledger files live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Directory holding both CSV files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_inventory_file")]
    pub inventory_file: String,

    #[serde(default = "default_ledger_file")]
    pub ledger_file: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_inventory_file() -> String {
    INVENTORY_FILE.to_string()
}

fn default_ledger_file() -> String {
    LEDGER_FILE.to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings {
            data_dir: default_data_dir(),
            inventory_file: default_inventory_file(),
            ledger_file: default_ledger_file(),
        }
    }
}

/// Terminal presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Shown in the welcome panel.
    #[serde(default = "default_store_name")]
    pub store_name: String,

    /// Stock at or below `minimum × factor` shows as Low.
    /// Default: 1.5
    #[serde(default = "default_low_stock_factor")]
    pub low_stock_factor: Decimal,
}

fn default_store_name() -> String {
    "Pertashop".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            store_name: default_store_name(),
            low_stock_factor: default_low_stock_factor(),
        }
    }
}

// =============================================================================
// App Config
// =============================================================================

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub display: DisplaySettings,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, else the platform config dir)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => {
                info!(path = %path.display(), "Loading config file");
                Self::from_file(&path)?
            }
            Some(path) => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Loads config or returns defaults (plus environment) if the file is bad.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            let mut config = Self::default();
            config.apply_overrides(|key| std::env::var(key).ok());
            if config.validate().is_err() {
                return Self::default();
            }
            config
        })
    }

    /// Parses a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.inventory_file.trim().is_empty() {
            return Err(ConfigError::Invalid("storage.inventory_file must not be empty".into()));
        }
        if self.storage.ledger_file.trim().is_empty() {
            return Err(ConfigError::Invalid("storage.ledger_file must not be empty".into()));
        }
        if self.storage.inventory_file == self.storage.ledger_file {
            return Err(ConfigError::Invalid(
                "storage.inventory_file and storage.ledger_file must differ".into(),
            ));
        }
        if self.display.low_stock_factor < Decimal::ONE {
            return Err(ConfigError::Invalid(format!(
                "display.low_stock_factor must be at least 1, got {}",
                self.display.low_stock_factor
            )));
        }
        Ok(())
    }

    /// Applies `PERTASHOP_*` overrides read through `lookup`.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("PERTASHOP_DATA_DIR") {
            debug!(data_dir = %dir, "Overriding data directory from environment");
            self.storage.data_dir = PathBuf::from(dir);
        }

        if let Some(name) = lookup("PERTASHOP_STORE_NAME") {
            self.display.store_name = name;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("id", "pertashop", "pertashop")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Replaces the data directory (from `--data-dir`).
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.storage.data_dir = dir;
        }
        self
    }

    /// Storage settings in the form the store crate expects.
    pub fn storage_config(&self) -> StorageConfig {
        StorageConfig::new(&self.storage.data_dir)
            .inventory_file(&self.storage.inventory_file)
            .ledger_file(&self.storage.ledger_file)
    }
}
