//! # Store Error Types
//!
//! Error types for file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / csv::Error / bad cell text                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the file path and row number          │
//! │       │                                                                 │
//! │       ├──► load:  logged, caller falls back to defaults / empty        │
//! │       │                                                                 │
//! │       └──► save/append: AppError (PersistenceError) shown to operator  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;

/// File operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading a file or preparing the data directory failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not well-formed CSV, or a header is missing.
    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A row parsed as CSV but one of its cells is unusable.
    ///
    /// ## When This Occurs
    /// - `stok_awal` is not a number
    /// - `harga_jual` has a fractional part
    /// - `tanggal` is not `YYYY-MM-DD HH:MM:SS`
    #[error("Invalid record in {path} at line {line}: {reason}")]
    InvalidRecord {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    /// Writing a file failed; the previous contents are intact.
    #[error("Failed to write {path}: {reason}")]
    Persist { path: PathBuf, reason: String },
}

impl StoreError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn csv(path: &Path, source: csv::Error) -> Self {
        StoreError::Csv {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn invalid(path: &Path, line: u64, reason: impl Into<String>) -> Self {
        StoreError::InvalidRecord {
            path: path.to_path_buf(),
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn persist(path: &Path, reason: impl ToString) -> Self {
        StoreError::Persist {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
