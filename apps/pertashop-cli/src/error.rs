//! # Application Error Type
//!
//! Unified error type for menu flows and subcommands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Pertashop ledger                   │
//! │                                                                         │
//! │  Operator                    Rust                                       │
//! │  ────────                    ────                                       │
//! │                                                                         │
//! │  "2" (record sale)                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Flow function → AppResult<T>                                    │  │
//! │  │         │                                                        │  │
//! │  │  Bad input?   ─── ValidationError ─────────────────┐             │  │
//! │  │  Rule broken? ─── CoreError::InsufficientStock ────┤             │  │
//! │  │  Disk failed? ─── StoreError::Persist ─────────────┼─► AppError  │  │
//! │  │  Ctrl-D?      ─── ReadlineError::Eof ──────────────┘             │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Menu loop prints `message` and shows the menu again.                  │
//! │  Subcommands print it on stderr and exit non-zero.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use pertashop_core::{CoreError, ValidationError};
use pertashop_store::StoreError;
use rustyline::error::ReadlineError;

/// Error surfaced to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    /// Machine-readable category
    pub code: ErrorCode,

    /// Human-readable message for display
    pub message: String,
}

/// Error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Unknown fuel type
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Sale exceeds the tank
    InsufficientStock,

    /// Saving a file failed; nothing was applied
    PersistenceError,

    /// Input ended (Ctrl-D / Ctrl-C) while a prompt was open
    Cancelled,

    /// Reading from or writing to the terminal failed
    Terminal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InsufficientStock => "INSUFFICIENT_STOCK",
            ErrorCode::PersistenceError => "PERSISTENCE_ERROR",
            ErrorCode::Cancelled => "CANCELLED",
            ErrorCode::Terminal => "TERMINAL",
        }
    }
}

/// Result type for app operations.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// Input ended while waiting for an answer.
    pub fn cancelled() -> Self {
        AppError::new(ErrorCode::Cancelled, "Input closed")
    }

    pub fn is_cancelled(&self) -> bool {
        self.code == ErrorCode::Cancelled
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::FuelNotFound(name) => {
                AppError::new(ErrorCode::NotFound, format!("Fuel type not found: {}", name))
            }
            CoreError::InsufficientStock {
                fuel,
                available,
                requested,
            } => AppError::new(
                ErrorCode::InsufficientStock,
                format!(
                    "Insufficient stock for {}: {} L available, {} L requested",
                    fuel,
                    available.display(),
                    requested.display()
                ),
            ),
            CoreError::Validation(e) => AppError::from(e),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

/// Converts store errors to app errors.
///
/// Load errors never reach here (they degrade at startup), so every store
/// error seen by a flow is a failed write.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "Persistence failed");
        AppError::new(
            ErrorCode::PersistenceError,
            format!("Could not save data, nothing was changed ({})", err),
        )
    }
}

impl From<ReadlineError> for AppError {
    fn from(err: ReadlineError) -> Self {
        match err {
            ReadlineError::Eof | ReadlineError::Interrupted => AppError::cancelled(),
            other => AppError::new(ErrorCode::Terminal, other.to_string()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::new(ErrorCode::Terminal, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {}
