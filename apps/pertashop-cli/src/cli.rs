//! Command line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inventory and sales ledger for a Pertashop fuel outlet.
///
/// Without a subcommand the interactive menu starts.
#[derive(Parser, Debug)]
#[command(name = "pertashop")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file (default: pertashop.toml in the platform config dir)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding stok_bbm.csv and penjualan.csv
    #[arg(short = 'd', long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Show debug logs on stderr
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// One-shot operations.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show stock levels and prices
    Dashboard,

    /// Record a sale
    Sell {
        /// Fuel type, e.g. Pertamax
        fuel: String,

        /// Liters sold
        #[arg(allow_hyphen_values = true)]
        liters: String,
    },

    /// Show sales between two dates, inclusive (default: today)
    Report {
        #[arg(long, value_name = "YYYY-MM-DD")]
        from: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD")]
        to: Option<String>,
    },

    /// Add delivered fuel to a tank
    Restock {
        fuel: String,

        /// Liters delivered
        #[arg(allow_hyphen_values = true)]
        liters: String,
    },

    /// Change the purchase and sale price of a fuel
    Price {
        fuel: String,

        /// New purchase price per liter (Rupiah)
        #[arg(long, allow_hyphen_values = true)]
        buy: String,

        /// New sale price per liter (Rupiah)
        #[arg(long, allow_hyphen_values = true)]
        sell: String,
    },
}
