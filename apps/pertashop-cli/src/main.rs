//! # Pertashop Entry Point
//!
//! ```text
//! pertashop                       interactive menu
//! pertashop dashboard             stock and prices
//! pertashop sell Pertamax 200     record a sale
//! pertashop report --from 2024-05-01 --to 2024-05-31
//! pertashop restock Pertalite 8000
//! pertashop price Pertamax --buy 9500 --sell 10500
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    pertashop_cli::run()
}
