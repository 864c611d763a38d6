//! # Dashboard
//!
//! Read-only view of every tank: stock, prices and a status badge.
//!
//! ```text
//!                      Pertashop Stock Dashboard
//! ┌───────────┬────────────┬────────────────┬────────────┬──────────┐
//! │ Fuel      │ Stock (L)  │ Purchase Price │ Sale Price │  Status  │
//! ├───────────┼────────────┼────────────────┼────────────┼──────────┤
//! │ Pertamax  │   4,800.00 │       Rp 9.000 │  Rp 10.000 │  Normal  │
//! │ Pertalite │   1,400.00 │       Rp 7.000 │   Rp 7.500 │ Critical │
//! └───────────┴────────────┴────────────────┴────────────┴──────────┘
//! ```

use rust_decimal::Decimal;
use std::io::Write;

use pertashop_core::{Inventory, StockStatus};

use crate::error::AppResult;
use crate::state::{DisplaySettings, Station};
use crate::table::{Align, Table};

fn badge(status: StockStatus) -> String {
    let marker = match status {
        StockStatus::Normal => "●",
        StockStatus::Low => "▲",
        StockStatus::Critical => "✖",
    };
    format!("{} {}", marker, status.label())
}

/// Builds the dashboard table.
pub fn dashboard_table(inventory: &Inventory, low_stock_factor: Decimal) -> Table {
    let mut table = Table::new("Pertashop Stock Dashboard")
        .column("Fuel", Align::Left)
        .column("Stock (L)", Align::Right)
        .column("Purchase Price", Align::Right)
        .column("Sale Price", Align::Right)
        .column("Status", Align::Center);

    for (name, stock) in inventory.iter() {
        table.row(vec![
            name.to_string(),
            stock.available.display(),
            stock.purchase().to_string(),
            stock.sale().to_string(),
            badge(stock.status(low_stock_factor)),
        ]);
    }
    table
}

/// Prints the dashboard.
pub fn show<W: Write>(out: &mut W, station: &Station, display: &DisplaySettings) -> AppResult<()> {
    if station.inventory().is_empty() {
        writeln!(out, "No fuel types in the inventory.")?;
        return Ok(());
    }
    write!(
        out,
        "{}",
        dashboard_table(station.inventory(), display.low_stock_factor).render()
    )?;
    Ok(())
}
