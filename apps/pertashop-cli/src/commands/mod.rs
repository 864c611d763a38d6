//! # Commands
//!
//! Operator-facing flows. Each module has an interactive flow driven
//! through a [`Console`](crate::console::Console) and a one-shot variant
//! used by the subcommands.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Menu option          Interactive flow          One-shot subcommand     │
//! │  ───────────          ────────────────          ───────────────────     │
//! │  1 Dashboard          dashboard::show           pertashop dashboard     │
//! │  2 Record sale        sale::record_sale         pertashop sell          │
//! │  3 Sales report       report::show_report       pertashop report        │
//! │  4 Add stock          stock::add_stock          pertashop restock       │
//! │  5 Change price       price::change_price       pertashop price         │
//! │  6 Exit               menu::run_menu returns                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod dashboard;
pub mod menu;
pub mod price;
pub mod report;
pub mod sale;
pub mod stock;

use chrono::NaiveDate;
use std::io::Write;

use crate::cli::Command;
use crate::error::{AppError, AppResult, ErrorCode};
use crate::state::{DisplaySettings, Station};

/// Fuel names for a chooser prompt.
pub(crate) fn fuel_choices(station: &Station) -> AppResult<Vec<String>> {
    let names = station.inventory().names();
    if names.is_empty() {
        return Err(AppError::new(
            ErrorCode::NotFound,
            "No fuel types in the inventory",
        ));
    }
    Ok(names)
}

/// Runs a single subcommand, writing its result to `out`.
pub fn run_command<W: Write>(
    command: Command,
    station: &mut Station,
    display: &DisplaySettings,
    out: &mut W,
    today: NaiveDate,
) -> AppResult<()> {
    match command {
        Command::Dashboard => dashboard::show(out, station, display),
        Command::Sell { fuel, liters } => sale::sell(out, station, &fuel, &liters),
        Command::Report { from, to } => {
            report::report(out, station, from.as_deref(), to.as_deref(), today)
        }
        Command::Restock { fuel, liters } => stock::restock(out, station, &fuel, &liters),
        Command::Price { fuel, buy, sell } => price::set_price(out, station, &fuel, &buy, &sell),
    }
}


#[cfg(test)]
mod tests {
    use super::testing::station;
    use super::*;
    use pertashop_core::Liters;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn test_run_command_dispatch() {
        let tmp = TempDir::new().unwrap();
        let mut station = station(&tmp);
        let display = DisplaySettings::default();
        let mut out = Vec::new();

        let restock = Command::Restock {
            fuel: "Pertalite".into(),
            liters: "500".into(),
        };
        run_command(restock, &mut station, &display, &mut out, today()).unwrap();
        run_command(Command::Dashboard, &mut station, &display, &mut out, today()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("7,500.00"));
        assert_eq!(
            station.inventory().get("Pertalite").unwrap().available,
            Liters::from_whole(7500)
        );
    }

    #[test]
    fn test_run_command_surfaces_errors() {
        let tmp = TempDir::new().unwrap();
        let mut station = station(&tmp);
        let mut out = Vec::new();

        let sell = Command::Sell {
            fuel: "Solar".into(),
            liters: "10".into(),
        };
        let err = run_command(sell, &mut station, &DisplaySettings::default(), &mut out, today())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
