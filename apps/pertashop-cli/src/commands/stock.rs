//! Restocking a tank after a delivery.

use std::io::Write;

use pertashop_core::validation::parse_liters;
use pertashop_core::Liters;

use crate::commands::fuel_choices;
use crate::console::{Console, LineSource};
use crate::error::AppResult;
use crate::state::Station;

fn added_message(fuel: &str, amount: Liters, available: Liters) -> String {
    format!(
        "✓ Added {} L of {}. Stock is now {} L.",
        amount.display(),
        fuel,
        available.display()
    )
}

pub fn add_stock<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    station: &mut Station,
) -> AppResult<()> {
    console.rule("Add Stock")?;
    let fuels = fuel_choices(station)?;
    let fuel = console.choose("Fuel type", &fuels)?;
    let amount = parse_liters("amount", &console.ask("Liters delivered", None)?)?;

    let available = station.add_stock(&fuel, amount)?;
    console.say(added_message(&fuel, amount, available))
}

/// `pertashop restock FUEL LITERS`
pub fn restock<W: Write>(out: &mut W, station: &mut Station, fuel: &str, liters: &str) -> AppResult<()> {
    let amount = parse_liters("amount", liters)?;
    let available = station.add_stock(fuel, amount)?;
    writeln!(out, "{}", added_message(fuel, amount, available))?;
    Ok(())
}
