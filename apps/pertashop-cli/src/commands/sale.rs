//! # Record Sale
//!
//! ```text
//! choose fuel ──► liters ──► quote ──► confirm ──► Station::record_sale
//!                              │          │                │
//!                  reject ≤ 0 / oversell  n: nothing       └─► restock panel
//!                                            written            (if below minimum)
//! ```

use std::io::Write;

use pertashop_core::validation::parse_liters;
use pertashop_core::{RestockAlert, SaleQuote};

use crate::commands::fuel_choices;
use crate::console::{render_panel, Console, LineSource};
use crate::error::AppResult;
use crate::state::{SaleOutcome, Station};

fn quote_panel(quote: &SaleQuote) -> Vec<String> {
    vec![
        "Sale details".to_string(),
        format!("Fuel:      {}", quote.fuel),
        format!("Quantity:  {} L", quote.quantity.display()),
        format!("Price/L:   {}", quote.sale_price),
        format!("Total:     {}", quote.revenue),
    ]
}

fn restock_panel(alert: &RestockAlert) -> Vec<String> {
    vec![
        format!("⚠ WARNING: {} stock is below the minimum", alert.fuel),
        format!("Current stock: {} L", alert.available.display()),
        format!("Minimum stock: {} L", alert.minimum.display()),
        "Please restock soon.".to_string(),
    ]
}

fn print_outcome<W: Write>(out: &mut W, outcome: &SaleOutcome) -> AppResult<()> {
    let record = &outcome.record;
    writeln!(
        out,
        "✓ Sale recorded: {} L {} for {} (profit {})",
        record.quantity.display(),
        record.fuel,
        record.revenue,
        record.profit
    )?;
    writeln!(out, "  Remaining stock: {} L", outcome.remaining.display())?;
    if let Some(alert) = &outcome.restock {
        writeln!(out, "{}", render_panel(&restock_panel(alert)))?;
    }
    Ok(())
}

/// Interactive sale: pick a fuel, enter liters, confirm.
pub fn record_sale<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    station: &mut Station,
) -> AppResult<()> {
    console.rule("Record Sale")?;
    let fuels = fuel_choices(station)?;
    let fuel = console.choose("Fuel type", &fuels)?;

    let stock = station.inventory().require(&fuel)?;
    console.say(format!(
        "Available: {} L at {} per liter",
        stock.available.display(),
        stock.sale()
    ))?;

    let liters = parse_liters("quantity", &console.ask("Liters sold", None)?)?;
    let quote = station.quote_sale(&fuel, liters)?;
    console.panel(&quote_panel(&quote))?;

    if !console.confirm("Confirm sale?")? {
        console.say("Sale cancelled.")?;
        return Ok(());
    }

    let outcome = station.record_sale(&fuel, liters)?;
    print_outcome(console.out(), &outcome)
}

/// `pertashop sell FUEL LITERS`
pub fn sell<W: Write>(out: &mut W, station: &mut Station, fuel: &str, liters: &str) -> AppResult<()> {
    let liters = parse_liters("quantity", liters)?;
    let outcome = station.record_sale(fuel, liters)?;
    print_outcome(out, &outcome)
}
