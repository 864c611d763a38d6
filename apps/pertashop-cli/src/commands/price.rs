//! # Change Price
//!
//! Replaces the purchase and sale price of one fuel. Past sales keep the
//! revenue and profit they were recorded with.
//!
//! Selling below cost is allowed. The interactive flow asks before going
//! ahead; the subcommand prints a warning and applies.

use std::io::Write;

use pertashop_core::validation::parse_price;
use pertashop_core::{Money, PriceChange};

use crate::commands::fuel_choices;
use crate::console::{render_panel, Console, LineSource};
use crate::error::AppResult;
use crate::state::Station;

const BELOW_COST: &str = "⚠ Warning: the sale price is below the purchase price";

fn change_panel(fuel: &str, change: &PriceChange) -> Vec<String> {
    let rp = Money::from_rupiah;
    vec![
        format!("Price change for {}", fuel),
        format!(
            "Purchase: {} → {}",
            rp(change.old_purchase),
            rp(change.new_purchase)
        ),
        format!("Sale:     {} → {}", rp(change.old_sale), rp(change.new_sale)),
        format!(
            "Margin:   {} → {}",
            rp(change.old_sale - change.old_purchase),
            rp(change.new_sale - change.new_purchase)
        ),
    ]
}

pub fn change_price<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    station: &mut Station,
) -> AppResult<()> {
    console.rule("Change Price")?;
    let fuels = fuel_choices(station)?;
    let fuel = console.choose("Fuel type", &fuels)?;

    let (purchase, sale) = {
        let stock = station.inventory().require(&fuel)?;
        (stock.purchase_price, stock.sale_price)
    };
    console.say(format!("Current purchase price: {}", Money::from_rupiah(purchase)))?;
    console.say(format!("Current sale price:     {}", Money::from_rupiah(sale)))?;

    let new_purchase = parse_price(
        "purchase price",
        &console.ask("New purchase price", Some(&purchase.to_string()))?,
    )?;
    let new_sale = parse_price(
        "sale price",
        &console.ask("New sale price", Some(&sale.to_string()))?,
    )?;

    let change = station.preview_prices(&fuel, new_purchase, new_sale)?;
    if change.sells_below_cost() {
        console.say(BELOW_COST)?;
        if !console.confirm("Continue anyway?")? {
            console.say("Price change cancelled.")?;
            return Ok(());
        }
    }

    console.panel(&change_panel(&fuel, &change))?;
    if !console.confirm("Apply new prices?")? {
        console.say("Price change cancelled.")?;
        return Ok(());
    }

    station.set_prices(&fuel, new_purchase, new_sale)?;
    console.say(format!("✓ Prices for {} updated.", fuel))
}

/// `pertashop price FUEL --buy N --sell N`
pub fn set_price<W: Write>(
    out: &mut W,
    station: &mut Station,
    fuel: &str,
    buy: &str,
    sell: &str,
) -> AppResult<()> {
    let new_purchase = parse_price("purchase price", buy)?;
    let new_sale = parse_price("sale price", sell)?;

    let change = station.set_prices(fuel, new_purchase, new_sale)?;
    if change.sells_below_cost() {
        writeln!(out, "{}", BELOW_COST)?;
    }
    writeln!(out, "{}", render_panel(&change_panel(fuel, &change)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{console, output, station};
    use crate::error::ErrorCode;
    use pertashop_core::Liters;
    use tempfile::TempDir;

    fn prices(station: &Station, fuel: &str) -> (i64, i64) {
        let stock = station.inventory().get(fuel).unwrap();
        (stock.purchase_price, stock.sale_price)
    }

    #[test]
    fn test_interactive_change() {
        let tmp = TempDir::new().unwrap();
        let mut station = station(&tmp);
        let mut c = console(&["Pertamax", "9500", "10500", "y"]);

        change_price(&mut c, &mut station).unwrap();

        assert_eq!(prices(&station, "Pertamax"), (9500, 10500));
        let text = output(c);
        assert!(text.contains("Purchase: Rp 9.000 → Rp 9.500"));
        assert!(text.contains("Margin:   Rp 1.000 → Rp 1.000"));
        assert!(text.contains("✓ Prices for Pertamax updated."));
    }

    #[test]
    fn test_empty_answers_keep_current_prices() {
        let tmp = TempDir::new().unwrap();
        let mut station = station(&tmp);
        let mut c = console(&["Pertalite", "", "7800", "y"]);

        change_price(&mut c, &mut station).unwrap();
        assert_eq!(prices(&station, "Pertalite"), (7000, 7800));
    }

    #[test]
    fn test_below_cost_asks_first() {
        let tmp = TempDir::new().unwrap();
        let mut station = station(&tmp);
        let mut c = console(&["Pertamax", "9000", "8500", "n"]);

        change_price(&mut c, &mut station).unwrap();

        assert_eq!(prices(&station, "Pertamax"), (9000, 10000));
        let text = output(c);
        assert!(text.contains(BELOW_COST));
        assert!(text.contains("Price change cancelled."));
    }

    #[test]
    fn test_below_cost_accepted() {
        let tmp = TempDir::new().unwrap();
        let mut station = station(&tmp);
        let mut c = console(&["Pertamax", "9000", "8500", "y", "y"]);

        change_price(&mut c, &mut station).unwrap();
        assert_eq!(prices(&station, "Pertamax"), (9000, 8500));
        assert!(output(c).contains("Margin:   Rp 1.000 → -Rp 500"));
    }

    #[test]
    fn test_past_sales_keep_their_profit() {
        let tmp = TempDir::new().unwrap();
        let mut station = station(&tmp);
        let mut out = Vec::new();

        station.record_sale("Pertamax", Liters::from_whole(100)).unwrap();
        set_price(&mut out, &mut station, "Pertamax", "9500", "11000").unwrap();

        let record = &station.ledger().records()[0];
        assert_eq!(record.revenue, Money::from_rupiah(1_000_000));
        assert_eq!(record.profit, Money::from_rupiah(100_000));
    }

    #[test]
    fn test_one_shot_validation() {
        let tmp = TempDir::new().unwrap();
        let mut station = station(&tmp);
        let mut out = Vec::new();

        let err = set_price(&mut out, &mut station, "Pertamax", "9.5", "10000").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        let err = set_price(&mut out, &mut station, "Pertamax", "-1", "10000").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(prices(&station, "Pertamax"), (9000, 10000));

        set_price(&mut out, &mut station, "Pertamax", "9000", "8000").unwrap();
        assert!(String::from_utf8(out).unwrap().contains(BELOW_COST));
    }
}
