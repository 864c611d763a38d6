//! # Sales Report
//!
//! Sales between two dates (inclusive), a TOTAL row, and liters per fuel.

use chrono::NaiveDate;
use std::io::Write;

use pertashop_core::validation::parse_date;
use pertashop_core::{DateRange, SalesReport, DATE_FORMAT, TIMESTAMP_FORMAT};

use crate::console::{Console, LineSource};
use crate::error::AppResult;
use crate::state::Station;
use crate::table::{Align, Table};

/// Builds the row table with its TOTAL footer.
pub fn report_table(report: &SalesReport<'_>) -> Table {
    let mut table = Table::new(format!(
        "Sales Report {} to {}",
        report.range.start, report.range.end
    ))
    .column("Time", Align::Left)
    .column("Fuel", Align::Left)
    .column("Liters", Align::Right)
    .column("Revenue", Align::Right)
    .column("Profit", Align::Right);

    for record in &report.rows {
        table.row(vec![
            record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            record.fuel.clone(),
            record.quantity.display(),
            record.revenue.to_string(),
            record.profit.to_string(),
        ]);
    }

    let summary = &report.summary;
    table.footer(vec![
        "TOTAL".to_string(),
        String::new(),
        summary.total_liters().display(),
        summary.total_revenue.to_string(),
        summary.total_profit.to_string(),
    ]);
    table
}

/// Prints a built report.
pub fn print_report<W: Write>(out: &mut W, report: &SalesReport<'_>) -> AppResult<()> {
    if report.is_empty() {
        writeln!(
            out,
            "No sales found between {} and {}.",
            report.range.start, report.range.end
        )?;
        return Ok(());
    }

    write!(out, "{}", report_table(report).render())?;
    writeln!(out, "Liters sold per fuel:")?;
    for (fuel, liters) in &report.summary.liters_by_fuel {
        writeln!(out, "  {}: {} L", fuel, liters.display())?;
    }
    Ok(())
}

/// Interactive report. Both dates default to `today`.
pub fn show_report<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
    station: &Station,
    today: NaiveDate,
) -> AppResult<()> {
    console.rule("Sales Report")?;
    if station.ledger().is_empty() {
        console.say("No sales recorded yet.")?;
        return Ok(());
    }

    let default = today.format(DATE_FORMAT).to_string();
    let start = parse_date(
        "start date",
        &console.ask("Start date (YYYY-MM-DD)", Some(&default))?,
    )?;
    let end = parse_date(
        "end date",
        &console.ask("End date (YYYY-MM-DD)", Some(&default))?,
    )?;

    let range = DateRange::new(start, end);
    if range.is_inverted() {
        console.say("Start date is after end date.")?;
    }
    print_report(console.out(), &station.report(range))
}

/// `pertashop report [--from DATE] [--to DATE]`
pub fn report<W: Write>(
    out: &mut W,
    station: &Station,
    from: Option<&str>,
    to: Option<&str>,
    today: NaiveDate,
) -> AppResult<()> {
    let start = match from {
        Some(text) => parse_date("from", text)?,
        None => today,
    };
    let end = match to {
        Some(text) => parse_date("to", text)?,
        None => today,
    };

    if station.ledger().is_empty() {
        writeln!(out, "No sales recorded yet.")?;
        return Ok(());
    }
    print_report(out, &station.report(DateRange::new(start, end)))
}
