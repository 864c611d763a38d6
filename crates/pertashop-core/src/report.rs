//! # Report Engine
//!
//! Date-range filtering and totals over the sales ledger.
//!
//! ```text
//! ledger ──► filter_by_date_range(start..=end) ──► aggregate ──► SalesSummary
//!                (calendar date of timestamp)         one pass     revenue
//!                                                                   profit
//!                                                                   liters per fuel
//! ```
//!
//! Dates are compared as [`NaiveDate`] values, never as strings.

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::money::Money;
use crate::types::{Liters, SaleRecord};

// =============================================================================
// Date Range
// =============================================================================

/// An inclusive calendar date range.
///
/// A range whose start is after its end is legal and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    /// The range covering just `day`.
    pub fn single_day(day: NaiveDate) -> Self {
        DateRange { start: day, end: day }
    }

    /// True when `date` lies within the range, bounds included.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// True when no date can match.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

/// Returns the records whose sale date falls inside `range`, in ledger order.
pub fn filter_by_date_range(records: &[SaleRecord], range: DateRange) -> Vec<&SaleRecord> {
    records
        .iter()
        .filter(|record| range.contains(record.date()))
        .collect()
}

// =============================================================================
// Aggregation
// =============================================================================

/// Totals over a set of sales.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesSummary {
    pub total_revenue: Money,
    pub total_profit: Money,
    /// Liters sold per fuel, in order of first appearance.
    pub liters_by_fuel: IndexMap<String, Liters>,
    pub count: usize,
}

impl SalesSummary {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Total liters across every fuel.
    pub fn total_liters(&self) -> Liters {
        self.liters_by_fuel
            .values()
            .fold(Liters::zero(), |acc, liters| acc + *liters)
    }
}

/// Sums revenue, profit and per-fuel liters in a single pass.
pub fn aggregate<'a, I>(records: I) -> SalesSummary
where
    I: IntoIterator<Item = &'a SaleRecord>,
{
    let mut summary = SalesSummary::default();
    for record in records {
        summary.total_revenue += record.revenue;
        summary.total_profit += record.profit;
        *summary
            .liters_by_fuel
            .entry(record.fuel.clone())
            .or_insert_with(Liters::zero) += record.quantity;
        summary.count += 1;
    }
    summary
}

// =============================================================================
// Sales Report
// =============================================================================

/// A filtered view of the ledger together with its totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesReport<'a> {
    pub range: DateRange,
    pub rows: Vec<&'a SaleRecord>,
    pub summary: SalesSummary,
}

impl<'a> SalesReport<'a> {
    /// Filters `records` to `range` and aggregates the result.
    pub fn build(records: &'a [SaleRecord], range: DateRange) -> Self {
        let rows = filter_by_date_range(records, range);
        let summary = aggregate(rows.iter().copied());
        SalesReport { range, rows, summary }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
