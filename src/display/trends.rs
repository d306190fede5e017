//! Cumulative trend display
//!
//! One row per series with its running totals, followed by a bar of the final
//! value relative to the largest series.

use crate::models::Money;
use crate::services::{MonthlyTrends, TrendSeries};

use super::report::{format_bar, format_section};

const BAR_WIDTH: usize = 20;

fn label_width(trends: &MonthlyTrends) -> usize {
    std::iter::once(&trends.income)
        .chain(&trends.expenses)
        .map(|s| s.label.chars().count())
        .max()
        .unwrap_or(8)
        .max(8)
}

fn format_row(series: &TrendSeries, width: usize, max: Money, symbol: &str) -> String {
    let mut row = format!("{:<width$}", series.label, width = width);
    for value in &series.values {
        row.push_str(&format!("  {:>12}", value.format_with_symbol(symbol)));
    }
    row.push_str("  ");
    row.push_str(&format_bar(series.final_value(), max, BAR_WIDTH));
    row.push('\n');
    row
}

/// Format cumulative trends as a table
pub fn format_trends(trends: &MonthlyTrends, symbol: &str) -> String {
    let width = label_width(trends);
    let max = std::iter::once(&trends.income)
        .chain(&trends.expenses)
        .map(TrendSeries::final_value)
        .max()
        .unwrap_or_default();

    let mut out = format_section("Cumulative trends");
    out.push_str(&format!("{:<width$}", "", width = width));
    for month in &trends.months {
        out.push_str(&format!("  {:>12}", month.to_string()));
    }
    out.push('\n');

    out.push_str(&format_row(&trends.income, width, max, symbol));
    if trends.expenses.is_empty() {
        out.push_str("No expenses in range.\n");
    }
    for series in &trends.expenses {
        out.push_str(&format_row(series, width, max, symbol));
    }
    out
}
