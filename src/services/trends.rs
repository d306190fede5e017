//! Cumulative monthly trends
//!
//! Running income and per-payment-method running expenses over a span of
//! months ending at the queried month.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Money, YearMonth, MIN_YEAR};

use super::ledger::LedgerView;

/// Series label for expenses without a known payment method
pub const UNASSIGNED_LABEL: &str = "Cash/Other";

/// Default number of months in a trend
pub const DEFAULT_TREND_MONTHS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSeries {
    pub label: String,
    /// Running totals, one per month
    pub values: Vec<Money>,
}

impl TrendSeries {
    pub fn final_value(&self) -> Money {
        self.values.last().copied().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrends {
    /// Oldest first
    pub months: Vec<YearMonth>,
    pub income: TrendSeries,
    /// Largest running total first
    pub expenses: Vec<TrendSeries>,
}

fn accumulate(monthly: &[Money]) -> Vec<Money> {
    monthly
        .iter()
        .scan(Money::zero(), |running, value| {
            *running += *value;
            Some(*running)
        })
        .collect()
}

/// Months from 0001-01 through `end`, the longest span a trend can cover
pub fn months_available(end: YearMonth) -> usize {
    (end.year() - MIN_YEAR) as usize * 12 + end.month() as usize
}

/// Build `count` months of cumulative trends ending at `end`
///
/// `count` is clamped to at least one month and at most the months before
/// `end` that a `YearMonth` can represent.
pub fn monthly_trends(ledger: &LedgerView<'_>, end: YearMonth, count: usize) -> MonthlyTrends {
    let count = count.clamp(1, months_available(end));
    let months: Vec<YearMonth> = (0..count)
        .rev()
        .map(|back| end.offset(-(back as i64)))
        .collect();
    let index_of = |month: YearMonth| months.iter().position(|m| *m == month);

    let mut income = vec![Money::zero(); months.len()];
    let mut expenses: BTreeMap<String, Vec<Money>> = BTreeMap::new();

    for txn in ledger.transactions.iter().filter(|t| !t.exclude_from_billing) {
        let Some(slot) = index_of(YearMonth::from_date(txn.transaction_date)) else {
            continue;
        };

        if txn.is_income() {
            income[slot] += txn.amount;
        } else if txn.is_expense() {
            let label = txn
                .payment_method_id
                .and_then(|id| ledger.method(id))
                .map(|m| m.name.trim())
                .filter(|name| !name.is_empty())
                .unwrap_or(UNASSIGNED_LABEL);
            let series = expenses
                .entry(label.to_string())
                .or_insert_with(|| vec![Money::zero(); months.len()]);
            series[slot] += txn.amount.magnitude();
        }
    }

    let mut expenses: Vec<TrendSeries> = expenses
        .into_iter()
        .map(|(label, monthly)| TrendSeries {
            label,
            values: accumulate(&monthly),
        })
        .collect();
    // BTreeMap order already sorts by name, so a stable sort keeps ties alphabetical
    expenses.sort_by(|a, b| b.final_value().cmp(&a.final_value()));

    MonthlyTrends {
        months,
        income: TrendSeries {
            label: "Income".to_string(),
            values: accumulate(&income),
        },
        expenses,
    }
}
