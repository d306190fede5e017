//! Billing summary and per-transaction billing months
//!
//! Performance periods and billing dates do not line up with calendar
//! months. To answer "how much is charged this month", each credit card's
//! previous, current and next performance windows are mapped to the month
//! their bill lands in, and only windows landing in the queried month or the
//! one after are summed.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::calendar::{
    billing_month_key, billing_window, expected_billing_date, performance_range_label,
    performance_target_month, performance_window, suggested_performance_start_day, DateWindow,
    PerformanceWindow,
};
use crate::models::{Money, PaymentMethod, PaymentMethodId, Transaction, TransactionId, YearMonth};

use super::ledger::LedgerView;
use super::performance::window_for;

/// One performance window and the month it is charged in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BilledWindow {
    pub target_month: YearMonth,
    pub window: PerformanceWindow,
    pub billing_month: YearMonth,
    /// Expense magnitude in the window, excluding billing-excluded rows
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardBilling {
    pub payment_method_id: PaymentMethodId,
    pub card_name: String,
    pub billing_day: u32,
    pub current_month_billing: Money,
    pub next_month_billing: Money,
    pub windows: Vec<BilledWindow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingSummary {
    pub month: YearMonth,
    /// Charged during the queried month
    pub current_month_billing: Money,
    /// Charged during the month after
    pub next_month_billing: Money,
    pub cards: Vec<CardBilling>,
}

/// Expense magnitude a card's bill will include for `window`
fn billed_amount(ledger: &LedgerView<'_>, card: &PaymentMethod, window: &PerformanceWindow) -> Money {
    ledger
        .transactions_for(card.id)
        .filter(|t| t.is_expense() && !t.exclude_from_billing)
        .filter(|t| window.contains(t.transaction_date))
        .map(|t| t.amount.magnitude())
        .sum()
}

/// Billing breakdown of one credit card, or `None` without a billing cycle
pub fn card_billing(ledger: &LedgerView<'_>, card: &PaymentMethod, month: YearMonth) -> Option<CardBilling> {
    if !card.has_billing_cycle() {
        return None;
    }
    let billing_day = card.billing_day?;
    let next = month.next();

    let windows: Vec<BilledWindow> = [month.prev(), month, next]
        .into_iter()
        .map(|target_month| {
            let window = performance_window(target_month, card.performance_start_day);
            BilledWindow {
                target_month,
                window,
                billing_month: billing_month_key(window.end, billing_day),
                amount: billed_amount(ledger, card, &window),
            }
        })
        .collect();

    let charged_in = |key: YearMonth| -> Money {
        windows
            .iter()
            .filter(|w| w.billing_month == key)
            .map(|w| w.amount)
            .sum()
    };
    let current_month_billing = charged_in(month);
    let next_month_billing = charged_in(next);

    debug!(
        card = %card.name,
        month = %month,
        current = current_month_billing.amount(),
        next = next_month_billing.amount(),
        "computed card billing"
    );

    Some(CardBilling {
        payment_method_id: card.id,
        card_name: card.name.clone(),
        billing_day: clamp_billing_day(card),
        current_month_billing,
        next_month_billing,
        windows,
    })
}

fn clamp_billing_day(card: &PaymentMethod) -> u32 {
    card.effective_billing_day().unwrap_or(1)
}

/// Billing totals across all active credit cards
pub fn billing_summary(ledger: &LedgerView<'_>, month: YearMonth) -> BillingSummary {
    let cards: Vec<CardBilling> = ledger
        .active_methods()
        .filter_map(|card| card_billing(ledger, card, month))
        .collect();

    BillingSummary {
        month,
        current_month_billing: cards.iter().map(|c| c.current_month_billing).sum(),
        next_month_billing: cards.iter().map(|c| c.next_month_billing).sum(),
        cards,
    }
}

/// Month a transaction will be charged in
///
/// For a credit card with a billing day this is the billing month of the
/// performance window containing the date. Everything else is settled in the
/// month it happened.
pub fn billing_month_for(txn: &Transaction, method: Option<&PaymentMethod>) -> YearMonth {
    match method {
        Some(card) if card.has_billing_cycle() => {
            let start_day = card.performance_start_day;
            let target = performance_target_month(txn.transaction_date, start_day);
            let window = performance_window(target, start_day);
            billing_month_key(window.end, card.billing_day.unwrap_or(1))
        }
        _ => YearMonth::from_date(txn.transaction_date),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBillingLabel {
    pub transaction_id: TransactionId,
    pub transaction_date: NaiveDate,
    pub amount: Money,
    pub payment_method_id: Option<PaymentMethodId>,
    pub payment_method_name: Option<String>,
    pub memo: Option<String>,
    pub billing_month: YearMonth,
}

/// Label every transaction with its billing month, newest first
pub fn label_transactions(ledger: &LedgerView<'_>) -> Vec<TransactionBillingLabel> {
    let mut labels: Vec<TransactionBillingLabel> = ledger
        .transactions
        .iter()
        .map(|txn| {
            let method = txn.payment_method_id.and_then(|id| ledger.method(id));
            TransactionBillingLabel {
                transaction_id: txn.id,
                transaction_date: txn.transaction_date,
                amount: txn.amount,
                payment_method_id: txn.payment_method_id,
                payment_method_name: method.map(|m| m.name.clone()),
                memo: txn.memo.clone(),
                billing_month: billing_month_for(txn, method),
            }
        })
        .collect();
    labels.sort_by(|a, b| b.transaction_date.cmp(&a.transaction_date));
    labels
}

/// Every window of one card around a target month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardWindows {
    pub payment_method_id: PaymentMethodId,
    pub card_name: String,
    pub month: YearMonth,
    pub performance: PerformanceWindow,
    pub range_label: String,
    /// Spending covered by the statement charged during `month`
    pub billing_window: Option<DateWindow>,
    /// Month the performance window is charged in
    pub billing_month: Option<YearMonth>,
    pub expected_billing_date: Option<NaiveDate>,
    pub suggested_start_day: u32,
}

pub fn card_windows(card: &PaymentMethod, month: YearMonth) -> CardWindows {
    let performance = window_for(card, month);
    let billing_day = card.billing_day.filter(|_| card.has_billing_cycle());

    CardWindows {
        payment_method_id: card.id,
        card_name: card.name.clone(),
        month,
        performance,
        range_label: performance_range_label(i64::from(performance.start_day)),
        billing_window: billing_day.map(|day| billing_window(month, day)),
        billing_month: billing_day.map(|day| billing_month_key(performance.end, day)),
        expected_billing_date: billing_day.map(|day| expected_billing_date(performance.end, day)),
        suggested_start_day: suggested_performance_start_day(card.billing_day),
    }
}
