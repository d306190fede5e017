//! Card performance and benefit tiers
//!
//! Credit cards accumulate expenses over their performance window, skipping
//! rows excluded from performance. Other payment methods use the calendar
//! month and skip rows excluded from billing. Either way, tiers are checked
//! against the accumulated magnitude.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::calendar::{expected_billing_date, performance_window, PerformanceWindow};
use crate::models::{
    BenefitTier, BenefitTierId, Money, PaymentMethod, PaymentMethodId, PaymentMethodType,
    Transaction, TransactionId, YearMonth,
};

use super::ledger::LedgerView;

/// A tier and whether the period's spending reached it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierStatus {
    pub id: BenefitTierId,
    pub threshold_amount: Money,
    pub benefit_desc: String,
    pub sort_order: i32,
    pub achieved: bool,
}

/// A transaction counted toward a performance period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageTransaction {
    pub id: TransactionId,
    pub transaction_date: NaiveDate,
    pub amount: Money,
    pub category: Option<String>,
    pub memo: Option<String>,
}

impl From<&Transaction> for UsageTransaction {
    fn from(txn: &Transaction) -> Self {
        Self {
            id: txn.id,
            transaction_date: txn.transaction_date,
            amount: txn.amount,
            category: txn.category.clone(),
            memo: txn.memo.clone(),
        }
    }
}

/// One performance period of one card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformancePeriod {
    pub target_month: YearMonth,
    pub window: PerformanceWindow,
    /// Sum of counted expense magnitudes
    pub amount: Money,
    /// Counted transactions, newest first
    pub transactions: Vec<UsageTransaction>,
    pub tiers: Vec<TierStatus>,
    /// Spending still needed for the first unreached tier
    pub next_tier_remaining: Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPerformance {
    pub payment_method_id: PaymentMethodId,
    pub card_name: String,
    pub payment_method_type: PaymentMethodType,
    pub billing_day: Option<u32>,
    pub performance_start_day: u32,
    pub current: PerformancePeriod,
    /// Charge date of the current period, for credit cards with a billing day
    pub expected_billing_date: Option<NaiveDate>,
    /// Last period, while its bill has not been charged yet
    pub previous_performance: Option<PerformancePeriod>,
}

impl CardPerformance {
    pub fn current_performance(&self) -> Money {
        self.current.amount
    }
}

/// Mark each tier achieved or not and find the remaining amount to the next
pub fn evaluate_tiers(tiers: &[&BenefitTier], performance: Money) -> (Vec<TierStatus>, Option<Money>) {
    let statuses: Vec<TierStatus> = tiers
        .iter()
        .map(|tier| TierStatus {
            id: tier.id,
            threshold_amount: tier.threshold_amount,
            benefit_desc: tier.benefit_desc.clone(),
            sort_order: tier.sort_order,
            achieved: performance >= tier.threshold_amount,
        })
        .collect();

    let remaining = statuses
        .iter()
        .find(|s| !s.achieved)
        .map(|s| s.threshold_amount - performance);

    (statuses, remaining)
}

fn counts_toward_performance(method: &PaymentMethod, txn: &Transaction) -> bool {
    if !txn.belongs_to(method.id) || !txn.is_expense() {
        return false;
    }
    if method.is_credit() {
        !txn.exclude_from_performance
    } else {
        !txn.exclude_from_billing
    }
}

/// Window a payment method accumulates over for `month`
pub fn window_for(method: &PaymentMethod, month: YearMonth) -> PerformanceWindow {
    let start_day = if method.is_credit() {
        method.performance_start_day
    } else {
        1
    };
    performance_window(month, start_day)
}

/// Build one performance period of `method` for target `month`
pub fn performance_period(
    ledger: &LedgerView<'_>,
    method: &PaymentMethod,
    month: YearMonth,
) -> PerformancePeriod {
    let window = window_for(method, month);

    let mut counted: Vec<&Transaction> = ledger
        .transactions_for(method.id)
        .filter(|t| window.contains(t.transaction_date))
        .filter(|t| counts_toward_performance(method, t))
        .collect();
    counted.sort_by(|a, b| b.transaction_date.cmp(&a.transaction_date));

    let amount: Money = counted.iter().map(|t| t.amount.magnitude()).sum();
    let (tiers, next_tier_remaining) = evaluate_tiers(&ledger.tiers_for(method.id), amount);

    PerformancePeriod {
        target_month: month,
        window,
        amount,
        transactions: counted.into_iter().map(UsageTransaction::from).collect(),
        tiers,
        next_tier_remaining,
    }
}

/// Whether last period's bill is still pending as of `today`
fn previous_bill_pending(method: &PaymentMethod, month: YearMonth, today: NaiveDate) -> bool {
    if month != YearMonth::from_date(today) || !method.is_credit() {
        return false;
    }
    method
        .effective_billing_day()
        .is_some_and(|billing_day| today.day() < billing_day)
}

/// Full performance report of one payment method for `month`
pub fn card_performance(
    ledger: &LedgerView<'_>,
    method: &PaymentMethod,
    month: YearMonth,
    today: NaiveDate,
) -> CardPerformance {
    let current = performance_period(ledger, method, month);

    let expected_billing_date = match (method.is_credit(), method.billing_day) {
        (true, Some(billing_day)) => Some(expected_billing_date(current.window.end, billing_day)),
        _ => None,
    };

    let previous_performance = previous_bill_pending(method, month, today)
        .then(|| performance_period(ledger, method, month.prev()));

    debug!(
        card = %method.name,
        start = %current.window.start,
        end = %current.window.end,
        amount = current.amount.amount(),
        previous = previous_performance.is_some(),
        "computed card performance"
    );

    CardPerformance {
        payment_method_id: method.id,
        card_name: method.name.clone(),
        payment_method_type: method.method_type,
        billing_day: method.effective_billing_day(),
        performance_start_day: current.window.start_day,
        current,
        expected_billing_date,
        previous_performance,
    }
}
