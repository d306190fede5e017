//! Monthly dashboard
//!
//! Combines cashflow, per-card performance and the billing summary for one
//! month. The computation is a pure function of the query and the ledger
//! snapshot, so repeating it with the same inputs gives the same result.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::calendar::{month_range, DateWindow};
use crate::models::{BenefitTier, PaymentMethod, Transaction, YearMonth};

use super::billing::{billing_summary, BillingSummary};
use super::cashflow::{compute_cashflow, CashflowSummary};
use super::ledger::LedgerView;
use super::performance::{card_performance, window_for, CardPerformance};
use super::period::PeriodService;

/// Inputs of a dashboard computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardQuery {
    /// Month to show; unparseable or missing means today's month
    pub month: Option<String>,
    pub today: NaiveDate,
    pub carry_over_enabled: bool,
}

impl DashboardQuery {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            month: None,
            today,
            carry_over_enabled: true,
        }
    }

    pub fn for_month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    pub fn with_carry_over(mut self, enabled: bool) -> Self {
        self.carry_over_enabled = enabled;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub month: YearMonth,
    pub today: NaiveDate,
    pub cashflow: CashflowSummary,
    pub card_performances: Vec<CardPerformance>,
    pub billing: BillingSummary,
}

/// Service computing dashboards over a ledger snapshot
pub struct DashboardService<'a> {
    ledger: LedgerView<'a>,
}

impl<'a> DashboardService<'a> {
    pub fn new(ledger: LedgerView<'a>) -> Self {
        Self { ledger }
    }

    /// Resolve the query's month against its `today`
    pub fn resolve_month(&self, query: &DashboardQuery) -> YearMonth {
        PeriodService::new(query.today).parse_or_current(query.month.as_deref())
    }

    /// Compute the dashboard for `query`
    pub fn compute(&self, query: &DashboardQuery) -> Dashboard {
        let month = self.resolve_month(query);

        let cashflow = compute_cashflow(month, self.ledger.transactions, query.carry_over_enabled);
        let card_performances: Vec<CardPerformance> = self
            .ledger
            .active_methods()
            .map(|method| card_performance(&self.ledger, method, month, query.today))
            .collect();
        let billing = billing_summary(&self.ledger, month);

        debug!(
            month = %month,
            cards = card_performances.len(),
            transactions = self.ledger.transactions.len(),
            "computed dashboard"
        );

        Dashboard {
            month,
            today: query.today,
            cashflow,
            card_performances,
            billing,
        }
    }

    /// Smallest date range the transactions must cover for `month`
    ///
    /// Carry-over needs everything before the month as well, which this
    /// range does not include.
    pub fn required_date_range(&self, month: YearMonth) -> DateWindow {
        self.ledger
            .active_methods()
            .filter(|m| m.is_credit())
            .flat_map(|card| {
                [month.prev(), month, month.next()]
                    .into_iter()
                    .map(move |target| window_for(card, target))
            })
            .fold(month_range(month), |range, window| {
                range.union(&window.as_date_window())
            })
    }
}

/// Compute a dashboard from raw ledger slices
pub fn compute_dashboard(
    query: &DashboardQuery,
    payment_methods: &[PaymentMethod],
    benefit_tiers: &[BenefitTier],
    transactions: &[Transaction],
) -> Dashboard {
    DashboardService::new(LedgerView::new(payment_methods, benefit_tiers, transactions)).compute(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, PaymentMethodType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_ledger() -> (Vec<PaymentMethod>, Vec<BenefitTier>, Vec<Transaction>) {
        let card = PaymentMethod::credit_card("Card", 14, 15);
        let cash = PaymentMethod::new("Cash", PaymentMethodType::Cash);
        let tiers = vec![
            BenefitTier::new(card.id, Money::new(300_000), "5% off"),
            BenefitTier::new(card.id, Money::new(100_000), "1% off"),
        ];
        let transactions = vec![
            Transaction::new(None, date(2025, 2, 25), Money::new(2_000_000)),
            Transaction::new(Some(card.id), date(2025, 2, 20), Money::new(-150_000)),
            Transaction::new(Some(card.id), date(2025, 3, 5), Money::new(-50_000)),
            Transaction::new(Some(card.id), date(2025, 3, 20), Money::new(-70_000)),
            Transaction::new(Some(cash.id), date(2025, 3, 8), Money::new(-10_000)),
        ];
        (vec![card, cash], tiers, transactions)
    }

    #[test]
    fn test_dashboard_sections() {
        let (methods, tiers, transactions) = sample_ledger();
        let query = DashboardQuery::new(date(2025, 3, 10)).for_month("2025-03");
        let dashboard = compute_dashboard(&query, &methods, &tiers, &transactions);

        assert_eq!(dashboard.month, YearMonth::new(2025, 3));
        assert_eq!(dashboard.cashflow.expense, Money::new(130_000));
        assert_eq!(dashboard.cashflow.carry_over, Money::new(1_850_000));
        assert_eq!(dashboard.card_performances.len(), 2);

        // window Feb 15 .. Mar 14
        let card = &dashboard.card_performances[0];
        assert_eq!(card.current_performance(), Money::new(200_000));
        let achieved: Vec<_> = card.current.tiers.iter().map(|t| t.achieved).collect();
        assert_eq!(achieved, [true, false]);
        assert_eq!(card.current.next_tier_remaining, Some(Money::new(100_000)));
        assert_eq!(card.expected_billing_date, Some(date(2025, 4, 14)));
        assert!(card.previous_performance.is_some());

        let cash = &dashboard.card_performances[1];
        assert_eq!(cash.current_performance(), Money::new(10_000));

        // Feb 15 .. Mar 14 ends on the billing day, so it is charged in April
        assert_eq!(dashboard.billing.current_month_billing, Money::zero());
        assert_eq!(dashboard.billing.next_month_billing, Money::new(200_000));
    }

    #[test]
    fn test_dashboard_is_idempotent() {
        let (methods, tiers, transactions) = sample_ledger();
        let query = DashboardQuery::new(date(2025, 3, 10)).for_month("2025-03");

        let first = compute_dashboard(&query, &methods, &tiers, &transactions);
        let second = compute_dashboard(&query, &methods, &tiers, &transactions);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_malformed_month_uses_today() {
        let (methods, tiers, transactions) = sample_ledger();
        let query = DashboardQuery::new(date(2025, 3, 10)).for_month("not-a-month");
        let dashboard = compute_dashboard(&query, &methods, &tiers, &transactions);
        assert_eq!(dashboard.month, YearMonth::new(2025, 3));

        let query = DashboardQuery::new(date(2025, 3, 10));
        assert_eq!(
            compute_dashboard(&query, &methods, &tiers, &transactions).month,
            YearMonth::new(2025, 3)
        );
    }

    #[test]
    fn test_carry_over_disabled() {
        let (methods, tiers, transactions) = sample_ledger();
        let query = DashboardQuery::new(date(2025, 3, 10))
            .for_month("2025-03")
            .with_carry_over(false);
        let dashboard = compute_dashboard(&query, &methods, &tiers, &transactions);
        assert_eq!(dashboard.cashflow.carry_over, Money::zero());
        assert_eq!(dashboard.cashflow.total_balance, dashboard.cashflow.balance);
    }

    #[test]
    fn test_empty_ledger() {
        let query = DashboardQuery::new(date(2025, 3, 10));
        let dashboard = compute_dashboard(&query, &[], &[], &[]);
        assert!(dashboard.card_performances.is_empty());
        assert_eq!(dashboard.cashflow.total_balance, Money::zero());
        assert_eq!(dashboard.billing.current_month_billing, Money::zero());
    }

    #[test]
    fn test_required_date_range_covers_card_windows() {
        let (methods, tiers, transactions) = sample_ledger();
        let service = DashboardService::new(LedgerView::new(&methods, &tiers, &transactions));

        let range = service.required_date_range(YearMonth::new(2025, 3));
        // previous window starts Jan 15, next window ends Apr 14
        assert_eq!(range.start, date(2025, 1, 15));
        assert_eq!(range.end, date(2025, 4, 14));
    }

    #[test]
    fn test_required_date_range_without_cards_is_month() {
        let service = DashboardService::new(LedgerView::new(&[], &[], &[]));
        let range = service.required_date_range(YearMonth::new(2025, 2));
        assert_eq!(range.start, date(2025, 2, 1));
        assert_eq!(range.end, date(2025, 2, 28));
    }
}
