//! Service layer for cardcycle
//!
//! The service layer computes everything shown to the user from a borrowed
//! ledger snapshot: cashflow, card performance, billing, labels and trends.

pub mod billing;
pub mod cashflow;
pub mod dashboard;
pub mod ledger;
pub mod performance;
pub mod period;
pub mod trends;

pub use billing::{
    billing_month_for, billing_summary, card_billing, card_windows, label_transactions,
    BilledWindow, BillingSummary, CardBilling, CardWindows, TransactionBillingLabel,
};
pub use cashflow::{compute_cashflow, CashflowSummary};
pub use dashboard::{compute_dashboard, Dashboard, DashboardQuery, DashboardService};
pub use ledger::LedgerView;
pub use performance::{
    card_performance, evaluate_tiers, performance_period, window_for, CardPerformance,
    PerformancePeriod, TierStatus, UsageTransaction,
};
pub use period::PeriodService;
pub use trends::{
    monthly_trends, months_available, MonthlyTrends, TrendSeries, DEFAULT_TREND_MONTHS,
    UNASSIGNED_LABEL,
};
