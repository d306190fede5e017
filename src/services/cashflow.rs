//! Monthly cashflow
//!
//! Income, expense and balance for one calendar month, with an optional
//! carry-over of everything recorded before it. Rows excluded from billing
//! never count toward cashflow.

use serde::Serialize;

use crate::models::{Money, Transaction, YearMonth};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CashflowSummary {
    pub month: YearMonth,
    /// Sum of positive amounts
    pub income: Money,
    /// Sum of expense magnitudes (positive)
    pub expense: Money,
    /// `income - expense`
    pub balance: Money,
    /// Net of all earlier months; zero when carry-over is disabled
    pub carry_over: Money,
    /// `carry_over + balance`
    pub total_balance: Money,
}

/// Compute the cashflow for `month`
pub fn compute_cashflow(
    month: YearMonth,
    transactions: &[Transaction],
    carry_over_enabled: bool,
) -> CashflowSummary {
    let mut income = Money::zero();
    let mut expense = Money::zero();
    let mut carry_over = Money::zero();
    let month_start = month.first_day();

    for txn in transactions.iter().filter(|t| !t.exclude_from_billing) {
        if month.contains(txn.transaction_date) {
            if txn.is_income() {
                income += txn.amount;
            } else if txn.is_expense() {
                expense += txn.amount.magnitude();
            }
        } else if carry_over_enabled && txn.transaction_date < month_start {
            carry_over += txn.amount;
        }
    }

    let balance = income - expense;
    CashflowSummary {
        month,
        income,
        expense,
        balance,
        carry_over,
        total_balance: carry_over + balance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(y: i32, m: u32, d: u32, amount: i64) -> Transaction {
        Transaction::new(None, NaiveDate::from_ymd_opt(y, m, d).unwrap(), Money::new(amount))
    }

    #[test]
    fn test_income_expense_balance() {
        let transactions = vec![
            txn(2025, 3, 1, 3_000_000),
            txn(2025, 3, 5, -120_000),
            txn(2025, 3, 31, -30_000),
            txn(2025, 4, 1, -999_999),
            txn(2025, 2, 28, -1),
        ];
        let summary = compute_cashflow(YearMonth::new(2025, 3), &transactions, false);

        assert_eq!(summary.income, Money::new(3_000_000));
        assert_eq!(summary.expense, Money::new(150_000));
        assert_eq!(summary.balance, Money::new(2_850_000));
        assert_eq!(summary.carry_over, Money::zero());
        assert_eq!(summary.total_balance, Money::new(2_850_000));
    }

    #[test]
    fn test_billing_excluded_rows_are_skipped() {
        let transactions = vec![
            txn(2025, 3, 5, -120_000).excluded_from_billing(),
            txn(2025, 3, 6, -10_000).excluded_from_performance(),
            txn(2025, 2, 6, -5_000).excluded_from_billing(),
        ];
        let summary = compute_cashflow(YearMonth::new(2025, 3), &transactions, true);

        assert_eq!(summary.expense, Money::new(10_000));
        assert_eq!(summary.carry_over, Money::zero());
    }

    #[test]
    fn test_carry_over_sums_prior_months() {
        let transactions = vec![
            txn(2025, 1, 10, 100_000),
            txn(2025, 2, 20, -150_000),
            txn(2025, 3, 1, -1_000),
            txn(2025, 4, 1, 70_000),
        ];
        let summary = compute_cashflow(YearMonth::new(2025, 3), &transactions, true);

        assert_eq!(summary.carry_over, Money::new(-50_000));
        assert_eq!(summary.balance, Money::new(-1_000));
        assert_eq!(summary.total_balance, Money::new(-51_000));
    }

    #[test]
    fn test_empty_month_is_zero() {
        let summary = compute_cashflow(YearMonth::new(2025, 3), &[], true);
        assert_eq!(summary.income, Money::zero());
        assert_eq!(summary.expense, Money::zero());
        assert_eq!(summary.balance, Money::zero());
    }
}
