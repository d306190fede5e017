//! Transaction model
//!
//! A dated, signed amount optionally charged to a payment method. The two
//! exclusion flags are independent: a row can count toward card performance
//! while being left out of billing and cashflow, and vice versa.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{PaymentMethodId, TransactionId};
use super::money::Money;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,

    pub payment_method_id: Option<PaymentMethodId>,

    pub transaction_date: NaiveDate,

    /// Positive for income, negative for expense
    #[serde(default)]
    pub amount: Money,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub memo: Option<String>,

    #[serde(default)]
    pub is_installment: bool,

    #[serde(default = "default_installment_months")]
    pub installment_months: u32,

    /// Left out of card performance accumulation
    #[serde(default)]
    pub exclude_from_performance: bool,

    /// Left out of billing totals and cashflow
    #[serde(default)]
    pub exclude_from_billing: bool,
}

fn default_installment_months() -> u32 {
    1
}

impl Transaction {
    /// Create a new transaction with no category, memo or exclusions
    pub fn new(
        payment_method_id: Option<PaymentMethodId>,
        transaction_date: NaiveDate,
        amount: Money,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            payment_method_id,
            transaction_date,
            amount,
            category: None,
            memo: None,
            is_installment: false,
            installment_months: 1,
            exclude_from_performance: false,
            exclude_from_billing: false,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.amount.is_expense()
    }

    pub fn is_income(&self) -> bool {
        self.amount.is_income()
    }

    pub fn belongs_to(&self, payment_method_id: PaymentMethodId) -> bool {
        self.payment_method_id == Some(payment_method_id)
    }

    pub fn excluded_from_performance(mut self) -> Self {
        self.exclude_from_performance = true;
        self
    }

    pub fn excluded_from_billing(mut self) -> Self {
        self.exclude_from_billing = true;
        self
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }
}
