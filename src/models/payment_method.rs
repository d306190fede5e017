//! Payment method model
//!
//! A payment method is anything a transaction can be charged to. Only credit
//! cards carry performance and billing windows; the day fields are stored as
//! given and clamped by the calendar engine when consumed.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::PaymentMethodId;
use super::lenient;
use crate::calendar::clamp_day_number;

/// Kind of payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethodType {
    /// Credit card with performance and billing cycles
    #[default]
    Credit,
    /// Check (debit) card
    Check,
    /// Bank account
    Account,
    /// Cash
    Cash,
}

impl PaymentMethodType {
    pub fn is_credit(&self) -> bool {
        matches!(self, Self::Credit)
    }

    /// Parse a payment method type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "credit" | "credit_card" | "creditcard" => Some(Self::Credit),
            "check" | "check_card" | "debit" => Some(Self::Check),
            "account" | "bank" => Some(Self::Account),
            "cash" => Some(Self::Cash),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentMethodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credit => write!(f, "Credit Card"),
            Self::Check => write!(f, "Check Card"),
            Self::Account => write!(f, "Account"),
            Self::Cash => write!(f, "Cash"),
        }
    }
}

/// A card, account or wallet transactions are charged to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: PaymentMethodId,

    pub name: String,

    #[serde(rename = "type")]
    pub method_type: PaymentMethodType,

    /// Day of the month the statement is charged, as configured
    #[serde(default, deserialize_with = "lenient::optional_day")]
    pub billing_day: Option<i64>,

    /// Day of the month a performance period begins, as configured
    #[serde(
        default = "lenient::default_first_day",
        deserialize_with = "lenient::day_or_first"
    )]
    pub performance_start_day: i64,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl PaymentMethod {
    /// Create a new active payment method without day configuration
    pub fn new(name: impl Into<String>, method_type: PaymentMethodType) -> Self {
        Self {
            id: PaymentMethodId::new(),
            name: name.into(),
            method_type,
            billing_day: None,
            performance_start_day: 1,
            is_active: true,
        }
    }

    /// Create a credit card with its billing and performance start days
    pub fn credit_card(name: impl Into<String>, billing_day: i64, performance_start_day: i64) -> Self {
        let mut card = Self::new(name, PaymentMethodType::Credit);
        card.billing_day = Some(billing_day);
        card.performance_start_day = performance_start_day;
        card
    }

    pub fn is_credit(&self) -> bool {
        self.method_type.is_credit()
    }

    /// Billing day clamped to 1..=31, if one is configured
    pub fn effective_billing_day(&self) -> Option<u32> {
        self.billing_day.map(clamp_day_number)
    }

    /// Credit cards with a billing day take part in billing summaries
    pub fn has_billing_cycle(&self) -> bool {
        self.is_credit() && self.billing_day.is_some()
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.method_type)
    }
}
