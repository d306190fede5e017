//! Borrowed view over ledger data
//!
//! Services read payment methods, tiers and transactions through this view.
//! It owns nothing, so the same snapshot can back any number of concurrent
//! computations.

use crate::models::{tiers_for, BenefitTier, PaymentMethod, PaymentMethodId, Transaction};

#[derive(Debug, Clone, Copy)]
pub struct LedgerView<'a> {
    pub payment_methods: &'a [PaymentMethod],
    pub benefit_tiers: &'a [BenefitTier],
    pub transactions: &'a [Transaction],
}

impl<'a> LedgerView<'a> {
    pub fn new(
        payment_methods: &'a [PaymentMethod],
        benefit_tiers: &'a [BenefitTier],
        transactions: &'a [Transaction],
    ) -> Self {
        Self {
            payment_methods,
            benefit_tiers,
            transactions,
        }
    }

    /// Active payment methods in ledger order
    pub fn active_methods(&self) -> impl Iterator<Item = &'a PaymentMethod> + 'a {
        self.payment_methods.iter().filter(|m| m.is_active)
    }

    pub fn method(&self, id: PaymentMethodId) -> Option<&'a PaymentMethod> {
        self.payment_methods.iter().find(|m| m.id == id)
    }

    /// Find a payment method by exact id, short display id or name
    pub fn find_method(&self, identifier: &str) -> Option<&'a PaymentMethod> {
        let identifier = identifier.trim();
        if let Ok(id) = identifier.parse::<PaymentMethodId>() {
            if let Some(method) = self.method(id) {
                return Some(method);
            }
        }

        self.payment_methods
            .iter()
            .find(|m| m.id.to_string() == identifier)
            .or_else(|| {
                self.payment_methods
                    .iter()
                    .find(|m| m.name.eq_ignore_ascii_case(identifier))
            })
    }

    /// Tiers of one card, ascending by threshold
    pub fn tiers_for(&self, id: PaymentMethodId) -> Vec<&'a BenefitTier> {
        tiers_for(self.benefit_tiers, id)
    }

    /// Transactions charged to one payment method
    pub fn transactions_for(&self, id: PaymentMethodId) -> impl Iterator<Item = &'a Transaction> + 'a {
        self.transactions.iter().filter(move |t| t.belongs_to(id))
    }
}
