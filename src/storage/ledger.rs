//! Ledger repository
//!
//! The ledger file holds the payment methods, benefit tiers and transactions
//! the dashboard reads. It is loaded once per run into an in-memory snapshot.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CardcycleError;
use crate::models::{BenefitTier, PaymentMethod, Transaction};
use crate::services::LedgerView;

use super::file_io::{read_json, read_json_required};

/// Everything stored in the ledger file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSnapshot {
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethod>,
    #[serde(default)]
    pub benefit_tiers: Vec<BenefitTier>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl LedgerSnapshot {
    /// Borrow the snapshot for the services
    pub fn view(&self) -> LedgerView<'_> {
        LedgerView::new(&self.payment_methods, &self.benefit_tiers, &self.transactions)
    }
}

/// Repository for the ledger file
pub struct LedgerRepository {
    path: PathBuf,
    must_exist: bool,
    data: RwLock<LedgerSnapshot>,
}

impl LedgerRepository {
    /// Repository at the default location; a missing file reads as empty
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            must_exist: false,
            data: RwLock::new(LedgerSnapshot::default()),
        }
    }

    /// Repository at a path the user named; a missing file is an error
    pub fn explicit(path: PathBuf) -> Self {
        Self {
            must_exist: true,
            ..Self::new(path)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger from disk
    pub fn load(&self) -> Result<(), CardcycleError> {
        let loaded: LedgerSnapshot = if self.must_exist {
            read_json_required(&self.path)?
        } else {
            read_json(&self.path)?
        };

        debug!(
            path = %self.path.display(),
            payment_methods = loaded.payment_methods.len(),
            benefit_tiers = loaded.benefit_tiers.len(),
            transactions = loaded.transactions.len(),
            "loaded ledger"
        );

        let mut data = self
            .data
            .write()
            .map_err(|e| CardcycleError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = loaded;
        Ok(())
    }

    /// Copy of the loaded ledger
    pub fn snapshot(&self) -> Result<LedgerSnapshot, CardcycleError> {
        let data = self
            .data
            .read()
            .map_err(|e| CardcycleError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, PaymentMethodType};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_missing_default_ledger_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = LedgerRepository::new(temp_dir.path().join("ledger.json"));
        repo.load().unwrap();
        assert_eq!(repo.snapshot().unwrap(), LedgerSnapshot::default());
    }

    #[test]
    fn test_missing_explicit_ledger_fails() {
        let temp_dir = TempDir::new().unwrap();
        let repo = LedgerRepository::explicit(temp_dir.path().join("ledger.json"));
        assert!(repo.load().is_err());
    }

    #[test]
    fn test_written_snapshot_reloads() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");

        let card = PaymentMethod::credit_card("Card", 14, 1);
        let snapshot = LedgerSnapshot {
            payment_methods: vec![card.clone(), PaymentMethod::new("Cash", PaymentMethodType::Cash)],
            benefit_tiers: vec![BenefitTier::new(card.id, Money::new(300_000), "tier 1")],
            transactions: vec![Transaction::new(
                Some(card.id),
                NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                Money::new(-1_000),
            )],
        };

        crate::storage::write_json_atomic(&path, &snapshot).unwrap();

        let reloaded = LedgerRepository::explicit(path);
        reloaded.load().unwrap();
        assert_eq!(reloaded.snapshot().unwrap(), snapshot);
    }

    #[test]
    fn test_loose_ledger_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        std::fs::write(
            &path,
            r#"{
                "paymentMethods": [{
                    "id": "5b1f3c2e-8a4d-4f61-9c7e-2d0a6b9e1f34",
                    "name": "Card",
                    "type": "CREDIT",
                    "billingDay": "14",
                    "performanceStartDay": null
                }],
                "transactions": [{
                    "id": "0e6c1a9b-3f2d-4c8e-b5a7-91d4f0e2c6b8",
                    "paymentMethodId": "5b1f3c2e-8a4d-4f61-9c7e-2d0a6b9e1f34",
                    "transactionDate": "2025-03-02",
                    "amount": "-12,000"
                }]
            }"#,
        )
        .unwrap();

        let repo = LedgerRepository::explicit(path);
        repo.load().unwrap();
        let snapshot = repo.snapshot().unwrap();

        let card = &snapshot.payment_methods[0];
        assert_eq!(card.billing_day, Some(14));
        assert_eq!(card.performance_start_day, 1);
        assert!(card.is_active);
        assert!(snapshot.benefit_tiers.is_empty());
        assert_eq!(snapshot.transactions[0].amount, Money::new(-12_000));
        assert_eq!(snapshot.view().transactions_for(card.id).count(), 1);
    }
}
