//! Core data models for cardcycle
//!
//! Payment methods, benefit tiers and transactions as supplied by the ledger,
//! plus the `Money` and `YearMonth` value types the engine works in.

pub mod benefit_tier;
pub mod ids;
mod lenient;
pub mod money;
pub mod payment_method;
pub mod period;
pub mod transaction;

pub use benefit_tier::{tiers_for, BenefitTier};
pub use ids::{BenefitTierId, PaymentMethodId, TransactionId};
pub use money::Money;
pub use payment_method::{PaymentMethod, PaymentMethodType};
pub use period::{PeriodParseError, YearMonth, MAX_YEAR, MIN_YEAR};
pub use transaction::Transaction;
