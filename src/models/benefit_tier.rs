//! Benefit tier model
//!
//! A tier is a spending threshold on one card and the benefit unlocked when
//! the card's performance reaches it.

use serde::{Deserialize, Deserializer, Serialize};

use super::ids::{BenefitTierId, PaymentMethodId};
use super::lenient;
use super::money::Money;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitTier {
    pub id: BenefitTierId,

    pub payment_method_id: PaymentMethodId,

    /// Spending needed to reach this tier (never negative)
    #[serde(default, deserialize_with = "non_negative_threshold")]
    pub threshold_amount: Money,

    #[serde(default)]
    pub benefit_desc: String,

    #[serde(default, deserialize_with = "lenient_sort_order")]
    pub sort_order: i32,
}

fn non_negative_threshold<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = lenient::amount_or_zero(deserializer)?;
    Ok(Money::new(raw.max(0)))
}

fn lenient_sort_order<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = lenient::amount_or_zero(deserializer)?;
    Ok(raw.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

impl BenefitTier {
    pub fn new(
        payment_method_id: PaymentMethodId,
        threshold_amount: Money,
        benefit_desc: impl Into<String>,
    ) -> Self {
        Self {
            id: BenefitTierId::new(),
            payment_method_id,
            threshold_amount: Money::new(threshold_amount.amount().max(0)),
            benefit_desc: benefit_desc.into(),
            sort_order: 0,
        }
    }

    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }
}

/// Tiers of one card, ascending by threshold then sort order
pub fn tiers_for(tiers: &[BenefitTier], payment_method_id: PaymentMethodId) -> Vec<&BenefitTier> {
    let mut matching: Vec<_> = tiers
        .iter()
        .filter(|t| t.payment_method_id == payment_method_id)
        .collect();
    matching.sort_by_key(|t| (t.threshold_amount, t.sort_order));
    matching
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_threshold_normalized() {
        let tier = BenefitTier::new(PaymentMethodId::new(), Money::new(-10), "nothing");
        assert_eq!(tier.threshold_amount, Money::zero());
    }

    #[test]
    fn test_deserialize_normalizes_threshold() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440001",
            "paymentMethodId": "550e8400-e29b-41d4-a716-446655440000",
            "thresholdAmount": "-300000",
            "benefitDesc": "1% cashback"
        }"#;
        let tier: BenefitTier = serde_json::from_str(json).unwrap();
        assert_eq!(tier.threshold_amount, Money::zero());
        assert_eq!(tier.sort_order, 0);
    }

    #[test]
    fn test_deserialize_loose_sort_order() {
        let tier_with = |sort_order: &str| -> BenefitTier {
            let json = format!(
                r#"{{
                    "id": "550e8400-e29b-41d4-a716-446655440001",
                    "paymentMethodId": "550e8400-e29b-41d4-a716-446655440000",
                    "thresholdAmount": 300000,
                    "sortOrder": {}
                }}"#,
                sort_order
            );
            serde_json::from_str(&json).unwrap()
        };

        assert_eq!(tier_with(r#""1""#).sort_order, 1);
        assert_eq!(tier_with("2.4").sort_order, 2);
        assert_eq!(tier_with(r#""first""#).sort_order, 0);
        assert_eq!(tier_with("null").sort_order, 0);
        assert_eq!(tier_with("99999999999").sort_order, i32::MAX);
    }

    #[test]
    fn test_tiers_for_sorts_ascending() {
        let card = PaymentMethodId::new();
        let other = PaymentMethodId::new();
        let tiers = vec![
            BenefitTier::new(card, Money::new(1_000_000), "gold").with_sort_order(0),
            BenefitTier::new(card, Money::new(300_000), "bronze").with_sort_order(2),
            BenefitTier::new(other, Money::new(100_000), "elsewhere"),
            BenefitTier::new(card, Money::new(600_000), "silver").with_sort_order(1),
        ];

        let sorted = tiers_for(&tiers, card);
        let names: Vec<_> = sorted.iter().map(|t| t.benefit_desc.as_str()).collect();
        assert_eq!(names, ["bronze", "silver", "gold"]);
    }
}
