//! Forgiving deserializers for numeric ledger fields
//!
//! Ledger rows come from collaborators we do not control. Amounts and day
//! numbers may arrive as integers, floats, numeric strings or `null`. None of
//! these may abort loading: unreadable amounts become 0 and unreadable days
//! fall back to their defaults.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Numeric {
    Int(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

impl Numeric {
    fn to_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Float(v) => float_to_i64(*v),
            Self::Text(s) => parse_numeric_text(s),
            Self::Other(_) => None,
        }
    }
}

fn float_to_i64(value: f64) -> Option<i64> {
    value.is_finite().then(|| value.round() as i64)
}

/// Parse a numeric string, ignoring thousands separators and surrounding
/// whitespace. Fractions are rounded.
pub(crate) fn parse_numeric_text(s: &str) -> Option<i64> {
    let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned
        .parse::<i64>()
        .ok()
        .or_else(|| cleaned.parse::<f64>().ok().and_then(float_to_i64))
}

/// Integer amount; anything unreadable is 0
pub(crate) fn amount_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Numeric>::deserialize(deserializer)?;
    Ok(raw.and_then(|n| n.to_i64()).unwrap_or(0))
}

/// Optional day of month; unreadable values count as absent
pub(crate) fn optional_day<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Numeric>::deserialize(deserializer)?;
    Ok(raw.and_then(|n| n.to_i64()))
}

/// Day of month defaulting to 1
pub(crate) fn day_or_first<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_day(deserializer)?.unwrap_or(1))
}

pub(crate) fn default_first_day() -> i64 {
    1
}
