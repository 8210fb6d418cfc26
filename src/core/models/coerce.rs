//! Lenient decoding for numeric fields of stored records.
//!
//! Stored records may carry numbers as JSON numbers, numeric strings, empty
//! strings or `null`. Optional values that cannot be read become `None`
//! (ungraded); required values become `0.0`, which every engine aggregation
//! excludes.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Int(u64),
    Number(f64),
    Text(String),
    Flag(bool),
}

impl Loose {
    fn into_f64(self) -> Option<f64> {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Int(n) => Some(n as f64),
            Self::Number(n) => Some(n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
            Self::Flag(_) => None,
        }
        .filter(|n| n.is_finite())
    }
}

/// Decode an optional number; anything unreadable is `None`.
///
/// # Errors
/// Only fails when the underlying deserializer fails.
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Loose> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(Loose::into_f64))
}

/// Decode a required number; anything unreadable is `0.0`.
///
/// # Errors
/// Only fails when the underlying deserializer fails.
pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    opt_f64(deserializer).map(|n| n.unwrap_or(0.0))
}

/// Decode an id given as a non-negative integer or a numeric string.
///
/// # Errors
/// Fails when the value is not a usable id.
pub fn id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Loose::deserialize(deserializer)?;
    if let Loose::Int(n) = raw {
        return Ok(n);
    }
    if let Loose::Text(s) = &raw {
        if let Ok(n) = s.trim().parse::<u64>() {
            return Ok(n);
        }
    }
    raw.into_f64()
        .filter(|n| *n >= 0.0 && n.fract().abs() < f64::EPSILON)
        .map(|n| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let id = n as u64;
            id
        })
        .ok_or_else(|| serde::de::Error::custom("id must be a non-negative integer"))
}

/// Decode an optional string, treating blank strings as absent.
///
/// # Errors
/// Only fails when the underlying deserializer fails.
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}
