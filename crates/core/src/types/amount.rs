//! JSON number encoding for amounts.
//!
//! Whole amounts are written as integers (`10`), others as floats
//! (`950.5`), matching what the browser panel wrote. Any JSON number is
//! accepted on read.
//!
//! The float form is lossy, and very large whole amounts do not read back
//! at all. Values are passed through [`stored`] before they are saved.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
struct Encoded(#[serde(with = "super::amount")] Decimal);

/// The amount that reads back after `value` is written, or `None` if the
/// written form cannot be read at all.
#[must_use]
pub fn stored(value: Decimal) -> Option<Decimal> {
    let raw = serde_json::to_string(&Encoded(value)).ok()?;
    serde_json::from_str::<Encoded>(&raw).ok().map(|Encoded(amount)| amount)
}

pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    match value.fract().is_zero().then(|| value.to_i64()).flatten() {
        Some(whole) => serializer.serialize_i64(whole),
        None => rust_decimal::serde::float::serialize(value, serializer),
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
    rust_decimal::serde::float::deserialize(deserializer)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;
    use serde::{Deserialize, Serialize};

    use super::stored;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Priced {
        #[serde(with = "super")]
        amount: Decimal,
    }

    fn encode(amount: Decimal) -> String {
        serde_json::to_string(&Priced { amount }).unwrap()
    }

    #[test]
    fn test_whole_amounts_are_integers() {
        assert_eq!(encode(Decimal::new(10, 0)), r#"{"amount":10}"#);
        assert_eq!(encode(Decimal::new(120_000, 2)), r#"{"amount":1200}"#);
    }

    #[test]
    fn test_fractional_amounts_are_floats() {
        assert_eq!(encode(Decimal::new(95050, 2)), r#"{"amount":950.5}"#);
    }

    #[test]
    fn test_reads_integers_and_floats() {
        let whole: Priced = serde_json::from_str(r#"{"amount":10}"#).unwrap();
        assert_eq!(whole.amount, Decimal::new(10, 0));
        let fractional: Priced = serde_json::from_str(r#"{"amount":23.5}"#).unwrap();
        assert_eq!(fractional.amount, Decimal::new(235, 1));
    }

    #[test]
    fn test_stored_keeps_common_prices() {
        for raw in ["10", "19.99", "0.1", "950.5", "1234567.891", "-1.5"] {
            let value = Decimal::from_str(raw).unwrap();
            assert_eq!(stored(value), Some(value), "{raw}");
        }
    }

    #[test]
    fn test_stored_matches_what_reads_back() {
        let precise = Decimal::from_str("0.123456789012345678").unwrap();
        let kept = stored(precise).unwrap();
        assert_ne!(kept, precise);

        let read: Priced = serde_json::from_str(&encode(precise)).unwrap();
        assert_eq!(read.amount, kept);
        assert_eq!(stored(kept), Some(kept));
    }

    #[test]
    fn test_stored_rejects_amounts_that_cannot_be_read() {
        assert_eq!(stored(Decimal::MAX), None);
        assert_eq!(stored(Decimal::MIN), None);
    }
}
