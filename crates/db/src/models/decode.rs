//! Field decoders that accept the loose shapes found in stored documents.
//!
//! A BSON `null` decodes to the field's zero value, the same as an absent
//! field. Integer fields also accept a double with no fractional part.

use std::fmt;

use cartera_core::types::Timestamp;
use serde::de::{self, Deserialize, Deserializer, Visitor};

/// Milliseconds from the Unix epoch to `0001-01-01T00:00:00Z`.
const ZERO_TIME_MILLIS: i64 = -62_135_596_800_000;

/// Decode `null` as `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// The timestamp used for a missing or null date: `0001-01-01T00:00:00Z`.
pub fn zero_time() -> Timestamp {
    bson::DateTime::from_millis(ZERO_TIME_MILLIS).to_chrono()
}

/// Decode a BSON date, or `null` as [`zero_time`].
pub fn date_or_zero<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bson::DateTime>::deserialize(deserializer)?
        .map(bson::DateTime::to_chrono)
        .unwrap_or_else(zero_time))
}

/// Decode an integer from int32, int64, a whole-valued double or `null`.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientI64)
}

struct LenientI64;

impl<'de> Visitor<'de> for LenientI64 {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer, a whole-valued double or null")
    }

    fn visit_i32<E: de::Error>(self, v: i32) -> Result<i64, E> {
        Ok(i64::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
        // 2^63 as f64; anything at or beyond it does not fit.
        const LIMIT: f64 = 9_223_372_036_854_775_808.0;
        if v.fract() == 0.0 && (-LIMIT..LIMIT).contains(&v) {
            Ok(v as i64)
        } else {
            Err(E::invalid_value(de::Unexpected::Float(v), &self))
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<i64, E> {
        Ok(0)
    }

    fn visit_none<E: de::Error>(self) -> Result<i64, E> {
        Ok(0)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<i64, D::Error> {
        deserializer.deserialize_any(self)
    }
}

#[cfg(test)]
mod tests {
    use bson::doc;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Amount {
        #[serde(deserialize_with = "lenient_i64", default)]
        value: i64,
    }

    fn amount(document: bson::Document) -> Result<i64, bson::de::Error> {
        bson::from_document::<Amount>(document).map(|a| a.value)
    }

    #[test]
    fn integers_of_both_widths() {
        assert_eq!(amount(doc! { "value": 7_i32 }).unwrap(), 7);
        assert_eq!(amount(doc! { "value": 7_000_000_000_i64 }).unwrap(), 7_000_000_000);
    }

    #[test]
    fn whole_double_is_accepted() {
        assert_eq!(amount(doc! { "value": 15_000_000.0 }).unwrap(), 15_000_000);
        assert_eq!(amount(doc! { "value": -3.0 }).unwrap(), -3);
    }

    #[test]
    fn fractional_double_is_rejected() {
        assert!(amount(doc! { "value": 1.5 }).is_err());
        assert!(amount(doc! { "value": f64::NAN }).is_err());
        assert!(amount(doc! { "value": 1e19 }).is_err());
    }

    #[test]
    fn null_and_absent_are_zero() {
        assert_eq!(amount(doc! { "value": bson::Bson::Null }).unwrap(), 0);
        assert_eq!(amount(doc! {}).unwrap(), 0);
    }

    #[test]
    fn zero_time_matches_year_one() {
        assert_eq!(zero_time().to_rfc3339(), "0001-01-01T00:00:00+00:00");
    }
}
