//! Lenient decoding of device numbers.
//!
//! The firmware reports counters and seconds as plain JSON numbers, so a
//! value may arrive as `12`, `12.5` or even `null`. Bodies are trusted as
//! they come: fractions are truncated and anything that cannot be a count
//! reads as 0.

use std::fmt;

use serde::Deserializer;
use serde::de::{self, Visitor};

/// Deserialize any JSON number as a whole, non-negative count.
pub(crate) fn whole_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(WholeNumber)
}

struct WholeNumber;

impl Visitor<'_> for WholeNumber {
    type Value = u64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<u64, E> {
        Ok(value)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<u64, E> {
        Ok(u64::try_from(value).unwrap_or(0))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn visit_f64<E: de::Error>(self, value: f64) -> Result<u64, E> {
        if value.is_finite() && value > 0.0 {
            Ok(value.trunc() as u64)
        } else {
            Ok(0)
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<u64, E> {
        Ok(0)
    }
}
