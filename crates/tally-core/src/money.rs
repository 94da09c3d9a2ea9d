//! Money handling
//!
//! Amounts are integer cents everywhere inside the library and the database
//! (SQLite INTEGER columns), so sums and the income/expense invariant are
//! exact. Dollars exist only at the edges: JSON bodies, CSV rows, and
//! display strings.

use crate::error::{Error, Result};

/// Upper bound on a single amount: one billion dollars in cents.
/// Anything larger is a data-entry error, not a transaction.
pub const MAX_AMOUNT_CENTS: i64 = 100_000_000_000;

/// Convert a dollar amount from user input into cents.
///
/// Rejects non-finite values, negative magnitudes, and amounts beyond
/// [`MAX_AMOUNT_CENTS`]. Rounds to the nearest cent (half away from zero).
pub fn cents_from_dollars(dollars: f64) -> Result<i64> {
    if !dollars.is_finite() {
        return Err(Error::InvalidData(format!(
            "Amount must be a finite number, got {}",
            dollars
        )));
    }
    if dollars < 0.0 {
        return Err(Error::InvalidData(format!(
            "Amount must be non-negative (use kind=expense for spending), got {}",
            dollars
        )));
    }
    let cents = (dollars * 100.0).round();
    if cents > MAX_AMOUNT_CENTS as f64 {
        return Err(Error::InvalidData(format!(
            "Amount too large: {}",
            dollars
        )));
    }
    Ok(cents as i64)
}

/// Convert cents back to dollars for presentation.
pub fn dollars(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Format cents as a dollar string, e.g. `464.35` -> `"$464.35"`.
pub fn format_dollars(cents: i64) -> String {
    format!("${:.2}", dollars(cents))
}

/// Serde adapter: serialize an `i64` cents field as dollars, and accept
/// dollars on input. Apply with `#[serde(with = "crate::money::as_dollars")]`.
pub mod as_dollars {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(cents: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(super::dollars(*cents))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let dollars = f64::deserialize(deserializer)?;
        super::cents_from_dollars(dollars).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for `BTreeMap<String, i64>` cents values, serialized as a
/// category -> dollars object.
pub mod map_as_dollars {
    use std::collections::BTreeMap;

    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        map: &BTreeMap<String, i64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_map(Some(map.len()))?;
        for (category, cents) in map {
            out.serialize_entry(category, &super::dollars(*cents))?;
        }
        out.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<String, i64>, D::Error> {
        let raw: BTreeMap<String, f64> = BTreeMap::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(category, dollars)| {
                super::cents_from_dollars(dollars)
                    .map(|cents| (category, cents))
                    .map_err(serde::de::Error::custom)
            })
            .collect()
    }
}
