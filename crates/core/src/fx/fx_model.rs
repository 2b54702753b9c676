use chrono::{DateTime, Utc};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One immutable version of the exchange-rate table.
///
/// Every rate is expressed relative to `base_currency`: `rates[code]`
/// is the number of units of `code` per one unit of the base. Snapshots
/// are replaced wholesale on each refresh and never partially mutated;
/// readers always see a consistent table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RateSnapshot {
    pub base_currency: String,
    pub rates: HashMap<String, Decimal>,
    pub as_of: DateTime<Utc>,
}

impl RateSnapshot {
    pub fn new(base_currency: impl Into<String>, as_of: DateTime<Utc>) -> Self {
        Self {
            base_currency: base_currency.into(),
            rates: HashMap::new(),
            as_of,
        }
    }

    /// Builds a snapshot from `(code, rate)` pairs.
    pub fn from_pairs<I, C>(
        base_currency: impl Into<String>,
        as_of: DateTime<Utc>,
        pairs: I,
    ) -> Self
    where
        I: IntoIterator<Item = (C, Decimal)>,
        C: Into<String>,
    {
        let mut snapshot = Self::new(base_currency, as_of);
        snapshot
            .rates
            .extend(pairs.into_iter().map(|(code, rate)| (code.into(), rate)));
        snapshot
    }

    /// Looks up the rate for `code` relative to the base currency.
    ///
    /// Returns `None` for an absent entry, which is distinct from a
    /// present entry whose rate is zero. The base currency itself
    /// resolves to `1` when the table does not list it explicitly.
    pub fn rate(&self, code: &str) -> Option<Decimal> {
        match self.rates.get(code) {
            Some(rate) => Some(*rate),
            None if code == self.base_currency => Some(Decimal::ONE),
            None => None,
        }
    }

    /// True when the snapshot carries a usable rate for `code`.
    pub fn has_rate(&self, code: &str) -> bool {
        self.rate(code).is_some()
    }
}

/// Wire-format payload from the external rate source.
///
/// The rate map is decoded directly from the payload's `rates` object;
/// entries whose value is null are kept by serde as `None` and dropped
/// during conversion, so "unavailable" currencies never show up as
/// zero rates downstream.
#[derive(Deserialize, Debug, Clone)]
pub struct RateSnapshotData {
    pub base: String,
    #[serde(default)]
    pub rates: HashMap<String, Option<f64>>,
}

impl RateSnapshotData {
    /// Converts the wire payload into a domain snapshot taken at `as_of`.
    ///
    /// Currency codes are upper-cased; null entries and values that do
    /// not map onto a finite `Decimal` are dropped as unavailable.
    pub fn into_snapshot(self, as_of: DateTime<Utc>) -> RateSnapshot {
        let mut snapshot = RateSnapshot::new(self.base.to_uppercase(), as_of);
        for (code, value) in self.rates {
            let code = code.to_uppercase();
            let Some(value) = value else {
                continue;
            };
            match Decimal::from_f64(value) {
                Some(rate) => {
                    snapshot.rates.insert(code, rate);
                }
                None => {
                    log::warn!(
                        "Dropping rate for '{}': {} is not representable as a decimal",
                        code,
                        value
                    );
                }
            }
        }
        snapshot
    }
}
