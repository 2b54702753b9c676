use super::currency_converter::CurrencyConverter;
use super::fx_errors::FxError;
use super::fx_model::RateSnapshot;
use crate::errors::Result;
use rust_decimal::Decimal;
use std::sync::{Arc, RwLock};

/// Holds the current rate snapshot and answers conversion queries.
///
/// The external rate poller is the producer: it calls
/// [`FxService::install_snapshot`] on each refresh, replacing the whole
/// table at once. Consumers (validator, converter callers) read an
/// `Arc` to one consistent snapshot per invocation and never observe a
/// half-updated table.
pub struct FxService {
    converter: RwLock<Option<CurrencyConverter>>,
}

impl FxService {
    pub fn new() -> Self {
        Self {
            converter: RwLock::new(None),
        }
    }

    /// Replaces the active snapshot wholesale.
    pub fn install_snapshot(&self, snapshot: RateSnapshot) -> Result<()> {
        log::debug!(
            "Installing rate snapshot: base {}, {} rates, as of {}",
            snapshot.base_currency,
            snapshot.rates.len(),
            snapshot.as_of
        );
        let mut converter_lock = self
            .converter
            .write()
            .map_err(|e| FxError::CacheError(e.to_string()))?;
        *converter_lock = Some(CurrencyConverter::new(Arc::new(snapshot)));
        Ok(())
    }

    /// The snapshot currently in effect, if any rates have arrived yet.
    pub fn current_snapshot(&self) -> Result<Option<Arc<RateSnapshot>>> {
        let converter_lock = self
            .converter
            .read()
            .map_err(|e| FxError::CacheError(e.to_string()))?;
        Ok(converter_lock.as_ref().map(|c| c.snapshot().clone()))
    }

    /// Units of `to_currency` per one unit of `from_currency` in the
    /// current snapshot.
    pub fn get_rate(&self, from_currency: &str, to_currency: &str) -> Result<Decimal> {
        let converter_lock = self
            .converter
            .read()
            .map_err(|e| FxError::CacheError(e.to_string()))?;
        let converter = converter_lock
            .as_ref()
            .ok_or(FxError::SnapshotUnavailable)?;
        Ok(converter.get_rate(from_currency, to_currency)?)
    }

    /// Converts `amount` between two currencies using the current snapshot.
    pub fn convert_currency(
        &self,
        amount: Decimal,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<Decimal> {
        if from_currency == to_currency {
            return Ok(amount);
        }
        let rate = self.get_rate(from_currency, to_currency)?;
        Ok(amount * rate)
    }

    /// Case-insensitive search over the current snapshot's currency
    /// codes, for rate pickers. Returns `(code, rate)` pairs sorted by
    /// code; an empty query matches everything.
    pub fn search_rates(&self, query: &str) -> Result<Vec<(String, Decimal)>> {
        let Some(snapshot) = self.current_snapshot()? else {
            return Ok(Vec::new());
        };
        let query = query.to_uppercase();
        let mut matches: Vec<(String, Decimal)> = snapshot
            .rates
            .iter()
            .filter(|(code, _)| code.contains(&query))
            .map(|(code, rate)| (code.clone(), *rate))
            .collect();
        matches.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(matches)
    }
}

impl Default for FxService {
    fn default() -> Self {
        Self::new()
    }
}
