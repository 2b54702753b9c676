use crate::fx::fx_errors::FxError;
use crate::fx::fx_model::RateSnapshot;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Converts amounts between currencies using a single rate snapshot.
///
/// All rates in a snapshot are expressed against its base currency, so
/// converting between two non-base currencies is a cross-rate through
/// the base: `rate_to / rate_from`. A missing rate on either side, or a
/// zero source rate, fails with [`FxError::RateUnavailable`] rather
/// than propagating NaN or infinity out of the division.
pub struct CurrencyConverter {
    snapshot: Arc<RateSnapshot>,
}

impl CurrencyConverter {
    pub fn new(snapshot: Arc<RateSnapshot>) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &Arc<RateSnapshot> {
        &self.snapshot
    }

    /// Units of `to_currency` received per one unit of `from_currency`.
    pub fn get_rate(&self, from_currency: &str, to_currency: &str) -> Result<Decimal, FxError> {
        let rate_from = self.lookup(from_currency)?;
        if rate_from.is_zero() {
            return Err(FxError::RateUnavailable(format!(
                "source rate for '{}' is zero",
                from_currency
            )));
        }
        let rate_to = self.lookup(to_currency)?;
        Ok(rate_to / rate_from)
    }

    /// Converts `amount` of `from_currency` into `to_currency`.
    ///
    /// Same-currency conversion returns the amount unchanged. The
    /// result is kept at full precision; rounding happens at the
    /// presentation boundary only.
    pub fn convert_amount(
        &self,
        amount: Decimal,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<Decimal, FxError> {
        if from_currency == to_currency {
            return Ok(amount);
        }
        Ok(amount * self.get_rate(from_currency, to_currency)?)
    }

    fn lookup(&self, code: &str) -> Result<Decimal, FxError> {
        self.snapshot.rate(code).ok_or_else(|| {
            FxError::RateUnavailable(format!(
                "no rate for '{}' in the {} snapshot",
                code, self.snapshot.base_currency
            ))
        })
    }
}
