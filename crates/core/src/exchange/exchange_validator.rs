use crate::commission::CommissionCalculatorTrait;
use crate::errors::Result;
use crate::fx::RateSnapshot;
use crate::ledger::CurrencyBalance;
use rust_decimal::Decimal;
use std::sync::Arc;
use thiserror::Error;

/// A rejected exchange proposal, with the user-facing message as the
/// display form. Callers show the message as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please add the currency '{0}' to your account before proceeding")]
    CurrencyNotFound(String),

    #[error("The amount entered is invalid")]
    InvalidAmount,

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Transaction on the same currency is not allowed")]
    SameCurrencyTransaction,

    #[error("Exchange rates not available")]
    RatesUnavailable,
}

/// Typed validation outcome: `Ok(())` means the proposal may proceed.
pub type ValidationResult = std::result::Result<(), ValidationError>;

/// Runs the ordered rule chain over a proposed exchange.
///
/// The rule order is part of the contract, not incidental: a missing
/// selling currency is reported before a zero amount, which is reported
/// before insufficiency, and so on, matching user-facing error
/// priority.
pub struct ExchangeValidator {
    commission_calculator: Arc<dyn CommissionCalculatorTrait>,
}

impl ExchangeValidator {
    pub fn new(commission_calculator: Arc<dyn CommissionCalculatorTrait>) -> Self {
        Self {
            commission_calculator,
        }
    }

    /// Validates a proposal against the owned balances and the current
    /// rate snapshot.
    ///
    /// The inner [`ValidationResult`] is the typed verdict and never
    /// panics; the outer error carries only transaction-counter read
    /// failures from the commission lookup.
    pub fn validate(
        &self,
        selling_code: &str,
        buying_code: &str,
        amount: Decimal,
        snapshot: Option<&RateSnapshot>,
        balances: &[CurrencyBalance],
    ) -> Result<ValidationResult> {
        let selling = balances.iter().find(|b| b.currency == selling_code);

        let Some(selling) = selling else {
            return Ok(Err(ValidationError::CurrencyNotFound(
                selling_code.to_string(),
            )));
        };

        if amount.is_zero() || amount.is_sign_negative() {
            return Ok(Err(ValidationError::InvalidAmount));
        }

        let commission = self.commission_calculator.calculate_commission(amount)?;
        // A balance equal to amount + commission is sufficient.
        if selling.amount < amount + commission {
            return Ok(Err(ValidationError::InsufficientBalance));
        }

        if selling_code == buying_code {
            return Ok(Err(ValidationError::SameCurrencyTransaction));
        }

        if snapshot.is_none() {
            return Ok(Err(ValidationError::RatesUnavailable));
        }

        Ok(Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    /// Commission stub with a fixed fee, independent of any counter.
    struct FixedCommission(Decimal);

    impl CommissionCalculatorTrait for FixedCommission {
        fn commission_for_count(&self, _amount: Decimal, _completed: u64) -> Decimal {
            self.0
        }

        fn calculate_commission(&self, _amount: Decimal) -> Result<Decimal> {
            Ok(self.0)
        }
    }

    fn validator(commission: Decimal) -> ExchangeValidator {
        ExchangeValidator::new(Arc::new(FixedCommission(commission)))
    }

    fn balances(pairs: &[(&str, Decimal)]) -> Vec<CurrencyBalance> {
        pairs
            .iter()
            .map(|(code, amount)| CurrencyBalance::new(*code, *amount))
            .collect()
    }

    fn snapshot() -> RateSnapshot {
        RateSnapshot::from_pairs("EUR", Utc::now(), vec![("USD", dec!(1.1))])
    }

    #[test]
    fn missing_selling_currency_is_reported_first() {
        let validator = validator(Decimal::ZERO);
        let balances = balances(&[("USD", dec!(0))]);

        // Amount is zero as well; the missing-currency rule still wins.
        let result = validator
            .validate("EUR", "USD", Decimal::ZERO, Some(&snapshot()), &balances)
            .unwrap();

        assert_eq!(
            result,
            Err(ValidationError::CurrencyNotFound("EUR".to_string()))
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "Please add the currency 'EUR' to your account before proceeding"
        );
    }

    #[test]
    fn zero_amount_is_invalid() {
        let validator = validator(Decimal::ZERO);
        let balances = balances(&[("EUR", dec!(1000))]);

        let result = validator
            .validate("EUR", "USD", Decimal::ZERO, Some(&snapshot()), &balances)
            .unwrap();

        assert_eq!(result, Err(ValidationError::InvalidAmount));
    }

    #[test]
    fn negative_amount_is_invalid() {
        let validator = validator(Decimal::ZERO);
        let balances = balances(&[("EUR", dec!(1000))]);

        let result = validator
            .validate("EUR", "USD", dec!(-5), Some(&snapshot()), &balances)
            .unwrap();

        assert_eq!(result, Err(ValidationError::InvalidAmount));
    }

    #[test]
    fn balance_below_amount_plus_commission_is_insufficient() {
        let validator = validator(dec!(0.7));
        let balances = balances(&[("EUR", dec!(100.69))]);

        let result = validator
            .validate("EUR", "USD", dec!(100), Some(&snapshot()), &balances)
            .unwrap();

        assert_eq!(result, Err(ValidationError::InsufficientBalance));
    }

    #[test]
    fn balance_equal_to_amount_plus_commission_is_sufficient() {
        let validator = validator(dec!(0.7));
        let balances = balances(&[("EUR", dec!(100.7))]);

        let result = validator
            .validate("EUR", "USD", dec!(100), Some(&snapshot()), &balances)
            .unwrap();

        assert_eq!(result, Ok(()));
    }

    #[test]
    fn insufficiency_is_reported_before_same_currency() {
        let validator = validator(Decimal::ZERO);
        let balances = balances(&[("EUR", dec!(10))]);

        let result = validator
            .validate("EUR", "EUR", dec!(100), Some(&snapshot()), &balances)
            .unwrap();

        assert_eq!(result, Err(ValidationError::InsufficientBalance));
    }

    #[test]
    fn same_currency_transaction_is_rejected() {
        let validator = validator(Decimal::ZERO);
        let balances = balances(&[("EUR", dec!(1000))]);

        let result = validator
            .validate("EUR", "EUR", dec!(100), Some(&snapshot()), &balances)
            .unwrap();

        assert_eq!(result, Err(ValidationError::SameCurrencyTransaction));
    }

    #[test]
    fn missing_snapshot_is_rejected_last() {
        let validator = validator(Decimal::ZERO);
        let balances = balances(&[("EUR", dec!(1000))]);

        let result = validator
            .validate("EUR", "USD", dec!(100), None, &balances)
            .unwrap();

        assert_eq!(result, Err(ValidationError::RatesUnavailable));
    }

    #[test]
    fn valid_proposal_passes() {
        let validator = validator(dec!(0.7));
        let balances = balances(&[("EUR", dec!(1000))]);

        let result = validator
            .validate("EUR", "USD", dec!(100), Some(&snapshot()), &balances)
            .unwrap();

        assert_eq!(result, Ok(()));
    }
}
