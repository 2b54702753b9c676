use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::serialize_decimal_display;

/// A currency balance owned by the account, keyed by its ISO-like code.
///
/// Balances are mutated only through [`crate::ledger::AccountLedger`]
/// and are created lazily on the first credit of an unseen code. The
/// amount never goes negative through a validated exchange; the
/// validator checks sufficiency before any debit is applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyBalance {
    pub currency: String,
    #[serde(serialize_with = "serialize_decimal_display")]
    pub amount: Decimal,
}

impl CurrencyBalance {
    pub fn new(currency: impl Into<String>, amount: Decimal) -> Self {
        Self {
            currency: currency.into(),
            amount,
        }
    }
}
