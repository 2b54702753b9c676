use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::serialize_decimal_display;

/// A proposed currency conversion, constructed per user action.
///
/// Proposals are ephemeral: they are validated, possibly completed, and
/// discarded. Nothing about a proposal is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeProposal {
    pub selling_code: String,
    pub buying_code: String,
    pub selling_amount: Decimal,
}

impl ExchangeProposal {
    pub fn new(
        selling_code: impl Into<String>,
        buying_code: impl Into<String>,
        selling_amount: Decimal,
    ) -> Self {
        Self {
            selling_code: selling_code.into(),
            buying_code: buying_code.into(),
            selling_amount,
        }
    }
}

/// How the commission hits the selling balance when an exchange completes.
///
/// The fee is always computed and reported on the outcome; whether it is
/// also debited is the integrating application's call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommissionTreatment {
    /// Report the commission but debit only the sold amount.
    #[default]
    Informational,
    /// Debit the sold amount plus the commission from the selling balance.
    DeductFromSelling,
}

/// The applied effects of one completed exchange.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeOutcome {
    pub selling_code: String,
    pub buying_code: String,
    #[serde(serialize_with = "serialize_decimal_display")]
    pub selling_amount: Decimal,
    /// Amount credited to the buying balance, at full precision
    /// internally and display precision on the wire.
    #[serde(serialize_with = "serialize_decimal_display")]
    pub converted_amount: Decimal,
    /// Commission computed for this exchange; debited only under
    /// [`CommissionTreatment::DeductFromSelling`].
    #[serde(serialize_with = "serialize_decimal_display")]
    pub commission: Decimal,
    /// What was actually subtracted from the selling balance.
    #[serde(serialize_with = "serialize_decimal_display")]
    pub debited_amount: Decimal,
    /// Value of the transaction counter after this exchange.
    pub transaction_number: u64,
}
