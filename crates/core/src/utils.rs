//! Shared helpers for presentation-boundary rounding.
//!
//! Internal arithmetic stays at full `Decimal` precision; amounts are
//! rounded to two decimal places only when they leave the engine, to
//! avoid compounding rounding error across chained conversions.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serializer;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Rounds a monetary amount to display precision (two decimal places,
/// midpoint away from zero).
pub fn round_to_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(DISPLAY_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero)
}

/// Serializes a `Decimal` rounded to display precision.
///
/// Used on domain models that cross the presentation boundary, mirroring
/// the rule that rounding happens at serialization time only.
pub fn serialize_decimal_display<S>(decimal: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut rounded = round_to_display(*decimal);
    rounded.rescale(DISPLAY_DECIMAL_PRECISION);
    serializer.serialize_str(&rounded.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rounds_half_up_to_two_places() {
        assert_eq!(round_to_display(dec!(110.005)), dec!(110.01));
        assert_eq!(round_to_display(dec!(0.7)), dec!(0.7));
        assert_eq!(round_to_display(dec!(899.2999)), dec!(899.30));
    }
}
