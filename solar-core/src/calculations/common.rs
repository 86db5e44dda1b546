//! Common utility functions for solar financial calculations.

use rust_decimal::Decimal;

/// Rounds a currency amount to exactly two decimal places using half-up
/// rounding. Values at exactly 0.005 round away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use solar_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to one decimal place, half-up. The payback period is quoted to a
/// single fraction digit.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use solar_core::calculations::common::round_tenths;
///
/// assert_eq!(round_tenths(dec!(3.88)), dec!(3.9));
/// assert_eq!(round_tenths(dec!(0.55)), dec!(0.6));
/// ```
pub fn round_tenths(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(49999.994));

        assert_eq!(result, dec!(49999.99));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(49999.995));

        assert_eq!(result, dec!(50000.00));
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        let result = round_half_up(dec!(36000.00));

        assert_eq!(result, dec!(36000.00));
    }

    // =========================================================================
    // round_tenths tests
    // =========================================================================

    #[test]
    fn round_tenths_rounds_down_below_midpoint() {
        let result = round_tenths(dec!(3.84));

        assert_eq!(result, dec!(3.8));
    }

    #[test]
    fn round_tenths_rounds_up_at_midpoint() {
        let result = round_tenths(dec!(3.85));

        assert_eq!(result, dec!(3.9));
    }

    #[test]
    fn round_tenths_handles_zero() {
        let result = round_tenths(dec!(0.0));

        assert_eq!(result, dec!(0.0));
    }

    #[test]
    fn round_tenths_handles_repeating_quotients() {
        let result = round_tenths(dec!(20000) / dec!(36000));

        assert_eq!(result, dec!(0.6));
    }
}
