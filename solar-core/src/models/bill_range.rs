use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Bounds of the monthly-bill input control.
///
/// The estimator itself only requires a non-negative bill; callers feeding
/// it from the slider clamp to this range first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillRange {
    pub min: Decimal,
    pub max: Decimal,
    pub step: Decimal,
}

impl Default for BillRange {
    fn default() -> Self {
        Self {
            min: Decimal::from(1_000),
            max: Decimal::from(20_000),
            step: Decimal::from(500),
        }
    }
}

impl BillRange {
    /// Clamps a raw amount into the control's range.
    pub fn clamp(&self, amount: Decimal) -> Decimal {
        amount.clamp(self.min, self.max)
    }

    /// Clamps and snaps an amount to the nearest step mark, half-up.
    pub fn snap(&self, amount: Decimal) -> Decimal {
        let clamped = self.clamp(amount);
        let steps = ((clamped - self.min) / self.step)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        self.min + steps * self.step
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn clamp_raises_amounts_below_minimum() {
        let range = BillRange::default();

        assert_eq!(range.clamp(dec!(250)), dec!(1000));
    }

    #[test]
    fn clamp_lowers_amounts_above_maximum() {
        let range = BillRange::default();

        assert_eq!(range.clamp(dec!(95000)), dec!(20000));
    }

    #[test]
    fn clamp_passes_in_range_amounts_through() {
        let range = BillRange::default();

        assert_eq!(range.clamp(dec!(3000)), dec!(3000));
    }

    #[test]
    fn snap_preserves_step_marks() {
        let range = BillRange::default();

        assert_eq!(range.snap(dec!(3500)), dec!(3500));
    }

    #[test]
    fn snap_rounds_to_nearest_mark() {
        let range = BillRange::default();

        assert_eq!(range.snap(dec!(3600)), dec!(3500));
        assert_eq!(range.snap(dec!(3800)), dec!(4000));
    }

    #[test]
    fn snap_rounds_midpoints_up() {
        let range = BillRange::default();

        assert_eq!(range.snap(dec!(3750)), dec!(4000));
    }
}
