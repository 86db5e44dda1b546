use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Financial projection for a recommended rooftop system.
///
/// Recreated from scratch on every change to the monthly bill; no identity
/// persists between recomputations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarEstimate {
    pub monthly_bill: Decimal,
    pub system_size_kw: u32,
    pub estimated_cost: Decimal,
    pub subsidy_amount: Decimal,
    pub net_cost: Decimal,
    pub annual_savings: Decimal,

    /// Years until cumulative savings cover the net cost, to one decimal
    /// place. `None` when annual savings are zero (a zero bill): the payback
    /// period is not applicable rather than infinite.
    pub payback_period_years: Option<Decimal>,
}
