//! Cumulative savings projection over the standard display horizons.
//!
//! Derived from a [`SolarEstimate`] for the savings chart: each point is
//! the total saved by that year minus the net system cost. Recomputed per
//! estimate; nothing is cached between calls.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::SolarEstimate;

/// Horizons, in years, shown on the savings chart.
pub const PROJECTION_HORIZONS: [u32; 4] = [1, 5, 10, 25];

/// One bar of the projection series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Axis label, e.g. "Year 5".
    pub label: String,
    pub horizon_years: u32,
    pub annual_savings: Decimal,
    /// Savings accumulated by the horizon minus the net system cost;
    /// negative until the system has paid for itself.
    pub cumulative_savings: Decimal,
    /// Whether cumulative savings have overtaken the system cost.
    pub cash_flow_positive: bool,
}

/// Builds the ordered projection series for one estimate.
pub fn savings_projection(estimate: &SolarEstimate) -> Vec<ProjectionPoint> {
    PROJECTION_HORIZONS
        .iter()
        .map(|&years| {
            let cumulative =
                estimate.annual_savings * Decimal::from(years) - estimate.net_cost;
            ProjectionPoint {
                label: format!("Year {years}"),
                horizon_years: years,
                annual_savings: estimate.annual_savings,
                cumulative_savings: cumulative,
                cash_flow_positive: cumulative > Decimal::ZERO,
            }
        })
        .collect()
}
