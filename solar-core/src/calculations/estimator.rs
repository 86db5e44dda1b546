//! Rooftop solar sizing and savings estimator.
//!
//! This module converts a monthly electricity bill into a recommended
//! system size and the financial projection a lead sees while moving the
//! bill slider. The arithmetic is a closed-form formula over regional
//! tariff and irradiance assumptions; every change to the bill recomputes
//! the whole estimate.
//!
//! # Calculation Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Units consumed per month = bill ÷ tariff per unit |
//! | 2    | System size (kW) = ⌈units ÷ (generation/kW/day × billing days)⌉ |
//! | 3    | Estimated cost = kW × cost per kW |
//! | 4    | Subsidy: ≤2 kW at full rate, reduced 3rd kW, flat cap beyond |
//! | 5    | Net cost = estimated cost − subsidy |
//! | 6    | Annual savings = units × 12 × tariff per unit |
//! | 7    | Payback = net cost ÷ annual savings, one decimal place |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use solar_core::calculations::{SolarEstimator, SolarEstimatorConfig};
//!
//! let estimator = SolarEstimator::new(SolarEstimatorConfig::default());
//! let estimate = estimator.estimate(dec!(8000)).unwrap();
//!
//! assert_eq!(estimate.system_size_kw, 9);
//! assert_eq!(estimate.estimated_cost, dec!(450000));
//! assert_eq!(estimate.subsidy_amount, dec!(78000));
//! assert_eq!(estimate.net_cost, dec!(372000));
//! assert_eq!(estimate.annual_savings, dec!(96000));
//! assert_eq!(estimate.payback_period_years, Some(dec!(3.9)));
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::{round_half_up, round_tenths};
use crate::models::SolarEstimate;

/// Errors that can occur while producing a solar estimate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolarEstimatorError {
    /// The tariff per unit must be positive.
    #[error("tariff per unit must be positive, got {0}")]
    InvalidTariff(Decimal),

    /// The generation rate per kW per day must be positive.
    #[error("generation rate must be positive, got {0}")]
    InvalidGenerationRate(Decimal),

    /// The billing period length must be positive.
    #[error("billing days must be positive, got {0}")]
    InvalidBillingDays(Decimal),

    /// The installed cost per kW must be positive.
    #[error("cost per kW must be positive, got {0}")]
    InvalidCostPerKw(Decimal),

    /// Subsidy amounts must be non-negative.
    #[error("subsidy amount must be non-negative, got {0}")]
    NegativeSubsidy(Decimal),

    /// The monthly bill must be non-negative; rejecting out-of-range input
    /// is otherwise the caller's job (the bounded slider).
    #[error("monthly bill must be non-negative, got {0}")]
    NegativeMonthlyBill(Decimal),

    /// The computed system size does not fit the supported range.
    #[error("system size {0} kW exceeds the supported range")]
    SystemSizeOutOfRange(Decimal),
}

/// Regional tariff and irradiance assumptions behind the estimate.
///
/// The defaults encode the fixed domain constants for the region served:
/// ₹8/unit tariff, 4 generation-units per kW per day over a 30-day billing
/// month, ₹50,000 installed cost per kW, and the residential subsidy
/// schedule (₹30,000 per kW for the first two kW, ₹18,000 for the third,
/// nothing beyond).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarEstimatorConfig {
    /// Electricity tariff in rupees per unit.
    pub tariff_per_unit: Decimal,

    /// Units generated per installed kW per day.
    pub generation_per_kw_day: Decimal,

    /// Days in a billing month.
    pub billing_days: Decimal,

    /// Installed cost per kW.
    pub cost_per_kw: Decimal,

    /// Subsidy per kW for the first two kilowatts.
    pub subsidy_per_kw: Decimal,

    /// Reduced subsidy for the third kilowatt.
    pub third_kw_subsidy: Decimal,
}

impl Default for SolarEstimatorConfig {
    fn default() -> Self {
        Self {
            tariff_per_unit: Decimal::from(8),
            generation_per_kw_day: Decimal::from(4),
            billing_days: Decimal::from(30),
            cost_per_kw: Decimal::from(50_000),
            subsidy_per_kw: Decimal::from(30_000),
            third_kw_subsidy: Decimal::from(18_000),
        }
    }
}

impl SolarEstimatorConfig {
    /// Maximum subsidy for a residential system: two full-rate kilowatts
    /// plus the reduced third. Sizes above three kW stay at this amount.
    pub fn subsidy_cap(&self) -> Decimal {
        Decimal::TWO * self.subsidy_per_kw + self.third_kw_subsidy
    }

    fn validate(&self) -> Result<(), SolarEstimatorError> {
        if self.tariff_per_unit <= Decimal::ZERO {
            return Err(SolarEstimatorError::InvalidTariff(self.tariff_per_unit));
        }
        if self.generation_per_kw_day <= Decimal::ZERO {
            return Err(SolarEstimatorError::InvalidGenerationRate(
                self.generation_per_kw_day,
            ));
        }
        if self.billing_days <= Decimal::ZERO {
            return Err(SolarEstimatorError::InvalidBillingDays(self.billing_days));
        }
        if self.cost_per_kw <= Decimal::ZERO {
            return Err(SolarEstimatorError::InvalidCostPerKw(self.cost_per_kw));
        }
        if self.subsidy_per_kw < Decimal::ZERO {
            return Err(SolarEstimatorError::NegativeSubsidy(self.subsidy_per_kw));
        }
        if self.third_kw_subsidy < Decimal::ZERO {
            return Err(SolarEstimatorError::NegativeSubsidy(self.third_kw_subsidy));
        }
        Ok(())
    }
}

/// Calculator turning a monthly bill into a [`SolarEstimate`].
///
/// Stateless between calls; the same bill always yields a structurally
/// identical estimate.
#[derive(Debug, Clone)]
pub struct SolarEstimator {
    config: SolarEstimatorConfig,
}

impl SolarEstimator {
    /// Creates an estimator over the given regional assumptions.
    pub fn new(config: SolarEstimatorConfig) -> Self {
        Self { config }
    }

    /// Produces the full estimate for one monthly bill.
    ///
    /// # Errors
    ///
    /// Returns [`SolarEstimatorError`] if the configuration is invalid or
    /// the bill is negative. A zero bill is accepted and yields a zero-size
    /// system with no payback period.
    pub fn estimate(
        &self,
        monthly_bill: Decimal,
    ) -> Result<SolarEstimate, SolarEstimatorError> {
        self.config.validate()?;
        if monthly_bill < Decimal::ZERO {
            return Err(SolarEstimatorError::NegativeMonthlyBill(monthly_bill));
        }

        let units_consumed = self.units_consumed(monthly_bill);
        let system_size_kw = self.system_size_kw(units_consumed)?;
        let estimated_cost = self.estimated_cost(system_size_kw);
        let subsidy_amount = self.subsidy_amount(system_size_kw);
        let net_cost = estimated_cost - subsidy_amount;
        let annual_savings = self.annual_savings(units_consumed);
        let payback_period_years = self.payback_period(net_cost, annual_savings);

        debug!(%monthly_bill, system_size_kw, "solar estimate computed");

        Ok(SolarEstimate {
            monthly_bill,
            system_size_kw,
            estimated_cost,
            subsidy_amount,
            net_cost,
            annual_savings,
            payback_period_years,
        })
    }

    /// Units of electricity the bill represents per month.
    fn units_consumed(
        &self,
        monthly_bill: Decimal,
    ) -> Decimal {
        monthly_bill / self.config.tariff_per_unit
    }

    /// Smallest whole-kW system whose monthly generation covers consumption.
    fn system_size_kw(
        &self,
        units_consumed: Decimal,
    ) -> Result<u32, SolarEstimatorError> {
        let monthly_generation_per_kw =
            self.config.generation_per_kw_day * self.config.billing_days;
        let size = (units_consumed / monthly_generation_per_kw).ceil();
        size.to_u32()
            .ok_or(SolarEstimatorError::SystemSizeOutOfRange(size))
    }

    fn estimated_cost(
        &self,
        system_size_kw: u32,
    ) -> Decimal {
        round_half_up(Decimal::from(system_size_kw) * self.config.cost_per_kw)
    }

    /// Tiered residential subsidy for the recommended size.
    fn subsidy_amount(
        &self,
        system_size_kw: u32,
    ) -> Decimal {
        match system_size_kw {
            0..=2 => round_half_up(Decimal::from(system_size_kw) * self.config.subsidy_per_kw),
            // The third kilowatt earns the reduced increment; nothing
            // accrues past it.
            _ => round_half_up(self.config.subsidy_cap()),
        }
    }

    /// Yearly savings, expressed via units so the tariff assumption stays
    /// visible in the formula.
    fn annual_savings(
        &self,
        units_consumed: Decimal,
    ) -> Decimal {
        round_half_up(units_consumed * Decimal::from(12) * self.config.tariff_per_unit)
    }

    fn payback_period(
        &self,
        net_cost: Decimal,
        annual_savings: Decimal,
    ) -> Option<Decimal> {
        if annual_savings <= Decimal::ZERO {
            warn!("annual savings are zero; payback period not applicable");
            return None;
        }
        Some(round_tenths(net_cost / annual_savings))
    }
}
