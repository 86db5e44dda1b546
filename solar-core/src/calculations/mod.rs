//! Solar sizing and savings calculations.
//!
//! This module provides the estimator that converts a monthly electricity
//! bill into a recommended system size with its financial projection, plus
//! the derived multi-year savings series used by display surfaces.

pub mod common;
pub mod estimator;
pub mod projection;

pub use estimator::{SolarEstimator, SolarEstimatorConfig, SolarEstimatorError};
pub use projection::{PROJECTION_HORIZONS, ProjectionPoint, savings_projection};
