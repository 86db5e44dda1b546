pub mod calculations;
pub mod models;

pub use calculations::estimator::{SolarEstimator, SolarEstimatorConfig, SolarEstimatorError};
pub use models::*;
