use serde::{Deserialize, Serialize};

use super::defaults;

/// Decay-strategy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Depreciation fraction added per year of age by the linear strategy.
    pub linear_annual_rate: f64,
    /// Exponent coefficient of the exponential strategy.
    pub exp_coefficient: f64,
    /// Divisor normalizing the exponential curve into [0, 1].
    pub exp_divisor: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            linear_annual_rate: defaults::DEFAULT_LINEAR_ANNUAL_RATE,
            exp_coefficient: defaults::DEFAULT_EXP_COEFFICIENT,
            exp_divisor: defaults::DEFAULT_EXP_DIVISOR,
        }
    }
}
