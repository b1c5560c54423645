use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use labtrack_core::config::DecayConfig;
use labtrack_core::errors::{DecayError, LabResult};
use labtrack_core::traits::DecayStrategy;

/// Year-granular age: `max(1, current_year − purchase_year)`.
///
/// Equipment purchased in December and January of the same year age
/// identically — an intentional coarse-grained simplification. A future
/// purchase year also floors to 1, never zero or negative.
fn age_years(purchase_date: &str, today: NaiveDate) -> LabResult<i32> {
    let year: i32 = purchase_date
        .split('-')
        .next()
        .and_then(|y| y.trim().parse().ok())
        .ok_or_else(|| DecayError::InvalidPurchaseDate {
            value: purchase_date.to_string(),
        })?;
    Ok((today.year() - year).max(1))
}

/// Constant annual depreciation: `min(age × rate, 1.0)`.
///
/// 5%/year by default, saturating at 20 years. Suits furniture and simple
/// mechanical equipment.
pub struct LinearDecay {
    annual_rate: f64,
}

impl LinearDecay {
    pub fn new(config: &DecayConfig) -> Self {
        Self {
            annual_rate: config.linear_annual_rate,
        }
    }

    pub fn shared(config: &DecayConfig) -> Arc<dyn DecayStrategy> {
        Arc::new(Self::new(config))
    }
}

impl Default for LinearDecay {
    fn default() -> Self {
        Self::new(&DecayConfig::default())
    }
}

impl DecayStrategy for LinearDecay {
    fn name(&self) -> &'static str {
        "Linear"
    }

    fn calculate(&self, purchase_date: &str, today: NaiveDate) -> LabResult<f64> {
        let age = age_years(purchase_date, today)? as f64;
        Ok((age * self.annual_rate).min(1.0))
    }
}

/// Accelerating technological obsolescence: `min((e^(k × age) − 1) / d, 1.0)`.
///
/// Near-zero for the first few years, then sharply accelerating; with the
/// default coefficients the curve saturates around age 19 and overtakes
/// the linear curve somewhere past age 8.
pub struct ExponentialDecay {
    coefficient: f64,
    divisor: f64,
}

impl ExponentialDecay {
    pub fn new(config: &DecayConfig) -> Self {
        Self {
            coefficient: config.exp_coefficient,
            divisor: config.exp_divisor,
        }
    }

    pub fn shared(config: &DecayConfig) -> Arc<dyn DecayStrategy> {
        Arc::new(Self::new(config))
    }
}

impl Default for ExponentialDecay {
    fn default() -> Self {
        Self::new(&DecayConfig::default())
    }
}

impl DecayStrategy for ExponentialDecay {
    fn name(&self) -> &'static str {
        "Exponential"
    }

    fn calculate(&self, purchase_date: &str, today: NaiveDate) -> LabResult<f64> {
        let age = age_years(purchase_date, today)? as f64;
        let index = ((self.coefficient * age).exp() - 1.0) / self.divisor;
        Ok(index.min(1.0))
    }
}

/// The two shared strategy instances the mapper injects, built from one
/// config. Strategies are stateless, so a single pair serves the fleet.
pub fn shared_pair(config: &DecayConfig) -> (Arc<dyn DecayStrategy>, Arc<dyn DecayStrategy>) {
    (LinearDecay::shared(config), ExponentialDecay::shared(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
    }

    #[test]
    fn age_floors_at_one_for_new_and_future_dates() {
        assert_eq!(age_years("2026-01-15", today()).unwrap(), 1);
        assert_eq!(age_years("2030-01-01", today()).unwrap(), 1);
    }

    #[test]
    fn age_is_year_difference_only() {
        // December and January purchases of the same year age identically.
        assert_eq!(age_years("2020-12-31", today()).unwrap(), 6);
        assert_eq!(age_years("2020-01-01", today()).unwrap(), 6);
    }

    #[test]
    fn unparsable_year_is_a_typed_error() {
        assert!(age_years("not-a-date", today()).is_err());
        assert!(age_years("", today()).is_err());
    }

    #[test]
    fn linear_one_year_is_five_percent() {
        let linear = LinearDecay::default();
        let got = linear.calculate("2025-06-01", today()).unwrap();
        assert!((got - 0.05).abs() < 1e-12);
    }

    #[test]
    fn linear_saturates_at_twenty_years() {
        let linear = LinearDecay::default();
        assert_eq!(linear.calculate("2006-03-10", today()).unwrap(), 1.0);
        assert_eq!(linear.calculate("1990-03-10", today()).unwrap(), 1.0);
    }

    #[test]
    fn exponential_overtakes_linear_by_age_ten() {
        let linear = LinearDecay::default();
        let exponential = ExponentialDecay::default();
        let purchase = "2016-01-01"; // age 10
        let lin = linear.calculate(purchase, today()).unwrap();
        let exp = exponential.calculate(purchase, today()).unwrap();
        assert!(exp > lin, "expected {exp} > {lin} at age 10");
    }
}
