use chrono::NaiveDate;

/// Straight line fitted through wear samples: `score = slope × days + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTrend {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearTrend {
    /// Ordinary least squares over `(days, score)` samples.
    ///
    /// Degenerate inputs (fewer than two samples, or all samples on the
    /// same day) yield a flat trend rather than a division by zero.
    pub fn fit(samples: &[(f64, f64)]) -> Self {
        if samples.len() < 2 {
            return Self {
                slope: 0.0,
                intercept: samples.first().map(|&(_, y)| y).unwrap_or(0.0),
            };
        }

        let n = samples.len() as f64;
        let mean_x = samples.iter().map(|&(x, _)| x).sum::<f64>() / n;
        let mean_y = samples.iter().map(|&(_, y)| y).sum::<f64>() / n;

        let sxx: f64 = samples.iter().map(|&(x, _)| (x - mean_x).powi(2)).sum();
        if sxx == 0.0 {
            return Self {
                slope: 0.0,
                intercept: mean_y,
            };
        }
        let sxy: f64 = samples
            .iter()
            .map(|&(x, y)| (x - mean_x) * (y - mean_y))
            .sum();

        let slope = sxy / sxx;
        Self {
            slope,
            intercept: mean_y - slope * mean_x,
        }
    }

    /// Days (from the trend's origin) at which the line reaches `target`.
    /// `None` for a flat or improving trend.
    pub fn days_until(&self, target: f64) -> Option<f64> {
        if self.slope <= 0.0 {
            return None;
        }
        Some((target - self.intercept) / self.slope)
    }
}

/// Extrapolated failure point for one piece of equipment.
#[derive(Debug, Clone, PartialEq)]
pub struct FailureProjection {
    pub estimated_failure_date: NaiveDate,
    /// Days between the context date and the estimated failure.
    /// Negative when the projection is already in the past.
    pub days_remaining: i64,
    pub trend: LinearTrend,
}
