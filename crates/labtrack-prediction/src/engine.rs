use chrono::{Duration, NaiveDate};

use labtrack_core::context::LifecycleContext;
use labtrack_core::errors::LabResult;
use labtrack_core::models::Equipment;
use labtrack_decay::ObsolescenceEngine;

use crate::trend::{FailureProjection, LinearTrend};

/// Horizon assumed when the trend is flat or improving: ten years out.
pub const FLAT_TREND_HORIZON_DAYS: i64 = 3650;

/// Fits a wear trend from three anchor points — purchase day, the halfway
/// mark, and today — and extrapolates to score 1.0.
///
/// The mid anchor is deliberately placed below half the current score
/// (score/2.1) so the fitted slope steepens toward the present.
pub struct FailurePredictor {
    engine: ObsolescenceEngine,
}

impl FailurePredictor {
    pub fn new() -> Self {
        Self {
            engine: ObsolescenceEngine::new(),
        }
    }

    pub fn predict(
        &self,
        equipment: &Equipment,
        ctx: &LifecycleContext,
    ) -> LabResult<FailureProjection> {
        // A full-date parse failure (valid year, malformed month/day) falls
        // back to one assumed year of use; a bad year still fails below,
        // in the score computation.
        let purchase = NaiveDate::parse_from_str(&equipment.purchase_date, "%Y-%m-%d")
            .unwrap_or_else(|_| ctx.today() - Duration::days(365));
        let days_in_service = (ctx.today() - purchase).num_days().max(1) as f64;

        let score = self.engine.score(equipment, ctx)?.value();

        let samples = [
            (0.0, 0.0),
            (days_in_service / 2.0, score / 2.1),
            (days_in_service, score),
        ];
        let trend = LinearTrend::fit(&samples);

        let days_to_failure = trend
            .days_until(1.0)
            .map(|d| d as i64)
            .unwrap_or(FLAT_TREND_HORIZON_DAYS);

        let estimated_failure_date = purchase + Duration::days(days_to_failure);
        Ok(FailureProjection {
            estimated_failure_date,
            days_remaining: (estimated_failure_date - ctx.today()).num_days(),
            trend,
        })
    }
}

impl Default for FailurePredictor {
    fn default() -> Self {
        Self::new()
    }
}
