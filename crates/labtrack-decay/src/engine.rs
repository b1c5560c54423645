use labtrack_core::context::LifecycleContext;
use labtrack_core::errors::LabResult;
use labtrack_core::models::{Equipment, ObsolescenceScore};

use crate::formula::{self, ScoreBreakdown};

/// Obsolescence engine: the score formula packaged behind one entry point,
/// with batch support for dashboard loads.
#[derive(Debug, Default)]
pub struct ObsolescenceEngine;

impl ObsolescenceEngine {
    pub fn new() -> Self {
        Self
    }

    /// Current score for one piece of equipment.
    pub fn score(
        &self,
        equipment: &Equipment,
        ctx: &LifecycleContext,
    ) -> LabResult<ObsolescenceScore> {
        Ok(ObsolescenceScore::new(formula::compute(equipment, ctx)?))
    }

    /// Score with the full override-ladder breakdown.
    pub fn score_breakdown(
        &self,
        equipment: &Equipment,
        ctx: &LifecycleContext,
    ) -> LabResult<ScoreBreakdown> {
        formula::compute_breakdown(equipment, ctx)
    }

    /// Score a whole fleet. Per-unit results are independent: one invalid
    /// purchase date does not poison its neighbors.
    pub fn score_batch(
        &self,
        fleet: &[Equipment],
        ctx: &LifecycleContext,
    ) -> Vec<LabResult<ObsolescenceScore>> {
        fleet.iter().map(|e| self.score(e, ctx)).collect()
    }
}
