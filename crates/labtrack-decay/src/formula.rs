use labtrack_core::constants::{DECOMMISSIONED_SCORE, FAILED_SCORE};
use labtrack_core::context::LifecycleContext;
use labtrack_core::errors::LabResult;
use labtrack_core::models::{Equipment, EquipmentStatus};

/// The score override ladder.
///
/// ```text
/// no strategy        -> 0.0
/// DECOMMISSIONED     -> 1.0   (outranks everything, checked first)
/// FAILED             -> 0.98
/// otherwise          -> min(strategy output, 1.0)
/// ```
///
/// An invalid purchase date propagates as a typed error before any status
/// override is applied.
pub fn compute(equipment: &Equipment, ctx: &LifecycleContext) -> LabResult<f64> {
    let Some(strategy) = equipment.strategy.as_deref() else {
        // Configuration absence is a defined fallback, not an error.
        return Ok(0.0);
    };

    let theoretical = strategy.calculate(&equipment.purchase_date, ctx.today())?;

    Ok(match equipment.status {
        EquipmentStatus::Decommissioned => DECOMMISSIONED_SCORE,
        EquipmentStatus::Failed => FAILED_SCORE,
        _ => theoretical.min(1.0),
    })
}

/// Each step of the ladder, for debugging/observability.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    /// Raw strategy output before any override. 0.0 when no strategy.
    pub theoretical: f64,
    /// Status in force at computation time.
    pub status: EquipmentStatus,
    /// The pinned value applied by the status override, if one fired.
    pub pinned: Option<f64>,
    pub final_score: f64,
}

/// Compute the score with a full breakdown of the ladder.
pub fn compute_breakdown(
    equipment: &Equipment,
    ctx: &LifecycleContext,
) -> LabResult<ScoreBreakdown> {
    let theoretical = match equipment.strategy.as_deref() {
        Some(strategy) => strategy.calculate(&equipment.purchase_date, ctx.today())?,
        None => 0.0,
    };

    let pinned = match equipment.status {
        EquipmentStatus::Decommissioned if equipment.strategy.is_some() => {
            Some(DECOMMISSIONED_SCORE)
        }
        EquipmentStatus::Failed if equipment.strategy.is_some() => Some(FAILED_SCORE),
        _ => None,
    };

    Ok(ScoreBreakdown {
        theoretical,
        status: equipment.status,
        pinned,
        final_score: pinned.unwrap_or_else(|| theoretical.min(1.0)),
    })
}
