use labtrack_core::errors::TransitionError;
use labtrack_core::models::{Equipment, EquipmentStatus};
use labtrack_core::models::EquipmentStatus::*;

/// Whether the state machine permits `from -> to`.
///
/// ```text
/// OPERATIONAL ──report──▶ REPORTED ──triage──▶ UNDER_MAINTENANCE ──repair──▶ OPERATIONAL
/// OPERATIONAL ──critical inspection──▶ FAILED
/// OPERATIONAL/REPORTED ──complaint threshold──▶ UNDER_MAINTENANCE
/// REPORTED/UNDER_MAINTENANCE/FAILED ──discard──▶ DECOMMISSIONED (terminal)
/// ```
///
/// The legacy `REPORTED_WITH_FAILURE` alias sits on every edge `REPORTED`
/// sits on. Reinstatement from `DECOMMISSIONED` is not modeled.
pub fn is_allowed(from: EquipmentStatus, to: EquipmentStatus) -> bool {
    matches!(
        (from, to),
        (Operational, Reported)
            | (Operational, Failed)
            | (Operational, UnderMaintenance)
            | (Reported | ReportedWithFailure, UnderMaintenance)
            | (UnderMaintenance, Operational)
            | (Reported | ReportedWithFailure | UnderMaintenance | Failed, Decommissioned)
    )
}

/// Apply a transition, or explain why it is illegal.
pub fn apply(equipment: &mut Equipment, to: EquipmentStatus) -> Result<(), TransitionError> {
    let from = equipment.status;
    if from.is_terminal() {
        return Err(TransitionError::Terminal {
            asset_id: equipment.asset_id.clone(),
        });
    }
    if !is_allowed(from, to) {
        return Err(TransitionError::Invalid { from, to });
    }
    equipment.status = to;
    tracing::debug!(asset_id = %equipment.asset_id, %from, %to, "status transition");
    Ok(())
}
