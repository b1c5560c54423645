use labtrack_core::config::LifecycleConfig;
use labtrack_core::context::LifecycleContext;
use labtrack_core::models::{Equipment, EquipmentStatus, Incident};

use crate::transitions;

/// Complaint-threshold guard: enough recent complaints force the unit into
/// maintenance.
///
/// Returns `true` when an automatic transition occurred, so the caller can
/// notify, persist, and refresh. `false` means no side effects at all.
///
/// The scan is one forward pass over insertion order, NOT re-sorted by
/// embedded date — insertion order is trusted as a proxy for chronology.
/// An incident containing a cycle-reset token (a closed maintenance cycle)
/// zeroes the running counter and is itself not counted; unparsable
/// timestamps are skipped silently.
pub fn check_complaint_threshold(
    equipment: &mut Equipment,
    ctx: &LifecycleContext,
    config: &LifecycleConfig,
) -> bool {
    // Only fires from an active/reportable state.
    if !equipment.status.is_reportable() {
        return false;
    }

    let today = ctx.today();
    let mut counter: usize = 0;

    for incident in &equipment.incidents {
        let detail_upper = incident.detail.to_uppercase();
        if config
            .cycle_reset_tokens
            .iter()
            .any(|token| detail_upper.contains(token.as_str()))
        {
            counter = 0;
            continue;
        }
        let Some(date) = incident.date() else {
            continue;
        };
        if (today - date).num_days() <= config.complaint_window_days {
            counter += 1;
        }
    }

    if counter < config.complaint_threshold {
        return false;
    }

    // The guard already limited us to reportable states, so this edge is
    // always legal; a failure here would be a state-machine bug.
    if let Err(e) = transitions::apply(equipment, EquipmentStatus::UnderMaintenance) {
        tracing::error!(asset_id = %equipment.asset_id, error = %e, "threshold transition rejected");
        return false;
    }

    equipment.push_incident(Incident::now(
        format!(
            "SYSTEM ESCALATION: moved to maintenance after {counter} user complaints within {} days",
            config.complaint_window_days
        ),
        ctx,
    ));
    tracing::warn!(
        asset_id = %equipment.asset_id,
        complaints = counter,
        window_days = config.complaint_window_days,
        "complaint threshold reached; equipment auto-escalated to maintenance"
    );
    true
}
