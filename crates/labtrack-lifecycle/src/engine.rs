use labtrack_core::config::LifecycleConfig;
use labtrack_core::context::LifecycleContext;
use labtrack_core::errors::LabResult;
use labtrack_core::models::{Equipment, EquipmentStatus, Incident, InspectionFinding};

use crate::threshold;
use crate::transitions;

/// Lifecycle engine: the operations the dashboard drives against a single
/// piece of equipment. Each one is synchronous and touches only the
/// equipment it is handed.
#[derive(Debug, Clone, Default)]
pub struct LifecycleEngine {
    config: LifecycleConfig,
}

impl LifecycleEngine {
    pub fn new(config: LifecycleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LifecycleConfig {
        &self.config
    }

    /// Manual user report: OPERATIONAL -> REPORTED, plus the complaint
    /// incident itself.
    pub fn report_issue(
        &self,
        equipment: &mut Equipment,
        detail: impl Into<String>,
        ctx: &LifecycleContext,
    ) -> LabResult<()> {
        transitions::apply(equipment, EquipmentStatus::Reported)?;
        equipment.register_incident(detail, ctx);
        Ok(())
    }

    /// Triage confirmed the fault: REPORTED -> UNDER_MAINTENANCE.
    pub fn confirm_triage(
        &self,
        equipment: &mut Equipment,
        ctx: &LifecycleContext,
    ) -> LabResult<()> {
        transitions::apply(equipment, EquipmentStatus::UnderMaintenance)?;
        equipment.register_incident("Triage confirmed; unit admitted to maintenance", ctx);
        Ok(())
    }

    /// Repair finished: UNDER_MAINTENANCE -> OPERATIONAL. The closing
    /// incident carries the ALTA token, which later resets the complaint
    /// counter for this maintenance cycle.
    pub fn complete_repair(
        &self,
        equipment: &mut Equipment,
        report: impl Into<String>,
        ctx: &LifecycleContext,
    ) -> LabResult<()> {
        transitions::apply(equipment, EquipmentStatus::Operational)?;
        equipment.register_incident(format!("ALTA: {}", report.into()), ctx);
        Ok(())
    }

    /// Discard decision: REPORTED / UNDER_MAINTENANCE / FAILED ->
    /// DECOMMISSIONED. Terminal; reinstatement is not modeled.
    pub fn decommission(
        &self,
        equipment: &mut Equipment,
        ctx: &LifecycleContext,
    ) -> LabResult<()> {
        transitions::apply(equipment, EquipmentStatus::Decommissioned)?;
        equipment.register_incident("Unit withdrawn from service", ctx);
        tracing::info!(asset_id = %equipment.asset_id, "equipment decommissioned");
        Ok(())
    }

    /// Consume an automated visual-inspection result.
    ///
    /// A critical finding on an operational unit fails it on the spot;
    /// anything else is recorded as an annotated incident with no status
    /// change. Returns whether a transition occurred.
    pub fn apply_inspection(
        &self,
        equipment: &mut Equipment,
        finding: &InspectionFinding,
        ctx: &LifecycleContext,
    ) -> LabResult<bool> {
        let transitioned = finding.is_critical && equipment.status == EquipmentStatus::Operational;
        if transitioned {
            transitions::apply(equipment, EquipmentStatus::Failed)?;
        }

        let detail = if finding.is_critical {
            "Automated inspection reported a critical finding"
        } else {
            "Automated inspection completed"
        };
        equipment.push_incident(Incident::now(detail, ctx).with_verdict(finding.diagnosis.as_str()));

        if finding.is_critical {
            tracing::warn!(
                asset_id = %equipment.asset_id,
                diagnosis = %finding.diagnosis,
                transitioned,
                "critical inspection finding"
            );
        }
        Ok(transitioned)
    }

    /// Run the complaint-threshold guard. See [`threshold::check_complaint_threshold`].
    pub fn check_complaint_threshold(
        &self,
        equipment: &mut Equipment,
        ctx: &LifecycleContext,
    ) -> bool {
        threshold::check_complaint_threshold(equipment, ctx, &self.config)
    }
}
