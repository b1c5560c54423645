use std::sync::Arc;

use serde_json::json;

use labtrack_core::config::DecayConfig;
use labtrack_core::constants::DEFAULT_LOCATION;
use labtrack_core::context::LifecycleContext;
use labtrack_core::errors::{LabResult, MapError};
use labtrack_core::models::{
    Equipment, EquipmentRecord, EquipmentStatus, IncidentRecord, TechSpec,
};
use labtrack_core::traits::{DecayKind, DecayStrategy};
use labtrack_decay::formula;
use labtrack_decay::strategies::shared_pair;

use crate::factory::EquipmentFactory;

/// Data mapper between stored generic records and typed equipment.
///
/// Holds the two shared strategy instances; every mapped equipment
/// references one of them, never a private copy.
pub struct RecordMapper {
    factory: EquipmentFactory,
    linear: Arc<dyn DecayStrategy>,
    exponential: Arc<dyn DecayStrategy>,
}

impl RecordMapper {
    pub fn new(
        factory: EquipmentFactory,
        linear: Arc<dyn DecayStrategy>,
        exponential: Arc<dyn DecayStrategy>,
    ) -> Self {
        Self {
            factory,
            linear,
            exponential,
        }
    }

    /// Built-in kinds plus the default-configured strategy pair.
    pub fn with_defaults() -> Self {
        let (linear, exponential) = shared_pair(&DecayConfig::default());
        Self::new(EquipmentFactory::with_builtin_kinds(), linear, exponential)
    }

    /// Access the registry, e.g. to register an additional kind.
    pub fn factory_mut(&mut self) -> &mut EquipmentFactory {
        &mut self.factory
    }

    fn resolve_strategy(&self, name: Option<&str>) -> Arc<dyn DecayStrategy> {
        match DecayKind::from_name(name) {
            DecayKind::Linear => Arc::clone(&self.linear),
            DecayKind::Exponential => Arc::clone(&self.exponential),
        }
    }

    /// Map one record. Errors here mean the row is malformed; batch
    /// callers log and skip.
    pub fn map_row(&self, record: &EquipmentRecord) -> LabResult<Equipment> {
        let kind = record.kind.as_deref().ok_or_else(|| MapError::MissingField {
            asset_id: record.asset_id.clone(),
            field: "kind",
        })?;
        let strategy = self.resolve_strategy(record.strategy_name.as_deref());

        let mut equipment = self.factory.construct(kind, record, strategy)?;

        // Overlay persisted fields the constructor does not cover.
        equipment.location = record
            .location
            .clone()
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string());
        equipment.status = record
            .status
            .as_deref()
            .and_then(EquipmentStatus::parse_token)
            .unwrap_or(EquipmentStatus::Operational);
        equipment.incidents = record
            .incidents
            .iter()
            .cloned()
            .map(Into::into)
            .collect();

        Ok(equipment)
    }

    /// Map a batch of records, dropping malformed rows.
    ///
    /// Failures are emitted to the operator log channel, not raised: one
    /// bad row must not block the rest of the inventory. An empty input is
    /// a valid, displayable empty inventory.
    pub fn map_batch(&self, records: &[EquipmentRecord]) -> Vec<Equipment> {
        let mut mapped = Vec::with_capacity(records.len());
        for record in records {
            match self.map_row(record) {
                Ok(equipment) => mapped.push(equipment),
                Err(e) => {
                    tracing::warn!(
                        asset_id = %record.asset_id,
                        error = %e,
                        "skipping malformed equipment record"
                    );
                }
            }
        }
        mapped
    }

    /// Serialize equipment back to the stored shape.
    ///
    /// The score field is a denormalized convenience copy; it is `None`
    /// when the purchase date is invalid so the typed error path stays the
    /// single source of truth for that failure.
    pub fn to_record(&self, equipment: &Equipment, ctx: &LifecycleContext) -> EquipmentRecord {
        let tech_details = match &equipment.spec {
            TechSpec::Oscilloscope { bandwidth_mhz } => json!({ "bandwidth_mhz": bandwidth_mhz }),
            TechSpec::Multimeter { precision, digital } => {
                json!({ "precision": precision, "digital": digital })
            }
            TechSpec::InductionMotor {
                horsepower,
                voltage,
                rpm,
            } => json!({ "horsepower": horsepower, "voltage": voltage, "rpm": rpm }),
            TechSpec::Generic => json!({}),
        };

        EquipmentRecord {
            asset_id: equipment.asset_id.clone(),
            model: equipment.model.clone(),
            purchase_date: equipment.purchase_date.clone(),
            kind: Some(equipment.spec.kind().as_token().to_string()),
            tech_details,
            strategy_name: equipment.strategy_name().map(str::to_string),
            location: Some(equipment.location.clone()),
            status: Some(equipment.status.as_token().to_string()),
            incidents: equipment.incidents.iter().map(IncidentRecord::from).collect(),
            score: formula::compute(equipment, ctx).ok(),
        }
    }
}
