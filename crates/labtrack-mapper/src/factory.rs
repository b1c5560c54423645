use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use labtrack_core::errors::{LabResult, MapError};
use labtrack_core::models::{Equipment, EquipmentKind, EquipmentRecord, TechSpec};
use labtrack_core::traits::DecayStrategy;

/// Builds one equipment instance from a generic record and a resolved
/// strategy. Registered per discriminator string.
pub type ConstructorFn =
    Box<dyn Fn(&EquipmentRecord, Arc<dyn DecayStrategy>) -> LabResult<Equipment> + Send + Sync>;

/// Open constructor registry: discriminator string to constructor.
///
/// Closed over the known kinds by default; [`register`](Self::register) is
/// the extension point — a new subtype plugs in without touching the
/// mapper.
pub struct EquipmentFactory {
    constructors: HashMap<String, ConstructorFn>,
}

impl EquipmentFactory {
    /// Registry with no constructors at all. Mostly useful in tests.
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Registry seeded with the four built-in kinds.
    pub fn with_builtin_kinds() -> Self {
        let mut factory = Self::empty();

        factory.register(EquipmentKind::Oscilloscope.as_token(), |record, strategy| {
            let spec = TechSpec::Oscilloscope {
                bandwidth_mhz: get_f64(&record.tech_details, "bandwidth_mhz", 0.0),
            };
            base_equipment(record, spec, strategy)
        });
        factory.register(EquipmentKind::Multimeter.as_token(), |record, strategy| {
            let spec = TechSpec::Multimeter {
                precision: get_f64(&record.tech_details, "precision", 0.0),
                digital: get_bool(&record.tech_details, "digital", true),
            };
            base_equipment(record, spec, strategy)
        });
        factory.register(EquipmentKind::InductionMotor.as_token(), |record, strategy| {
            let spec = TechSpec::InductionMotor {
                horsepower: get_f64(&record.tech_details, "horsepower", 0.0),
                voltage: get_f64(&record.tech_details, "voltage", 0.0),
                rpm: get_u32(&record.tech_details, "rpm", 0),
            };
            base_equipment(record, spec, strategy)
        });
        factory.register(EquipmentKind::Generic.as_token(), |record, strategy| {
            base_equipment(record, TechSpec::Generic, strategy)
        });

        factory
    }

    /// Register (or replace) a constructor for a discriminator.
    pub fn register<F>(&mut self, kind: impl Into<String>, constructor: F)
    where
        F: Fn(&EquipmentRecord, Arc<dyn DecayStrategy>) -> LabResult<Equipment>
            + Send
            + Sync
            + 'static,
    {
        self.constructors.insert(kind.into(), Box::new(constructor));
    }

    /// Kinds currently registered.
    pub fn registered_kinds(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(|k| k.as_str())
    }

    /// Look up the constructor for `kind` and run it.
    pub fn construct(
        &self,
        kind: &str,
        record: &EquipmentRecord,
        strategy: Arc<dyn DecayStrategy>,
    ) -> LabResult<Equipment> {
        let constructor = self
            .constructors
            .get(kind)
            .ok_or_else(|| MapError::UnknownKind {
                kind: kind.to_string(),
            })?;
        constructor(record, strategy)
    }
}

impl Default for EquipmentFactory {
    fn default() -> Self {
        Self::with_builtin_kinds()
    }
}

/// Common construction path: identity fields checked, bare equipment built.
/// Location, status, and history are overlaid by the mapper afterwards.
fn base_equipment(
    record: &EquipmentRecord,
    spec: TechSpec,
    strategy: Arc<dyn DecayStrategy>,
) -> LabResult<Equipment> {
    if record.asset_id.is_empty() {
        return Err(MapError::MissingField {
            asset_id: String::new(),
            field: "asset_id",
        }
        .into());
    }
    if record.purchase_date.is_empty() {
        return Err(MapError::MissingField {
            asset_id: record.asset_id.clone(),
            field: "purchase_date",
        }
        .into());
    }
    Ok(Equipment::new(
        record.asset_id.clone(),
        record.model.clone(),
        record.purchase_date.clone(),
        spec,
        strategy,
    ))
}

// Missing or mistyped technical fields default instead of failing the row;
// they are display data, not engine inputs.

fn get_f64(details: &Value, key: &str, default: f64) -> f64 {
    details.get(key).and_then(Value::as_f64).unwrap_or(default)
}

fn get_bool(details: &Value, key: &str, default: bool) -> bool {
    details.get(key).and_then(Value::as_bool).unwrap_or(default)
}

fn get_u32(details: &Value, key: &str, default: u32) -> u32 {
    details
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(default)
}
