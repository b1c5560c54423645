//! # labtrack-core
//!
//! Foundation crate for the labtrack equipment-maintenance system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod context;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LabConfig;
pub use context::LifecycleContext;
pub use errors::{LabError, LabResult};
pub use models::{
    Equipment, EquipmentKind, EquipmentRecord, EquipmentStatus, Incident, IncidentRecord,
    InspectionFinding, ObsolescenceScore, TechSpec,
};
pub use traits::{DecayKind, DecayStrategy, EquipmentStore};
