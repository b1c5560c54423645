pub mod equipment;
pub mod incident;
pub mod inspection;
pub mod record;
pub mod score;
pub mod status;
pub mod tech_spec;

pub use equipment::Equipment;
pub use incident::Incident;
pub use inspection::InspectionFinding;
pub use record::{EquipmentRecord, IncidentRecord};
pub use score::ObsolescenceScore;
pub use status::EquipmentStatus;
pub use tech_spec::{EquipmentKind, TechSpec};
