use crate::errors::LabResult;
use crate::models::EquipmentRecord;

/// The narrow persistence seam the surrounding application implements
/// against its hosted database. The core exchanges generic records only;
/// queries, retries, and timeouts live behind this boundary.
///
/// An empty inventory is a valid result, not an error.
pub trait EquipmentStore: Send + Sync {
    fn save(&self, record: &EquipmentRecord) -> LabResult<()>;
    fn fetch_all(&self) -> LabResult<Vec<EquipmentRecord>>;
    fn update(&self, record: &EquipmentRecord) -> LabResult<()>;
}
