use serde::{Deserialize, Serialize};

/// Result shape consumed from the vision/classification collaborator.
///
/// The core only reads the boolean to drive status transitions; the image
/// itself never crosses this boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionFinding {
    pub diagnosis: String,
    pub is_critical: bool,
}
