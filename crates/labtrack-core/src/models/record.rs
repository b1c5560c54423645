use serde::{Deserialize, Serialize};

use crate::models::Incident;

/// Stored incident shape as exchanged with the storage collaborator.
/// Old writers used a `date` key for the timestamp; both are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentRecord {
    #[serde(alias = "date")]
    pub timestamp: String,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_verdict: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl From<&Incident> for IncidentRecord {
    fn from(i: &Incident) -> Self {
        Self {
            timestamp: i.timestamp.clone(),
            detail: i.detail.clone(),
            ai_verdict: i.ai_verdict.clone(),
            photo_url: i.photo_url.clone(),
        }
    }
}

impl From<IncidentRecord> for Incident {
    fn from(r: IncidentRecord) -> Self {
        Self {
            timestamp: r.timestamp,
            detail: r.detail,
            ai_verdict: r.ai_verdict,
            photo_url: r.photo_url,
        }
    }
}

/// Generic stored row exchanged with the storage collaborator in both
/// directions.
///
/// Inbound, almost everything is optional or defaulted — a malformed row
/// must fail during mapping (where it can be skipped) rather than during
/// deserialization (where it would sink the whole batch). Outbound, the
/// mapper fills every field it knows, including a denormalized score copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    #[serde(default)]
    pub asset_id: String,
    #[serde(default)]
    pub model: String,
    /// ISO `YYYY-MM-DD`, kept as stored; validity is checked at score time.
    #[serde(default)]
    pub purchase_date: String,
    /// Subtype discriminator selecting the factory constructor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Flat map of subtype-specific technical fields.
    #[serde(default)]
    pub tech_details: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Status token; unresolvable tokens fall back to OPERATIONAL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub incidents: Vec<IncidentRecord>,
    /// Denormalized convenience copy of the computed score, written on
    /// serialization only. `None` when the purchase date is invalid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}
