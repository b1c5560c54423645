use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a piece of equipment.
///
/// One enum everywhere: stored tokens are parsed once at the mapper
/// boundary and serialized back from the same variants. `Decommissioned`
/// is terminal; no transition leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EquipmentStatus {
    Operational,
    Reported,
    UnderMaintenance,
    Failed,
    Decommissioned,
    /// Legacy alias for [`Reported`](Self::Reported), retained so records
    /// written by old clients round-trip unchanged. Behaves like `Reported`
    /// in every rule.
    ReportedWithFailure,
}

impl EquipmentStatus {
    /// All variants for iteration.
    pub const ALL: [EquipmentStatus; 6] = [
        Self::Operational,
        Self::Reported,
        Self::UnderMaintenance,
        Self::Failed,
        Self::Decommissioned,
        Self::ReportedWithFailure,
    ];

    /// Canonical stored token for this status.
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Operational => "OPERATIONAL",
            Self::Reported => "REPORTED",
            Self::UnderMaintenance => "UNDER_MAINTENANCE",
            Self::Failed => "FAILED",
            Self::Decommissioned => "DECOMMISSIONED",
            Self::ReportedWithFailure => "REPORTED_WITH_FAILURE",
        }
    }

    /// Parse a stored token. Returns `None` for anything unrecognized; the
    /// mapper turns that into the `Operational` fallback rather than
    /// failing the row.
    pub fn parse_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_token() == token)
    }

    /// States from which the complaint-threshold guard may still fire.
    pub fn is_reportable(self) -> bool {
        matches!(
            self,
            Self::Operational | Self::Reported | Self::ReportedWithFailure
        )
    }

    /// Terminal state: nothing transitions out of it.
    pub fn is_terminal(self) -> bool {
        self == Self::Decommissioned
    }
}

impl fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}
