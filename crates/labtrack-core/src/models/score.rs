use serde::{Deserialize, Serialize};
use std::fmt;

/// Obsolescence score clamped to [0.0, 1.0].
/// 1.0 means fully obsolete or withdrawn from service.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ObsolescenceScore(f64);

impl ObsolescenceScore {
    /// Saturated score pinned for decommissioned equipment.
    pub const SATURATED: f64 = 1.0;
    /// Near-saturated score pinned for failed equipment.
    pub const FAILED_PIN: f64 = 0.98;
    /// Dashboard threshold above which a unit renders as critical.
    pub const CRITICAL: f64 = 0.75;
    /// Dashboard threshold above which a unit renders as worn.
    pub const WORN: f64 = 0.4;

    /// Create a new score, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_critical(self) -> bool {
        self.0 >= Self::CRITICAL
    }

    pub fn is_worn(self) -> bool {
        self.0 >= Self::WORN
    }
}

impl Default for ObsolescenceScore {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for ObsolescenceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<f64> for ObsolescenceScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<ObsolescenceScore> for f64 {
    fn from(s: ObsolescenceScore) -> Self {
        s.0
    }
}
