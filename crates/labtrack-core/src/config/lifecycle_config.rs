use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::CYCLE_RESET_TOKENS;

/// Lifecycle-engine configuration: the complaint-threshold escalation rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Qualifying complaints that force the maintenance transition.
    pub complaint_threshold: usize,
    /// Trailing window (days, inclusive) in which complaints count.
    pub complaint_window_days: i64,
    /// Incident-detail tokens that reset the running complaint counter.
    /// Matched case-insensitively against the uppercased detail text.
    pub cycle_reset_tokens: Vec<String>,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            complaint_threshold: defaults::DEFAULT_COMPLAINT_THRESHOLD,
            complaint_window_days: defaults::DEFAULT_COMPLAINT_WINDOW_DAYS,
            cycle_reset_tokens: CYCLE_RESET_TOKENS.iter().map(|t| t.to_string()).collect(),
        }
    }
}
