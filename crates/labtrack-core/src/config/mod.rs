//! Runtime configuration. Every field has a default wired to the canonical
//! business-rule numbers in [`defaults`], so an empty TOML document yields
//! the reference behavior.

pub mod decay_config;
pub mod defaults;
pub mod lifecycle_config;

pub use decay_config::DecayConfig;
pub use lifecycle_config::LifecycleConfig;

use serde::{Deserialize, Serialize};

use crate::errors::LabResult;

/// Top-level configuration for the labtrack core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    pub decay: DecayConfig,
    pub lifecycle: LifecycleConfig,
}

impl LabConfig {
    /// Parse from a TOML document. Missing sections and fields take defaults.
    pub fn from_toml_str(s: &str) -> LabResult<Self> {
        Ok(toml::from_str(s)?)
    }
}
