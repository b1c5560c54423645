use serde::{Deserialize, Serialize};
use std::fmt;

/// Concrete equipment kind. Canonical discriminator strings select the
/// constructor in the mapper's factory registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentKind {
    Oscilloscope,
    Multimeter,
    InductionMotor,
    Generic,
}

impl EquipmentKind {
    pub const ALL: [EquipmentKind; 4] = [
        Self::Oscilloscope,
        Self::Multimeter,
        Self::InductionMotor,
        Self::Generic,
    ];

    /// Canonical discriminator string stored with each record.
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Oscilloscope => "Oscilloscope",
            Self::Multimeter => "Multimeter",
            Self::InductionMotor => "InductionMotor",
            Self::Generic => "Generic",
        }
    }
}

impl fmt::Display for EquipmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Subtype-specific technical attributes.
///
/// A tagged union instead of reflection-style attribute probing: the
/// variant IS the subtype, and the persistence layer matches on it rather
/// than asking "does this object have an `rpm` field".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum TechSpec {
    /// Signal-measurement electronics.
    Oscilloscope { bandwidth_mhz: f64 },
    /// Portable instrumentation.
    Multimeter { precision: f64, digital: bool },
    /// Power and control equipment.
    InductionMotor {
        horsepower: f64,
        voltage: f64,
        rpm: u32,
    },
    /// Equipment with no subtype-specific attributes.
    Generic,
}

impl TechSpec {
    pub fn kind(&self) -> EquipmentKind {
        match self {
            Self::Oscilloscope { .. } => EquipmentKind::Oscilloscope,
            Self::Multimeter { .. } => EquipmentKind::Multimeter,
            Self::InductionMotor { .. } => EquipmentKind::InductionMotor,
            Self::Generic => EquipmentKind::Generic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let spec = TechSpec::InductionMotor {
            horsepower: 5.0,
            voltage: 440.0,
            rpm: 1750,
        };
        assert_eq!(spec.kind(), EquipmentKind::InductionMotor);
        assert_eq!(spec.kind().as_token(), "InductionMotor");
    }
}
