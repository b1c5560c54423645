use chrono::NaiveDate;

use crate::errors::LabResult;

/// Pluggable decay formula: equipment age to decay fraction in [0, 1].
///
/// Implementations are stateless and read-only; one instance is shared by
/// every equipment referencing it, and a different instance can be swapped
/// in at runtime without reconstructing the equipment.
pub trait DecayStrategy: Send + Sync {
    /// Stable strategy name, stored with each record and used to resolve an
    /// equivalent instance when the record is re-mapped.
    fn name(&self) -> &'static str;

    /// Decay fraction for equipment purchased on `purchase_date`, as of
    /// `today`. Pure and deterministic given `today`.
    ///
    /// Age is year-granular: `max(1, today.year − purchase_year)`. A date
    /// whose year cannot be read is a hard error — the one strict failure
    /// in the taxonomy.
    fn calculate(&self, purchase_date: &str, today: NaiveDate) -> LabResult<f64>;
}

/// Which of the two injected strategy instances a stored name resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecayKind {
    Linear,
    Exponential,
}

impl DecayKind {
    /// Resolve a stored strategy name. Linear is the default whenever the
    /// field is absent or does not look exponential.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some(n) if n.contains("Exponential") => Self::Exponential,
            _ => Self::Linear,
        }
    }
}
