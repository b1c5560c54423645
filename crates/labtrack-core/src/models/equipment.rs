use std::fmt;
use std::sync::Arc;

use crate::constants::DEFAULT_LOCATION;
use crate::context::LifecycleContext;
use crate::models::{EquipmentStatus, Incident, TechSpec};
use crate::traits::DecayStrategy;

/// A tracked piece of laboratory equipment.
///
/// Status and decay strategy are independent state; the computed score is
/// a function of both. Incident history is append-only and never reordered
/// — system-generated incidents land in the same list as user reports.
#[derive(Clone)]
pub struct Equipment {
    /// Unique asset id, assigned at creation. Never reassigned.
    pub asset_id: String,
    pub model: String,
    /// ISO `YYYY-MM-DD` as stored. Parsed lazily; an invalid date surfaces
    /// as a typed error when a score is computed, not here.
    pub purchase_date: String,
    pub status: EquipmentStatus,
    /// Free-text facility label.
    pub location: String,
    pub incidents: Vec<Incident>,
    pub spec: TechSpec,
    /// Shared, stateless decay strategy. `None` scores as 0.0.
    pub strategy: Option<Arc<dyn DecayStrategy>>,
}

impl Equipment {
    pub fn new(
        asset_id: impl Into<String>,
        model: impl Into<String>,
        purchase_date: impl Into<String>,
        spec: TechSpec,
        strategy: Arc<dyn DecayStrategy>,
    ) -> Self {
        Self {
            asset_id: asset_id.into(),
            model: model.into(),
            purchase_date: purchase_date.into(),
            status: EquipmentStatus::Operational,
            location: DEFAULT_LOCATION.to_string(),
            incidents: Vec::new(),
            spec,
            strategy: Some(strategy),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Append a user-reported incident stamped with the context clock.
    /// Side effect only; never touches the status.
    pub fn register_incident(&mut self, detail: impl Into<String>, ctx: &LifecycleContext) {
        self.incidents.push(Incident::now(detail, ctx));
    }

    /// Append an already-built incident (system-generated entries use this).
    pub fn push_incident(&mut self, incident: Incident) {
        self.incidents.push(incident);
    }

    /// Back-fill the AI verdict onto the most recently appended incident.
    /// No-op on an empty history; earlier incidents are never touched.
    pub fn annotate_last_incident(&mut self, verdict: impl Into<String>) {
        if let Some(last) = self.incidents.last_mut() {
            last.ai_verdict = Some(verdict.into());
        }
    }

    /// Swap the decay strategy at runtime. Effective on the next score
    /// computation; history is not rewritten.
    pub fn change_strategy(&mut self, strategy: Arc<dyn DecayStrategy>) {
        self.strategy = Some(strategy);
    }

    /// Name of the attached strategy, if any.
    pub fn strategy_name(&self) -> Option<&'static str> {
        self.strategy.as_deref().map(|s| s.name())
    }
}

/// Identity equality: two equipment values are the same asset if they have
/// the same asset id, regardless of mutable state.
impl PartialEq for Equipment {
    fn eq(&self, other: &Self) -> bool {
        self.asset_id == other.asset_id
    }
}

/// Manual `Debug`: the strategy trait object prints as its name.
impl fmt::Debug for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Equipment")
            .field("asset_id", &self.asset_id)
            .field("model", &self.model)
            .field("purchase_date", &self.purchase_date)
            .field("status", &self.status)
            .field("location", &self.location)
            .field("incidents", &self.incidents)
            .field("spec", &self.spec)
            .field("strategy", &self.strategy_name())
            .finish()
    }
}
