use chrono::{DateTime, NaiveDate, Utc};

/// Explicit clock for every score computation and threshold scan.
///
/// All wall-clock reads in the core flow through this struct so tests can
/// pin "now" instead of racing the real clock.
#[derive(Debug, Clone, Copy)]
pub struct LifecycleContext {
    pub now: DateTime<Utc>,
}

impl LifecycleContext {
    /// Context pinned to a specific instant.
    pub fn fixed(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Calendar date of `now`.
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    /// Calendar year of `now`. Decay strategies work at year granularity.
    pub fn current_year(&self) -> i32 {
        use chrono::Datelike;
        self.today().year()
    }
}

impl Default for LifecycleContext {
    fn default() -> Self {
        Self { now: Utc::now() }
    }
}
