use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::INCIDENT_TIMESTAMP_FORMAT;
use crate::context::LifecycleContext;

/// A timestamped free-text event attached to equipment: user report,
/// system-generated alert, or repair note.
///
/// Immutable once appended, except that the AI verdict may be back-filled
/// onto the most recently appended incident by the operation that created
/// it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    /// Date or date-time string; the first 10 characters are the
    /// `YYYY-MM-DD` date. Old records carry a bare date.
    pub timestamp: String,
    pub detail: String,
    /// Diagnosis annotation from the vision collaborator, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_verdict: Option<String>,
    /// Reference to an evidence photo, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl Incident {
    /// New incident stamped with the context clock.
    pub fn now(detail: impl Into<String>, ctx: &LifecycleContext) -> Self {
        Self {
            timestamp: ctx.now.format(INCIDENT_TIMESTAMP_FORMAT).to_string(),
            detail: detail.into(),
            ai_verdict: None,
            photo_url: None,
        }
    }

    pub fn with_verdict(mut self, verdict: impl Into<String>) -> Self {
        self.ai_verdict = Some(verdict.into());
        self
    }

    pub fn with_photo(mut self, url: impl Into<String>) -> Self {
        self.photo_url = Some(url.into());
        self
    }

    /// Date parsed from the first 10 characters of the timestamp.
    /// `None` for anything unparsable — threshold scans skip such incidents
    /// silently instead of aborting.
    pub fn date(&self) -> Option<NaiveDate> {
        let prefix = self.timestamp.get(..10)?;
        NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
    }
}
