/// Labtrack system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Location assigned to equipment with no recorded facility label.
pub const DEFAULT_LOCATION: &str = "Unassigned";

/// Score pinned for decommissioned equipment, overriding any strategy output.
pub const DECOMMISSIONED_SCORE: f64 = 1.0;

/// Score pinned for failed equipment. Near-saturated but distinguishable
/// from decommissioned on the dashboard.
pub const FAILED_SCORE: f64 = 0.98;

/// Qualifying complaints within the window that force a maintenance transition.
pub const COMPLAINT_THRESHOLD: usize = 3;

/// Trailing window (days, inclusive) in which complaints count toward escalation.
pub const COMPLAINT_WINDOW_DAYS: i64 = 7;

/// Incident-detail tokens marking a closed maintenance cycle. An incident
/// containing one of these resets the complaint counter and is not counted.
pub const CYCLE_RESET_TOKENS: [&str; 2] = ["REINGRESO", "ALTA"];

/// Timestamp format written into new incident records.
pub const INCIDENT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
