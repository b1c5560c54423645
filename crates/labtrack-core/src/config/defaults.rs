//! Canonical default values for every configurable knob.

/// Annual depreciation applied by the linear strategy (5%/year).
pub const DEFAULT_LINEAR_ANNUAL_RATE: f64 = 0.05;

/// Exponent coefficient of the exponential strategy.
pub const DEFAULT_EXP_COEFFICIENT: f64 = 0.2;

/// Divisor normalizing the exponential curve into [0, 1].
pub const DEFAULT_EXP_DIVISOR: f64 = 10.0;

/// Complaints within the window that trigger auto-escalation.
pub const DEFAULT_COMPLAINT_THRESHOLD: usize = 3;

/// Trailing complaint window in days, inclusive.
pub const DEFAULT_COMPLAINT_WINDOW_DAYS: i64 = 7;
