//! # labtrack-decay
//!
//! The obsolescence model: two pluggable decay strategies and the score
//! formula that layers operational status over the mathematical curve.
//!
//! Business policy treats explicit state as authoritative over the decay
//! math — a unit marked failed or decommissioned must read as critical
//! even if it is mathematically new.

pub mod engine;
pub mod formula;
pub mod strategies;

pub use engine::ObsolescenceEngine;
pub use formula::{compute, compute_breakdown, ScoreBreakdown};
pub use strategies::{ExponentialDecay, LinearDecay};
