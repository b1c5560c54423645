//! # labtrack-prediction
//!
//! Cosmetic failure-date projection for the dashboard: fits a straight
//! line through the equipment's wear history anchors and extrapolates to
//! the saturation threshold (score 1.0).
//!
//! This is a display aid, not part of the lifecycle engine's correctness
//! contract — the engine never consumes these projections.

pub mod engine;
pub mod trend;

pub use engine::FailurePredictor;
pub use trend::{FailureProjection, LinearTrend};
