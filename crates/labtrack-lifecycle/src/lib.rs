//! # labtrack-lifecycle
//!
//! The lifecycle side of the equipment model: which status transitions are
//! legal, the operations that drive them (manual reports, triage, repair,
//! discard, automated inspection findings), and the complaint-threshold
//! rule that force-escalates noisy equipment into maintenance.

pub mod engine;
pub mod threshold;
pub mod transitions;

pub use engine::LifecycleEngine;
pub use threshold::check_complaint_threshold;
