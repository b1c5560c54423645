//! Error taxonomy for the core.
//!
//! Permissive at the batch and history-scanning levels (one bad record
//! never sinks the whole view), strict at the single-computation level
//! (an invalid purchase date is a typed, caller-visible failure).

pub mod decay_error;
pub mod map_error;
pub mod store_error;
pub mod transition_error;

pub use decay_error::DecayError;
pub use map_error::MapError;
pub use store_error::StoreError;
pub use transition_error::TransitionError;

/// Convenience alias used across the workspace.
pub type LabResult<T> = Result<T, LabError>;

/// Umbrella error for the labtrack core.
#[derive(Debug, thiserror::Error)]
pub enum LabError {
    #[error(transparent)]
    Decay(#[from] DecayError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}
