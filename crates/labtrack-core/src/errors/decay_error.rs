/// Decay-computation errors.
///
/// A missing strategy is NOT an error (defined fallback: score 0.0), but a
/// purchase date whose year cannot be read is — a silent default here would
/// misrepresent the age of safety-critical equipment.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DecayError {
    #[error("purchase date {value:?} has no parsable year")]
    InvalidPurchaseDate { value: String },
}
