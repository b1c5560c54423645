/// Errors surfaced by [`EquipmentStore`](crate::traits::EquipmentStore)
/// implementations. The core never constructs these itself; the vocabulary
/// exists so the storage collaborator has a typed channel back.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("store query failed: {message}")]
    Query { message: String },
}
