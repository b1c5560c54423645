use crate::models::EquipmentStatus;

/// Status state-machine violations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransitionError {
    #[error("transition {from} -> {to} is not allowed")]
    Invalid {
        from: EquipmentStatus,
        to: EquipmentStatus,
    },

    #[error("equipment {asset_id} is decommissioned; no transition leaves that state")]
    Terminal { asset_id: String },
}
