pub mod store;
pub mod strategy;

pub use store::EquipmentStore;
pub use strategy::{DecayKind, DecayStrategy};
