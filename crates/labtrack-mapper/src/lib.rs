//! # labtrack-mapper
//!
//! Reconstructs typed [`Equipment`](labtrack_core::models::Equipment) from
//! the generic records the storage collaborator hands back, and serializes
//! it to the same shape.
//!
//! Partial-failure tolerant by design: one malformed row is logged and
//! dropped, never allowed to block loading the rest of the inventory.

pub mod factory;
pub mod mapper;

pub use factory::EquipmentFactory;
pub use mapper::RecordMapper;
