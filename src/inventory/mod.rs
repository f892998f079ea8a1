//! Equipment inventory.
//!
//! Equipment records live in the [`EQUIPMENTS`](crate::store::EQUIPMENTS)
//! slot. Every mutation validates first and then rewrites the whole slot.

mod equipment;
mod book;

pub use equipment::{Equipment, EquipmentDraft, EquipmentStatus};
pub use book::{EquipmentFilter, Inventory};
