//! Equipment CRUD over the equipment slot.

use super::{Equipment, EquipmentDraft, EquipmentStatus};
use crate::error::{ItdeskError, Result};
use crate::store::{new_id, KeyValueStore, Slot, EQUIPMENTS};

/// Criteria for listing equipment.
#[derive(Debug, Clone, Default)]
pub struct EquipmentFilter {
    /// Case-insensitive substring matched against name, brand, model and serial.
    pub search: String,
    /// Only equipment with this status.
    pub status: Option<EquipmentStatus>,
    /// Only equipment of this kind (exact match).
    pub kind: Option<String>,
}

impl EquipmentFilter {
    /// Whether `equipment` satisfies every criterion.
    pub fn matches(&self, equipment: &Equipment) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = [
            &equipment.name,
            &equipment.brand,
            &equipment.model,
            &equipment.serial_number,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&term));

        let matches_status = self.status.is_none_or(|s| equipment.status == s);
        let matches_kind = self.kind.as_ref().is_none_or(|k| &equipment.kind == k);

        matches_search && matches_status && matches_kind
    }
}

/// Equipment inventory backed by a key-value store.
pub struct Inventory<'a> {
    slot: Slot<'a, Equipment>,
}

impl<'a> Inventory<'a> {
    /// Open the inventory in `store`.
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            slot: Slot::new(store, EQUIPMENTS),
        }
    }

    /// All equipment in insertion order.
    pub fn list(&self) -> Result<Vec<Equipment>> {
        self.slot.load()
    }

    /// Equipment matching `filter`.
    pub fn filter(&self, filter: &EquipmentFilter) -> Result<Vec<Equipment>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|e| filter.matches(e))
            .collect())
    }

    /// Get equipment by ID.
    pub fn get(&self, id: &str) -> Result<Option<Equipment>> {
        Ok(self.list()?.into_iter().find(|e| e.id == id))
    }

    /// Register new equipment.
    pub fn add(&self, draft: EquipmentDraft) -> Result<Equipment> {
        draft.validate()?;
        let equipment = draft.into_equipment(new_id());

        self.slot.update(|all| {
            all.push(equipment.clone());
            Ok(())
        })?;

        tracing::info!("Registered equipment {} ({})", equipment.id, equipment.name);
        Ok(equipment)
    }

    /// Replace the fields of existing equipment, keeping its ID.
    pub fn update(&self, id: &str, draft: EquipmentDraft) -> Result<Equipment> {
        draft.validate()?;
        let updated = draft.into_equipment(id.to_string());

        self.slot.update(|all| {
            let slot = all
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or_else(|| not_found(id))?;
            *slot = updated.clone();
            Ok(())
        })?;

        tracing::info!("Updated equipment {}", id);
        Ok(updated)
    }

    /// Delete equipment by ID.
    pub fn remove(&self, id: &str) -> Result<Equipment> {
        let removed = self.slot.update(|all| {
            let index = all
                .iter()
                .position(|e| e.id == id)
                .ok_or_else(|| not_found(id))?;
            Ok(all.remove(index))
        })?;

        tracing::info!("Removed equipment {}", id);
        Ok(removed)
    }

    /// Distinct non-empty kinds in first-seen order.
    pub fn unique_kinds(&self) -> Result<Vec<String>> {
        let mut kinds: Vec<String> = Vec::new();
        for equipment in self.list()? {
            if !equipment.kind.is_empty() && !kinds.contains(&equipment.kind) {
                kinds.push(equipment.kind);
            }
        }
        Ok(kinds)
    }
}

fn not_found(id: &str) -> ItdeskError {
    ItdeskError::NotFound {
        entity: "Equipment",
        id: id.to_string(),
    }
}
