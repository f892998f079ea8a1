//! Equipment record types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ItdeskError, Result};

/// An IT asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    /// Unique record ID.
    pub id: String,
    /// Display name, e.g. "Admin Desktop 01".
    pub name: String,
    /// Free-text kind, e.g. "Desktop".
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    pub serial_number: String,
    #[serde(default)]
    pub status: EquipmentStatus,
    #[serde(default)]
    pub location: String,
    /// Purchase date as entered (`YYYY-MM-DD` when set).
    #[serde(default)]
    pub purchase_date: String,
    /// Warranty note, e.g. "3 years, until 2026-12-15".
    #[serde(default)]
    pub warranty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Lifecycle status of a piece of equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentStatus {
    #[default]
    Active,
    Maintenance,
    Inactive,
}

impl EquipmentStatus {
    /// All statuses in display order.
    pub const ALL: [EquipmentStatus; 3] = [Self::Active, Self::Maintenance, Self::Inactive];

    /// Serialized name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Maintenance => "maintenance",
            Self::Inactive => "inactive",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Maintenance => "Maintenance",
            Self::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "maintenance" => Ok(Self::Maintenance),
            "inactive" => Ok(Self::Inactive),
            _ => Err(format!("unknown equipment status: {}", s)),
        }
    }
}

/// Form data for creating or updating equipment (everything but the ID).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentDraft {
    pub name: String,
    pub kind: String,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    pub status: EquipmentStatus,
    pub location: String,
    pub purchase_date: String,
    pub warranty: String,
    pub notes: Option<String>,
}

impl EquipmentDraft {
    /// Start a draft with the required fields.
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        serial_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            serial_number: serial_number.into(),
            ..Default::default()
        }
    }

    /// Set brand and model.
    pub fn with_brand_model(mut self, brand: impl Into<String>, model: impl Into<String>) -> Self {
        self.brand = brand.into();
        self.model = model.into();
        self
    }

    /// Set the status.
    pub fn with_status(mut self, status: EquipmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Check that the required fields are present.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name".to_string());
        }
        if self.kind.trim().is_empty() {
            missing.push("type".to_string());
        }
        if self.serial_number.trim().is_empty() {
            missing.push("serial number".to_string());
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ItdeskError::Validation {
                entity: "equipment",
                missing,
            })
        }
    }

    /// Build a record with the given ID.
    pub fn into_equipment(self, id: String) -> Equipment {
        Equipment {
            id,
            name: self.name,
            kind: self.kind,
            brand: self.brand,
            model: self.model,
            serial_number: self.serial_number,
            status: self.status,
            location: self.location,
            purchase_date: self.purchase_date,
            warranty: self.warranty,
            notes: self.notes.filter(|n| !n.trim().is_empty()),
        }
    }
}

impl From<&Equipment> for EquipmentDraft {
    fn from(equipment: &Equipment) -> Self {
        Self {
            name: equipment.name.clone(),
            kind: equipment.kind.clone(),
            brand: equipment.brand.clone(),
            model: equipment.model.clone(),
            serial_number: equipment.serial_number.clone(),
            status: equipment.status,
            location: equipment.location.clone(),
            purchase_date: equipment.purchase_date.clone(),
            warranty: equipment.warranty.clone(),
            notes: equipment.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_with_required_fields_is_valid() {
        let draft = EquipmentDraft::new("Admin Desktop 01", "Desktop", "ABC123");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn blank_required_fields_are_reported() {
        let draft = EquipmentDraft::new("  ", "", "ABC123");
        match draft.validate().unwrap_err() {
            ItdeskError::Validation { entity, missing } => {
                assert_eq!(entity, "equipment");
                assert_eq!(missing, vec!["name", "type"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_serial_is_reported() {
        let draft = EquipmentDraft::new("Printer 2", "Printer", "");
        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("serial number"));
    }

    #[test]
    fn status_defaults_to_active() {
        assert_eq!(EquipmentDraft::default().status, EquipmentStatus::Active);
    }

    #[test]
    fn status_parse() {
        assert_eq!(
            "Maintenance".parse::<EquipmentStatus>(),
            Ok(EquipmentStatus::Maintenance)
        );
        assert!("broken".parse::<EquipmentStatus>().is_err());
    }

    #[test]
    fn empty_notes_are_dropped() {
        let mut draft = EquipmentDraft::new("Laptop", "Notebook", "SN1");
        draft.notes = Some("   ".into());
        assert_eq!(draft.into_equipment("1".into()).notes, None);
    }

    #[test]
    fn serializes_with_stored_field_names() {
        let equipment = EquipmentDraft::new("Switch", "Switch", "SW-9")
            .with_status(EquipmentStatus::Maintenance)
            .into_equipment("7".into());
        let json = serde_json::to_value(&equipment).unwrap();

        assert_eq!(json["type"], "Switch");
        assert_eq!(json["serialNumber"], "SW-9");
        assert_eq!(json["status"], "maintenance");
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn deserializes_sparse_record() {
        let json = r#"{"id":"1","name":"Monitor","type":"Monitor","serialNumber":"M1"}"#;
        let equipment: Equipment = serde_json::from_str(json).unwrap();
        assert_eq!(equipment.status, EquipmentStatus::Active);
        assert!(equipment.brand.is_empty());
    }

    #[test]
    fn draft_from_record_roundtrips_fields() {
        let equipment = EquipmentDraft::new("NAS", "Server", "NAS-1")
            .with_location("Rack 2")
            .into_equipment("9".into());
        let draft = EquipmentDraft::from(&equipment);
        assert_eq!(draft.location, "Rack 2");
        assert_eq!(draft.into_equipment("9".into()), equipment);
    }
}
