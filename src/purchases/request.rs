//! Purchase request types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::EquipmentType;
use crate::error::{ItdeskError, Result};

/// A requested acquisition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    /// Unique request ID.
    pub id: String,
    pub equipment_name: String,
    #[serde(rename = "type", default)]
    pub kind: EquipmentType,
    pub quantity: u32,
    /// Free-text price estimate, e.g. "R$ 800,00".
    #[serde(default)]
    pub estimated_price: String,
    pub justification: String,
    #[serde(default)]
    pub priority: Priority,
    /// When the request was created.
    pub request_date: DateTime<Utc>,
    #[serde(default)]
    pub requester: String,
    /// Records written before the approval workflow existed have no status;
    /// they are pending.
    #[serde(default)]
    pub status: PurchaseStatus,
    /// When the request was approved or rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decided_at: Option<DateTime<Utc>>,
}

impl PurchaseRequest {
    /// Move a pending request to `to`.
    pub(crate) fn decide(&mut self, to: PurchaseStatus, now: DateTime<Utc>) -> Result<()> {
        if self.status != PurchaseStatus::Pending || to == PurchaseStatus::Pending {
            return Err(ItdeskError::InvalidTransition {
                id: self.id.clone(),
                from: self.status.to_string(),
                to: to.to_string(),
            });
        }
        self.status = to;
        self.decided_at = Some(now);
        Ok(())
    }
}

/// Request urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Serialized name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("unknown priority: {}", s)),
        }
    }
}

/// Approval state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl PurchaseStatus {
    /// Serialized name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for PurchaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PurchaseStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(format!("unknown purchase status: {}", s)),
        }
    }
}

/// Form data for a new purchase request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseDraft {
    pub equipment_name: String,
    pub kind: EquipmentType,
    pub quantity: u32,
    pub estimated_price: String,
    pub justification: String,
    pub priority: Priority,
    pub requester: String,
}

impl Default for PurchaseDraft {
    fn default() -> Self {
        Self {
            equipment_name: String::new(),
            kind: EquipmentType::Other,
            quantity: 1,
            estimated_price: String::new(),
            justification: String::new(),
            priority: Priority::Medium,
            requester: String::new(),
        }
    }
}

impl PurchaseDraft {
    /// Start a draft with the required fields.
    pub fn new(equipment_name: impl Into<String>, justification: impl Into<String>) -> Self {
        Self {
            equipment_name: equipment_name.into(),
            justification: justification.into(),
            ..Default::default()
        }
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the requester.
    pub fn with_requester(mut self, requester: impl Into<String>) -> Self {
        self.requester = requester.into();
        self
    }

    /// Set the equipment type.
    pub fn with_kind(mut self, kind: EquipmentType) -> Self {
        self.kind = kind;
        self
    }

    /// Set the quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Check required fields and the quantity.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.equipment_name.trim().is_empty() {
            missing.push("equipment name".to_string());
        }
        if self.justification.trim().is_empty() {
            missing.push("justification".to_string());
        }
        if !missing.is_empty() {
            return Err(ItdeskError::Validation {
                entity: "purchase request",
                missing,
            });
        }

        if self.quantity == 0 {
            return Err(ItdeskError::InvalidInput {
                message: "quantity must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Build a pending request.
    pub fn into_request(self, id: String, now: DateTime<Utc>) -> PurchaseRequest {
        PurchaseRequest {
            id,
            equipment_name: self.equipment_name,
            kind: self.kind,
            quantity: self.quantity,
            estimated_price: self.estimated_price,
            justification: self.justification,
            priority: self.priority,
            request_date: now,
            requester: self.requester,
            status: PurchaseStatus::Pending,
            decided_at: None,
        }
    }
}
