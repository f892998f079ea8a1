//! Summary figures across all slots.

use serde::Serialize;

use crate::error::Result;
use crate::inventory::{EquipmentStatus, Inventory};
use crate::network::Devices;
use crate::purchases::{Priority, PurchaseStatus, Purchases};
use crate::reminders::Reminders;
use crate::store::KeyValueStore;

/// Counts shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_equipments: usize,
    pub in_maintenance: usize,
    pub total_purchases: usize,
    pub pending_purchases: usize,
    pub approved_purchases: usize,
    pub high_priority_purchases: usize,
    pub devices_online: usize,
    pub pending_reminders: usize,
}

impl DashboardStats {
    /// Compute the figures from the current store contents.
    pub fn collect(store: &dyn KeyValueStore) -> Result<Self> {
        let equipments = Inventory::new(store).list()?;
        let purchases = Purchases::new(store).list()?;

        Ok(Self {
            total_equipments: equipments.len(),
            in_maintenance: equipments
                .iter()
                .filter(|e| e.status == EquipmentStatus::Maintenance)
                .count(),
            total_purchases: purchases.len(),
            pending_purchases: purchases
                .iter()
                .filter(|p| p.status == PurchaseStatus::Pending)
                .count(),
            approved_purchases: purchases
                .iter()
                .filter(|p| p.status == PurchaseStatus::Approved)
                .count(),
            high_priority_purchases: purchases
                .iter()
                .filter(|p| p.priority == Priority::High)
                .count(),
            devices_online: Devices::new(store).online_count()?,
            pending_reminders: Reminders::new(store).pending()?.len(),
        })
    }

    /// Label/value pairs in display order.
    pub fn rows(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("Total equipment", self.total_equipments),
            ("In maintenance", self.in_maintenance),
            ("Purchase requests", self.total_purchases),
            ("Pending requests", self.pending_purchases),
            ("Approved purchases", self.approved_purchases),
            ("High priority", self.high_priority_purchases),
            ("Devices online", self.devices_online),
            ("Pending reminders", self.pending_reminders),
        ]
    }
}
