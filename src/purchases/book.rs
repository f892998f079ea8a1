//! Purchase request CRUD over the purchase slot.

use chrono::{DateTime, Utc};

use super::{Priority, PurchaseDraft, PurchaseRequest, PurchaseStatus};
use crate::error::{ItdeskError, Result};
use crate::store::{new_id, KeyValueStore, Slot, PURCHASE_REQUESTS};

/// Criteria for listing purchase requests.
#[derive(Debug, Clone, Default)]
pub struct PurchaseFilter {
    /// Case-insensitive substring matched against equipment name and requester.
    pub search: String,
    pub status: Option<PurchaseStatus>,
    pub priority: Option<Priority>,
}

impl PurchaseFilter {
    /// Whether `request` satisfies every criterion.
    pub fn matches(&self, request: &PurchaseRequest) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = request.equipment_name.to_lowercase().contains(&term)
            || request.requester.to_lowercase().contains(&term);
        let matches_status = self.status.is_none_or(|s| request.status == s);
        let matches_priority = self.priority.is_none_or(|p| request.priority == p);

        matches_search && matches_status && matches_priority
    }
}

/// Purchase requests backed by a key-value store.
pub struct Purchases<'a> {
    slot: Slot<'a, PurchaseRequest>,
}

impl<'a> Purchases<'a> {
    /// Open the purchase requests in `store`.
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            slot: Slot::new(store, PURCHASE_REQUESTS),
        }
    }

    /// All requests in creation order.
    pub fn list(&self) -> Result<Vec<PurchaseRequest>> {
        self.slot.load()
    }

    /// Requests matching `filter`.
    pub fn filter(&self, filter: &PurchaseFilter) -> Result<Vec<PurchaseRequest>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect())
    }

    /// Get a request by ID.
    pub fn get(&self, id: &str) -> Result<Option<PurchaseRequest>> {
        Ok(self.list()?.into_iter().find(|r| r.id == id))
    }

    /// Create a pending request.
    pub fn create(&self, draft: PurchaseDraft, now: DateTime<Utc>) -> Result<PurchaseRequest> {
        draft.validate()?;
        let request = draft.into_request(new_id(), now);

        self.slot.update(|all| {
            all.push(request.clone());
            Ok(())
        })?;

        tracing::info!(
            "Created purchase request {} ({} x{})",
            request.id,
            request.equipment_name,
            request.quantity
        );
        Ok(request)
    }

    /// Approve a pending request.
    pub fn approve(&self, id: &str, now: DateTime<Utc>) -> Result<PurchaseRequest> {
        self.decide(id, PurchaseStatus::Approved, now)
    }

    /// Reject a pending request.
    pub fn reject(&self, id: &str, now: DateTime<Utc>) -> Result<PurchaseRequest> {
        self.decide(id, PurchaseStatus::Rejected, now)
    }

    fn decide(&self, id: &str, to: PurchaseStatus, now: DateTime<Utc>) -> Result<PurchaseRequest> {
        let decided = self.slot.update(|all| {
            let request = all
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| not_found(id))?;
            request.decide(to, now)?;
            Ok(request.clone())
        })?;

        tracing::info!("Purchase request {} {}", id, to);
        Ok(decided)
    }

    /// Delete a request by ID.
    pub fn remove(&self, id: &str) -> Result<PurchaseRequest> {
        let removed = self.slot.update(|all| {
            let index = all
                .iter()
                .position(|r| r.id == id)
                .ok_or_else(|| not_found(id))?;
            Ok(all.remove(index))
        })?;

        tracing::info!("Removed purchase request {}", id);
        Ok(removed)
    }
}

fn not_found(id: &str) -> ItdeskError {
    ItdeskError::NotFound {
        entity: "Purchase request",
        id: id.to_string(),
    }
}
