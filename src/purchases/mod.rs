//! Purchase requests and their approval workflow.
//!
//! A request starts `pending` and is decided once: approved or rejected.
//! Decided requests stay in the slot until removed.

mod book;
mod request;

pub use book::{PurchaseFilter, Purchases};
pub use request::{Priority, PurchaseDraft, PurchaseRequest, PurchaseStatus};
