//! Persisted key-value storage.
//!
//! Every collection lives in a named slot holding a JSON array. A slot is
//! read whole and overwritten whole on every mutation.
//!
//! - [`KeyValueStore`] is the storage seam
//! - [`FileStore`] keeps one `<slot>.json` file per slot
//! - [`MemoryStore`] keeps slots in memory (tests, previews)
//! - [`Slot`] is a typed view over one slot

mod file;
mod id;
mod kv;
mod slot;

pub use file::FileStore;
pub use id::new_id;
pub use kv::{KeyValueStore, MemoryStore};
pub use slot::Slot;

/// Slot holding equipment records.
pub const EQUIPMENTS: &str = "equipments";

/// Slot holding purchase requests.
pub const PURCHASE_REQUESTS: &str = "purchaseRequests";

/// Slot holding discovered and manually added network devices.
pub const NETWORK_DEVICES: &str = "network-devices";

/// Slot holding monthly reminders.
pub const MONTHLY_REMINDERS: &str = "monthly-reminders";

/// All slots known to itdesk.
pub const ALL_SLOTS: &[&str] = &[
    EQUIPMENTS,
    PURCHASE_REQUESTS,
    NETWORK_DEVICES,
    MONTHLY_REMINDERS,
];

/// Get the default data directory.
pub fn default_data_dir() -> std::path::PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("itdesk")
}
