//! itdesk - IT asset inventory, purchase requests and network overview.
//!
//! itdesk keeps a small IT department's records in a local data directory:
//! equipment, purchase requests with an approval workflow, devices found by
//! a simulated LAN scan and a monthly review reminder.
//!
//! # Modules
//!
//! - [`catalog`] - Equipment kinds and purchase equipment types
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and validation
//! - [`dashboard`] - Summary figures across all records
//! - [`error`] - Error types and result aliases
//! - [`inventory`] - Equipment records
//! - [`network`] - Network devices and the simulated probe
//! - [`purchases`] - Purchase requests and their decisions
//! - [`reminders`] - Monthly reminders
//! - [`store`] - JSON slot storage
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use itdesk::inventory::{EquipmentDraft, Inventory};
//! use itdesk::store::MemoryStore;
//!
//! let store = MemoryStore::new();
//! let inventory = Inventory::new(&store);
//! inventory
//!     .add(EquipmentDraft::new("Reception PC", "Desktop", "SN-001"))
//!     .unwrap();
//! assert_eq!(inventory.list().unwrap().len(), 1);
//! ```
//!
//! For file-backed storage, see the integration tests.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod inventory;
pub mod network;
pub mod purchases;
pub mod reminders;
pub mod store;
pub mod ui;

pub use error::{ItdeskError, Result};
