//! Configuration loading and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//!
//! # Configuration File Locations
//!
//! itdesk discovers and merges configuration in this order:
//! 1. User global config (`~/.itdesk/config.yml`)
//! 2. Project config (`.itdesk/config.yml`)
//! 3. Local overrides (`.itdesk/config.local.yml`)
//!
//! Every file is optional; with none present the defaults apply.
//!
//! # Example
//!
//! ```
//! use itdesk::config::{load_settings, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".itdesk");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "scan:\n  batch_size: 50\n").unwrap();
//!
//! let settings = load_settings(temp.path()).unwrap();
//! validate(&settings).unwrap();
//! assert_eq!(settings.scan.batch_size, 50);
//! ```

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{load_settings, load_settings_file, parse_settings, ConfigPaths};
pub use merger::{deep_merge, merge_configs};
pub use schema::{validate, OutputMode, ReminderSettings, ScanSettings, Settings};
