//! Command-line interface for itdesk.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, DashboardArgs, EquipmentCommands, NetworkCommands, PurchaseCommands,
    ReminderCommands,
};
pub use commands::{resolve_data_dir, AppContext, Command, CommandDispatcher, CommandResult};
