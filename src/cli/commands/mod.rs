//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and runs the monthly reminder
//! check before the dashboard and reminder commands.

pub mod completions;
pub mod context;
pub mod dashboard;
pub mod dispatcher;
pub mod display;
pub mod equipment;
pub mod network;
pub mod purchase;
pub mod reminders;

pub use context::{resolve_data_dir, AppContext};
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
