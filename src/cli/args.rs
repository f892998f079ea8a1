//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::catalog::EquipmentType;
use crate::inventory::EquipmentStatus;
use crate::purchases::{Priority, PurchaseStatus};

/// itdesk - IT equipment, purchase requests and network overview.
#[derive(Debug, Parser)]
#[command(name = "itdesk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the data slots
    #[arg(long, global = true, env = "ITDESK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Path to a config file (replaces the discovered config files)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show summary figures (default if no command specified)
    Dashboard(DashboardArgs),

    /// Manage the equipment inventory
    #[command(subcommand)]
    Equipment(EquipmentCommands),

    /// Manage purchase requests
    #[command(subcommand)]
    Purchase(PurchaseCommands),

    /// Scan and track network devices
    #[command(subcommand)]
    Network(NetworkCommands),

    /// Monthly review reminders
    #[command(subcommand)]
    Reminders(ReminderCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `dashboard` command.
#[derive(Debug, Clone, Default, Args)]
pub struct DashboardArgs {
    /// Print the figures as JSON
    #[arg(long)]
    pub json: bool,
}

/// Equipment subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum EquipmentCommands {
    /// Register a piece of equipment
    Add(EquipmentFields),

    /// Change fields of an existing record
    Edit {
        /// Equipment ID
        id: String,

        #[command(flatten)]
        fields: EquipmentFields,
    },

    /// Delete a record
    Remove(RemoveArgs),

    /// Show one record
    Show(ShowArgs),

    /// List equipment
    List(EquipmentListArgs),
}

/// Equipment fields; unset flags are prompted for or left unchanged.
#[derive(Debug, Clone, Default, Args)]
pub struct EquipmentFields {
    /// Equipment name
    #[arg(long)]
    pub name: Option<String>,

    /// Kind of equipment (e.g. Desktop, Notebook)
    #[arg(long = "type", value_name = "KIND")]
    pub kind: Option<String>,

    #[arg(long)]
    pub brand: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    /// Serial number
    #[arg(long)]
    pub serial: Option<String>,

    /// active, maintenance or inactive
    #[arg(long)]
    pub status: Option<EquipmentStatus>,

    #[arg(long)]
    pub location: Option<String>,

    /// Purchase date (free text, e.g. 2024-03-01)
    #[arg(long)]
    pub purchase_date: Option<String>,

    /// Warranty end or terms
    #[arg(long)]
    pub warranty: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,
}

/// Arguments for `equipment list`.
#[derive(Debug, Clone, Default, Args)]
pub struct EquipmentListArgs {
    /// Match name, brand, model or serial number
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only this status
    #[arg(long)]
    pub status: Option<EquipmentStatus>,

    /// Only this kind
    #[arg(long = "type", value_name = "KIND")]
    pub kind: Option<String>,

    /// Print records as JSON
    #[arg(long)]
    pub json: bool,
}

/// Purchase request subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum PurchaseCommands {
    /// File a new request
    New(PurchaseNewArgs),

    /// Approve a pending request
    Approve {
        /// Request ID
        id: String,
    },

    /// Reject a pending request
    Reject {
        /// Request ID
        id: String,
    },

    /// Delete a request
    Remove(RemoveArgs),

    /// Show one request
    Show(ShowArgs),

    /// List requests
    List(PurchaseListArgs),
}

/// Arguments for `purchase new`.
#[derive(Debug, Clone, Default, Args)]
pub struct PurchaseNewArgs {
    /// Equipment being requested
    #[arg(long)]
    pub name: Option<String>,

    /// Equipment type
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<EquipmentType>,

    #[arg(long)]
    pub quantity: Option<u32>,

    /// Estimated price (free text)
    #[arg(long)]
    pub price: Option<String>,

    /// Why the equipment is needed
    #[arg(long)]
    pub justification: Option<String>,

    /// low, medium or high
    #[arg(long)]
    pub priority: Option<Priority>,

    /// Who is asking
    #[arg(long)]
    pub requester: Option<String>,
}

/// Arguments for `purchase list`.
#[derive(Debug, Clone, Default, Args)]
pub struct PurchaseListArgs {
    /// Match equipment name or requester
    #[arg(short, long)]
    pub search: Option<String>,

    #[arg(long)]
    pub status: Option<PurchaseStatus>,

    #[arg(long)]
    pub priority: Option<Priority>,

    /// Print requests as JSON
    #[arg(long)]
    pub json: bool,
}

/// Network subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum NetworkCommands {
    /// Probe every host of a /24 range
    Scan {
        /// Three-octet prefix such as 192.168.1 (defaults to config)
        range: Option<String>,

        #[command(flatten)]
        probe: ProbeArgs,
    },

    /// Add one address by hand
    Add {
        /// IPv4 address
        ip: String,

        #[command(flatten)]
        probe: ProbeArgs,
    },

    /// Forget a device
    Remove(RemoveArgs),

    /// Re-probe one device
    Refresh {
        /// Device ID or IP
        id: String,

        #[command(flatten)]
        probe: ProbeArgs,
    },

    /// List known devices
    List(NetworkListArgs),
}

/// Simulated probe tuning.
#[derive(Debug, Clone, Default, Args)]
pub struct ProbeArgs {
    /// Seed the simulated probe for reproducible results
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for `network list`.
#[derive(Debug, Clone, Default, Args)]
pub struct NetworkListArgs {
    /// Only devices currently online
    #[arg(long)]
    pub online: bool,

    /// Print devices as JSON
    #[arg(long)]
    pub json: bool,
}

/// Reminder subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum ReminderCommands {
    /// Create today's reminder if it is due
    Check,

    /// Acknowledge a reminder
    Ack {
        /// Reminder ID
        id: String,
    },

    /// Delete a reminder
    Remove(RemoveArgs),

    /// Show pending and recent reminders
    List(ReminderListArgs),

    /// Keep checking on an interval
    Watch(WatchArgs),
}

/// Arguments for `reminders list`.
#[derive(Debug, Clone, Default, Args)]
pub struct ReminderListArgs {
    /// How many recent reminders to show (defaults to config)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Print reminders as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `reminders watch`.
#[derive(Debug, Clone, Args)]
pub struct WatchArgs {
    /// Seconds between checks
    #[arg(long, default_value_t = 3600, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,

    /// Stop after this many checks
    #[arg(long)]
    pub iterations: Option<u64>,
}

impl Default for WatchArgs {
    fn default() -> Self {
        Self {
            interval: 3600,
            iterations: None,
        }
    }
}

/// Arguments shared by every `remove` subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct RemoveArgs {
    /// Record ID
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments shared by every `show` subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct ShowArgs {
    /// Record ID
    pub id: String,

    /// Print the record as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["itdesk"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn equipment_add_parses_fields() {
        let cli = Cli::try_parse_from([
            "itdesk",
            "equipment",
            "add",
            "--name",
            "Reception PC",
            "--type",
            "Desktop",
            "--serial",
            "SN-1",
            "--status",
            "maintenance",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Equipment(EquipmentCommands::Add(fields))) => {
                assert_eq!(fields.name.as_deref(), Some("Reception PC"));
                assert_eq!(fields.kind.as_deref(), Some("Desktop"));
                assert_eq!(fields.status, Some(EquipmentStatus::Maintenance));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn bad_status_is_rejected() {
        let result = Cli::try_parse_from(["itdesk", "equipment", "add", "--status", "broken"]);
        assert!(result.is_err());
    }

    #[test]
    fn purchase_new_parses_enums() {
        let cli = Cli::try_parse_from([
            "itdesk",
            "purchase",
            "new",
            "--type",
            "laptop",
            "--priority",
            "high",
            "--quantity",
            "3",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Purchase(PurchaseCommands::New(args))) => {
                assert_eq!(args.kind, Some(EquipmentType::Laptop));
                assert_eq!(args.priority, Some(Priority::High));
                assert_eq!(args.quantity, Some(3));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn remove_takes_yes_flag() {
        let cli = Cli::try_parse_from(["itdesk", "network", "remove", "10.0.0.5", "-y"]).unwrap();
        match cli.command {
            Some(Commands::Network(NetworkCommands::Remove(args))) => {
                assert_eq!(args.id, "10.0.0.5");
                assert!(args.yes);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn watch_defaults_to_one_hour() {
        let cli = Cli::try_parse_from(["itdesk", "reminders", "watch"]).unwrap();
        match cli.command {
            Some(Commands::Reminders(ReminderCommands::Watch(args))) => {
                assert_eq!(args.interval, 3600);
                assert_eq!(args.iterations, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn watch_interval_must_be_positive() {
        assert!(Cli::try_parse_from(["itdesk", "reminders", "watch", "--interval", "0"]).is_err());

        let cli =
            Cli::try_parse_from(["itdesk", "reminders", "watch", "--interval", "1"]).unwrap();
        match cli.command {
            Some(Commands::Reminders(ReminderCommands::Watch(args))) => {
                assert_eq!(args.interval, 1)
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["itdesk", "dashboard", "--data-dir", "/tmp/x", "--quiet"])
                .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(cli.quiet);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["itdesk", "-q", "-v"]).is_err());
    }
}
