//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, DashboardArgs, ReminderCommands};
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::AppContext;
use super::reminders::announce_due_reminder;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    ctx: AppContext,
}

impl CommandDispatcher {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if Self::checks_reminders(&cli.command) {
            let check = self.ctx.reminders().check(self.ctx.today(), self.ctx.now())?;
            announce_due_reminder(&check, ui);
        }

        let ctx = &self.ctx;
        match &cli.command {
            None => super::dashboard::DashboardCommand::new(ctx, DashboardArgs::default())
                .execute(ui),
            Some(Commands::Dashboard(args)) => {
                super::dashboard::DashboardCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Equipment(sub)) => {
                super::equipment::EquipmentCommand::new(ctx, sub.clone()).execute(ui)
            }
            Some(Commands::Purchase(sub)) => {
                super::purchase::PurchaseCommand::new(ctx, sub.clone()).execute(ui)
            }
            Some(Commands::Network(sub)) => {
                super::network::NetworkCommand::new(ctx, sub.clone()).execute(ui)
            }
            Some(Commands::Reminders(sub)) => {
                super::reminders::RemindersCommand::new(ctx, sub.clone()).execute(ui)
            }
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
        }
    }

    /// The dashboard and reminder views check for a due reminder first.
    /// `check` and `watch` do their own checking.
    fn checks_reminders(command: &Option<Commands>) -> bool {
        match command {
            None | Some(Commands::Dashboard(_)) => true,
            Some(Commands::Reminders(sub)) => {
                !matches!(sub, ReminderCommands::Check | ReminderCommands::Watch(_))
            }
            _ => false,
        }
    }
}
