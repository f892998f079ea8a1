//! Dashboard command implementation.
//!
//! `itdesk dashboard` (also plain `itdesk`) shows the summary figures.

use crate::cli::args::DashboardArgs;
use crate::dashboard::DashboardStats;
use crate::error::Result;
use crate::reminders::next_reminder_date;
use crate::ui::{Table, UserInterface};

use super::context::AppContext;
use super::dispatcher::{Command, CommandResult};
use super::display::{plural, print_json, theme};

/// The dashboard command implementation.
pub struct DashboardCommand<'a> {
    ctx: &'a AppContext,
    args: DashboardArgs,
}

impl<'a> DashboardCommand<'a> {
    pub fn new(ctx: &'a AppContext, args: DashboardArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for DashboardCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let stats = DashboardStats::collect(self.ctx.store())?;

        if self.args.json {
            print_json(ui, &stats)?;
            return Ok(CommandResult::success());
        }

        ui.show_header("IT overview");

        let mut table = Table::new(&["Figure", "Value"]);
        for (label, value) in stats.rows() {
            table.add_row(vec![label.to_string(), value.to_string()]);
        }
        ui.message(&table.render());

        let theme = theme();
        let day = self.ctx.settings().reminders.day_of_month;
        if let Some(next) = next_reminder_date(self.ctx.today(), day) {
            ui.message(&theme.format_field("Next reminder", &next.to_string(), 15));
        }
        if stats.pending_purchases > 0 {
            ui.warning(&format!(
                "{} awaiting a decision",
                plural(stats.pending_purchases, "purchase request", "purchase requests")
            ));
        }

        Ok(CommandResult::success())
    }
}
