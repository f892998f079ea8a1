//! Reminders command implementation.

use std::time::Duration;

use serde_json::json;

use crate::cli::args::{ReminderCommands, ReminderListArgs, RemoveArgs, WatchArgs};
use crate::error::{ItdeskError, Result};
use crate::reminders::{next_reminder_date, Reminder, ReminderCheck};
use crate::ui::{Table, UserInterface};

use super::context::AppContext;
use super::dispatcher::{Command, CommandResult};
use super::display::{confirm_removal, format_timestamp, plural, print_json, theme, truncate};

/// Surface the outcome of a reminder check.
///
/// Silent when nothing is due.
pub fn announce_due_reminder(check: &ReminderCheck, ui: &mut dyn UserInterface) {
    match check {
        ReminderCheck::Created(reminder) => {
            ui.warning(&format!("Monthly reminder: {}", reminder.message));
        }
        ReminderCheck::Pending(reminder) => {
            ui.warning(&format!(
                "Monthly reminder from {} awaits acknowledgement: {} (itdesk reminders ack {})",
                reminder.date, reminder.message, reminder.id
            ));
        }
        ReminderCheck::Nothing => {}
    }
}

/// The reminders command implementation.
pub struct RemindersCommand<'a> {
    ctx: &'a AppContext,
    command: ReminderCommands,
}

impl<'a> RemindersCommand<'a> {
    pub fn new(ctx: &'a AppContext, command: ReminderCommands) -> Self {
        Self { ctx, command }
    }

    fn next_date(&self) -> Option<String> {
        let day = self.ctx.settings().reminders.day_of_month;
        next_reminder_date(self.ctx.today(), day).map(|d| d.format("%Y-%m-%d").to_string())
    }

    fn check(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let check = self.ctx.reminders().check(self.ctx.today(), self.ctx.now())?;
        announce_due_reminder(&check, ui);

        if check == ReminderCheck::Nothing {
            match self.next_date() {
                Some(next) => ui.message(&format!("No reminder due today. Next one on {}", next)),
                None => ui.message("No reminder due today"),
            }
        }
        Ok(CommandResult::success())
    }

    fn acknowledge(&self, id: &str, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let reminder = self.ctx.reminders().acknowledge(id)?;
        ui.success(&format!("Reminder from {} acknowledged", reminder.date));
        Ok(CommandResult::success())
    }

    fn remove(&self, args: &RemoveArgs, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let reminders = self.ctx.reminders();
        let existing = reminders
            .list()?
            .into_iter()
            .find(|r| r.id == args.id)
            .ok_or_else(|| ItdeskError::NotFound {
                entity: "Reminder",
                id: args.id.clone(),
            })?;

        if !confirm_removal(ui, &format!("the reminder from {}", existing.date), args.yes)? {
            ui.warning("Nothing removed");
            return Ok(CommandResult::success());
        }

        reminders.remove(&existing.id)?;
        ui.success(&format!("Reminder from {} removed", existing.date));
        Ok(CommandResult::success())
    }

    fn list(&self, args: &ReminderListArgs, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let reminders = self.ctx.reminders();
        let limit = args
            .limit
            .unwrap_or(self.ctx.settings().reminders.recent_limit);
        let pending = reminders.pending()?;
        let acknowledged = reminders.acknowledged_count()?;
        let recent = reminders.recent(limit)?;
        let next = self.next_date();

        if args.json {
            let report = json!({
                "pending": pending,
                "acknowledged": acknowledged,
                "recent": recent,
                "nextReminder": next,
            });
            print_json(ui, &report)?;
            return Ok(CommandResult::success());
        }

        let theme = theme();
        ui.show_header("Reminders");
        if let Some(next) = &next {
            ui.message(&theme.format_field("Next reminder", next, 14));
        }
        ui.message(&theme.format_field("Pending", &pending.len().to_string(), 14));
        ui.message(&theme.format_field("Acknowledged", &acknowledged.to_string(), 14));

        if recent.is_empty() {
            ui.message("No reminders yet.");
            return Ok(CommandResult::success());
        }

        ui.message(&render_table(&recent));
        if !pending.is_empty() {
            ui.warning(&format!(
                "{} awaiting acknowledgement",
                plural(pending.len(), "reminder", "reminders")
            ));
        }
        Ok(CommandResult::success())
    }

    fn watch(&self, args: &WatchArgs, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let interval = Duration::from_secs(args.interval);
        ui.message(&format!(
            "Checking for reminders every {}s. Press Ctrl+C to stop.",
            args.interval
        ));

        let mut round: u64 = 0;
        loop {
            round += 1;
            let check = self.ctx.reminders().check(self.ctx.today(), self.ctx.now())?;
            tracing::debug!("Reminder check #{}: {:?}", round, check);

            // A pending reminder is only repeated on the first round.
            match &check {
                ReminderCheck::Created(_) => announce_due_reminder(&check, ui),
                ReminderCheck::Pending(_) if round == 1 => announce_due_reminder(&check, ui),
                _ => {}
            }

            if args.iterations.is_some_and(|max| round >= max) {
                break;
            }
            std::thread::sleep(interval);
        }
        Ok(CommandResult::success())
    }
}

impl Command for RemindersCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.command {
            ReminderCommands::Check => self.check(ui),
            ReminderCommands::Ack { id } => self.acknowledge(id, ui),
            ReminderCommands::Remove(args) => self.remove(args, ui),
            ReminderCommands::List(args) => self.list(args, ui),
            ReminderCommands::Watch(args) => self.watch(args, ui),
        }
    }
}

fn render_table(reminders: &[Reminder]) -> String {
    let theme = theme();
    let mut table = Table::new(&["ID", "Date", "Status", "Created", "Message"]);
    for r in reminders {
        let status = if r.acknowledged {
            theme.dim.apply_to("Acknowledged").to_string()
        } else {
            theme.warning.apply_to("Pending").to_string()
        };
        table.add_row(vec![
            r.id.clone(),
            r.date.clone(),
            status,
            format_timestamp(&r.created_at),
            truncate(&r.message, 48),
        ]);
    }
    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::store::MemoryStore;
    use crate::ui::MockUI;
    use chrono::NaiveDate;

    fn context_on(day: u32) -> AppContext {
        AppContext::new(Settings::default(), Box::new(MemoryStore::new()))
            .with_today(NaiveDate::from_ymd_opt(2024, 6, day).unwrap())
    }

    fn run(ctx: &AppContext, command: ReminderCommands, ui: &mut MockUI) -> Result<CommandResult> {
        RemindersCommand::new(ctx, command).execute(ui)
    }

    fn only_reminder(ctx: &AppContext) -> Reminder {
        let all = ctx.reminders().list().unwrap();
        assert_eq!(all.len(), 1);
        all.into_iter().next().unwrap()
    }

    #[test]
    fn announce_is_silent_without_reminder() {
        let mut ui = MockUI::new();
        announce_due_reminder(&ReminderCheck::Nothing, &mut ui);
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn check_on_reminder_day_creates_once() {
        let ctx = context_on(20);
        let mut ui = MockUI::new();

        run(&ctx, ReminderCommands::Check, &mut ui).unwrap();
        assert!(ui.has_warning("Monthly reminder: Today is the 20th"));

        run(&ctx, ReminderCommands::Check, &mut ui).unwrap();
        assert!(ui.has_warning("awaits acknowledgement"));
        only_reminder(&ctx);
    }

    #[test]
    fn configured_day_shows_in_default_message() {
        let mut settings = Settings::default();
        settings.reminders.day_of_month = 5;
        let ctx = AppContext::new(settings, Box::new(MemoryStore::new()))
            .with_today(NaiveDate::from_ymd_opt(2024, 6, 5).unwrap());
        let mut ui = MockUI::new();

        run(&ctx, ReminderCommands::Check, &mut ui).unwrap();
        assert!(ui.has_warning("Today is the 5th!"));
        assert!(!ui.has_warning("20th"));
    }

    #[test]
    fn check_on_other_day_names_next_date() {
        let ctx = context_on(21);
        let mut ui = MockUI::new();

        run(&ctx, ReminderCommands::Check, &mut ui).unwrap();
        assert!(ui.has_message("Next one on 2024-07-20"));
        assert!(ctx.reminders().list().unwrap().is_empty());
    }

    #[test]
    fn acknowledge_silences_check() {
        let ctx = context_on(20);
        let mut ui = MockUI::new();
        run(&ctx, ReminderCommands::Check, &mut ui).unwrap();
        let reminder = only_reminder(&ctx);

        run(&ctx, ReminderCommands::Ack { id: reminder.id }, &mut ui).unwrap();
        assert!(ui.has_success("acknowledged"));

        ui.clear();
        run(&ctx, ReminderCommands::Check, &mut ui).unwrap();
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn acknowledge_unknown_id() {
        let ctx = context_on(1);
        let err = run(
            &ctx,
            ReminderCommands::Ack { id: "nope".into() },
            &mut MockUI::new(),
        )
        .unwrap_err();
        assert!(matches!(err, ItdeskError::NotFound { .. }));
    }

    #[test]
    fn remove_asks_first() {
        let ctx = context_on(20);
        let mut ui = MockUI::new();
        run(&ctx, ReminderCommands::Check, &mut ui).unwrap();
        let id = only_reminder(&ctx).id;

        ui.set_prompt_response("confirm_remove", "no");
        run(
            &ctx,
            ReminderCommands::Remove(RemoveArgs {
                id: id.clone(),
                yes: false,
            }),
            &mut ui,
        )
        .unwrap();
        assert!(ui.has_warning("Nothing removed"));
        only_reminder(&ctx);

        run(&ctx, ReminderCommands::Remove(RemoveArgs { id, yes: true }), &mut ui).unwrap();
        assert!(ctx.reminders().list().unwrap().is_empty());
    }

    #[test]
    fn list_reports_counts() {
        let ctx = context_on(20);
        let mut ui = MockUI::new();
        run(&ctx, ReminderCommands::Check, &mut ui).unwrap();

        run(&ctx, ReminderCommands::List(Default::default()), &mut ui).unwrap();
        assert_eq!(ui.headers(), ["Reminders"]);
        assert!(ui.has_message("2024-06-20"));
        assert!(ui.has_warning("1 reminder awaiting acknowledgement"));
    }

    #[test]
    fn list_json_shape() {
        let ctx = context_on(5);
        let mut ui = MockUI::new();
        run(
            &ctx,
            ReminderCommands::List(ReminderListArgs {
                limit: Some(3),
                json: true,
            }),
            &mut ui,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["acknowledged"], 0);
        assert_eq!(value["nextReminder"], "2024-06-20");
        assert!(value["recent"].as_array().unwrap().is_empty());
    }

    #[test]
    fn watch_stops_after_iterations() {
        let ctx = context_on(20);
        let mut ui = MockUI::new();
        run(
            &ctx,
            ReminderCommands::Watch(WatchArgs {
                interval: 0,
                iterations: Some(3),
            }),
            &mut ui,
        )
        .unwrap();

        only_reminder(&ctx);
        assert_eq!(ui.warnings().len(), 1);
    }
}
