//! Purchase command implementation.
//!
//! `itdesk purchase new|approve|reject|remove|show|list`.

use crate::catalog::EquipmentType;
use crate::cli::args::{PurchaseCommands, PurchaseListArgs, PurchaseNewArgs, RemoveArgs, ShowArgs};
use crate::error::{ItdeskError, Result};
use crate::purchases::{PurchaseDraft, PurchaseFilter, PurchaseRequest, PurchaseStatus, Purchases};
use crate::ui::{Prompt, PromptOption, Table, UserInterface};

use super::context::AppContext;
use super::dispatcher::{Command, CommandResult};
use super::display::{
    confirm_removal, format_timestamp, or_dash, plural, print_json, theme, truncate,
};

/// The purchase command implementation.
pub struct PurchaseCommand<'a> {
    ctx: &'a AppContext,
    command: PurchaseCommands,
}

impl<'a> PurchaseCommand<'a> {
    pub fn new(ctx: &'a AppContext, command: PurchaseCommands) -> Self {
        Self { ctx, command }
    }

    fn purchases(&self) -> Purchases<'a> {
        Purchases::new(self.ctx.store())
    }

    fn create(&self, args: &PurchaseNewArgs, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut draft = PurchaseDraft {
            equipment_name: args.name.clone().unwrap_or_default(),
            justification: args.justification.clone().unwrap_or_default(),
            estimated_price: args.price.clone().unwrap_or_default(),
            requester: args.requester.clone().unwrap_or_default(),
            ..Default::default()
        };
        if let Some(kind) = args.kind {
            draft.kind = kind;
        }
        if let Some(quantity) = args.quantity {
            draft.quantity = quantity;
        }
        if let Some(priority) = args.priority {
            draft.priority = priority;
        }

        if ui.is_interactive() {
            prompt_required(args, &mut draft, ui)?;
        }

        let request = self.purchases().create(draft, self.ctx.now())?;
        ui.success(&format!(
            "Purchase request for {} x {} filed ({})",
            request.quantity, request.equipment_name, request.id
        ));
        Ok(CommandResult::success())
    }

    fn decide(&self, id: &str, to: PurchaseStatus, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let purchases = self.purchases();
        let request = match to {
            PurchaseStatus::Approved => purchases.approve(id, self.ctx.now())?,
            _ => purchases.reject(id, self.ctx.now())?,
        };
        ui.success(&format!(
            "Request for {} {}",
            request.equipment_name,
            to.as_str()
        ));
        Ok(CommandResult::success())
    }

    fn remove(&self, args: &RemoveArgs, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let purchases = self.purchases();
        let existing = purchases.get(&args.id)?.ok_or_else(|| not_found(&args.id))?;

        let what = format!("the request for {}", existing.equipment_name);
        if !confirm_removal(ui, &what, args.yes)? {
            ui.warning("Nothing removed");
            return Ok(CommandResult::success());
        }

        purchases.remove(&args.id)?;
        ui.success(&format!("Request for {} removed", existing.equipment_name));
        Ok(CommandResult::success())
    }

    fn show(&self, args: &ShowArgs, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let request = self
            .purchases()
            .get(&args.id)?
            .ok_or_else(|| not_found(&args.id))?;

        if args.json {
            print_json(ui, &request)?;
            return Ok(CommandResult::success());
        }

        let theme = theme();
        ui.show_header(&request.equipment_name);
        let kind = format!("{} {}", request.kind.icon(), request.kind.label());
        let quantity = request.quantity.to_string();
        let requested = format_timestamp(&request.request_date);
        let status = theme.purchase_status(request.status);
        let priority = theme.priority(request.priority);
        let decided = request
            .decided_at
            .as_ref()
            .map(format_timestamp)
            .unwrap_or_else(|| "-".to_string());
        let rows = [
            ("ID", request.id.as_str()),
            ("Type", kind.as_str()),
            ("Quantity", quantity.as_str()),
            ("Price", or_dash(&request.estimated_price)),
            ("Priority", priority.as_str()),
            ("Status", status.as_str()),
            ("Requester", or_dash(&request.requester)),
            ("Requested", requested.as_str()),
            ("Decided", decided.as_str()),
            ("Reason", request.justification.as_str()),
        ];
        for (key, value) in rows {
            ui.message(&theme.format_field(key, value, 11));
        }
        Ok(CommandResult::success())
    }

    fn list(&self, args: &PurchaseListArgs, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let purchases = self.purchases();
        let filter = PurchaseFilter {
            search: args.search.clone().unwrap_or_default(),
            status: args.status,
            priority: args.priority,
        };
        let total = purchases.list()?.len();
        let requests = purchases.filter(&filter)?;

        if args.json {
            print_json(ui, &requests)?;
            return Ok(CommandResult::success());
        }

        if requests.is_empty() {
            if total == 0 {
                ui.message("No purchase requests yet. File one with 'itdesk purchase new'.");
            } else {
                ui.message("No purchase requests match the filter.");
            }
            return Ok(CommandResult::success());
        }

        ui.message(&render_table(&requests));
        ui.message(&format!(
            "{} of {}",
            requests.len(),
            plural(total, "request", "requests")
        ));
        Ok(CommandResult::success())
    }
}

impl Command for PurchaseCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.command {
            PurchaseCommands::New(args) => self.create(args, ui),
            PurchaseCommands::Approve { id } => self.decide(id, PurchaseStatus::Approved, ui),
            PurchaseCommands::Reject { id } => self.decide(id, PurchaseStatus::Rejected, ui),
            PurchaseCommands::Remove(args) => self.remove(args, ui),
            PurchaseCommands::Show(args) => self.show(args, ui),
            PurchaseCommands::List(args) => self.list(args, ui),
        }
    }
}

/// Ask for whatever the flags left out that the form would have asked.
fn prompt_required(
    args: &PurchaseNewArgs,
    draft: &mut PurchaseDraft,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    if draft.equipment_name.trim().is_empty() {
        draft.equipment_name = ui
            .prompt(&Prompt::input("name", "Equipment name"))?
            .as_string();
    }
    if args.kind.is_none() {
        let options = EquipmentType::ALL
            .iter()
            .map(|t| PromptOption::new(format!("{} {}", t.icon(), t.label()), t.as_str()))
            .collect();
        let prompt = Prompt::select("type", "Type", options).with_default(draft.kind.as_str());
        let answer = ui.prompt(&prompt)?.as_string();
        draft.kind = answer
            .parse()
            .map_err(|message| ItdeskError::InvalidInput { message })?;
    }
    if draft.justification.trim().is_empty() {
        draft.justification = ui
            .prompt(&Prompt::input("justification", "Why is it needed?"))?
            .as_string();
    }
    Ok(())
}

fn render_table(requests: &[PurchaseRequest]) -> String {
    let theme = theme();
    let mut table = Table::new(&[
        "ID", "Equipment", "Type", "Qty", "Price", "Priority", "Status", "Requester", "Reason",
    ]);
    for r in requests {
        table.add_row(vec![
            r.id.clone(),
            r.equipment_name.clone(),
            r.kind.label().to_string(),
            r.quantity.to_string(),
            or_dash(&r.estimated_price).to_string(),
            theme.priority(r.priority),
            theme.purchase_status(r.status),
            or_dash(&r.requester).to_string(),
            truncate(&r.justification, 32),
        ]);
    }
    table.render()
}

fn not_found(id: &str) -> ItdeskError {
    ItdeskError::NotFound {
        entity: "Purchase request",
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::purchases::Priority;
    use crate::store::MemoryStore;
    use crate::ui::MockUI;

    fn context() -> AppContext {
        AppContext::new(Settings::default(), Box::new(MemoryStore::new()))
    }

    fn run(ctx: &AppContext, command: PurchaseCommands, ui: &mut MockUI) -> Result<CommandResult> {
        PurchaseCommand::new(ctx, command).execute(ui)
    }

    fn file(ctx: &AppContext, name: &str) -> PurchaseRequest {
        Purchases::new(ctx.store())
            .create(PurchaseDraft::new(name, "needed"), ctx.now())
            .unwrap()
    }

    #[test]
    fn new_request_from_flags() {
        let ctx = context();
        let mut ui = MockUI::new();
        run(
            &ctx,
            PurchaseCommands::New(PurchaseNewArgs {
                name: Some("Monitor 27\"".into()),
                justification: Some("Second screen for design".into()),
                kind: Some(EquipmentType::Monitor),
                quantity: Some(2),
                priority: Some(Priority::High),
                ..Default::default()
            }),
            &mut ui,
        )
        .unwrap();

        let saved = &Purchases::new(ctx.store()).list().unwrap()[0];
        assert_eq!(saved.quantity, 2);
        assert_eq!(saved.kind, EquipmentType::Monitor);
        assert_eq!(saved.status, PurchaseStatus::Pending);
        assert!(ui.has_success("2 x Monitor"));
    }

    #[test]
    fn new_request_without_justification_fails() {
        let ctx = context();
        let mut ui = MockUI::new();
        let err = run(
            &ctx,
            PurchaseCommands::New(PurchaseNewArgs {
                name: Some("Mouse".into()),
                ..Default::default()
            }),
            &mut ui,
        )
        .unwrap_err();

        assert!(err.to_string().contains("justification"));
        assert!(Purchases::new(ctx.store()).list().unwrap().is_empty());
    }

    #[test]
    fn interactive_new_prompts_for_missing() {
        let ctx = context();
        let mut ui = MockUI::new();
        ui.set_interactive(true);
        ui.set_prompt_response("name", "Webcam");
        ui.set_prompt_response("type", "camera");
        ui.set_prompt_response("justification", "Video calls");

        run(&ctx, PurchaseCommands::New(Default::default()), &mut ui).unwrap();

        let saved = &Purchases::new(ctx.store()).list().unwrap()[0];
        assert_eq!(saved.equipment_name, "Webcam");
        assert_eq!(saved.kind, EquipmentType::Camera);
    }

    #[test]
    fn approve_then_reject_is_refused() {
        let ctx = context();
        let request = file(&ctx, "Laptop");
        let mut ui = MockUI::new();

        run(&ctx, PurchaseCommands::Approve { id: request.id.clone() }, &mut ui).unwrap();
        assert!(ui.has_success("approved"));

        let err = run(&ctx, PurchaseCommands::Reject { id: request.id.clone() }, &mut ui)
            .unwrap_err();
        assert!(matches!(err, ItdeskError::InvalidTransition { .. }));

        let saved = Purchases::new(ctx.store()).get(&request.id).unwrap().unwrap();
        assert_eq!(saved.status, PurchaseStatus::Approved);
    }

    #[test]
    fn reject_unknown_id() {
        let ctx = context();
        let mut ui = MockUI::new();
        let err = run(&ctx, PurchaseCommands::Reject { id: "nope".into() }, &mut ui).unwrap_err();
        assert!(matches!(err, ItdeskError::NotFound { .. }));
    }

    #[test]
    fn remove_with_yes() {
        let ctx = context();
        let request = file(&ctx, "Keyboard");
        let mut ui = MockUI::new();
        run(
            &ctx,
            PurchaseCommands::Remove(RemoveArgs {
                id: request.id,
                yes: true,
            }),
            &mut ui,
        )
        .unwrap();
        assert!(Purchases::new(ctx.store()).list().unwrap().is_empty());
    }

    #[test]
    fn list_by_status() {
        let ctx = context();
        let approved = file(&ctx, "Router");
        file(&ctx, "Switch");
        Purchases::new(ctx.store())
            .approve(&approved.id, ctx.now())
            .unwrap();

        let mut ui = MockUI::new();
        run(
            &ctx,
            PurchaseCommands::List(PurchaseListArgs {
                status: Some(PurchaseStatus::Pending),
                ..Default::default()
            }),
            &mut ui,
        )
        .unwrap();

        assert!(ui.has_message("Switch"));
        assert!(!ui.has_message("Router"));
        assert!(ui.has_message("1 of 2 requests"));
    }

    #[test]
    fn show_displays_decision() {
        let ctx = context();
        let request = file(&ctx, "Tablet");
        Purchases::new(ctx.store())
            .reject(&request.id, ctx.now())
            .unwrap();

        let mut ui = MockUI::new();
        run(
            &ctx,
            PurchaseCommands::Show(ShowArgs {
                id: request.id,
                json: false,
            }),
            &mut ui,
        )
        .unwrap();
        assert!(ui.has_message("Rejected"));
        assert_eq!(ui.headers(), ["Tablet"]);
    }
}
