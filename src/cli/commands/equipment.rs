//! Equipment command implementation.
//!
//! `itdesk equipment add|edit|remove|show|list`.

use crate::catalog::SUGGESTED_KINDS;
use crate::cli::args::{EquipmentCommands, EquipmentFields, EquipmentListArgs, RemoveArgs, ShowArgs};
use crate::error::{ItdeskError, Result};
use crate::inventory::{Equipment, EquipmentDraft, EquipmentFilter, Inventory};
use crate::ui::{Prompt, PromptOption, Table, UserInterface};

use super::context::AppContext;
use super::dispatcher::{Command, CommandResult};
use super::display::{confirm_removal, or_dash, plural, print_json, theme};

/// The equipment command implementation.
pub struct EquipmentCommand<'a> {
    ctx: &'a AppContext,
    command: EquipmentCommands,
}

impl<'a> EquipmentCommand<'a> {
    pub fn new(ctx: &'a AppContext, command: EquipmentCommands) -> Self {
        Self { ctx, command }
    }

    fn inventory(&self) -> Inventory<'a> {
        Inventory::new(self.ctx.store())
    }

    fn add(&self, fields: &EquipmentFields, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut draft = EquipmentDraft::default();
        apply_fields(fields, &mut draft);
        if ui.is_interactive() {
            self.prompt_required(&mut draft, ui)?;
        }

        let equipment = self.inventory().add(draft)?;
        ui.success(&format!(
            "Equipment '{}' added ({})",
            equipment.name, equipment.id
        ));
        Ok(CommandResult::success())
    }

    fn edit(
        &self,
        id: &str,
        fields: &EquipmentFields,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let inventory = self.inventory();
        let existing = inventory.get(id)?.ok_or_else(|| not_found(id))?;

        let mut draft = EquipmentDraft::from(&existing);
        apply_fields(fields, &mut draft);
        if draft == EquipmentDraft::from(&existing) {
            ui.warning("Nothing to change");
            return Ok(CommandResult::success());
        }

        let updated = inventory.update(id, draft)?;
        ui.success(&format!("Equipment '{}' updated", updated.name));
        Ok(CommandResult::success())
    }

    fn remove(&self, args: &RemoveArgs, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let inventory = self.inventory();
        let existing = inventory.get(&args.id)?.ok_or_else(|| not_found(&args.id))?;

        if !confirm_removal(ui, &format!("'{}'", existing.name), args.yes)? {
            ui.warning("Nothing removed");
            return Ok(CommandResult::success());
        }

        let removed = inventory.remove(&args.id)?;
        ui.success(&format!("Equipment '{}' removed", removed.name));
        Ok(CommandResult::success())
    }

    fn show(&self, args: &ShowArgs, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let equipment = self
            .inventory()
            .get(&args.id)?
            .ok_or_else(|| not_found(&args.id))?;

        if args.json {
            print_json(ui, &equipment)?;
            return Ok(CommandResult::success());
        }

        let theme = theme();
        ui.show_header(&equipment.name);
        let status = theme.equipment_status(equipment.status);
        let rows = [
            ("ID", equipment.id.as_str()),
            ("Type", equipment.kind.as_str()),
            ("Brand", or_dash(&equipment.brand)),
            ("Model", or_dash(&equipment.model)),
            ("Serial", equipment.serial_number.as_str()),
            ("Status", status.as_str()),
            ("Location", or_dash(&equipment.location)),
            ("Purchased", or_dash(&equipment.purchase_date)),
            ("Warranty", or_dash(&equipment.warranty)),
            ("Notes", or_dash(equipment.notes.as_deref().unwrap_or(""))),
        ];
        for (key, value) in rows {
            ui.message(&theme.format_field(key, value, 11));
        }
        Ok(CommandResult::success())
    }

    fn list(&self, args: &EquipmentListArgs, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let inventory = self.inventory();
        let filter = EquipmentFilter {
            search: args.search.clone().unwrap_or_default(),
            status: args.status,
            kind: args.kind.clone(),
        };
        let total = inventory.list()?.len();
        let items = inventory.filter(&filter)?;

        if args.json {
            print_json(ui, &items)?;
            return Ok(CommandResult::success());
        }

        if items.is_empty() {
            if total == 0 {
                ui.message("No equipment registered yet. Add one with 'itdesk equipment add'.");
            } else {
                ui.message("No equipment matches the filter.");
            }
            return Ok(CommandResult::success());
        }

        ui.message(&render_table(&items));
        ui.message(&format!(
            "{} of {}",
            items.len(),
            plural(total, "item", "items")
        ));
        Ok(CommandResult::success())
    }

    /// Ask for required fields the flags left blank.
    fn prompt_required(&self, draft: &mut EquipmentDraft, ui: &mut dyn UserInterface) -> Result<()> {
        if draft.name.trim().is_empty() {
            draft.name = ui.prompt(&Prompt::input("name", "Equipment name"))?.as_string();
        }
        if draft.kind.trim().is_empty() {
            let options = self
                .kind_choices()?
                .into_iter()
                .map(|kind| PromptOption::new(kind.clone(), kind))
                .collect();
            draft.kind = ui
                .prompt(&Prompt::select("type", "Type", options))?
                .as_string();
        }
        if draft.serial_number.trim().is_empty() {
            draft.serial_number = ui
                .prompt(&Prompt::input("serial", "Serial number"))?
                .as_string();
        }
        Ok(())
    }

    /// Suggested kinds followed by any custom kinds already in use.
    fn kind_choices(&self) -> Result<Vec<String>> {
        let mut kinds: Vec<String> = SUGGESTED_KINDS.iter().map(|k| k.to_string()).collect();
        for kind in self.inventory().unique_kinds()? {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        Ok(kinds)
    }
}

impl Command for EquipmentCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.command {
            EquipmentCommands::Add(fields) => self.add(fields, ui),
            EquipmentCommands::Edit { id, fields } => self.edit(id, fields, ui),
            EquipmentCommands::Remove(args) => self.remove(args, ui),
            EquipmentCommands::Show(args) => self.show(args, ui),
            EquipmentCommands::List(args) => self.list(args, ui),
        }
    }
}

/// Copy every flag that was given onto `draft`.
fn apply_fields(fields: &EquipmentFields, draft: &mut EquipmentDraft) {
    let text = [
        (&fields.name, &mut draft.name),
        (&fields.kind, &mut draft.kind),
        (&fields.brand, &mut draft.brand),
        (&fields.model, &mut draft.model),
        (&fields.serial, &mut draft.serial_number),
        (&fields.location, &mut draft.location),
        (&fields.purchase_date, &mut draft.purchase_date),
        (&fields.warranty, &mut draft.warranty),
    ];
    for (flag, target) in text {
        if let Some(value) = flag {
            *target = value.trim().to_string();
        }
    }
    if let Some(status) = fields.status {
        draft.status = status;
    }
    if let Some(notes) = &fields.notes {
        draft.notes = Some(notes.clone());
    }
}

fn render_table(items: &[Equipment]) -> String {
    let theme = theme();
    let mut table = Table::new(&["ID", "Name", "Type", "Brand / Model", "Serial", "Status", "Location"]);
    for e in items {
        let brand_model = format!("{} {}", e.brand, e.model);
        table.add_row(vec![
            e.id.clone(),
            e.name.clone(),
            e.kind.clone(),
            or_dash(brand_model.trim()).to_string(),
            e.serial_number.clone(),
            theme.equipment_status(e.status),
            or_dash(&e.location).to_string(),
        ]);
    }
    table.render()
}

fn not_found(id: &str) -> ItdeskError {
    ItdeskError::NotFound {
        entity: "Equipment",
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::inventory::EquipmentStatus;
    use crate::store::{KeyValueStore, MemoryStore, EQUIPMENTS};
    use crate::ui::MockUI;

    fn context() -> AppContext {
        AppContext::new(Settings::default(), Box::new(MemoryStore::new()))
    }

    fn fields(name: &str, kind: &str, serial: &str) -> EquipmentFields {
        EquipmentFields {
            name: Some(name.to_string()),
            kind: Some(kind.to_string()),
            serial: Some(serial.to_string()),
            ..Default::default()
        }
    }

    fn run(ctx: &AppContext, command: EquipmentCommands, ui: &mut MockUI) -> Result<CommandResult> {
        EquipmentCommand::new(ctx, command).execute(ui)
    }

    #[test]
    fn add_with_flags() {
        let ctx = context();
        let mut ui = MockUI::new();
        run(
            &ctx,
            EquipmentCommands::Add(fields(" Reception PC ", "Desktop", "SN-1")),
            &mut ui,
        )
        .unwrap();

        let all = Inventory::new(ctx.store()).list().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Reception PC");
        assert!(ui.has_success("Reception PC"));
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn add_without_required_fields_is_rejected() {
        let ctx = context();
        let mut ui = MockUI::new();
        let err = run(
            &ctx,
            EquipmentCommands::Add(EquipmentFields {
                name: Some("Printer".into()),
                ..Default::default()
            }),
            &mut ui,
        )
        .unwrap_err();

        assert!(matches!(err, ItdeskError::Validation { .. }));
        assert!(ctx.store().get(EQUIPMENTS).unwrap().is_none());
    }

    #[test]
    fn interactive_add_prompts_for_missing() {
        let ctx = context();
        let mut ui = MockUI::new();
        ui.set_interactive(true);
        ui.set_prompt_response("type", "Notebook");
        ui.set_prompt_response("serial", "NB-77");

        run(
            &ctx,
            EquipmentCommands::Add(EquipmentFields {
                name: Some("Field laptop".into()),
                ..Default::default()
            }),
            &mut ui,
        )
        .unwrap();

        assert_eq!(ui.prompts_shown(), ["type", "serial"]);
        let saved = &Inventory::new(ctx.store()).list().unwrap()[0];
        assert_eq!(saved.kind, "Notebook");
        assert_eq!(saved.serial_number, "NB-77");
    }

    #[test]
    fn kind_choices_include_custom_kinds() {
        let ctx = context();
        Inventory::new(ctx.store())
            .add(EquipmentDraft::new("Plotter", "Large Format Printer", "P1"))
            .unwrap();

        let choices = EquipmentCommand::new(&ctx, EquipmentCommands::List(Default::default()))
            .kind_choices()
            .unwrap();
        assert_eq!(choices.first().map(String::as_str), Some("Desktop"));
        assert_eq!(
            choices.last().map(String::as_str),
            Some("Large Format Printer")
        );
    }

    #[test]
    fn edit_changes_only_given_fields() {
        let ctx = context();
        let added = Inventory::new(ctx.store())
            .add(EquipmentDraft::new("PC", "Desktop", "SN1").with_location("Office"))
            .unwrap();

        let mut ui = MockUI::new();
        run(
            &ctx,
            EquipmentCommands::Edit {
                id: added.id.clone(),
                fields: EquipmentFields {
                    status: Some(EquipmentStatus::Maintenance),
                    ..Default::default()
                },
            },
            &mut ui,
        )
        .unwrap();

        let saved = Inventory::new(ctx.store()).get(&added.id).unwrap().unwrap();
        assert_eq!(saved.status, EquipmentStatus::Maintenance);
        assert_eq!(saved.location, "Office");
    }

    #[test]
    fn edit_without_changes_warns() {
        let ctx = context();
        let added = Inventory::new(ctx.store())
            .add(EquipmentDraft::new("PC", "Desktop", "SN1"))
            .unwrap();

        let mut ui = MockUI::new();
        run(
            &ctx,
            EquipmentCommands::Edit {
                id: added.id,
                fields: EquipmentFields::default(),
            },
            &mut ui,
        )
        .unwrap();
        assert!(ui.has_warning("Nothing to change"));
    }

    #[test]
    fn edit_unknown_id() {
        let ctx = context();
        let mut ui = MockUI::new();
        let err = run(
            &ctx,
            EquipmentCommands::Edit {
                id: "missing".into(),
                fields: EquipmentFields::default(),
            },
            &mut ui,
        )
        .unwrap_err();
        assert!(matches!(err, ItdeskError::NotFound { .. }));
    }

    #[test]
    fn remove_respects_declined_confirmation() {
        let ctx = context();
        let added = Inventory::new(ctx.store())
            .add(EquipmentDraft::new("PC", "Desktop", "SN1"))
            .unwrap();

        let mut ui = MockUI::new();
        ui.set_prompt_response("confirm_remove", "n");
        run(
            &ctx,
            EquipmentCommands::Remove(RemoveArgs {
                id: added.id.clone(),
                yes: false,
            }),
            &mut ui,
        )
        .unwrap();
        assert_eq!(Inventory::new(ctx.store()).list().unwrap().len(), 1);

        run(
            &ctx,
            EquipmentCommands::Remove(RemoveArgs {
                id: added.id,
                yes: true,
            }),
            &mut ui,
        )
        .unwrap();
        assert!(Inventory::new(ctx.store()).list().unwrap().is_empty());
    }

    #[test]
    fn list_filters_and_counts() {
        let ctx = context();
        let inventory = Inventory::new(ctx.store());
        inventory
            .add(EquipmentDraft::new("Dell desktop", "Desktop", "D1").with_brand_model("Dell", "Optiplex"))
            .unwrap();
        inventory
            .add(EquipmentDraft::new("HP printer", "Printer", "P1"))
            .unwrap();

        let mut ui = MockUI::new();
        run(
            &ctx,
            EquipmentCommands::List(EquipmentListArgs {
                search: Some("optiplex".into()),
                ..Default::default()
            }),
            &mut ui,
        )
        .unwrap();

        assert!(ui.has_message("Dell desktop"));
        assert!(!ui.has_message("HP printer"));
        assert!(ui.has_message("1 of 2 items"));
    }

    #[test]
    fn empty_list_hint() {
        let ctx = context();
        let mut ui = MockUI::new();
        run(&ctx, EquipmentCommands::List(Default::default()), &mut ui).unwrap();
        assert!(ui.has_message("No equipment registered yet"));
    }

    #[test]
    fn show_json() {
        let ctx = context();
        let added = Inventory::new(ctx.store())
            .add(EquipmentDraft::new("PC", "Desktop", "SN1"))
            .unwrap();

        let mut ui = MockUI::new();
        run(
            &ctx,
            EquipmentCommands::Show(ShowArgs {
                id: added.id,
                json: true,
            }),
            &mut ui,
        )
        .unwrap();
        assert!(ui.has_message("\"serialNumber\": \"SN1\""));
    }
}
