//! Network command implementation.
//!
//! `itdesk network scan|add|remove|refresh|list`. Every probe is simulated;
//! nothing here touches the network.

use std::net::Ipv4Addr;

use crate::cli::args::{NetworkCommands, NetworkListArgs, ProbeArgs, RemoveArgs};
use crate::error::{ItdeskError, Result};
use crate::network::{DeviceStatus, Devices, NetworkDevice};
use crate::ui::{Table, UserInterface};

use super::context::AppContext;
use super::dispatcher::{Command, CommandResult};
use super::display::{confirm_removal, format_timestamp, plural, print_json, theme};

/// The network command implementation.
pub struct NetworkCommand<'a> {
    ctx: &'a AppContext,
    command: NetworkCommands,
}

impl<'a> NetworkCommand<'a> {
    pub fn new(ctx: &'a AppContext, command: NetworkCommands) -> Self {
        Self { ctx, command }
    }

    fn devices(&self) -> Devices<'a> {
        Devices::new(self.ctx.store())
    }

    fn scan(
        &self,
        range: Option<&str>,
        probe_args: &ProbeArgs,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let scan = &self.ctx.settings().scan;
        let range = range.unwrap_or(&scan.default_range);
        let mut probe = self.ctx.probe(probe_args);

        let mut spinner = ui.start_spinner(&format!("Scanning {}.0/24...", range));
        let result = self.devices().scan(
            range,
            &mut probe,
            &scan.options(),
            self.ctx.now(),
            |done, total| {
                spinner.set_message(&format!("Scanning {}.0/24 ({}/{})", range, done, total));
                ui.show_progress(done, total);
            },
        );

        let report = match result {
            Ok(report) => report,
            Err(e) => {
                spinner.finish_error("Scan failed");
                return Err(e);
            }
        };
        spinner.finish_success(&format!(
            "Scanned {} addresses in {}.0/24",
            report.probed, report.range
        ));

        ui.success(&format!(
            "{} online, {} new, {} updated, {} went offline",
            plural(report.online, "device", "devices"),
            report.added,
            report.updated,
            report.went_offline
        ));
        Ok(CommandResult::success())
    }

    fn add(&self, ip: &str, probe_args: &ProbeArgs, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut probe = self.ctx.probe(probe_args);
        let device = self.devices().add_manual(ip, &mut probe, self.ctx.now())?;

        let host = device
            .hostname
            .as_deref()
            .map(|h| format!(" ({})", h))
            .unwrap_or_default();
        ui.success(&format!("Added {}{}: {}", device.ip, host, device.status));
        Ok(CommandResult::success())
    }

    fn remove(&self, args: &RemoveArgs, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let devices = self.devices();
        let existing = devices
            .list()?
            .into_iter()
            .find(|d| d.matches(&args.id))
            .ok_or_else(|| not_found(&args.id))?;

        if !confirm_removal(ui, &existing.ip, args.yes)? {
            ui.warning("Nothing removed");
            return Ok(CommandResult::success());
        }

        let removed = devices.remove(&existing.id)?;
        ui.success(&format!("Device {} removed", removed.ip));
        Ok(CommandResult::success())
    }

    fn refresh(&self, id: &str, probe_args: &ProbeArgs, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut probe = self.ctx.probe(probe_args);
        let device = self.devices().refresh(id, &mut probe, self.ctx.now())?;

        let line = format!("{} is {}", device.ip, device.status);
        match device.status {
            DeviceStatus::Online => ui.success(&line),
            _ => ui.warning(&line),
        }
        Ok(CommandResult::success())
    }

    fn list(&self, args: &NetworkListArgs, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut devices = self.devices().list()?;
        let total = devices.len();
        let online = devices
            .iter()
            .filter(|d| d.status == DeviceStatus::Online)
            .count();
        if args.online {
            devices.retain(|d| d.status == DeviceStatus::Online);
        }
        devices.sort_by_key(|d| d.ip.parse::<Ipv4Addr>().ok());

        if args.json {
            print_json(ui, &devices)?;
            return Ok(CommandResult::success());
        }

        if devices.is_empty() {
            ui.message("No devices found. Run 'itdesk network scan' to discover some.");
            return Ok(CommandResult::success());
        }

        ui.message(&render_table(&devices));
        ui.message(&format!(
            "{} of {} online",
            online,
            plural(total, "device", "devices")
        ));
        Ok(CommandResult::success())
    }
}

impl Command for NetworkCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.command {
            NetworkCommands::Scan { range, probe } => self.scan(range.as_deref(), probe, ui),
            NetworkCommands::Add { ip, probe } => self.add(ip, probe, ui),
            NetworkCommands::Remove(args) => self.remove(args, ui),
            NetworkCommands::Refresh { id, probe } => self.refresh(id, probe, ui),
            NetworkCommands::List(args) => self.list(args, ui),
        }
    }
}

fn render_table(devices: &[NetworkDevice]) -> String {
    let theme = theme();
    let mut table = Table::new(&["IP", "Hostname", "Type", "Status", "Last seen", "ID"]);
    for d in devices {
        table.add_row(vec![
            d.ip.clone(),
            d.hostname.clone().unwrap_or_else(|| "-".to_string()),
            d.device_type.unwrap_or_default().label().to_string(),
            theme.device_status(d.status),
            format_timestamp(&d.last_seen),
            d.id.clone(),
        ]);
    }
    table.render()
}

fn not_found(id: &str) -> ItdeskError {
    ItdeskError::NotFound {
        entity: "Device",
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::store::MemoryStore;
    use crate::ui::MockUI;

    fn context() -> AppContext {
        let mut settings = Settings::default();
        settings.scan.batch_pause_ms = 0;
        AppContext::new(settings, Box::new(MemoryStore::new()))
    }

    fn seeded() -> ProbeArgs {
        ProbeArgs { seed: Some(7) }
    }

    fn run(ctx: &AppContext, command: NetworkCommands, ui: &mut MockUI) -> Result<CommandResult> {
        NetworkCommand::new(ctx, command).execute(ui)
    }

    #[test]
    fn scan_uses_default_range_and_reports_progress() {
        let ctx = context();
        let mut ui = MockUI::new();
        run(
            &ctx,
            NetworkCommands::Scan {
                range: None,
                probe: seeded(),
            },
            &mut ui,
        )
        .unwrap();

        assert_eq!(ui.spinners(), ["Scanning 192.168.1.0/24..."]);
        assert_eq!(ui.progress().last(), Some(&(254, 254)));
        assert!(ui.has_success("went offline"));

        let devices = Devices::new(ctx.store()).list().unwrap();
        assert!(devices.iter().all(|d| d.ip.starts_with("192.168.1.")));
        assert!(devices.iter().all(|d| d.status == DeviceStatus::Online));
    }

    #[test]
    fn seeded_scans_are_reproducible() {
        let first = context();
        let second = context();
        for ctx in [&first, &second] {
            run(
                ctx,
                NetworkCommands::Scan {
                    range: Some("10.0.0".into()),
                    probe: seeded(),
                },
                &mut MockUI::new(),
            )
            .unwrap();
        }

        let ips = |ctx: &AppContext| -> Vec<String> {
            Devices::new(ctx.store())
                .list()
                .unwrap()
                .into_iter()
                .map(|d| d.ip)
                .collect()
        };
        assert_eq!(ips(&first), ips(&second));
    }

    #[test]
    fn scan_rejects_bad_range() {
        let ctx = context();
        let mut ui = MockUI::new();
        let err = run(
            &ctx,
            NetworkCommands::Scan {
                range: Some("192.168".into()),
                probe: seeded(),
            },
            &mut ui,
        )
        .unwrap_err();
        assert!(matches!(err, ItdeskError::InvalidInput { .. }));
    }

    #[test]
    fn add_and_duplicate() {
        let ctx = context();
        let mut ui = MockUI::new();
        let add = || NetworkCommands::Add {
            ip: "192.168.1.100".into(),
            probe: seeded(),
        };

        run(&ctx, add(), &mut ui).unwrap();
        assert!(ui.has_success("192.168.1.100 (DESKTOP-PC)"));

        let err = run(&ctx, add(), &mut ui).unwrap_err();
        assert!(matches!(err, ItdeskError::Duplicate { .. }));
    }

    #[test]
    fn remove_by_padded_ip() {
        let ctx = context();
        let mut ui = MockUI::new();
        run(
            &ctx,
            NetworkCommands::Add {
                ip: "10.1.1.9".into(),
                probe: seeded(),
            },
            &mut ui,
        )
        .unwrap();

        run(
            &ctx,
            NetworkCommands::Remove(RemoveArgs {
                id: "10.1.1.009".into(),
                yes: true,
            }),
            &mut ui,
        )
        .unwrap();
        assert!(Devices::new(ctx.store()).list().unwrap().is_empty());
    }

    #[test]
    fn refresh_unknown_device() {
        let ctx = context();
        let mut ui = MockUI::new();
        let err = run(
            &ctx,
            NetworkCommands::Refresh {
                id: "10.9.9.9".into(),
                probe: seeded(),
            },
            &mut ui,
        )
        .unwrap_err();
        assert!(matches!(err, ItdeskError::NotFound { .. }));
    }

    #[test]
    fn list_empty_hint_and_json() {
        let ctx = context();
        let mut ui = MockUI::new();
        run(&ctx, NetworkCommands::List(Default::default()), &mut ui).unwrap();
        assert!(ui.has_message("itdesk network scan"));

        run(
            &ctx,
            NetworkCommands::List(NetworkListArgs {
                online: false,
                json: true,
            }),
            &mut ui,
        )
        .unwrap();
        assert!(ui.has_message("[]"));
    }
}
