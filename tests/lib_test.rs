//! Library integration tests.

use chrono::{NaiveDate, Utc};
use itdesk::dashboard::DashboardStats;
use itdesk::inventory::{EquipmentDraft, Inventory};
use itdesk::network::{Devices, ScanOptions, SimulatedProbe};
use itdesk::purchases::{PurchaseDraft, Purchases};
use itdesk::reminders::{ReminderCheck, Reminders};
use itdesk::store::{FileStore, KeyValueStore};
use itdesk::ItdeskError;
use tempfile::TempDir;

#[test]
fn error_types_are_public() {
    let err = ItdeskError::NotFound {
        entity: "Equipment",
        id: "test".into(),
    };
    assert!(err.to_string().contains("test"));
    assert!(err.is_user_error());
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> itdesk::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use itdesk::cli::{Cli, Commands, EquipmentCommands};

    let cli = Cli::parse_from(["itdesk", "equipment", "list", "--json"]);
    if let Some(Commands::Equipment(EquipmentCommands::List(args))) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected equipment list command");
    }
}

#[test]
fn records_survive_reopening_the_store() {
    let temp = TempDir::new().unwrap();
    {
        let store = FileStore::new(temp.path());
        Inventory::new(&store)
            .add(EquipmentDraft::new("Reception PC", "Desktop", "SN-1"))
            .unwrap();
        Purchases::new(&store)
            .create(PurchaseDraft::new("Webcam", "Video calls"), Utc::now())
            .unwrap();
    }

    let store = FileStore::new(temp.path());
    let stats = DashboardStats::collect(&store).unwrap();
    assert_eq!(stats.total_equipments, 1);
    assert_eq!(stats.pending_purchases, 1);
}

#[test]
fn corrupt_slot_is_reported_not_reset() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());
    std::fs::write(store.slot_path("equipments"), "{not json").unwrap();

    let err = Inventory::new(&store).list().unwrap_err();
    assert!(matches!(err, ItdeskError::StoreCorrupt { .. }));
    assert_eq!(
        std::fs::read_to_string(store.slot_path("equipments")).unwrap(),
        "{not json"
    );
}

#[test]
fn scan_then_reminder_on_file_store() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());

    let options = ScanOptions {
        batch_pause: std::time::Duration::ZERO,
        ..Default::default()
    };
    let report = Devices::new(&store)
        .scan(
            "192.168.0",
            &mut SimulatedProbe::with_seed(9),
            &options,
            Utc::now(),
            |_, _| {},
        )
        .unwrap();
    assert_eq!(report.probed, 254);
    assert_eq!(report.added, report.online);

    let today = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
    let reminders = Reminders::new(&store);
    assert!(matches!(
        reminders.check(today, Utc::now()).unwrap(),
        ReminderCheck::Created(_)
    ));
    assert!(store.get("monthly-reminders").unwrap().is_some());
}
