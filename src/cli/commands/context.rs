//! Shared state handed to every command.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::cli::args::ProbeArgs;
use crate::config::Settings;
use crate::network::SimulatedProbe;
use crate::reminders::Reminders;
use crate::store::{default_data_dir, KeyValueStore};

/// Settings, storage and clock for one CLI invocation.
pub struct AppContext {
    settings: Settings,
    store: Box<dyn KeyValueStore>,
    today: Option<NaiveDate>,
}

impl AppContext {
    pub fn new(settings: Settings, store: Box<dyn KeyValueStore>) -> Self {
        Self {
            settings,
            store,
            today: None,
        }
    }

    /// Pin the calendar date used for reminder checks.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Today's date in local time.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    /// Reminders using the configured schedule.
    pub fn reminders(&self) -> Reminders<'_> {
        Reminders::with_schedule(self.store(), self.settings.reminders.schedule())
    }

    /// Simulated probe tuned from config, seeded when asked.
    pub fn probe(&self, args: &ProbeArgs) -> SimulatedProbe {
        let probe = match args.seed {
            Some(seed) => SimulatedProbe::with_seed(seed),
            None => SimulatedProbe::new(),
        };
        let scan = &self.settings.scan;
        probe.with_latency(scan.latency_min_ms, scan.latency_max_ms)
    }
}

/// Pick the data directory: flag or env first, then config, then the platform default.
pub fn resolve_data_dir(flag: Option<&Path>, settings: &Settings) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| settings.data_dir.clone())
        .unwrap_or_else(default_data_dir)
}
