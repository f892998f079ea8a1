//! Settings schema.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ItdeskError, Result};
use crate::network::ScanOptions;
use crate::reminders::ReminderSchedule;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where slot files are kept (defaults to the platform data dir).
    pub data_dir: Option<PathBuf>,

    /// Default output verbosity.
    pub output: Option<OutputMode>,

    pub scan: ScanSettings,

    pub reminders: ReminderSettings,
}

/// Output verbosity as written in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    Normal,
    Quiet,
}

/// Network scan tuning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    /// Range used when `network scan` gets none.
    pub default_range: String,
    pub batch_size: usize,
    pub batch_pause_ms: u64,
    /// Simulated per-host latency bounds. Both zero disables latency.
    pub latency_min_ms: u64,
    pub latency_max_ms: u64,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            default_range: "192.168.1".to_string(),
            batch_size: 20,
            batch_pause_ms: 100,
            latency_min_ms: 0,
            latency_max_ms: 0,
        }
    }
}

impl ScanSettings {
    /// Scanner options derived from these settings.
    pub fn options(&self) -> ScanOptions {
        ScanOptions {
            batch_size: self.batch_size,
            batch_pause: Duration::from_millis(self.batch_pause_ms),
        }
    }
}

/// Monthly reminder settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderSettings {
    pub day_of_month: u32,
    /// Reminder text. Defaults to a message naming `day_of_month`.
    pub message: Option<String>,
    /// How many reminders `reminders list` shows.
    pub recent_limit: usize,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            day_of_month: 20,
            message: None,
            recent_limit: 6,
        }
    }
}

impl ReminderSettings {
    /// Schedule derived from these settings.
    pub fn schedule(&self) -> ReminderSchedule {
        let mut schedule = ReminderSchedule::for_day(self.day_of_month);
        if let Some(message) = &self.message {
            schedule.message = message.clone();
        }
        schedule
    }
}

/// Check value ranges that serde cannot express.
pub fn validate(settings: &Settings) -> Result<()> {
    let mut problems = Vec::new();

    if !(1..=28).contains(&settings.reminders.day_of_month) {
        problems.push(format!(
            "reminders.day_of_month must be between 1 and 28 (got {})",
            settings.reminders.day_of_month
        ));
    }
    if settings
        .reminders
        .message
        .as_deref()
        .is_some_and(|m| m.trim().is_empty())
    {
        problems.push("reminders.message must not be empty".to_string());
    }
    if settings.scan.batch_size == 0 {
        problems.push("scan.batch_size must be at least 1".to_string());
    }
    if settings.scan.latency_min_ms > settings.scan.latency_max_ms {
        problems.push(format!(
            "scan.latency_min_ms ({}) exceeds scan.latency_max_ms ({})",
            settings.scan.latency_min_ms, settings.scan.latency_max_ms
        ));
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ItdeskError::ConfigValidationError {
            message: problems.join("; "),
        })
    }
}
