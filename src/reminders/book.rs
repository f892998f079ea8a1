//! Reminder records over the reminder slot.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{reminder_key, ReminderSchedule};
use crate::error::{ItdeskError, Result};
use crate::store::{new_id, KeyValueStore, Slot, MONTHLY_REMINDERS};

/// A dated review notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    /// Date key, `YYYY-MM-DD`.
    pub date: String,
    pub message: String,
    #[serde(default)]
    pub acknowledged: bool,
    pub created_at: DateTime<Utc>,
}

/// Result of checking whether a reminder is due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderCheck {
    /// Today is the reminder day and a new reminder was stored.
    Created(Reminder),
    /// Today's reminder exists and still awaits acknowledgement.
    Pending(Reminder),
    /// Not the reminder day, or today's reminder is already acknowledged.
    Nothing,
}

/// Reminders backed by a key-value store.
pub struct Reminders<'a> {
    slot: Slot<'a, Reminder>,
    schedule: ReminderSchedule,
}

impl<'a> Reminders<'a> {
    /// Open the reminders in `store` with the default schedule.
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self::with_schedule(store, ReminderSchedule::default())
    }

    /// Open the reminders in `store` with a custom schedule.
    pub fn with_schedule(store: &'a dyn KeyValueStore, schedule: ReminderSchedule) -> Self {
        Self {
            slot: Slot::new(store, MONTHLY_REMINDERS),
            schedule,
        }
    }

    /// The active schedule.
    pub fn schedule(&self) -> &ReminderSchedule {
        &self.schedule
    }

    /// All reminders in creation order.
    pub fn list(&self) -> Result<Vec<Reminder>> {
        self.slot.load()
    }

    /// Create today's reminder if it is due and does not exist yet.
    pub fn check(&self, today: NaiveDate, now: DateTime<Utc>) -> Result<ReminderCheck> {
        if !self.schedule.is_due(today) {
            return Ok(ReminderCheck::Nothing);
        }

        let key = reminder_key(today, self.schedule.day);
        if let Some(existing) = self.list()?.into_iter().find(|r| r.date == key) {
            return Ok(if existing.acknowledged {
                ReminderCheck::Nothing
            } else {
                ReminderCheck::Pending(existing)
            });
        }

        let reminder = Reminder {
            id: new_id(),
            date: key,
            message: self.schedule.message.clone(),
            acknowledged: false,
            created_at: now,
        };
        self.slot.update(|all| {
            all.push(reminder.clone());
            Ok(())
        })?;

        tracing::info!("Created monthly reminder for {}", reminder.date);
        Ok(ReminderCheck::Created(reminder))
    }

    /// Mark a reminder as seen.
    pub fn acknowledge(&self, id: &str) -> Result<Reminder> {
        self.slot.update(|all| {
            let reminder = all
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| not_found(id))?;
            reminder.acknowledged = true;
            Ok(reminder.clone())
        })
    }

    /// Delete a reminder.
    pub fn remove(&self, id: &str) -> Result<Reminder> {
        self.slot.update(|all| {
            let index = all
                .iter()
                .position(|r| r.id == id)
                .ok_or_else(|| not_found(id))?;
            Ok(all.remove(index))
        })
    }

    /// Reminders still awaiting acknowledgement.
    pub fn pending(&self) -> Result<Vec<Reminder>> {
        Ok(self.list()?.into_iter().filter(|r| !r.acknowledged).collect())
    }

    /// Number of acknowledged reminders.
    pub fn acknowledged_count(&self) -> Result<usize> {
        Ok(self.list()?.iter().filter(|r| r.acknowledged).count())
    }

    /// Most recently created reminders, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<Reminder>> {
        let mut all = self.list()?;
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all.truncate(limit);
        Ok(all)
    }
}

fn not_found(id: &str) -> ItdeskError {
    ItdeskError::NotFound {
        entity: "Reminder",
        id: id.to_string(),
    }
}
