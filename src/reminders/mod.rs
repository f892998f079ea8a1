//! Monthly review reminders.
//!
//! On the configured day of each month a reminder keyed by that date is
//! created once. It stays pending until acknowledged.

mod book;
mod schedule;

pub use book::{Reminder, ReminderCheck, Reminders};
pub use schedule::{default_message, next_reminder_date, ordinal, reminder_key, ReminderSchedule};
