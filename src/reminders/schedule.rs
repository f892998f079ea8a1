//! When reminders fire.

use chrono::{Datelike, NaiveDate};

/// Message of automatically created reminders firing on `day`.
pub fn default_message(day: u32) -> String {
    format!(
        "Today is the {}! Time to review IT equipment and check whether new purchase requests are needed.",
        ordinal(day)
    )
}

/// `1st`, `2nd`, `3rd`, `4th`, `11th`, `21st`...
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Day and message of the monthly reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderSchedule {
    /// Day of month (1..=28) on which the reminder fires.
    pub day: u32,
    pub message: String,
}

impl Default for ReminderSchedule {
    fn default() -> Self {
        Self::for_day(20)
    }
}

impl ReminderSchedule {
    /// Schedule on `day` with the default message for that day.
    pub fn for_day(day: u32) -> Self {
        Self {
            day,
            message: default_message(day),
        }
    }

    /// Whether `today` is a reminder day.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        today.day() == self.day
    }
}

/// Date key of the reminder for `today`'s month, e.g. `2024-06-20`.
pub fn reminder_key(today: NaiveDate, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", today.year(), today.month(), day)
}

/// The next date on which a reminder fires, counting from `today`.
///
/// A reminder day that is today or already past rolls over to next month.
pub fn next_reminder_date(today: NaiveDate, day: u32) -> Option<NaiveDate> {
    if today.day() < day {
        return NaiveDate::from_ymd_opt(today.year(), today.month(), day);
    }
    let (year, month) = if today.month() == 12 {
        (today.year() + 1, 1)
    } else {
        (today.year(), today.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn due_only_on_configured_day() {
        let schedule = ReminderSchedule::default();
        assert!(schedule.is_due(date(2024, 6, 20)));
        assert!(!schedule.is_due(date(2024, 6, 19)));
        assert!(!schedule.is_due(date(2024, 6, 21)));
    }

    #[test]
    fn default_message_names_the_day() {
        assert!(ReminderSchedule::default().message.starts_with("Today is the 20th!"));
        assert!(ReminderSchedule::for_day(1).message.starts_with("Today is the 1st!"));
        assert!(!ReminderSchedule::for_day(5).message.contains("20th"));
    }

    #[test]
    fn ordinals() {
        let got: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23, 28]
            .into_iter()
            .map(ordinal)
            .collect();
        assert_eq!(
            got,
            ["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "23rd", "28th"]
        );
    }

    #[test]
    fn key_is_zero_padded() {
        assert_eq!(reminder_key(date(2024, 3, 20), 20), "2024-03-20");
        assert_eq!(reminder_key(date(2024, 11, 5), 5), "2024-11-05");
    }

    #[test]
    fn next_date_this_month() {
        assert_eq!(next_reminder_date(date(2024, 6, 3), 20), Some(date(2024, 6, 20)));
    }

    #[test]
    fn next_date_on_the_day_is_next_month() {
        assert_eq!(next_reminder_date(date(2024, 6, 20), 20), Some(date(2024, 7, 20)));
    }

    #[test]
    fn next_date_rolls_over_year() {
        assert_eq!(next_reminder_date(date(2024, 12, 25), 20), Some(date(2025, 1, 20)));
    }
}
