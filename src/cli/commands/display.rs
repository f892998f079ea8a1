//! Shared display helpers for command output.

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::ui::{should_use_colors, ItdeskTheme, Prompt, UserInterface};

/// Theme for command output, plain when colors are off.
pub fn theme() -> ItdeskTheme {
    ItdeskTheme::for_colors(should_use_colors())
}

/// Print `value` as pretty JSON through the UI.
pub fn print_json<T: Serialize + ?Sized>(ui: &mut dyn UserInterface, value: &T) -> Result<()> {
    ui.message(&serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Ask before deleting `what`. `--yes` skips the question.
pub fn confirm_removal(ui: &mut dyn UserInterface, what: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    let prompt = Prompt::confirm("confirm_remove", format!("Remove {}?", what));
    let answer = ui.prompt(&prompt)?;
    Ok(answer.as_bool().unwrap_or(false))
}

/// Timestamp in local time, minute precision.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Placeholder for blank optional text.
pub fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

/// Cut `text` to `max` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// `1 item` / `3 items`.
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
