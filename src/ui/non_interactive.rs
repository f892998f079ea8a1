//! Non-interactive UI for pipes, scripts and CI.

use std::collections::HashMap;

use crate::error::{ItdeskError, Result};

use super::spinner::NoopSpinner;
use super::{parse_yes, OutputMode, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface};

/// Prefix of environment variables that answer prompts.
pub const PROMPT_ENV_PREFIX: &str = "ITDESK_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `ITDESK_PROMPT_<KEY>` variables, then from the
/// prompt's default. A prompt with neither is an error.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI reading answers from the environment.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();
        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }

    fn answer(prompt: &Prompt, raw: &str) -> PromptResult {
        match prompt.prompt_type {
            PromptType::Confirm => PromptResult::Bool(parse_yes(raw)),
            _ => PromptResult::String(raw.to_string()),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        if let Some(value) = self.env_overrides.get(&env_key) {
            return Ok(Self::answer(prompt, value));
        }

        if let Some(default) = &prompt.default {
            return Ok(Self::answer(prompt, default));
        }

        Err(ItdeskError::InvalidInput {
            message: format!(
                "Cannot prompt for '{}' in non-interactive mode (set {} or pass the value as a flag)",
                prompt.key, env_key
            ),
        })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_progress(&mut self, current: usize, total: usize) {
        if self.mode.shows_details() {
            println!("[{}/{}]", current, total);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ui_with(key: &str, value: &str) -> NonInteractiveUI {
        let mut overrides = HashMap::new();
        overrides.insert(key.to_string(), value.to_string());
        NonInteractiveUI::with_overrides(OutputMode::Normal, overrides)
    }

    #[test]
    fn is_never_interactive() {
        assert!(!NonInteractiveUI::new(OutputMode::Normal).is_interactive());
    }

    #[test]
    fn prompt_uses_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let prompt = Prompt::input("location", "Location").with_default("Office");
        assert_eq!(
            ui.prompt(&prompt).unwrap(),
            PromptResult::String("Office".into())
        );
    }

    #[test]
    fn prompt_fails_without_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let err = ui.prompt(&Prompt::input("serial", "Serial")).unwrap_err();
        assert!(err.to_string().contains("ITDESK_PROMPT_SERIAL"));
    }

    #[test]
    fn env_override_wins_over_default() {
        let mut ui = ui_with("ITDESK_PROMPT_LOCATION", "Lab");
        let prompt = Prompt::input("location", "Location").with_default("Office");
        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "Lab");
    }

    #[test]
    fn confirm_override_is_bool() {
        let mut ui = ui_with("ITDESK_PROMPT_CONFIRM_REMOVE", "yes");
        let prompt = Prompt::confirm("confirm_remove", "Remove?");
        assert_eq!(ui.prompt(&prompt).unwrap(), PromptResult::Bool(true));
    }

    #[test]
    fn output_mode_preserved() {
        let ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
