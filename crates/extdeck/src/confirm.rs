//! Removal confirmation through a terminal prompt

use dialoguer::Confirm;
use extdeck_extensions::Confirmer;
use tracing::warn;

/// Asks on the terminal unless `--yes` was given
///
/// The prompt defaults to "no". Without a terminal to ask on, or when the
/// prompt fails, the answer is "no" as well.
#[derive(Debug, Clone, Copy)]
pub struct TerminalConfirm {
    assume_yes: bool,
    interactive: bool,
}

impl TerminalConfirm {
    pub fn new(assume_yes: bool, interactive: bool) -> Self {
        Self {
            assume_yes,
            interactive,
        }
    }
}

impl Confirmer for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        if !self.interactive {
            warn!("No terminal to confirm on, declining (use --yes to skip prompts)");
            return false;
        }

        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or_else(|e| {
                warn!("Confirmation prompt failed, treating as declined: {}", e);
                false
            })
    }
}
