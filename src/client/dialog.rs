use std::io::{BufRead, Write};

use async_trait::async_trait;
use tracing::warn;

use super::ConfirmDialog;

/// Answers every confirmation with a fixed value (`--yes`, tests).
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

#[async_trait]
impl ConfirmDialog for AutoConfirm {
    async fn yes_no_confirm(&self, _message: &str) -> bool {
        self.0
    }
}

/// Asks `message [y/N]` on the terminal. Anything but `y`/`yes` declines.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalConfirm;

impl TerminalConfirm {
    fn ask(message: String) -> bool {
        print!("{} [y/N] ", message);
        let _ = std::io::stdout().flush();

        let mut answer = String::new();
        if let Err(e) = std::io::stdin().lock().read_line(&mut answer) {
            warn!("Failed to read confirmation: {}", e);
            return false;
        }
        is_yes(&answer)
    }
}

#[async_trait]
impl ConfirmDialog for TerminalConfirm {
    async fn yes_no_confirm(&self, message: &str) -> bool {
        let message = message.to_string();
        tokio::task::spawn_blocking(move || Self::ask(message))
            .await
            .unwrap_or_else(|e| {
                warn!("Confirmation prompt failed: {}", e);
                false
            })
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
