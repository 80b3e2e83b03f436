//! Yes/no confirmation asked before a delete.

use async_trait::async_trait;
use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::warn;

/// The controller awaits the answer before doing anything else, like a modal prompt.
#[async_trait]
pub trait Confirm: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Asks on the terminal. Only `y` or `yes` (any case) confirms.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirm;

#[async_trait]
impl Confirm for StdinConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        let prompt = prompt.to_string();
        let answer = tokio::task::spawn_blocking(move || -> std::io::Result<String> {
            let mut stdout = std::io::stdout();
            write!(stdout, "{prompt} [y/N] ")?;
            stdout.flush()?;
            let mut line = String::new();
            std::io::stdin().lock().read_line(&mut line)?;
            Ok(line)
        })
        .await;

        match answer {
            Ok(Ok(line)) => is_yes(&line),
            Ok(Err(e)) => {
                warn!(error = %e, "Could not read confirmation");
                false
            }
            Err(e) => {
                warn!(error = %e, "Confirmation prompt failed");
                false
            }
        }
    }
}

fn is_yes(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Always gives the same answer and counts how often it was asked.
#[derive(Debug, Clone)]
pub struct AutoConfirm {
    answer: bool,
    asked: Arc<AtomicUsize>,
}

impl AutoConfirm {
    pub fn yes() -> Self {
        Self::new(true)
    }

    pub fn no() -> Self {
        Self::new(false)
    }

    fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Confirm for AutoConfirm {
    async fn confirm(&self, _prompt: &str) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}
