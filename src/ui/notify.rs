//! Transient success/error messages ("toasts").

use std::fmt::Display;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker = match self.severity {
            Severity::Success => "✔",
            Severity::Error => "✖",
        };
        write!(f, "{} {}", marker, self.message)
    }
}

/// Shows notifications to the user. Called from the controller task, so it must not
/// block for long.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Prints successes to stdout and errors to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        info!(severity = ?notification.severity, message = %notification.message, "Notify");
        match notification.severity {
            Severity::Success => println!("{notification}"),
            Severity::Error => eprintln!("{notification}"),
        }
    }
}

/// Keeps every notification in memory, for tests and for callers that render them
/// later.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    seen: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}
