//! Notification sink for design-level problems.
//!
//! Ordinary validation problems travel in the returned error list. The sink
//! is reserved for things a driver should never let happen, such as
//! normalizing an empty statement.

use std::cell::RefCell;
use std::fmt;

/// Severity of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotifyMode {
    /// Informational.
    Info,
    /// Suspicious input that was still processed.
    Warning,
    /// A broken invariant.
    Error,
}

impl fmt::Display for NotifyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Receives notifications from statements.
pub trait Notifier {
    /// Reports a message at the given severity.
    fn notify(&self, mode: NotifyMode, message: &str);
}

impl<F> Notifier for F
where
    F: Fn(NotifyMode, &str),
{
    fn notify(&self, mode: NotifyMode, message: &str) {
        self(mode, message);
    }
}

/// Forwards notifications to `tracing` at the matching level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, mode: NotifyMode, message: &str) {
        match mode {
            NotifyMode::Info => tracing::info!(target: "verbline", "{message}"),
            NotifyMode::Warning => tracing::warn!(target: "verbline", "{message}"),
            NotifyMode::Error => tracing::error!(target: "verbline", "{message}"),
        }
    }
}

/// Discards every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _mode: NotifyMode, _message: &str) {}
}

/// Keeps notifications in memory for later inspection.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    entries: RefCell<Vec<(NotifyMode, String)>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything recorded so far.
    #[must_use]
    pub fn entries(&self) -> Vec<(NotifyMode, String)> {
        self.entries.borrow().clone()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<(NotifyMode, String)> {
        self.entries.take()
    }

    /// Number of recorded notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, mode: NotifyMode, message: &str) {
        self.entries.borrow_mut().push((mode, message.to_string()));
    }
}
