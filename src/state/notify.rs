// Transient notices
// Fire-and-forget messages shown in the corner of the window

use std::time::{Duration, Instant};

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastLevel {
    Success,
    Error,
}

/// A single notice with its expiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    pub until: Instant,
}

/// Notification surface
///
/// Screens only push messages; they never read the queue back.
pub trait Notifier {
    /// Show a message, timestamped at `now`
    fn notify(&mut self, level: ToastLevel, message: String, now: Instant);

    fn success(&mut self, message: impl Into<String>, now: Instant)
    where
        Self: Sized,
    {
        self.notify(ToastLevel::Success, message.into(), now);
    }

    fn error(&mut self, message: impl Into<String>, now: Instant)
    where
        Self: Sized,
    {
        self.notify(ToastLevel::Error, message.into(), now);
    }
}

/// Queue of visible notices, oldest first
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    /// How long each notice stays on screen
    lifetime: Duration,
    /// Maximum number of notices kept at once (0 = unlimited)
    max_visible: usize,
}

impl ToastQueue {
    pub fn new(lifetime: Duration, max_visible: usize) -> Self {
        Self {
            toasts: Vec::new(),
            lifetime,
            max_visible,
        }
    }

    /// Drop notices whose display time has elapsed
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|toast| toast.until > now);
    }

    /// Visible notices, oldest first
    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    /// Earliest expiry among visible notices
    pub fn next_expiry(&self) -> Option<Instant> {
        self.toasts.iter().map(|toast| toast.until).min()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Most recent notice, if any
    pub fn last(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(Duration::from_millis(4000), 3)
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, level: ToastLevel, message: String, now: Instant) {
        self.toasts.push(Toast {
            level,
            message,
            until: now + self.lifetime,
        });
        if self.max_visible > 0 && self.toasts.len() > self.max_visible {
            self.toasts.remove(0);
        }
    }
}
