//! Toast notifications
//!
//! Toasts are transient banners. Each one stays visible for the display
//! delay, then spends the exit delay in a `Leaving` phase (rendered dimmed)
//! before it is dropped. The lifecycle is driven by `ToastStack::tick`, which
//! the main loop calls on every tick, so there are no detached timers: a
//! cancelled or cleared toast simply stops being ticked.

use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default time a toast stays fully visible
pub const DEFAULT_DISPLAY: Duration = Duration::from_millis(3000);
/// Default length of the exit animation
pub const DEFAULT_EXIT: Duration = Duration::from_millis(300);

/// Visual severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Error,
    Warning,
}

impl Severity {
    /// Map a severity tag. Unknown tags fall back to `Success`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Success,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Error => "✖",
            Severity::Warning => "⚠",
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// Lifecycle phase of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    /// Exit animation started at the given instant
    Leaving(Instant),
}

pub type ToastId = u64;

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    pub created: Instant,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn is_leaving(&self) -> bool {
        matches!(self.phase, ToastPhase::Leaving(_))
    }
}

/// Anything that can display a toast
pub trait NotificationSink {
    fn show_toast(&mut self, message: String, severity: Severity) -> ToastId;
}

/// Ordered collection of live toasts, oldest first
#[derive(Debug)]
pub struct ToastStack {
    toasts: VecDeque<Toast>,
    next_id: ToastId,
    display: Duration,
    exit: Duration,
}

impl Default for ToastStack {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY, DEFAULT_EXIT)
    }
}

impl ToastStack {
    pub fn new(display: Duration, exit: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            next_id: 1,
            display,
            exit,
        }
    }

    /// Push a toast created at `now`
    pub fn push_at(&mut self, message: String, severity: Severity, now: Instant) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        debug!(id, severity = severity.tag(), live = self.len() + 1, %message, "toast shown");
        self.toasts.push_back(Toast {
            id,
            message,
            severity,
            created: now,
            phase: ToastPhase::Visible,
        });
        id
    }

    /// Advance every toast's lifecycle to `now`
    pub fn tick(&mut self, now: Instant) {
        let display = self.display;
        let exit = self.exit;

        for toast in self.toasts.iter_mut() {
            if toast.phase == ToastPhase::Visible
                && now.saturating_duration_since(toast.created) >= display
            {
                toast.phase = ToastPhase::Leaving(now);
            }
        }

        self.toasts.retain(|toast| match toast.phase {
            ToastPhase::Leaving(since) => {
                let done = now.saturating_duration_since(since) >= exit;
                if done {
                    debug!(id = toast.id, "toast removed");
                }
                !done
            }
            ToastPhase::Visible => true,
        });
    }

    /// Remove one toast before its timers run out
    pub fn cancel(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        before != self.toasts.len()
    }

    /// Drop all toasts (page teardown)
    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl NotificationSink for ToastStack {
    fn show_toast(&mut self, message: String, severity: Severity) -> ToastId {
        self.push_at(message, severity, Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_unknown_tag_falls_back_to_success() {
        assert_eq!(Severity::from_tag("info"), Severity::Success);
        assert_eq!(Severity::from_tag(""), Severity::Success);
        assert_eq!(Severity::from_tag("info").icon(), Severity::Success.icon());
        assert_eq!(Severity::from_tag("error"), Severity::Error);
        assert_eq!(Severity::from_tag("warning"), Severity::Warning);
    }

    #[test]
    fn test_icons_are_distinct() {
        assert_ne!(Severity::Success.icon(), Severity::Error.icon());
        assert_ne!(Severity::Error.icon(), Severity::Warning.icon());
    }

    #[test]
    fn test_default_severity_is_success() {
        assert_eq!(Severity::default(), Severity::Success);
    }

    #[test]
    fn test_toast_lifecycle() {
        let start = Instant::now();
        let mut stack = ToastStack::default();
        stack.push_at("Saved".to_string(), Severity::Success, start);

        stack.tick(start + ms(2999));
        assert_eq!(stack.len(), 1);
        assert!(!stack.iter().next().unwrap().is_leaving());

        stack.tick(start + ms(3000));
        assert_eq!(stack.len(), 1);
        assert!(stack.iter().next().unwrap().is_leaving());

        stack.tick(start + ms(3299));
        assert_eq!(stack.len(), 1);

        stack.tick(start + ms(3300));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_toasts_expire_independently() {
        let start = Instant::now();
        let mut stack = ToastStack::new(ms(100), ms(10));
        stack.push_at("first".to_string(), Severity::Success, start);
        stack.push_at("second".to_string(), Severity::Warning, start + ms(50));

        stack.tick(start + ms(100));
        stack.tick(start + ms(110));
        let remaining: Vec<_> = stack.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(remaining, vec!["second"]);
    }

    #[test]
    fn test_cancel_and_clear() {
        let start = Instant::now();
        let mut stack = ToastStack::default();
        let first = stack.push_at("a".to_string(), Severity::Error, start);
        stack.push_at("b".to_string(), Severity::Error, start);

        assert!(stack.cancel(first));
        assert!(!stack.cancel(first));
        assert_eq!(stack.len(), 1);

        stack.clear();
        assert!(stack.is_empty());
        // Ticking after teardown is a no-op
        stack.tick(start + ms(10_000));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut stack = ToastStack::default();
        let a = stack.show_toast("a".to_string(), Severity::Success);
        let b = stack.show_toast("b".to_string(), Severity::Success);
        assert_ne!(a, b);
    }
}
