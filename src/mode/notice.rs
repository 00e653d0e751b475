//! User-facing notices raised by the core.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

/// Copy shown when a mutating action is attempted in demo mode.
pub const DEMO_BLOCKED_MESSAGE: &str = "This feature is disabled in demo mode.";

/// A dismissible, single-button acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: &'static str,
    /// Label of the only button; pressing it dismisses the notice.
    pub dismiss_label: &'static str,
}

impl Notice {
    pub fn blocked_in_demo() -> Self {
        Self {
            title: "Demo Mode",
            message: DEMO_BLOCKED_MESSAGE,
            dismiss_label: "OK",
        }
    }
}

/// Destination for notices. Implementations must not fail.
pub trait NoticeSink: Send + Sync {
    fn show(&self, notice: Notice);
}

/// Writes notices to the log. Used by headless front ends.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNoticeSink;

impl NoticeSink for LogNoticeSink {
    fn show(&self, notice: Notice) {
        tracing::warn!(title = notice.title, "{}", notice.message);
    }
}

/// Buffers notices until the UI layer drains them.
#[derive(Debug, Default, Clone)]
pub struct NoticeQueue {
    pending: Arc<Mutex<VecDeque<Notice>>>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return the oldest notice (the one on screen).
    pub fn dismiss(&self) -> Option<Notice> {
        self.pending.lock().pop_front()
    }

    /// Remove and return every pending notice.
    pub fn drain(&self) -> Vec<Notice> {
        self.pending.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }
}

impl NoticeSink for NoticeQueue {
    fn show(&self, notice: Notice) {
        self.pending.lock().push_back(notice);
    }
}
