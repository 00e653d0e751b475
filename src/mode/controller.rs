use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::notice::{LogNoticeSink, Notice, NoticeSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Offline sample data; every mutation is refused.
    Demo,
    /// Real backend.
    Live,
}

/// Process-wide Demo/Live switch.
///
/// Create one per process and pass clones to every component that needs
/// it. Clones share the same flag, so every reader sees the latest value.
#[derive(Clone)]
pub struct ModeController {
    demo: Arc<AtomicBool>,
    notices: Arc<dyn NoticeSink>,
}

impl ModeController {
    /// Live mode, notices go to the log.
    pub fn new() -> Self {
        Self::with_sink(false, Arc::new(LogNoticeSink))
    }

    pub fn with_sink(demo: bool, notices: Arc<dyn NoticeSink>) -> Self {
        Self {
            demo: Arc::new(AtomicBool::new(demo)),
            notices,
        }
    }

    pub fn is_demo_mode(&self) -> bool {
        self.demo.load(Ordering::SeqCst)
    }

    pub fn mode(&self) -> AppMode {
        if self.is_demo_mode() {
            AppMode::Demo
        } else {
            AppMode::Live
        }
    }

    pub fn enable_demo_mode(&self) {
        if !self.demo.swap(true, Ordering::SeqCst) {
            tracing::info!(mode = ?AppMode::Demo, "Mode switched");
        }
    }

    pub fn disable_demo_mode(&self) {
        if self.demo.swap(false, Ordering::SeqCst) {
            tracing::info!(mode = ?AppMode::Live, "Mode switched");
        }
    }

    /// Tell the user the action they tried is unavailable in demo mode.
    pub fn notify_blocked_in_demo(&self) {
        self.notices.show(Notice::blocked_in_demo());
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ModeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModeController")
            .field("mode", &self.mode())
            .finish()
    }
}
