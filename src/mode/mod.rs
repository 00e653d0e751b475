//! Demo/Live mode switch and the "blocked in demo" notice.

mod controller;
mod notice;

pub use controller::{AppMode, ModeController};
pub use notice::{LogNoticeSink, Notice, NoticeQueue, NoticeSink, DEMO_BLOCKED_MESSAGE};
