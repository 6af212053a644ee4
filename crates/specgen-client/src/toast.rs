use std::time::Duration;

use tokio::time::Instant;

/// How long a notification stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

/// A transient notification. It hides itself once [`TOAST_DURATION`] has
/// passed since it was shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    message: String,
    shown_at: Instant,
}

impl Toast {
    pub fn show(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn hides_at(&self) -> Instant {
        self.shown_at + TOAST_DURATION
    }

    pub fn is_visible(&self) -> bool {
        Instant::now() < self.hides_at()
    }
}
