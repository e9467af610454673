//! Login-attempt bookkeeping for the login view.
//!
//! The credential exchange is asynchronous and owned by the view; the view
//! can be navigated away from while a request is in flight. Each attempt
//! carries a generation number, and navigating away bumps the registry's
//! generation, so a response from an abandoned attempt is discarded instead
//! of mutating the session.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Duration, Utc};

/// Handle identifying one in-flight login attempt.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AttemptToken {
    generation: u64,
}

/// Generation counter shared between the login view and its async work.
#[derive(Debug, Default)]
pub struct AttemptRegistry {
    generation: AtomicU64,
}

impl AttemptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new attempt, invalidating any earlier in-flight one.
    pub fn begin(&self) -> AttemptToken {
        AttemptToken {
            generation: self.generation.fetch_add(1, Ordering::SeqCst) + 1,
        }
    }

    /// Invalidate all in-flight attempts (called when the view is left).
    pub fn abandon(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Whether `token` still identifies the latest attempt.
    pub fn is_current(&self, token: AttemptToken) -> bool {
        self.generation.load(Ordering::SeqCst) == token.generation
    }
}

/// How long an invalid-credentials message stays on screen.
const NOTICE_WINDOW_SECONDS: i64 = 3;

/// Transient "invalid username or password" message.
///
/// Auto-dismisses after a fixed window rather than on user action.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FailureNotice {
    raised_at: DateTime<Utc>,
}

impl FailureNotice {
    pub fn raised_at(now: DateTime<Utc>) -> Self {
        Self { raised_at: now }
    }

    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        now < self.raised_at + Duration::seconds(NOTICE_WINDOW_SECONDS)
    }
}
