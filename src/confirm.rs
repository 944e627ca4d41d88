//! Two-step delete confirmation.
//!
//! The first press on an item arms a short window; a second press on the same
//! item inside the window confirms. Callers pass the current [`Instant`] in, so
//! the machine never reads the clock itself.

use std::time::{Duration, Instant};

/// How long an armed confirmation stays valid.
pub const CONFIRM_WINDOW: Duration = Duration::from_secs(3);

/// Confirmation state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfirmState {
    #[default]
    Idle,
    Armed {
        item_id: String,
        expires_at: Instant,
    },
}

/// Result of a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Window opened; press again to delete.
    Armed,
    /// Second press inside the window; delete now.
    Confirmed,
}

/// Delete confirmation state machine.
#[derive(Debug, Clone, Default)]
pub struct DeleteConfirmation {
    state: ConfirmState,
    window: Option<Duration>,
}

impl DeleteConfirmation {
    /// Create with the standard three-second window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a custom window.
    pub fn with_window(window: Duration) -> Self {
        Self {
            state: ConfirmState::Idle,
            window: Some(window),
        }
    }

    fn window(&self) -> Duration {
        self.window.unwrap_or(CONFIRM_WINDOW)
    }

    /// Current state.
    pub fn state(&self) -> &ConfirmState {
        &self.state
    }

    /// True if `item_id` is armed and its window has not expired at `now`.
    pub fn is_armed(&self, item_id: &str, now: Instant) -> bool {
        matches!(
            &self.state,
            ConfirmState::Armed { item_id: armed, expires_at } if armed == item_id && now < *expires_at
        )
    }

    /// Register a press on `item_id` at `now`.
    pub fn press(&mut self, item_id: &str, now: Instant) -> PressOutcome {
        if self.is_armed(item_id, now) {
            self.state = ConfirmState::Idle;
            return PressOutcome::Confirmed;
        }
        self.state = ConfirmState::Armed {
            item_id: item_id.to_string(),
            expires_at: now + self.window(),
        };
        PressOutcome::Armed
    }

    /// Drop an armed confirmation.
    pub fn cancel(&mut self) {
        self.state = ConfirmState::Idle;
    }
}
