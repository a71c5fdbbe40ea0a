//! Held-key tracking for terminals with or without key release events.
//!
//! A press marks the action held. A release event clears it; on terminals
//! that never send releases, the action is dropped once no press or repeat
//! has arrived for `release_timeout_ms`.

use crate::types::GameAction;

/// Must exceed the terminal's key repeat interval.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

/// Per-action held state, timestamped in milliseconds.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    last_press_ms: [Option<u64>; GameAction::COUNT],
    release_timeout_ms: Option<u64>,
}

impl HeldKeys {
    /// Held until released or timed out after the default window.
    pub fn new() -> Self {
        Self::with_release_timeout(Some(DEFAULT_KEY_RELEASE_TIMEOUT_MS))
    }

    /// `None` disables the timeout: only release events clear a key.
    pub fn with_release_timeout(release_timeout_ms: Option<u64>) -> Self {
        Self {
            last_press_ms: [None; GameAction::COUNT],
            release_timeout_ms,
        }
    }

    pub fn release_timeout_ms(&self) -> Option<u64> {
        self.release_timeout_ms
    }

    pub fn set_release_timeout(&mut self, release_timeout_ms: Option<u64>) {
        self.release_timeout_ms = release_timeout_ms;
    }

    /// Record a press or auto-repeat.
    pub fn press(&mut self, action: GameAction, now_ms: u64) {
        self.last_press_ms[action.index()] = Some(now_ms);
    }

    pub fn release(&mut self, action: GameAction) {
        self.last_press_ms[action.index()] = None;
    }

    pub fn release_all(&mut self) {
        self.last_press_ms = [None; GameAction::COUNT];
    }

    pub fn is_held_at(&self, action: GameAction, now_ms: u64) -> bool {
        match (self.last_press_ms[action.index()], self.release_timeout_ms) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(pressed), Some(timeout)) => now_ms.saturating_sub(pressed) <= timeout,
        }
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}
