//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and tracks
//! which actions are currently held, including on terminals without key
//! release events.

pub mod held;
pub mod map;
pub mod terminal;

pub use not_flappy_core as core;
pub use not_flappy_types as types;

pub use held::HeldKeys;
pub use map::{handle_key_event, should_quit};
pub use terminal::TerminalInput;
