//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data with no external dependencies, so they can be used
//! from the simulation, the renderer, and the input layer alike.
//!
//! # Playfield
//!
//! The game is laid out on a fixed character grid:
//!
//! - **Width**: 300 columns
//! - **Height**: 80 rows
//! - **y grows downward**, origin in the top-left corner
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_RATE` | 144 | Target frames per second |
//! | `SCROLL_PERIOD_MS` | 50 | World scroll (obstacles, prompt text) |
//! | `ANIMATE_PERIOD_MS` | 250 | Bird wing animation |
//! | `PHYSICS_PERIOD_MS` | 20 | Input polling and physics |
//! | `RESIZE_POLL_MS` | 100 | Console resize wait polling |
//!
//! # Examples
//!
//! ```
//! use not_flappy_types::{GameAction, Screen, SCREEN_HEIGHT, SCREEN_WIDTH};
//!
//! let action = GameAction::from_str("flap").unwrap();
//! assert_eq!(action, GameAction::Flap);
//!
//! assert_eq!(Screen::default(), Screen::Title);
//! assert_eq!(SCREEN_WIDTH, 300);
//! assert_eq!(SCREEN_HEIGHT, 80);
//! ```

/// Playfield width in terminal columns.
pub const SCREEN_WIDTH: u16 = 300;

/// Playfield height in terminal rows.
pub const SCREEN_HEIGHT: u16 = 80;

/// Target frames per second.
pub const FRAME_RATE: u64 = 144;

/// Minimum time between two flushed frames.
pub const FRAME_PERIOD_MS: u64 = 1000 / FRAME_RATE;

/// World scroll timer period.
pub const SCROLL_PERIOD_MS: u64 = 50;

/// Bird animation timer period.
pub const ANIMATE_PERIOD_MS: u64 = 250;

/// Input and physics timer period.
pub const PHYSICS_PERIOD_MS: u64 = 20;

/// Polling interval while waiting for the console to be resized.
pub const RESIZE_POLL_MS: u64 = 100;

/// Upward velocity added by one flap.
pub const FLAP_IMPULSE: f32 = 2.0;

/// A flap only applies while velocity is above this value.
pub const FLAP_VELOCITY_MIN: f32 = -2.0;

/// Velocity added per physics tick.
pub const GRAVITY: f32 = 0.2;

/// Gravity stops accelerating the bird at this velocity.
pub const TERMINAL_VELOCITY: f32 = 1.0;

/// Base upward impulse used by the title screen autopilot.
pub const AUTOPILOT_IMPULSE: f32 = 3.0;

/// Maximum number of registered entities.
pub const MAX_ENTITIES: usize = 25;

/// Maximum number of views per entity.
pub const MAX_VIEWS: usize = 10;

/// Maximum number of obstacles.
pub const MAX_OBSTACLES: usize = 25;

/// Maximum number of periodic timers.
pub const MAX_TIMERS: usize = 8;

/// Number of digits shown by the score counter.
pub const SCORE_COUNTER_DIGITS: usize = 5;

/// Glyph used for empty cells.
pub const BLANK_GLYPH: char = ' ';

/// Glyph for the top and bottom border rows.
pub const BORDER_HORIZONTAL: char = '=';

/// Glyph for the left and right border columns.
pub const BORDER_VERTICAL: char = '|';

/// Size of the play area in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playfield {
    pub width: u16,
    pub height: u16,
}

impl Playfield {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn w(&self) -> i32 {
        self.width as i32
    }

    #[inline]
    pub fn h(&self) -> i32 {
        self.height as i32
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

/// What an entity represents.
///
/// Purely descriptive; rendering and collision treat every kind alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Monster,
    Obstacle,
    Decoration,
}

/// Screen mode of the game state machine.
///
/// There is no separate game-over screen: ending a game re-enters `Title`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Title,
    Playing,
}

/// Actions the player can hold down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Flap,
    Quit,
}

impl GameAction {
    /// Number of distinct actions.
    pub const COUNT: usize = 4;

    /// Every action, in a stable order.
    pub const ALL: [GameAction; Self::COUNT] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::Flap,
        GameAction::Quit,
    ];

    /// Parse an action name (camelCase or snake_case, case-insensitive).
    ///
    /// ```
    /// use not_flappy_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("move_right"), Some(GameAction::MoveRight));
    /// assert_eq!(GameAction::from_str("dive"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "").as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "flap" => Some(GameAction::Flap),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    /// Dense index, usable for per-action tables.
    pub const fn index(self) -> usize {
        match self {
            GameAction::MoveLeft => 0,
            GameAction::MoveRight => 1,
            GameAction::Flap => 2,
            GameAction::Quit => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Flap => "flap",
            GameAction::Quit => "quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(FRAME_PERIOD_MS, 6);
        assert_eq!(SCROLL_PERIOD_MS, 50);
        assert_eq!(ANIMATE_PERIOD_MS, 250);
        assert_eq!(PHYSICS_PERIOD_MS, 20);
    }

    #[test]
    fn action_index_is_dense() {
        for (i, action) in GameAction::ALL.iter().enumerate() {
            assert_eq!(action.index(), i);
        }
    }

    #[test]
    fn action_names_round_trip() {
        for action in GameAction::ALL {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn score_digits_fit_view_capacity() {
        // Each digit entity holds one view per decimal glyph.
        assert!(MAX_VIEWS >= 10);
        assert!(SCORE_COUNTER_DIGITS * 2 < MAX_ENTITIES);
    }
}
