//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules, the entity model and the timer
//! scheduler. It performs no terminal I/O: views come in through an
//! [`AssetLoader`], held keys through an [`InputPort`], and rendering reads
//! the [`World`] from the outside.
//!
//! # Module Structure
//!
//! - [`view`]: immutable glyph blocks and the `.entity` text format
//! - [`assets`]: the asset loader port, directory and in-memory loaders
//! - [`entity`]: positioned entities cycling through bounded view lists
//! - [`world`]: the entity arena; registration order is paint order
//! - [`collision`]: strict axis-aligned bounding box overlap
//! - [`obstacle`]: paired gap obstacles and their recycling rule
//! - [`score`]: the digit-entity score counter
//! - [`timer`]: fixed-interval timers without catch-up
//! - [`game_state`]: the title/playing state machine
//! - [`rng`]: seeded LCG for reproducible runs
//!
//! # Example
//!
//! ```
//! use not_flappy_core::{GameState, MemoryAssets, Scheduler};
//! use not_flappy_types::{GameAction, Playfield, Screen};
//!
//! fn sprite(w: i32, h: i32) -> String {
//!     let row = "#".repeat(w as usize);
//!     format!("width {w}\nheight {h}\norigin_x 0\norigin_y 0\n{}", vec![row; h as usize].join("\n"))
//! }
//!
//! let mut assets = MemoryAssets::new();
//! for name in ["not_flappy_bird", "press_space_to_start", "obstacle_top", "obstacle_bottom",
//!              "bird_0", "bird_1", "bird_2"] {
//!     assets.insert(name, sprite(3, 2));
//! }
//! for digit in 0..10 {
//!     assets.insert(digit.to_string(), sprite(1, 1));
//! }
//!
//! let mut game = GameState::new(&assets, Playfield::new(120, 40), 7).unwrap();
//! let mut timers = Scheduler::with_game_timers().unwrap();
//!
//! // Holding flap on the title screen starts a game on the next physics tick.
//! timers.run(21, |task| game.trigger(task, &[GameAction::Flap]));
//! assert_eq!(game.screen(), Screen::Playing);
//! ```

pub mod assets;
pub mod collision;
pub mod entity;
pub mod error;
pub mod game_state;
pub mod input;
pub mod obstacle;
pub mod rng;
pub mod score;
pub mod timer;
pub mod view;
pub mod world;

pub use not_flappy_types as types;

pub use assets::{AssetLoader, DirAssets, MemoryAssets};
pub use collision::{overlaps, Bounds};
pub use entity::Entity;
pub use error::{AssetError, GameError, Result};
pub use game_state::{Bird, GameState};
pub use input::{InputPort, NoInput};
pub use obstacle::Obstacle;
pub use rng::SimpleRng;
pub use score::ScoreCounter;
pub use timer::{PeriodicTimer, Scheduler, TimerTask};
pub use view::View;
pub use world::{EntityId, World};
