//! Engine - wires the core state, the renderer and the input port together.
//!
//! - [`config`]: environment-driven runtime settings
//! - [`viewport`]: wait until the terminal is large enough
//! - [`game_loop`]: the cooperative render/timer loop

pub mod config;
pub mod game_loop;
pub mod viewport;

pub use not_flappy_core as core;
pub use not_flappy_term as term;
pub use not_flappy_types as types;

pub use config::EngineConfig;
pub use game_loop::{GameLoop, StepReport, FAREWELL};
pub use viewport::wait_for_viewport;
