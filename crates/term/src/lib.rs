//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget toolkits and instead composites the world into a plain
//! character framebuffer, then flushes only the changed cells.
//!
//! - [`compositor`] paints entities and the border into a [`FrameBuffer`]
//! - [`display`] holds the current/next pair and diffs them on flush
//! - [`renderer`] is the crossterm implementation of [`DisplayPort`]

pub mod compositor;
pub mod display;
pub mod fb;
pub mod renderer;

pub use not_flappy_core as core;
pub use not_flappy_types as types;

pub use compositor::{draw_border, paint_entity, render_frame, render_into};
pub use display::{DisplayBuffer, DisplayPort};
pub use fb::FrameBuffer;
pub use renderer::TerminalRenderer;
