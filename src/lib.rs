//! NotFlappyBird (workspace facade crate).
//!
//! Re-exports the member crates as `not_flappy_bird::{core,engine,input,term,types}`
//! while the implementation lives in dedicated crates under `crates/`.

pub use not_flappy_core as core;
pub use not_flappy_engine as engine;
pub use not_flappy_input as input;
pub use not_flappy_term as term;
pub use not_flappy_types as types;
