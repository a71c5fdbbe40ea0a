#![allow(dead_code)]

use std::path::PathBuf;

use not_flappy_bird::core::{DirAssets, GameState};
use not_flappy_bird::types::Playfield;

pub fn pack_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")
}

pub fn pack() -> DirAssets {
    DirAssets::new(pack_dir())
}

/// Full-size game built from the shipped content pack.
pub fn new_game(seed: u32) -> GameState {
    GameState::new(&pack(), Playfield::default(), seed).expect("shipped pack loads")
}
