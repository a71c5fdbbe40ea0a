//! Error types raised while building the game world.
//!
//! Both families are configuration defects: a broken content pack or a
//! content pack that does not fit the fixed capacities. Gameplay events such
//! as collisions are state transitions, never errors.

use thiserror::Error;

/// Failure to load a named view from the asset loader.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("cannot open asset '{name}': {source}")]
    Open {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed header in asset '{name}': expected `{field} <int>`")]
    MalformedHeader { name: String, field: &'static str },
}

impl AssetError {
    /// Name of the asset that failed to load.
    pub fn name(&self) -> &str {
        match self {
            AssetError::Open { name, .. } | AssetError::MalformedHeader { name, .. } => name,
        }
    }
}

/// Errors surfaced while setting up the game.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error("{what} capacity of {capacity} exceeded")]
    ResourceExhaustion { what: &'static str, capacity: usize },
}

pub type Result<T> = std::result::Result<T, GameError>;
