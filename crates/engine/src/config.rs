//! Runtime configuration from environment variables.

use std::path::PathBuf;

use crate::types::{Playfield, FRAME_PERIOD_MS};

/// Default content pack location, relative to the working directory.
pub const DEFAULT_ASSET_DIR: &str = "assets";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub asset_dir: PathBuf,
    pub seed: u32,
    pub log_dir: PathBuf,
    pub field: Playfield,
    pub frame_period_ms: u64,
}

impl EngineConfig {
    /// Create from environment variables.
    ///
    /// - `NOTFLAPPY_ASSET_DIR`: content pack directory (default: `assets`)
    /// - `NOTFLAPPY_SEED`: RNG seed (default: derived from the clock)
    /// - `NOTFLAPPY_LOG_DIR`: log directory (default: system temp dir)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`EngineConfig::from_env`] with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let asset_dir = non_empty("NOTFLAPPY_ASSET_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_DIR));

        let seed = non_empty("NOTFLAPPY_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let log_dir = non_empty("NOTFLAPPY_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(std::env::temp_dir);

        Self {
            asset_dir,
            seed,
            log_dir,
            field: Playfield::default(),
            frame_period_ms: FRAME_PERIOD_MS,
        }
    }
}

fn clock_seed() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}
