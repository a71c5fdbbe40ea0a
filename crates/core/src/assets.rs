//! Asset loading - the port through which views enter the game.
//!
//! [`DirAssets`] reads `<name>.entity` files from a directory; [`MemoryAssets`]
//! serves views from in-memory text (tests, embedded packs).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::AssetError;
use crate::view::View;

/// File extension of view assets on disk.
pub const ASSET_EXTENSION: &str = "entity";

/// Loads a named view.
pub trait AssetLoader {
    fn load_view(&self, name: &str) -> Result<View, AssetError>;
}

/// Loads views from `<root>/<name>.entity`.
///
/// Only I/O failures are reported as [`AssetError::Open`].
#[derive(Debug, Clone)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.{ASSET_EXTENSION}"))
    }
}

impl AssetLoader for DirAssets {
    fn load_view(&self, name: &str) -> Result<View, AssetError> {
        let path = self.path_of(name);
        let bytes = std::fs::read(&path).map_err(|source| AssetError::Open {
            name: name.to_string(),
            source,
        })?;
        // Stray bytes outside UTF-8 show up as U+FFFD glyphs; the header is
        // still validated by the parser.
        let text = String::from_utf8_lossy(&bytes);
        let view = View::parse(name, &text)?;
        tracing::info!(asset = name, path = %path.display(), "loaded entity view");
        Ok(view)
    }
}

/// Serves views from text held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    files: HashMap<String, String>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.files.insert(name.into(), text.into());
    }

    pub fn with(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }
}

impl AssetLoader for MemoryAssets {
    fn load_view(&self, name: &str) -> Result<View, AssetError> {
        let text = self.files.get(name).ok_or_else(|| AssetError::Open {
            name: name.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such asset"),
        })?;
        View::parse(name, text)
    }
}
