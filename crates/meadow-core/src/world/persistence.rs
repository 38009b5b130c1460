//! World snapshots - the grid plus the player state a save needs

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::TileGrid;
use crate::entity::inventory::ItemKind;

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

pub type SnapshotResult<T> = Result<T, SnapshotError>;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to parse snapshot: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] ron::Error),

    #[error("snapshot declares {width}x{height} tiles but its rows don't match")]
    DimensionMismatch { width: i32, height: i32 },

    #[error("unsupported snapshot version {0}")]
    Version(u32),

    #[error("snapshot i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Serializable world state (RON format)
///
/// Creatures and pending growth are not stored; they are rebuilt on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub version: u32,
    pub seed: u64,
    pub width: i32,
    pub height: i32,
    /// Tile codes indexed `[row][col]`
    pub tiles: Vec<Vec<u8>>,
    pub player_position: Vec2,
    /// Countable inventory amounts in slot order
    #[serde(default)]
    pub inventory: Vec<(ItemKind, u32)>,
    #[serde(default)]
    pub selected_slot: usize,
    #[serde(default)]
    pub celestial_angle: f32,
}

impl WorldSnapshot {
    /// Rebuild the grid, checking the rows against the declared size
    pub fn grid(&self) -> SnapshotResult<TileGrid> {
        let mismatch = SnapshotError::DimensionMismatch {
            width: self.width,
            height: self.height,
        };
        if self.width <= 0 || self.height <= 0 || self.tiles.len() != self.height as usize {
            return Err(mismatch);
        }
        match TileGrid::from_rows(&self.tiles) {
            Some(grid) if grid.width() == self.width => Ok(grid),
            _ => Err(mismatch),
        }
    }

    /// Decode and validate a snapshot
    pub fn from_ron(text: &str) -> SnapshotResult<Self> {
        let snapshot: Self = ron::from_str(text)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::Version(snapshot.version));
        }
        snapshot.grid()?;
        Ok(snapshot)
    }

    pub fn to_ron(&self) -> SnapshotResult<String> {
        let pretty = ron::ser::PrettyConfig::new().depth_limit(3);
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    pub fn load(path: &Path) -> SnapshotResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let snapshot = Self::from_ron(&text)?;
        log::info!(
            "[LOAD] Snapshot {:?}: {}x{} tiles",
            path,
            snapshot.width,
            snapshot.height
        );
        Ok(snapshot)
    }

    /// Write to `path` via a temp file and rename
    pub fn save(&self, path: &Path) -> SnapshotResult<()> {
        let text = self.to_ron()?;
        let temp_path = path.with_extension("tmp");
        std::fs::write(&temp_path, text)?;
        std::fs::rename(&temp_path, path)?;
        log::info!(
            "[SAVE] Snapshot {:?}: {}x{} tiles",
            path,
            self.width,
            self.height
        );
        Ok(())
    }
}
