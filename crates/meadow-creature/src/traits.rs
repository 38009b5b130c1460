//! World access trait for creature-world interaction
//!
//! Creatures only ever read the tile grid. Keeping the read surface behind a
//! trait lets this crate stay independent of the grid implementation.

use meadow_simulation::{TileId, is_solid};

/// Read-only access to the tile grid
pub trait WorldAccess {
    /// Tile code at tile coordinates, `None` outside the grid
    fn get_tile(&self, x: i32, y: i32) -> Option<u8>;

    /// Check if the tile blocks movement (absent tiles never do)
    fn is_solid_at(&self, x: i32, y: i32) -> bool {
        self.get_tile(x, y).is_some_and(is_solid)
    }

    /// Check if the tile is water
    fn is_water_at(&self, x: i32, y: i32) -> bool {
        self.get_tile(x, y) == Some(TileId::WATER)
    }
}
