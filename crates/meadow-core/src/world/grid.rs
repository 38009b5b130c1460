//! Tile grid - bounds-checked storage for tile codes

use meadow_creature::WorldAccess;
use meadow_simulation::{TileId, is_solid};
use serde::{Deserialize, Serialize};

/// Row-major 2D grid of tile codes
///
/// Every access is bounds-checked: reads outside the grid return `None`
/// (absent, which is distinct from `TileId::EMPTY`) and writes are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    width: i32,
    height: i32,
    tiles: Vec<u8>,
}

impl TileGrid {
    /// Grid of `width × height` empty tiles
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            tiles: vec![TileId::EMPTY; (width as usize) * (height as usize)],
        }
    }

    /// Build from `[row][col]` data; `None` if rows are ragged
    pub fn from_rows(rows: &[Vec<u8>]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        Some(Self {
            width: i32::try_from(width).ok()?,
            height: i32::try_from(height).ok()?,
            tiles: rows.concat(),
        })
    }

    /// Copy out as `[row][col]`
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        if self.width == 0 {
            return vec![Vec::new(); self.height as usize];
        }
        self.tiles
            .chunks(self.width as usize)
            .map(<[u8]>::to_vec)
            .collect()
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| (y as usize) * (self.width as usize) + x as usize)
    }

    /// Tile code at (x, y), `None` outside the grid
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        self.index(x, y).map(|i| self.tiles[i])
    }

    /// Write a tile; out-of-bounds writes are a no-op. Returns whether it was written.
    pub fn set(&mut self, x: i32, y: i32, code: u8) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.tiles[i] = code;
                true
            }
            None => false,
        }
    }

    /// Whether (x, y) holds a solid tile (absent tiles are not solid)
    pub fn is_solid_at(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(is_solid)
    }

    /// Whether (x, y) is exactly `code`
    pub fn is(&self, x: i32, y: i32, code: u8) -> bool {
        self.get(x, y) == Some(code)
    }

    /// Fill an entire row
    pub fn fill_row(&mut self, y: i32, code: u8) {
        for x in 0..self.width {
            self.set(x, y, code);
        }
    }

    /// First solid row scanning column `x` from the top
    pub fn first_solid_row(&self, x: i32) -> Option<i32> {
        (0..self.height).find(|&y| self.is_solid_at(x, y))
    }

    /// Number of tiles equal to `code`
    pub fn count(&self, code: u8) -> usize {
        self.tiles.iter().filter(|&&t| t == code).count()
    }

    /// Iterate rows as slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.tiles.chunks(self.width.max(1) as usize)
    }
}

impl WorldAccess for TileGrid {
    fn get_tile(&self, x: i32, y: i32) -> Option<u8> {
        self.get(x, y)
    }
}
