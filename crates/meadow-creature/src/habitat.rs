//! Habitat geometry shared by every creature
//!
//! Built once by the world from its generation parameters and ground level,
//! then passed by reference into each creature tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::creature::Species;

/// Rows below ground level fish may swim through
pub const FISH_SWIM_ROWS: i32 = 4;

/// The pond carved into the ground, in tile units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PondBounds {
    /// First pond column (inclusive)
    pub start_col: i32,
    /// Last pond column (exclusive)
    pub end_col: i32,
    /// Topmost water row (the ground level row)
    pub top_row: i32,
    /// Number of water rows; the pond floor sits directly below them
    pub depth: i32,
}

impl PondBounds {
    pub fn contains_column(&self, x: i32) -> bool {
        x >= self.start_col && x < self.end_col
    }

    /// Whether (x, y) is one of the water tiles
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.contains_column(x) && y >= self.top_row && y < self.top_row + self.depth
    }

    /// Row of the dirt floor under the water
    pub fn floor_row(&self) -> i32 {
        self.top_row + self.depth
    }

    /// Pixel rectangle fish are kept inside, as (min, max) corners
    ///
    /// Vertically it spans `FISH_SWIM_ROWS` rows from the surface, which
    /// reaches one row into the floor of a default-depth pond.
    pub fn swim_rect(&self, tile_size: f32) -> (Vec2, Vec2) {
        (
            Vec2::new(
                self.start_col as f32 * tile_size,
                self.top_row as f32 * tile_size,
            ),
            Vec2::new(
                self.end_col as f32 * tile_size,
                (self.top_row + FISH_SWIM_ROWS) as f32 * tile_size,
            ),
        )
    }
}

/// Vertical bands flying creatures stay within, as fractions of the viewport height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyBands {
    /// Viewport height in pixels
    pub viewport_height: f32,
    pub bird: f32,
    pub butterfly: f32,
    pub firefly: f32,
}

impl SkyBands {
    /// Lower bound (in pixels, from the top) of a species' band
    pub fn limit(&self, species: Species) -> f32 {
        let fraction = match species {
            Species::Bird => self.bird,
            Species::Butterfly => self.butterfly,
            Species::Firefly => self.firefly,
            _ => 1.0,
        };
        self.viewport_height * fraction
    }
}

impl Default for SkyBands {
    fn default() -> Self {
        Self {
            viewport_height: 600.0,
            bird: 0.4,
            butterfly: 0.5,
            firefly: 0.5,
        }
    }
}

/// Everything a creature tick needs to know about the world besides tiles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Habitat {
    /// Tile edge length in pixels
    pub tile_size: f32,
    /// World width in tiles
    pub world_width: i32,
    pub ground_level_y: i32,
    pub pond: PondBounds,
    pub sky: SkyBands,
    /// Global multiplier applied to creature speeds
    pub speed_factor: f32,
}

impl Habitat {
    pub fn world_width_px(&self) -> f32 {
        self.world_width as f32 * self.tile_size
    }

    /// Pixel y of the top edge of the ground row
    pub fn ground_top_px(&self) -> f32 {
        self.ground_level_y as f32 * self.tile_size
    }

    /// Tile coordinates containing a pixel position
    pub fn tile_at(&self, point: Vec2) -> (i32, i32) {
        (
            (point.x / self.tile_size).floor() as i32,
            (point.y / self.tile_size).floor() as i32,
        )
    }
}
