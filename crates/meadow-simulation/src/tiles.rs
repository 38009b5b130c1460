//! Tile definitions and registry

use serde::{Deserialize, Serialize};

/// Built-in tile codes
pub struct TileId;

impl TileId {
    pub const EMPTY: u8 = 0;
    pub const GRASS: u8 = 1;
    pub const DIRT: u8 = 2;
    pub const STONE: u8 = 3;

    // Oak tree
    pub const WOOD: u8 = 4;
    pub const LEAVES: u8 = 5;

    // Two-tile flowers (stem below, petal above)
    pub const FLOWER_STEM: u8 = 6;
    pub const FLOWER_PETAL: u8 = 7;

    pub const SAPLING: u8 = 8;
    pub const WATER: u8 = 9;

    pub const LILY_STEM: u8 = 10;
    pub const LILY_FLOWER: u8 = 11;
    pub const ROSE_STEM: u8 = 12;
    pub const ROSE_FLOWER: u8 = 13;

    pub const BIRCH_WOOD: u8 = 14;
    pub const BIRCH_LEAVES: u8 = 15;
    pub const CHERRY_WOOD: u8 = 16;
    pub const CHERRY_LEAVES: u8 = 17;

    pub const CACTUS: u8 = 18;

    /// Number of defined tile codes (0..COUNT)
    pub const COUNT: usize = 19;
}

/// True iff the tile blocks movement (grass, dirt, stone)
pub fn is_solid(code: u8) -> bool {
    matches!(code, TileId::GRASS | TileId::DIRT | TileId::STONE)
}

/// Coarse grouping of tiles, used by the minimap and interaction rules
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileCategory {
    Air,
    /// Ground blocks (grass, dirt, stone)
    Terrain,
    /// Tree trunks
    Trunk,
    /// Tree canopies
    Canopy,
    /// Either half of a two-tile flower
    Flower,
    Water,
    /// Saplings and cacti
    Plant,
}

/// Definition of a tile's properties
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TileDef {
    pub id: u8,
    pub name: String,
    pub category: TileCategory,
    /// Blocks player and creature movement
    pub solid: bool,
    /// Single character used by text overviews
    pub glyph: char,
}

impl Default for TileDef {
    fn default() -> Self {
        Self {
            id: 0,
            name: "unknown".to_string(),
            category: TileCategory::Air,
            solid: false,
            glyph: '?',
        }
    }
}

/// Registry of all tiles
pub struct Tiles {
    tiles: Vec<TileDef>,
}

impl Tiles {
    pub fn new() -> Self {
        let mut tiles = Self { tiles: Vec::new() };
        tiles.register_defaults();
        tiles
    }

    fn register_defaults(&mut self) {
        use TileCategory::*;

        let defs: [(u8, &str, TileCategory, char); TileId::COUNT] = [
            (TileId::EMPTY, "empty", Air, ' '),
            (TileId::GRASS, "grass", Terrain, '"'),
            (TileId::DIRT, "dirt", Terrain, '#'),
            (TileId::STONE, "stone", Terrain, '%'),
            (TileId::WOOD, "wood", Trunk, '|'),
            (TileId::LEAVES, "leaves", Canopy, '@'),
            (TileId::FLOWER_STEM, "flower_stem", Flower, ','),
            (TileId::FLOWER_PETAL, "flower_petal", Flower, '*'),
            (TileId::SAPLING, "sapling", Plant, 't'),
            (TileId::WATER, "water", Water, '~'),
            (TileId::LILY_STEM, "lily_stem", Flower, ','),
            (TileId::LILY_FLOWER, "lily_flower", Flower, 'o'),
            (TileId::ROSE_STEM, "rose_stem", Flower, ','),
            (TileId::ROSE_FLOWER, "rose_flower", Flower, 'r'),
            (TileId::BIRCH_WOOD, "birch_wood", Trunk, '!'),
            (TileId::BIRCH_LEAVES, "birch_leaves", Canopy, '&'),
            (TileId::CHERRY_WOOD, "cherry_wood", Trunk, 'I'),
            (TileId::CHERRY_LEAVES, "cherry_leaves", Canopy, '+'),
            (TileId::CACTUS, "cactus", Plant, 'Y'),
        ];

        for (id, name, category, glyph) in defs {
            self.register(TileDef {
                id,
                name: name.to_string(),
                category,
                solid: is_solid(id),
                glyph,
            });
        }
    }

    fn register(&mut self, tile: TileDef) {
        let id = tile.id as usize;

        if self.tiles.len() <= id {
            self.tiles.resize(id + 1, TileDef::default());
        }

        self.tiles[id] = tile;
    }

    /// Get tile definition by code (unknown codes fall back to empty)
    pub fn get(&self, id: u8) -> &TileDef {
        self.tiles.get(id as usize).unwrap_or(&self.tiles[0])
    }

    /// Get the display name for a tile code
    pub fn name(&self, id: u8) -> &str {
        &self.get(id).name
    }

    /// Whether the code is one of the defined tiles
    pub fn is_known(id: u8) -> bool {
        (id as usize) < TileId::COUNT
    }
}

impl Default for Tiles {
    fn default() -> Self {
        Self::new()
    }
}
