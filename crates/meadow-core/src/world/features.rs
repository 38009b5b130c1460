//! Vegetation features - trees, cacti and flowers
//!
//! Shared by world generation and sapling growth. Every placement only writes
//! over empty tiles, so features never overwrite terrain, water or each other.
//! `base_y` is always the row of the grass tile the feature stands on.

use meadow_simulation::{FlowerKind, TileId, TreeSpecies};

use super::grid::TileGrid;
use super::rng_trait::WorldRng;

/// Trunk height range `[min, max)` for grown saplings
pub const SAPLING_TRUNK_HEIGHT: (i32, i32) = (4, 7);

const OAK_TRUNK_HEIGHT: (i32, i32) = (4, 7);
const BIRCH_TRUNK_HEIGHT: (i32, i32) = (5, 9);
const CHERRY_TRUNK_HEIGHT: (i32, i32) = (4, 6);
const CACTUS_HEIGHT: (i32, i32) = (2, 5);

const BIRCH_LEAF_CHANCE: f32 = 0.75;
const CHERRY_LEAF_CHANCE: f32 = 0.8;
const CHERRY_EDGE_CHANCE: f32 = 0.5;

fn place_if_empty(grid: &mut TileGrid, x: i32, y: i32, code: u8) -> bool {
    grid.is(x, y, TileId::EMPTY) && grid.set(x, y, code)
}

/// Whether a feature may stand on column `x`: grass below, empty above
pub fn can_plant(grid: &TileGrid, x: i32, base_y: i32) -> bool {
    grid.is(x, base_y, TileId::GRASS) && grid.is(x, base_y - 1, TileId::EMPTY)
}

/// Stack `height` trunk tiles upward from `bottom_y`, stopping at the first
/// occupied tile. Returns the row of the topmost trunk tile placed.
fn stack_trunk(grid: &mut TileGrid, x: i32, bottom_y: i32, height: i32, code: u8) -> Option<i32> {
    let mut top = None;
    for dy in 0..height {
        let y = bottom_y - dy;
        if !place_if_empty(grid, x, y, code) {
            break;
        }
        top = Some(y);
    }
    top
}

/// 3×3 canopy on the three rows directly above `top_y`
fn square_canopy(grid: &mut TileGrid, x: i32, top_y: i32, code: u8) {
    for y in top_y - 3..top_y {
        for cx in x - 1..=x + 1 {
            place_if_empty(grid, cx, y, code);
        }
    }
}

/// Place a generated tree of `species` on column `x`
///
/// Returns false (and writes nothing) if the column can't hold a tree.
pub fn place_tree<R: WorldRng + ?Sized>(
    grid: &mut TileGrid,
    x: i32,
    base_y: i32,
    species: TreeSpecies,
    rng: &mut R,
) -> bool {
    if !can_plant(grid, x, base_y) {
        return false;
    }

    let trunk = species.trunk();
    let canopy = species.canopy();
    let range = match species {
        TreeSpecies::Oak => OAK_TRUNK_HEIGHT,
        TreeSpecies::Birch => BIRCH_TRUNK_HEIGHT,
        TreeSpecies::Cherry => CHERRY_TRUNK_HEIGHT,
    };
    let height = rng.range_i32(range.0, range.1);

    let Some(top) = stack_trunk(grid, x, base_y - 1, height, trunk) else {
        return false;
    };

    match species {
        TreeSpecies::Oak => square_canopy(grid, x, top, canopy),
        TreeSpecies::Birch => birch_canopy(grid, x, top, canopy, rng),
        TreeSpecies::Cherry => cherry_canopy(grid, x, top, canopy, rng),
    }

    log::trace!(
        "Placed {} tree at column {} (trunk top {})",
        species.name(),
        x,
        top
    );
    true
}

/// Tall narrow crown leaning to a random side, with gaps
fn birch_canopy<R: WorldRng + ?Sized>(
    grid: &mut TileGrid,
    x: i32,
    top_y: i32,
    code: u8,
    rng: &mut R,
) {
    let left = 1 + i32::from(rng.coin_flip());
    let right = 1 + i32::from(rng.coin_flip());

    for dy in 1..=4 {
        let y = top_y - dy;
        // Crown narrows to a point at the top row
        let (l, r) = if dy == 4 { (0, 0) } else { (left, right) };
        for cx in x - l..=x + r {
            // The column above the trunk stays solid so the crown is connected
            if cx == x || rng.chance(BIRCH_LEAF_CHANCE) {
                place_if_empty(grid, cx, y, code);
            }
        }
    }
}

/// Wide flat crown with ragged edges
fn cherry_canopy<R: WorldRng + ?Sized>(
    grid: &mut TileGrid,
    x: i32,
    top_y: i32,
    code: u8,
    rng: &mut R,
) {
    for dy in 1..=3 {
        let y = top_y - dy;
        let half: i32 = if dy == 3 { 2 } else { 3 };
        for dx in -half..=half {
            let chance = if dx.abs() == half {
                CHERRY_EDGE_CHANCE
            } else {
                CHERRY_LEAF_CHANCE
            };
            if dx.abs() <= 1 || rng.chance(chance) {
                place_if_empty(grid, x + dx, y, code);
            }
        }
    }
}

/// Stack of cactus tiles, no canopy
pub fn place_cactus<R: WorldRng + ?Sized>(
    grid: &mut TileGrid,
    x: i32,
    base_y: i32,
    rng: &mut R,
) -> bool {
    if !can_plant(grid, x, base_y) {
        return false;
    }
    let height = rng.range_i32(CACTUS_HEIGHT.0, CACTUS_HEIGHT.1);
    stack_trunk(grid, x, base_y - 1, height, TileId::CACTUS).is_some()
}

/// Stem on the row above the grass, petal above the stem
///
/// Both tiles must be empty; nothing is written otherwise.
pub fn place_flower(grid: &mut TileGrid, x: i32, base_y: i32, kind: FlowerKind) -> bool {
    if !can_plant(grid, x, base_y) || !grid.is(x, base_y - 2, TileId::EMPTY) {
        return false;
    }
    grid.set(x, base_y - 1, kind.stem());
    grid.set(x, base_y - 2, kind.petal());
    true
}

/// Replace the sapling at (x, y) with a full tree of `species`
///
/// The trunk starts on the sapling's own tile. Returns the trunk height,
/// or `None` if (x, y) no longer holds a sapling.
pub fn grow_sapling<R: WorldRng + ?Sized>(
    grid: &mut TileGrid,
    x: i32,
    y: i32,
    species: TreeSpecies,
    rng: &mut R,
) -> Option<i32> {
    if !grid.is(x, y, TileId::SAPLING) {
        return None;
    }

    grid.set(x, y, TileId::EMPTY);
    let height = rng.range_i32(SAPLING_TRUNK_HEIGHT.0, SAPLING_TRUNK_HEIGHT.1);
    let top = stack_trunk(grid, x, y, height, species.trunk())?;
    square_canopy(grid, x, top, species.canopy());

    Some(y - top + 1)
}
