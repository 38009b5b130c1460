//! Interaction system - chopping, mining, harvesting and placement

use ahash::AHashSet;
use meadow_simulation::{FlowerKind, TileId, TreeSpecies};

use super::grid::TileGrid;
use crate::entity::inventory::{Inventory, ItemKind, Placement};
use crate::entity::tools::ToolAction;

/// Maximum Euclidean distance, in tiles, between the player's center tile
/// and a target tile
pub const REACH_TILES: f32 = 5.0;

/// Outcome of an accepted interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// A connected tree was felled
    Chopped { species: TreeSpecies, removed: usize },
    /// A single tile was dug out
    Mined { item: ItemKind },
    /// Both halves of a flower were picked
    Harvested { kind: FlowerKind },
    /// A single tile (or both flower halves) was written
    Placed { tile: u8 },
    /// A sapling was planted and needs a growth event at (x, y)
    Planted { x: i32, y: i32 },
}

/// Interaction system - static utility methods for editing the grid
pub struct InteractionSystem;

impl InteractionSystem {
    /// Whether `target` is close enough to `origin` to be edited
    pub fn in_reach(origin: (i32, i32), target: (i32, i32)) -> bool {
        let dx = (target.0 - origin.0) as f32;
        let dy = (target.1 - origin.1) as f32;
        (dx * dx + dy * dy).sqrt() <= REACH_TILES
    }

    /// Apply the selected slot of `inventory` to tile (x, y)
    ///
    /// Returns `None` if nothing happened: wrong tool, unmet precondition,
    /// or an empty target for a tool.
    pub fn use_selected(
        grid: &mut TileGrid,
        inventory: &mut Inventory,
        x: i32,
        y: i32,
    ) -> Option<Interaction> {
        let kind = inventory.selected()?.kind;
        match kind {
            ItemKind::Tool(tool) => {
                let code = grid.get(x, y)?;
                match tool.action_for(code)? {
                    ToolAction::Chop(species) => Self::chop_tree(grid, inventory, x, y, species),
                    ToolAction::Mine(item) => Self::mine_tile(grid, inventory, x, y, item),
                    ToolAction::Harvest(flower) => {
                        Self::harvest_flower(grid, inventory, x, y, flower)
                    }
                }
            }
            other => Self::place(grid, x, y, other.placement()?),
        }
    }

    /// Collect the 8-connected component of `species` tiles containing (x, y)
    ///
    /// Empty if (x, y) isn't a tile of that species.
    pub fn flood_fill_tree(
        grid: &TileGrid,
        x: i32,
        y: i32,
        species: TreeSpecies,
    ) -> Vec<(i32, i32)> {
        let belongs = |x: i32, y: i32| grid.get(x, y).is_some_and(|code| species.owns(code));

        if !belongs(x, y) {
            return Vec::new();
        }

        let mut visited = AHashSet::new();
        let mut stack = vec![(x, y)];
        let mut component = Vec::new();
        visited.insert((x, y));

        while let Some((cx, cy)) = stack.pop() {
            component.push((cx, cy));
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let next = (cx + dx, cy + dy);
                    if belongs(next.0, next.1) && visited.insert(next) {
                        stack.push(next);
                    }
                }
            }
        }

        component
    }

    /// Fell the whole connected tree and credit its size as wood
    pub fn chop_tree(
        grid: &mut TileGrid,
        inventory: &mut Inventory,
        x: i32,
        y: i32,
        species: TreeSpecies,
    ) -> Option<Interaction> {
        let component = Self::flood_fill_tree(grid, x, y, species);
        if component.is_empty() {
            return None;
        }

        for &(tx, ty) in &component {
            grid.set(tx, ty, TileId::EMPTY);
        }
        inventory.add(ItemKind::Wood(species), component.len() as u32);

        log::debug!(
            "[CHOP] Felled {} tree at ({}, {}): {} tiles",
            species.name(),
            x,
            y,
            component.len()
        );
        Some(Interaction::Chopped {
            species,
            removed: component.len(),
        })
    }

    /// Remove a single tile and credit one `item`
    pub fn mine_tile(
        grid: &mut TileGrid,
        inventory: &mut Inventory,
        x: i32,
        y: i32,
        item: ItemKind,
    ) -> Option<Interaction> {
        if !grid.in_bounds(x, y) || grid.is(x, y, TileId::EMPTY) {
            return None;
        }

        grid.set(x, y, TileId::EMPTY);
        inventory.add(item, 1);
        log::debug!("[MINE] Mined {} at ({}, {})", item.name(), x, y);
        Some(Interaction::Mined { item })
    }

    /// Remove both halves of the flower that (x, y) belongs to
    pub fn harvest_flower(
        grid: &mut TileGrid,
        inventory: &mut Inventory,
        x: i32,
        y: i32,
        kind: FlowerKind,
    ) -> Option<Interaction> {
        let (found, is_stem) = grid.get(x, y).and_then(FlowerKind::from_tile)?;
        if found != kind {
            return None;
        }

        let (partner_y, partner) = if is_stem {
            (y - 1, kind.petal())
        } else {
            (y + 1, kind.stem())
        };

        grid.set(x, y, TileId::EMPTY);
        if grid.is(x, partner_y, partner) {
            grid.set(x, partner_y, TileId::EMPTY);
        }
        inventory.add(ItemKind::Flower(kind), 1);

        log::debug!("[HARVEST] Picked {} at ({}, {})", kind.name(), x, y);
        Some(Interaction::Harvested { kind })
    }

    /// Write `placement` at (x, y); the target must be empty
    pub fn place(
        grid: &mut TileGrid,
        x: i32,
        y: i32,
        placement: Placement,
    ) -> Option<Interaction> {
        if !grid.is(x, y, TileId::EMPTY) {
            return None;
        }

        match placement {
            Placement::Block(code) => {
                grid.set(x, y, code);
                log::debug!("[PLACE] Placed tile {} at ({}, {})", code, x, y);
                Some(Interaction::Placed { tile: code })
            }
            Placement::Flower(kind) => {
                if !grid.is(x, y + 1, TileId::GRASS) || !grid.is(x, y - 1, TileId::EMPTY) {
                    return None;
                }
                grid.set(x, y, kind.stem());
                grid.set(x, y - 1, kind.petal());
                log::debug!("[PLACE] Planted {} at ({}, {})", kind.name(), x, y);
                Some(Interaction::Placed { tile: kind.stem() })
            }
            Placement::Sapling => {
                if !grid.is(x, y + 1, TileId::GRASS) {
                    return None;
                }
                grid.set(x, y, TileId::SAPLING);
                log::debug!("[PLACE] Planted sapling at ({}, {})", x, y);
                Some(Interaction::Planted { x, y })
            }
        }
    }
}
