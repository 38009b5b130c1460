//! Tools and what they do to each tile

use meadow_simulation::{FlowerKind, TileId, TreeSpecies};
use serde::{Deserialize, Serialize};

use super::inventory::ItemKind;

/// Tool types with different use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolType {
    /// Felling whole trees, picking flowers
    Axe,
    /// Digging terrain and cacti, picking flowers
    Pickaxe,
}

/// Effect of using a tool on a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAction {
    /// Remove the connected tree of this species
    Chop(TreeSpecies),
    /// Remove the single tile and collect the item
    Mine(ItemKind),
    /// Remove both halves of the flower
    Harvest(FlowerKind),
}

impl ToolType {
    pub fn name(self) -> &'static str {
        match self {
            ToolType::Axe => "Axe",
            ToolType::Pickaxe => "Pickaxe",
        }
    }

    /// What this tool does to `code`, or `None` if it has no effect
    pub fn action_for(self, code: u8) -> Option<ToolAction> {
        if let Some((kind, _)) = FlowerKind::from_tile(code) {
            return Some(ToolAction::Harvest(kind));
        }

        match self {
            ToolType::Axe => TreeSpecies::from_tile(code).map(ToolAction::Chop),
            ToolType::Pickaxe => match code {
                TileId::GRASS | TileId::DIRT => Some(ToolAction::Mine(ItemKind::Dirt)),
                TileId::STONE => Some(ToolAction::Mine(ItemKind::Stone)),
                TileId::CACTUS => Some(ToolAction::Mine(ItemKind::Cactus)),
                _ => None,
            },
        }
    }
}
