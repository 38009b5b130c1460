//! Tree species and flower kinds
//!
//! Trees and flowers occupy pairs of tile codes. Interaction rules (chopping,
//! harvesting, growth) only ever propagate within a single pair.

use serde::{Deserialize, Serialize};

use crate::tiles::TileId;

/// Species of tree, each with its own trunk/canopy pair
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreeSpecies {
    Oak,
    Birch,
    Cherry,
}

impl TreeSpecies {
    pub const ALL: [TreeSpecies; 3] = [TreeSpecies::Oak, TreeSpecies::Birch, TreeSpecies::Cherry];

    /// Trunk tile code
    pub fn trunk(self) -> u8 {
        match self {
            TreeSpecies::Oak => TileId::WOOD,
            TreeSpecies::Birch => TileId::BIRCH_WOOD,
            TreeSpecies::Cherry => TileId::CHERRY_WOOD,
        }
    }

    /// Canopy tile code
    pub fn canopy(self) -> u8 {
        match self {
            TreeSpecies::Oak => TileId::LEAVES,
            TreeSpecies::Birch => TileId::BIRCH_LEAVES,
            TreeSpecies::Cherry => TileId::CHERRY_LEAVES,
        }
    }

    /// Species owning a trunk or canopy tile
    pub fn from_tile(code: u8) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|species| species.trunk() == code || species.canopy() == code)
    }

    /// Whether `code` belongs to this species' trunk/canopy pair
    pub fn owns(self, code: u8) -> bool {
        code == self.trunk() || code == self.canopy()
    }

    pub fn name(self) -> &'static str {
        match self {
            TreeSpecies::Oak => "oak",
            TreeSpecies::Birch => "birch",
            TreeSpecies::Cherry => "cherry",
        }
    }
}

/// Kind of two-tile flower
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowerKind {
    Tulip,
    Lily,
    Rose,
}

impl FlowerKind {
    pub const ALL: [FlowerKind; 3] = [FlowerKind::Tulip, FlowerKind::Lily, FlowerKind::Rose];

    /// Lower half
    pub fn stem(self) -> u8 {
        match self {
            FlowerKind::Tulip => TileId::FLOWER_STEM,
            FlowerKind::Lily => TileId::LILY_STEM,
            FlowerKind::Rose => TileId::ROSE_STEM,
        }
    }

    /// Upper half
    pub fn petal(self) -> u8 {
        match self {
            FlowerKind::Tulip => TileId::FLOWER_PETAL,
            FlowerKind::Lily => TileId::LILY_FLOWER,
            FlowerKind::Rose => TileId::ROSE_FLOWER,
        }
    }

    /// Flower kind for either half, plus whether the code is the stem
    pub fn from_tile(code: u8) -> Option<(Self, bool)> {
        Self::ALL.into_iter().find_map(|kind| {
            if kind.stem() == code {
                Some((kind, true))
            } else if kind.petal() == code {
                Some((kind, false))
            } else {
                None
            }
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            FlowerKind::Tulip => "tulip",
            FlowerKind::Lily => "lily",
            FlowerKind::Rose => "rose",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_pairs_are_disjoint() {
        for a in TreeSpecies::ALL {
            for b in TreeSpecies::ALL {
                if a != b {
                    assert!(!a.owns(b.trunk()));
                    assert!(!a.owns(b.canopy()));
                }
            }
        }
    }

    #[test]
    fn test_tree_from_tile() {
        assert_eq!(TreeSpecies::from_tile(TileId::WOOD), Some(TreeSpecies::Oak));
        assert_eq!(
            TreeSpecies::from_tile(TileId::BIRCH_LEAVES),
            Some(TreeSpecies::Birch)
        );
        assert_eq!(
            TreeSpecies::from_tile(TileId::CHERRY_WOOD),
            Some(TreeSpecies::Cherry)
        );
        assert_eq!(TreeSpecies::from_tile(TileId::CACTUS), None);
        assert_eq!(TreeSpecies::from_tile(TileId::GRASS), None);
    }

    #[test]
    fn test_flower_from_tile() {
        assert_eq!(
            FlowerKind::from_tile(TileId::ROSE_STEM),
            Some((FlowerKind::Rose, true))
        );
        assert_eq!(
            FlowerKind::from_tile(TileId::LILY_FLOWER),
            Some((FlowerKind::Lily, false))
        );
        assert_eq!(
            FlowerKind::from_tile(TileId::FLOWER_PETAL),
            Some((FlowerKind::Tulip, false))
        );
        assert_eq!(FlowerKind::from_tile(TileId::SAPLING), None);
    }

    #[test]
    fn test_serde_roundtrip() {
        let text = ron::to_string(&TreeSpecies::Cherry).expect("serialize");
        let back: TreeSpecies = ron::from_str(&text).expect("deserialize");
        assert_eq!(back, TreeSpecies::Cherry);
    }
}
