pub mod entity;
pub mod simulation;
pub mod world;

// Re-export from meadow-creature so hosts only need one dependency
pub mod creature {
    pub use meadow_creature::*;
}

pub use meadow_simulation::{FlowerKind, TileId, Tiles, TreeSpecies, is_solid};
