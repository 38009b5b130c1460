//! Tile data for the Meadow sandbox
//!
//! This crate provides the foundational data types shared by every other crate:
//! - Tile codes (TileId) and the solidity predicate
//! - Tile definitions and the registry (TileDef, Tiles)
//! - Tree species and flower kinds with their two-tile code pairs

mod species;
mod tiles;

pub use species::{FlowerKind, TreeSpecies};
pub use tiles::{TileCategory, TileDef, TileId, Tiles, is_solid};
