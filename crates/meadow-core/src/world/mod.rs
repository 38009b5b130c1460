//! World management - grid, generation, physics, interaction, saving

pub mod biome;
pub mod features;
pub mod generation;
pub mod grid;
mod interaction_system;
pub mod noise;
pub mod persistence;
mod player_physics;
pub mod rng_trait;
#[allow(clippy::module_inception)]
mod world;
pub mod worldgen_config;

pub use biome::{BiomeMap, BiomeType};
pub use generation::{GeneratedTerrain, WorldGenerator};
pub use grid::TileGrid;
pub use interaction_system::{Interaction, InteractionSystem, REACH_TILES};
pub use noise::BiomeNoise;
pub use persistence::{SnapshotError, SnapshotResult, WorldSnapshot};
pub use player_physics::PlayerPhysicsSystem;
pub use rng_trait::WorldRng;
pub use world::{TickReport, World};
pub use worldgen_config::{
    BiomeParams, CreatureParams, GrowthParams, PhysicsConfig, PondParams, VegetationParams,
    WorldGenConfig, WorldParams,
};
