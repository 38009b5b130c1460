//! World generation configuration - serializable parameters for world generation
//!
//! Captures every constant the generator, the creature roster and the player
//! physics read, so a world is fully described by a seed plus one of these.
//! Round-trips through RON for presets and the host's config file.

use meadow_creature::{RosterCounts, SkyBands};
use meadow_simulation::TreeSpecies;
use serde::{Deserialize, Serialize};

/// Complete world configuration
///
/// The seed is NOT part of the config - same config + different seed = different world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGenConfig {
    /// Display name for this configuration
    pub name: String,
    pub world: WorldParams,
    pub pond: PondParams,
    pub biomes: BiomeParams,
    pub vegetation: VegetationParams,
    pub creatures: CreatureParams,
    pub growth: GrowthParams,
    pub physics: PhysicsConfig,
}

/// Grid dimensions and layering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldParams {
    /// Width in tiles
    pub width: i32,
    /// Height in tiles
    pub height: i32,
    /// Tile edge length in pixels
    pub tile_size: f32,
    /// Ground row as a fraction of the height (default: 0.95)
    pub ground_ratio: f32,
    /// Ticks for a full sun/moon revolution
    pub day_length_ticks: u32,
}

/// Pond carved into the ground
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PondParams {
    /// First pond column as a fraction of the width (default: 0.3)
    pub start_ratio: f32,
    /// End column (exclusive) as a fraction of the width (default: 0.4)
    pub end_ratio: f32,
    /// Water rows starting at the ground row (default: 3)
    pub depth: i32,
}

/// Biome noise and thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiomeParams {
    /// Column to noise coordinate multiplier (default: 0.05)
    pub noise_scale: f32,
    /// Noise below this is forest (default: 0.3)
    pub forest_max: f32,
    /// Noise below this (and above forest) is cherry blossom forest (default: 0.6)
    pub cherry_max: f32,
}

/// Tree and flower placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VegetationParams {
    /// First column scanned for trees
    pub tree_start_col: i32,
    /// Probability of a tree per scanned column
    pub tree_chance: f32,
    /// Columns skipped after a tree (inclusive range)
    pub tree_skip_min: i32,
    pub tree_skip_max: i32,
    /// Probability of a flower cluster per scanned column
    pub flower_chance: f32,
    /// Columns per cluster (inclusive range)
    pub flower_cluster_min: i32,
    pub flower_cluster_max: i32,
    /// Extra columns skipped after a cluster (inclusive range)
    pub flower_skip_min: i32,
    pub flower_skip_max: i32,
}

/// Creature roster and flight bands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatureParams {
    pub counts: RosterCounts,
    /// Random tiles tried per fish before giving up
    pub fish_spawn_attempts: u32,
    /// Viewport height in pixels for sky bands; `None` uses the world's pixel height
    pub viewport_height: Option<f32>,
    /// Fraction of the viewport height each flyer stays above
    pub bird_band: f32,
    pub butterfly_band: f32,
    pub firefly_band: f32,
}

/// Sapling growth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthParams {
    /// Ticks between planting and growth
    pub sapling_delay_ticks: u64,
    /// Species a planted sapling grows into
    pub sapling_species: TreeSpecies,
}

/// Player movement constants plus the creature speed factor
///
/// All velocities are pixels per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub player_speed: f32,
    pub gravity: f32,
    pub jump_force: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Ticks per walk animation frame
    pub walk_frame_ticks: u32,
    /// Global multiplier on creature speeds
    pub creature_speed_factor: f32,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            world: WorldParams::default(),
            pond: PondParams::default(),
            biomes: BiomeParams::default(),
            vegetation: VegetationParams::default(),
            creatures: CreatureParams::default(),
            growth: GrowthParams::default(),
            physics: PhysicsConfig::default(),
        }
    }
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            width: 800,
            height: 200,
            tile_size: 20.0,
            ground_ratio: 0.95,
            day_length_ticks: 72_000,
        }
    }
}

impl Default for PondParams {
    fn default() -> Self {
        Self {
            start_ratio: 0.3,
            end_ratio: 0.4,
            depth: 3,
        }
    }
}

impl Default for BiomeParams {
    fn default() -> Self {
        Self {
            noise_scale: 0.05,
            forest_max: 0.3,
            cherry_max: 0.6,
        }
    }
}

impl Default for VegetationParams {
    fn default() -> Self {
        Self {
            tree_start_col: 5,
            tree_chance: 0.10,
            tree_skip_min: 4,
            tree_skip_max: 6,
            flower_chance: 0.08,
            flower_cluster_min: 1,
            flower_cluster_max: 3,
            flower_skip_min: 3,
            flower_skip_max: 7,
        }
    }
}

impl Default for CreatureParams {
    fn default() -> Self {
        let bands = SkyBands::default();
        Self {
            counts: RosterCounts::default(),
            fish_spawn_attempts: 50,
            viewport_height: None,
            bird_band: bands.bird,
            butterfly_band: bands.butterfly,
            firefly_band: bands.firefly,
        }
    }
}

impl Default for GrowthParams {
    fn default() -> Self {
        Self {
            sapling_delay_ticks: 300,
            sapling_species: TreeSpecies::Oak,
        }
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            player_speed: 4.0,
            gravity: 0.5,
            jump_force: 10.0,
            player_width: 14.0,
            player_height: 36.0,
            walk_frame_ticks: 8,
            creature_speed_factor: 1.0,
        }
    }
}

// ============================================================================
// Derived layout
// ============================================================================

impl WorldGenConfig {
    /// Row of the grass surface
    pub fn ground_level_y(&self) -> i32 {
        ratio_floor(self.world.height, self.world.ground_ratio)
    }

    /// Pond column span as `[start, end)`
    pub fn pond_columns(&self) -> (i32, i32) {
        (
            ratio_floor(self.world.width, self.pond.start_ratio),
            ratio_floor(self.world.width, self.pond.end_ratio),
        )
    }

    pub fn world_width_px(&self) -> f32 {
        self.world.width as f32 * self.world.tile_size
    }

    pub fn world_height_px(&self) -> f32 {
        self.world.height as f32 * self.world.tile_size
    }

    /// Sky bands for the creature roster
    pub fn sky_bands(&self) -> SkyBands {
        SkyBands {
            viewport_height: self
                .creatures
                .viewport_height
                .unwrap_or_else(|| self.world_height_px()),
            bird: self.creatures.bird_band,
            butterfly: self.creatures.butterfly_band,
            firefly: self.creatures.firefly_band,
        }
    }
}

/// `floor(count * ratio)`, tolerant of ratios like 0.95 that f32 stores slightly low
fn ratio_floor(count: i32, ratio: f32) -> i32 {
    (count as f32 * ratio + 1e-3).floor() as i32
}

// ============================================================================
// Preset helpers
// ============================================================================

impl WorldGenConfig {
    /// Small world, quick to generate and easy to print
    pub fn preset_small() -> Self {
        Self {
            name: "Small".to_string(),
            world: WorldParams {
                width: 120,
                height: 80,
                ..WorldParams::default()
            },
            creatures: CreatureParams {
                counts: RosterCounts {
                    bunnies: 2,
                    birds: 3,
                    squirrels: 2,
                    fish: 4,
                    butterflies: 3,
                    fireflies: 3,
                },
                ..CreatureParams::default()
            },
            ..Self::default()
        }
    }

    /// Dense flower meadows, fewer trees
    pub fn preset_flowery() -> Self {
        Self {
            name: "Flowery".to_string(),
            vegetation: VegetationParams {
                tree_chance: 0.04,
                flower_chance: 0.3,
                flower_cluster_max: 5,
                flower_skip_min: 1,
                flower_skip_max: 3,
                ..VegetationParams::default()
            },
            creatures: CreatureParams {
                counts: RosterCounts {
                    butterflies: 12,
                    ..RosterCounts::default()
                },
                ..CreatureParams::default()
            },
            ..Self::default()
        }
    }
}
