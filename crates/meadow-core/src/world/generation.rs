//! World generator - ground, pond and biome-driven vegetation

use meadow_creature::PondBounds;
use meadow_simulation::{FlowerKind, TileId, TreeSpecies};

use super::biome::{BiomeMap, BiomeType};
use super::features::{can_plant, place_cactus, place_flower, place_tree};
use super::grid::TileGrid;
use super::noise::BiomeNoise;
use super::rng_trait::WorldRng;
use super::worldgen_config::WorldGenConfig;

/// Terrain produced by one generator run
#[derive(Debug, Clone)]
pub struct GeneratedTerrain {
    pub grid: TileGrid,
    pub ground_level_y: i32,
    pub pond: PondBounds,
    pub biomes: BiomeMap,
    pub trees: usize,
    pub flowers: usize,
}

/// Builds the initial tile grid from a seed and a configuration
///
/// The noise seed fixes the biome map; the rng passed to `generate` drives
/// every placement roll.
pub struct WorldGenerator {
    pub seed: u64,
    config: WorldGenConfig,
    noise: BiomeNoise,
}

impl WorldGenerator {
    /// Create a new WorldGenerator with default configuration
    pub fn new(seed: u64) -> Self {
        Self::from_config(seed, WorldGenConfig::default())
    }

    pub fn from_config(seed: u64, config: WorldGenConfig) -> Self {
        Self {
            seed,
            config,
            noise: BiomeNoise::new(seed),
        }
    }

    pub fn config(&self) -> &WorldGenConfig {
        &self.config
    }

    /// Biome of every column, reproducible from the seed alone
    pub fn biome_map(&self) -> BiomeMap {
        let biomes = &self.config.biomes;
        BiomeMap::build(
            &self.noise,
            self.config.world.width,
            biomes.noise_scale,
            biomes.forest_max,
            biomes.cherry_max,
        )
    }

    /// Pond rectangle implied by the configuration
    pub fn pond_bounds(&self) -> PondBounds {
        let (start_col, end_col) = self.config.pond_columns();
        PondBounds {
            start_col,
            end_col,
            top_row: self.config.ground_level_y(),
            depth: self.config.pond.depth,
        }
    }

    /// Run every generation step in order
    pub fn generate<R: WorldRng + ?Sized>(&self, rng: &mut R) -> GeneratedTerrain {
        let world = &self.config.world;
        let biomes = self.biome_map();
        let mut grid = TileGrid::new(world.width, world.height);
        let ground_level_y = self.config.ground_level_y();
        let pond = self.pond_bounds();

        lay_ground(&mut grid, ground_level_y);
        carve_pond(&mut grid, &pond);
        let trees = self.plant_trees(&mut grid, &biomes, &pond, rng);
        let flowers = self.plant_flowers(&mut grid, ground_level_y, rng);

        log::info!(
            "Generated {}x{} world (seed {}): ground row {}, pond columns {}..{}, {} trees, {} flowers",
            world.width,
            world.height,
            self.seed,
            ground_level_y,
            pond.start_col,
            pond.end_col,
            trees,
            flowers
        );
        log::debug!(
            "Biomes: {} forest, {} cherry, {} desert columns",
            biomes.count(BiomeType::Forest),
            biomes.count(BiomeType::CherryBlossomForest),
            biomes.count(BiomeType::Desert)
        );

        GeneratedTerrain {
            grid,
            ground_level_y,
            pond,
            biomes,
            trees,
            flowers,
        }
    }

    /// Scan from the start column, rolling once per non-pond column
    fn plant_trees<R: WorldRng + ?Sized>(
        &self,
        grid: &mut TileGrid,
        biomes: &BiomeMap,
        pond: &PondBounds,
        rng: &mut R,
    ) -> usize {
        let veg = &self.config.vegetation;
        let ground = pond.top_row;
        let mut placed = 0;
        let mut x = veg.tree_start_col.max(0);

        while x < grid.width() {
            if pond.contains_column(x) || !rng.chance(veg.tree_chance) {
                x += 1;
                continue;
            }

            let planted = match biomes.get(x) {
                BiomeType::Forest => {
                    let species = if rng.coin_flip() {
                        TreeSpecies::Oak
                    } else {
                        TreeSpecies::Birch
                    };
                    place_tree(grid, x, ground, species, rng)
                }
                BiomeType::CherryBlossomForest => {
                    place_tree(grid, x, ground, TreeSpecies::Cherry, rng)
                }
                BiomeType::Desert => place_cactus(grid, x, ground, rng),
            };
            if planted {
                placed += 1;
            }

            x += rng.range_inclusive(veg.tree_skip_min, veg.tree_skip_max).max(1);
        }

        placed
    }

    /// Clusters of two-tile flowers wherever grass has open air above it
    fn plant_flowers<R: WorldRng + ?Sized>(
        &self,
        grid: &mut TileGrid,
        ground: i32,
        rng: &mut R,
    ) -> usize {
        let veg = &self.config.vegetation;
        let mut placed = 0;
        let mut x = 0;

        while x < grid.width() {
            if !can_plant(grid, x, ground) || !rng.chance(veg.flower_chance) {
                x += 1;
                continue;
            }

            let size = rng
                .range_inclusive(veg.flower_cluster_min, veg.flower_cluster_max)
                .max(1);
            for cx in x..x + size {
                let kind = FlowerKind::ALL[rng.range_i32(0, FlowerKind::ALL.len() as i32) as usize];
                if place_flower(grid, cx, ground, kind) {
                    placed += 1;
                }
            }

            x += size + rng.range_inclusive(veg.flower_skip_min, veg.flower_skip_max).max(0);
        }

        placed
    }
}

/// Grass on the ground row, dirt below it
fn lay_ground(grid: &mut TileGrid, ground_level_y: i32) {
    grid.fill_row(ground_level_y, TileId::GRASS);
    for y in ground_level_y + 1..grid.height() {
        grid.fill_row(y, TileId::DIRT);
    }
}

/// Water rows from the ground row down, with a dirt floor under them
fn carve_pond(grid: &mut TileGrid, pond: &PondBounds) {
    for x in pond.start_col..pond.end_col {
        for y in pond.top_row..pond.floor_row() {
            grid.set(x, y, TileId::WATER);
        }
        grid.set(x, pond.floor_row(), TileId::DIRT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    fn generate(seed: u64, config: WorldGenConfig) -> GeneratedTerrain {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        WorldGenerator::from_config(seed, config).generate(&mut rng)
    }

    #[test]
    fn test_layers() {
        let terrain = generate(1, WorldGenConfig::default());
        let grid = &terrain.grid;
        assert_eq!(terrain.ground_level_y, 190);
        assert_eq!(grid.get(400, 190), Some(TileId::GRASS));
        assert_eq!(grid.get(400, 195), Some(TileId::DIRT));
        assert_eq!(grid.get(250, 190), Some(TileId::WATER));
        for x in 0..grid.width() {
            assert!(grid.is_solid_at(x, 199));
        }
    }

    #[test]
    fn test_pond_untouched_by_vegetation() {
        for seed in 0..5 {
            let terrain = generate(seed, WorldGenConfig::default());
            let pond = terrain.pond;
            for x in pond.start_col..pond.end_col {
                for y in pond.top_row..pond.floor_row() {
                    assert_eq!(terrain.grid.get(x, y), Some(TileId::WATER));
                }
                assert_eq!(terrain.grid.get(x, pond.floor_row()), Some(TileId::DIRT));
            }
        }
    }

    #[test]
    fn test_nothing_grows_before_start_column() {
        let terrain = generate(3, WorldGenConfig::default());
        let ground = terrain.ground_level_y;
        for x in 0..5 {
            let above = terrain.grid.get(x, ground - 1).unwrap_or(TileId::EMPTY);
            assert!(TreeSpecies::from_tile(above).is_none());
            assert_ne!(above, TileId::CACTUS);
        }
    }

    #[test]
    fn test_vegetation_matches_biome() {
        let terrain = generate(11, WorldGenConfig::default());
        let ground = terrain.ground_level_y;
        for x in 0..terrain.grid.width() {
            let Some(code) = terrain.grid.get(x, ground - 1) else {
                continue;
            };
            match code {
                TileId::CACTUS => assert_eq!(terrain.biomes.get(x), BiomeType::Desert),
                TileId::CHERRY_WOOD => {
                    assert_eq!(terrain.biomes.get(x), BiomeType::CherryBlossomForest)
                }
                TileId::WOOD | TileId::BIRCH_WOOD => {
                    assert_eq!(terrain.biomes.get(x), BiomeType::Forest)
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_flowers_stand_on_grass() {
        let terrain = generate(21, WorldGenConfig::preset_flowery());
        let grid = &terrain.grid;
        let ground = terrain.ground_level_y;
        assert!(terrain.flowers > 0);
        for x in 0..grid.width() {
            if let Some((kind, true)) = grid.get(x, ground - 1).and_then(FlowerKind::from_tile) {
                assert!(grid.is(x, ground, TileId::GRASS));
                assert!(grid.is(x, ground - 2, kind.petal()));
            }
        }
    }

    #[test]
    fn test_same_seed_same_world() {
        let a = generate(77, WorldGenConfig::preset_small());
        let b = generate(77, WorldGenConfig::preset_small());
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.biomes, b.biomes);
    }
}
