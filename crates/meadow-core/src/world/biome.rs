//! Per-column biome classification

use serde::{Deserialize, Serialize};

use super::noise::BiomeNoise;

/// Surface biome of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BiomeType {
    Forest,
    CherryBlossomForest,
    Desert,
}

impl BiomeType {
    pub fn name(self) -> &'static str {
        match self {
            BiomeType::Forest => "forest",
            BiomeType::CherryBlossomForest => "cherry_blossom_forest",
            BiomeType::Desert => "desert",
        }
    }
}

/// Select biome from a noise value in [0, 1]
pub fn select_biome(noise: f32, forest_max: f32, cherry_max: f32) -> BiomeType {
    if noise < forest_max {
        BiomeType::Forest
    } else if noise < cherry_max {
        BiomeType::CherryBlossomForest
    } else {
        BiomeType::Desert
    }
}

/// Biome per column, computed once and read during placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiomeMap {
    columns: Vec<BiomeType>,
}

impl BiomeMap {
    /// Sample the noise at `x * scale` for every column
    pub fn build(
        noise: &BiomeNoise,
        width: i32,
        scale: f32,
        forest_max: f32,
        cherry_max: f32,
    ) -> Self {
        let columns = (0..width.max(0))
            .map(|x| select_biome(noise.sample(x as f32 * scale, 0.0), forest_max, cherry_max))
            .collect();
        Self { columns }
    }

    /// Biome at column `x`; columns outside the map read as forest
    pub fn get(&self, x: i32) -> BiomeType {
        usize::try_from(x)
            .ok()
            .and_then(|i| self.columns.get(i))
            .copied()
            .unwrap_or(BiomeType::Forest)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn count(&self, biome: BiomeType) -> usize {
        self.columns.iter().filter(|&&b| b == biome).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(select_biome(0.0, 0.3, 0.6), BiomeType::Forest);
        assert_eq!(select_biome(0.29, 0.3, 0.6), BiomeType::Forest);
        assert_eq!(select_biome(0.3, 0.3, 0.6), BiomeType::CherryBlossomForest);
        assert_eq!(select_biome(0.59, 0.3, 0.6), BiomeType::CherryBlossomForest);
        assert_eq!(select_biome(0.6, 0.3, 0.6), BiomeType::Desert);
        assert_eq!(select_biome(1.0, 0.3, 0.6), BiomeType::Desert);
    }

    #[test]
    fn test_map_is_reproducible() {
        let a = BiomeMap::build(&BiomeNoise::new(99), 400, 0.05, 0.3, 0.6);
        let b = BiomeMap::build(&BiomeNoise::new(99), 400, 0.05, 0.3, 0.6);
        assert_eq!(a, b);
        assert_eq!(a.len(), 400);
        assert_eq!(
            a.count(BiomeType::Forest)
                + a.count(BiomeType::CherryBlossomForest)
                + a.count(BiomeType::Desert),
            400
        );
    }

    #[test]
    fn test_out_of_range_column() {
        let map = BiomeMap::build(&BiomeNoise::new(1), 10, 0.05, 0.3, 0.6);
        assert_eq!(map.get(-1), BiomeType::Forest);
        assert_eq!(map.get(10), BiomeType::Forest);
    }
}
