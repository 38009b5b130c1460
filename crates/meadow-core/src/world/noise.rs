//! Seedable gradient noise used for biome selection

use fastnoise_lite::{FastNoiseLite, NoiseType};

/// Deterministic 2D Perlin noise normalized to [0, 1]
///
/// Two instances built from the same seed return identical values for every
/// coordinate. Frequency is fixed at 1.0; callers scale coordinates themselves.
pub struct BiomeNoise {
    seed: u64,
    noise: FastNoiseLite,
}

impl BiomeNoise {
    pub fn new(seed: u64) -> Self {
        let mut noise = FastNoiseLite::with_seed(seed as i32);
        noise.set_noise_type(Some(NoiseType::Perlin));
        noise.set_frequency(Some(1.0));
        Self { seed, noise }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Sample at (x, y), in [0, 1]
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let raw = self.noise.get_noise_2d(x, y);
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

impl std::fmt::Debug for BiomeNoise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BiomeNoise").field("seed", &self.seed).finish()
    }
}
