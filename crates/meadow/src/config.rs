//! Host configuration with layered loading
//!
//! Configuration is loaded from multiple sources (lowest to highest priority):
//! 1. Compiled defaults
//! 2. `meadow.ron` file (if exists)
//! 3. Environment variables prefixed with `MEADOW_`
//!
//! Command-line flags are applied on top by `main`.
//!
//! Example environment variable: `MEADOW_RUN__TICKS=600`

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use meadow_core::world::WorldGenConfig;
use serde::{Deserialize, Serialize};

use crate::session::Walk;

/// Main host configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HostConfig {
    #[serde(default)]
    pub world: WorldConfig,

    #[serde(default)]
    pub run: RunConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// World creation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Generation seed; random when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Generation preset: default, small, flowery
    pub preset: String,
    /// Width override in tiles
    #[serde(default)]
    pub width: Option<i32>,
    /// Height override in tiles
    #[serde(default)]
    pub height: Option<i32>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: None,
            preset: "default".to_string(),
            width: None,
            height: None,
        }
    }
}

/// Scripted run settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Ticks to simulate
    pub ticks: u64,
    /// Held direction while running
    pub walk: Walk,
    /// Press jump every N ticks (0 = never)
    pub jump_every: u64,
    /// Log a progress line every N ticks (0 = never)
    pub report_every: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: 600,
            walk: Walk::None,
            jump_every: 0,
            report_every: 120,
        }
    }
}

/// What to write when the run ends
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Print the ASCII minimap
    pub minimap: bool,
    /// Snapshot file to write
    #[serde(default)]
    pub save: Option<String>,
}

impl HostConfig {
    /// Load configuration with layered priority:
    /// 1. Compiled defaults (lowest priority)
    /// 2. `meadow.ron` file (if exists)
    /// 3. Environment variables prefixed with `MEADOW_` (highest priority)
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("meadow"))
    }

    /// Same layering with an explicit file stem (extension optional)
    pub fn load_from(file: &Path) -> Result<Self> {
        let name = file.to_string_lossy();
        let builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("world.preset", "default")?
            .set_default("run.ticks", 600_i64)?
            .set_default("run.walk", "None")?
            .set_default("run.jump_every", 0_i64)?
            .set_default("run.report_every", 120_i64)?
            .set_default("output.minimap", false)?
            // Layer 2: Config file (optional, won't error if missing)
            .add_source(
                File::with_name(&name)
                    .format(config::FileFormat::Ron)
                    .required(false),
            )
            // Layer 3: Environment variables (MEADOW_RUN__TICKS, etc.)
            .add_source(Environment::with_prefix("MEADOW").separator("__"));

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Generation parameters for the configured preset and size overrides
    pub fn worldgen(&self) -> Result<WorldGenConfig> {
        let mut worldgen = match self.world.preset.to_lowercase().as_str() {
            "default" => WorldGenConfig::default(),
            "small" => WorldGenConfig::preset_small(),
            "flowery" => WorldGenConfig::preset_flowery(),
            other => anyhow::bail!("Unknown world preset '{}'", other),
        };

        if let Some(width) = self.world.width {
            anyhow::ensure!(width > 0, "World width must be positive, got {}", width);
            worldgen.world.width = width;
        }
        if let Some(height) = self.world.height {
            anyhow::ensure!(height > 0, "World height must be positive, got {}", height);
            worldgen.world.height = height;
        }
        Ok(worldgen)
    }
}
