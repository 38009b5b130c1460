//! World - owns the grid, the player, the creatures and every timer

use std::path::Path;

use glam::Vec2;
use meadow_creature::{CreatureManager, Habitat, PondBounds};
use meadow_simulation::{TileId, Tiles};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use super::generation::WorldGenerator;
use super::grid::TileGrid;
use super::interaction_system::{Interaction, InteractionSystem};
use super::persistence::{SNAPSHOT_VERSION, SnapshotResult, WorldSnapshot};
use super::player_physics::PlayerPhysicsSystem;
use super::worldgen_config::WorldGenConfig;
use crate::entity::input::{Click, InputState};
use crate::entity::player::Player;
use crate::simulation::{CelestialCycle, GrowthOutcome, GrowthScheduler};

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    pub hearts_emitted: usize,
    pub fish_removed: usize,
    pub growth_fired: usize,
    pub growth_skipped: usize,
}

/// The simulation context
///
/// Every tick runs to completion before the next input is applied, and
/// interactions run between ticks.
pub struct World {
    config: WorldGenConfig,
    seed: u64,

    /// Tile codes for the whole world
    grid: TileGrid,

    /// Row of the grass surface
    ground_level_y: i32,

    pond: PondBounds,

    /// The player entity
    pub player: Player,

    /// Creature registry and heart particles
    pub creature_manager: CreatureManager,

    /// Saplings waiting to grow
    growth: GrowthScheduler,

    /// Day/night cycle
    celestial: CelestialCycle,

    /// Ticks simulated since the world was created or loaded
    tick: u64,

    /// Tile definitions
    pub tiles: Tiles,

    rng: Xoshiro256StarStar,
}

impl World {
    /// Generate a fresh world
    pub fn generate(seed: u64, config: WorldGenConfig) -> Self {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let terrain = WorldGenerator::from_config(seed, config.clone()).generate(&mut rng);

        let physics = &config.physics;
        let size = Vec2::new(physics.player_width, physics.player_height);
        let spawn = Player::spawn_position(
            config.world_width_px(),
            terrain.ground_level_y as f32 * config.world.tile_size,
            size,
        );
        log::info!("New world - player spawned at {:?}", spawn);

        let mut world = Self {
            celestial: CelestialCycle::new(config.world.day_length_ticks),
            grid: terrain.grid,
            ground_level_y: terrain.ground_level_y,
            pond: terrain.pond,
            player: Player::new(spawn, size),
            creature_manager: CreatureManager::new(),
            growth: GrowthScheduler::new(),
            tick: 0,
            tiles: Tiles::new(),
            config,
            seed,
            rng,
        };
        world.spawn_creatures();
        world
    }

    /// Restore a world from a snapshot
    ///
    /// Ground level is found again by scanning column 0, the pond span comes
    /// from the config ratios, creatures are spawned fresh and every sapling
    /// on the grid is scheduled to grow.
    pub fn from_snapshot(snapshot: WorldSnapshot, mut config: WorldGenConfig) -> SnapshotResult<Self> {
        let grid = snapshot.grid()?;
        config.world.width = grid.width();
        config.world.height = grid.height();

        let ground_level_y = grid
            .first_solid_row(0)
            .unwrap_or_else(|| config.ground_level_y());
        let (start_col, end_col) = config.pond_columns();
        let pond = PondBounds {
            start_col,
            end_col,
            top_row: ground_level_y,
            depth: config.pond.depth,
        };

        let physics = &config.physics;
        let mut player = Player::new(
            snapshot.player_position,
            Vec2::new(physics.player_width, physics.player_height),
        );
        player.inventory.restore_amounts(&snapshot.inventory);
        player.inventory.select(snapshot.selected_slot);

        let mut celestial = CelestialCycle::new(config.world.day_length_ticks);
        celestial.set_angle(snapshot.celestial_angle);

        let mut world = Self {
            grid,
            ground_level_y,
            pond,
            player,
            creature_manager: CreatureManager::new(),
            growth: GrowthScheduler::new(),
            celestial,
            tick: 0,
            tiles: Tiles::new(),
            rng: Xoshiro256StarStar::seed_from_u64(snapshot.seed),
            seed: snapshot.seed,
            config,
        };
        world.reschedule_saplings();
        world.spawn_creatures();

        log::info!(
            "Restored {}x{} world (seed {}): ground row {}, {} saplings pending",
            world.grid.width(),
            world.grid.height(),
            world.seed,
            world.ground_level_y,
            world.growth.pending()
        );
        Ok(world)
    }

    /// Load a snapshot from `path`, generating a fresh world if that fails
    pub fn load_or_generate(path: &Path, seed: u64, config: WorldGenConfig) -> Self {
        match WorldSnapshot::load(path).and_then(|s| Self::from_snapshot(s, config.clone())) {
            Ok(world) => world,
            Err(e) => {
                log::warn!(
                    "Could not load {:?} ({}), generating a fresh world",
                    path,
                    e
                );
                Self::generate(seed, config)
            }
        }
    }

    /// Capture the persistent state
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            version: SNAPSHOT_VERSION,
            seed: self.seed,
            width: self.grid.width(),
            height: self.grid.height(),
            tiles: self.grid.to_rows(),
            player_position: self.player.position,
            inventory: self.player.inventory.amounts(),
            selected_slot: self.player.inventory.selected_index(),
            celestial_angle: self.celestial.angle(),
        }
    }

    fn spawn_creatures(&mut self) {
        let habitat = self.habitat();
        let creatures = &self.config.creatures;
        self.creature_manager.spawn_roster(
            &creatures.counts,
            creatures.fish_spawn_attempts,
            &self.grid,
            &habitat,
            &mut self.rng,
        );
    }

    fn reschedule_saplings(&mut self) {
        let growth = &self.config.growth;
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                if self.grid.is(x, y, TileId::SAPLING) {
                    self.growth.schedule(
                        self.tick,
                        growth.sapling_delay_ticks,
                        x,
                        y,
                        growth.sapling_species,
                    );
                }
            }
        }
    }

    /// Habitat description handed to the creatures
    pub fn habitat(&self) -> Habitat {
        Habitat {
            tile_size: self.config.world.tile_size,
            world_width: self.grid.width(),
            ground_level_y: self.ground_level_y,
            pond: self.pond,
            sky: self.config.sky_bands(),
            speed_factor: self.config.physics.creature_speed_factor,
        }
    }

    /// Advance the whole simulation by one tick
    pub fn tick(&mut self, input: &InputState) -> TickReport {
        self.tick += 1;
        self.celestial.tick();

        // Player
        let tile_size = self.config.world.tile_size;
        let world_width_px = self.grid.width() as f32 * tile_size;
        let grid = &self.grid;
        PlayerPhysicsSystem::update(
            &mut self.player,
            input,
            &self.config.physics,
            tile_size,
            world_width_px,
            |x, y| grid.is_solid_at(x, y),
        );

        // Creatures
        let habitat = self.habitat();
        let summary = self.creature_manager.update(
            &self.grid,
            &habitat,
            self.player.center(),
            &mut self.rng,
        );

        // Growth
        let mut report = TickReport {
            tick: self.tick,
            hearts_emitted: summary.hearts_emitted,
            fish_removed: summary.fish_removed,
            ..TickReport::default()
        };
        for event in self.growth.drain_due(self.tick) {
            match event.apply(&mut self.grid, &mut self.rng) {
                GrowthOutcome::Grew { .. } => report.growth_fired += 1,
                GrowthOutcome::Skipped => report.growth_skipped += 1,
            }
        }

        log::trace!("Tick {}: {:?}", self.tick, report);
        report
    }

    /// Use the selected slot on the tile under `target` (world pixels)
    ///
    /// Targets farther than the reach from the player are ignored.
    pub fn interact(&mut self, target: Vec2) -> Option<Interaction> {
        let tile_size = self.config.world.tile_size;
        let x = (target.x / tile_size).floor() as i32;
        let y = (target.y / tile_size).floor() as i32;

        let origin = self.player.center_tile(tile_size);
        if !InteractionSystem::in_reach(origin, (x, y)) {
            log::trace!("Target ({}, {}) out of reach from {:?}", x, y, origin);
            return None;
        }

        let outcome =
            InteractionSystem::use_selected(&mut self.grid, &mut self.player.inventory, x, y)?;

        if let Interaction::Planted { x, y } = outcome {
            let growth = &self.config.growth;
            let event =
                self.growth
                    .schedule(self.tick, growth.sapling_delay_ticks, x, y, growth.sapling_species);
            log::debug!("[GROW] Sapling at ({}, {}) due at tick {}", x, y, event.fire_tick);
        }
        Some(outcome)
    }

    /// Select the clicked slot, then interact with the target
    pub fn click(&mut self, click: &Click) -> Option<Interaction> {
        if !self.player.inventory.select(click.slot) {
            return None;
        }
        self.interact(click.target)
    }

    /// Fire every pending growth event right away
    pub fn fire_pending_growth(&mut self) -> Vec<GrowthOutcome> {
        self.growth
            .fire_all_now()
            .into_iter()
            .map(|event| event.apply(&mut self.grid, &mut self.rng))
            .collect()
    }

    /// One glyph per tile, top row first
    pub fn minimap_rows(&self) -> Vec<String> {
        self.grid
            .rows()
            .map(|row| row.iter().map(|&code| self.tiles.get(code).glyph).collect())
            .collect()
    }

    /// Tile code at (x, y), `None` outside the grid
    pub fn get_tile(&self, x: i32, y: i32) -> Option<u8> {
        self.grid.get(x, y)
    }

    /// Write a tile; out-of-bounds writes are ignored
    pub fn set_tile(&mut self, x: i32, y: i32, code: u8) -> bool {
        self.grid.set(x, y, code)
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn config(&self) -> &WorldGenConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn ground_level_y(&self) -> i32 {
        self.ground_level_y
    }

    pub fn pond(&self) -> PondBounds {
        self.pond
    }

    pub fn celestial(&self) -> &CelestialCycle {
        &self.celestial
    }

    pub fn growth(&self) -> &GrowthScheduler {
        &self.growth
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }
}

#[cfg(test)]
#[path = "world_tests.rs"]
mod world_tests;
