//! Delayed growth - saplings scheduled to turn into trees

use std::collections::BTreeMap;

use meadow_simulation::TreeSpecies;
use serde::{Deserialize, Serialize};

use crate::world::features::grow_sapling;
use crate::world::grid::TileGrid;
use crate::world::rng_trait::WorldRng;

/// A sapling at (x, y) due to grow at `fire_tick`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthEvent {
    pub fire_tick: u64,
    pub x: i32,
    pub y: i32,
    pub species: TreeSpecies,
}

/// What firing an event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthOutcome {
    /// A tree with this trunk height replaced the sapling
    Grew { trunk_height: i32 },
    /// The tile no longer held a sapling
    Skipped,
}

impl GrowthEvent {
    /// Grow the tree if the tile still holds a sapling
    pub fn apply<R: WorldRng + ?Sized>(&self, grid: &mut TileGrid, rng: &mut R) -> GrowthOutcome {
        match grow_sapling(grid, self.x, self.y, self.species, rng) {
            Some(trunk_height) => {
                log::debug!(
                    "[GROW] Sapling at ({}, {}) grew into {} tree, trunk {}",
                    self.x,
                    self.y,
                    self.species.name(),
                    trunk_height
                );
                GrowthOutcome::Grew { trunk_height }
            }
            None => {
                log::debug!(
                    "[GROW] Sapling at ({}, {}) is gone, skipping",
                    self.x,
                    self.y
                );
                GrowthOutcome::Skipped
            }
        }
    }
}

/// Pending growth events ordered by fire tick
///
/// Events sharing a fire tick fire in scheduling order.
#[derive(Debug, Clone, Default)]
pub struct GrowthScheduler {
    queue: BTreeMap<u64, Vec<GrowthEvent>>,
}

impl GrowthScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a sapling at (x, y) to grow `delay` ticks after `now`
    pub fn schedule(
        &mut self,
        now: u64,
        delay: u64,
        x: i32,
        y: i32,
        species: TreeSpecies,
    ) -> GrowthEvent {
        let event = GrowthEvent {
            fire_tick: now.saturating_add(delay),
            x,
            y,
            species,
        };
        self.queue.entry(event.fire_tick).or_default().push(event);
        event
    }

    /// Number of events still waiting
    pub fn pending(&self) -> usize {
        self.queue.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn next_fire_tick(&self) -> Option<u64> {
        self.queue.keys().next().copied()
    }

    /// Remove and return every event with `fire_tick <= now`, earliest first
    pub fn drain_due(&mut self, now: u64) -> Vec<GrowthEvent> {
        let later = match now.checked_add(1) {
            Some(next) => self.queue.split_off(&next),
            None => BTreeMap::new(),
        };
        let due = std::mem::replace(&mut self.queue, later);
        due.into_values().flatten().collect()
    }

    /// Remove and return every event regardless of its fire tick
    pub fn fire_all_now(&mut self) -> Vec<GrowthEvent> {
        std::mem::take(&mut self.queue)
            .into_values()
            .flatten()
            .collect()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
