//! Creature spawning and management
//!
//! Manages the fixed wildlife roster: spawning at world start, ticking every
//! creature, and removing fish whose survival timer ran out.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::behavior::{TickContext, update_creature};
use crate::creature::{Creature, Species};
use crate::habitat::Habitat;
use crate::particles::HeartParticle;
use crate::traits::WorldAccess;
use crate::types::EntityId;

/// How many of each species to spawn at world start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterCounts {
    pub bunnies: usize,
    pub birds: usize,
    pub squirrels: usize,
    pub fish: usize,
    pub butterflies: usize,
    pub fireflies: usize,
}

impl RosterCounts {
    pub fn get(&self, species: Species) -> usize {
        match species {
            Species::Bunny => self.bunnies,
            Species::Bird => self.birds,
            Species::Squirrel => self.squirrels,
            Species::Fish => self.fish,
            Species::Butterfly => self.butterflies,
            Species::Firefly => self.fireflies,
        }
    }

    pub fn total(&self) -> usize {
        Species::ALL.iter().map(|&species| self.get(species)).sum()
    }
}

impl Default for RosterCounts {
    fn default() -> Self {
        Self {
            bunnies: 3,
            birds: 5,
            squirrels: 4,
            fish: 8,
            butterflies: 5,
            fireflies: 5,
        }
    }
}

/// What happened during one registry update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    pub hearts_emitted: usize,
    pub fish_removed: usize,
}

/// Rows below ground level searched for fish water
const FISH_SEARCH_ROWS: i32 = 10;
/// Upper bound (exclusive) on the first decision delay of a new creature
const INITIAL_TIMER_MAX: i32 = 60;

/// Manages the creature population and bunny heart particles
#[derive(Debug, Clone, Default)]
pub struct CreatureManager {
    creatures: Vec<Creature>,
    hearts: Vec<HeartParticle>,
}

impl CreatureManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the full roster; fish that find no water are skipped
    pub fn spawn_roster<W, R>(
        &mut self,
        counts: &RosterCounts,
        fish_attempts: u32,
        world: &W,
        habitat: &Habitat,
        rng: &mut R,
    ) where
        W: WorldAccess + ?Sized,
        R: Rng + ?Sized,
    {
        for species in Species::ALL {
            for _ in 0..counts.get(species) {
                if species == Species::Fish {
                    self.spawn_fish(fish_attempts, world, habitat, rng);
                } else {
                    let position = Self::spawn_position(species, habitat, rng);
                    let timer = rng.gen_range(1..INITIAL_TIMER_MAX);
                    self.spawn(Creature::new(species, position, timer));
                }
            }
        }

        log::info!(
            "Spawned {} creatures ({} of {} fish found water)",
            self.count(),
            self.count_species(Species::Fish),
            counts.fish
        );
    }

    fn spawn_position<R: Rng + ?Sized>(species: Species, habitat: &Habitat, rng: &mut R) -> Vec2 {
        let size = species.size();
        let x = random_below(rng, habitat.world_width_px() - size.x);
        let y = match species {
            Species::Bunny | Species::Squirrel | Species::Fish => habitat.ground_top_px() - size.y,
            Species::Bird | Species::Butterfly | Species::Firefly => {
                random_below(rng, habitat.sky.limit(species))
            }
        };
        Vec2::new(x, y)
    }

    /// Try up to `attempts` random tiles in the pond span for water
    pub fn spawn_fish<W, R>(
        &mut self,
        attempts: u32,
        world: &W,
        habitat: &Habitat,
        rng: &mut R,
    ) -> Option<EntityId>
    where
        W: WorldAccess + ?Sized,
        R: Rng + ?Sized,
    {
        let pond = habitat.pond;
        if pond.start_col >= pond.end_col {
            return None;
        }

        let t = habitat.tile_size;
        let size = Species::Fish.size();
        let top = habitat.ground_level_y;

        for _ in 0..attempts {
            let tx = rng.gen_range(pond.start_col..pond.end_col);
            let ty = rng.gen_range(top..top + FISH_SEARCH_ROWS);
            if world.is_water_at(tx, ty) {
                let position = Vec2::new(
                    tx as f32 * t + (t - size.x) * 0.5,
                    ty as f32 * t + (t - size.y) * 0.5,
                );
                let timer = rng.gen_range(1..INITIAL_TIMER_MAX);
                return Some(self.spawn(Creature::new(Species::Fish, position, timer)));
            }
        }

        log::debug!("Fish found no water after {} attempts", attempts);
        None
    }

    /// Add a creature to the registry
    pub fn spawn(&mut self, creature: Creature) -> EntityId {
        let id = creature.id;
        log::trace!(
            "Spawned {} {} at ({:.1}, {:.1})",
            creature.species().name(),
            id,
            creature.body.position.x,
            creature.body.position.y
        );
        self.creatures.push(creature);
        id
    }

    /// Advance every creature and heart particle by one tick
    pub fn update<W, R>(
        &mut self,
        world: &W,
        habitat: &Habitat,
        player_center: Vec2,
        rng: &mut R,
    ) -> UpdateSummary
    where
        W: WorldAccess + ?Sized,
        R: Rng + ?Sized,
    {
        self.hearts.retain_mut(HeartParticle::update);

        let ctx = TickContext {
            world,
            habitat,
            player_center,
        };
        let hearts_before = self.hearts.len();
        for creature in &mut self.creatures {
            update_creature(creature, &ctx, rng, &mut self.hearts);
        }

        // Only the expired fish leave; the rest of the roster is untouched
        let before = self.creatures.len();
        self.creatures.retain(|creature| {
            let expired = creature.is_expired();
            if expired {
                log::info!("Fish {} died out of water", creature.id);
            }
            !expired
        });

        UpdateSummary {
            hearts_emitted: self.hearts.len() - hearts_before,
            fish_removed: before - self.creatures.len(),
        }
    }

    /// Remove a creature by id
    pub fn remove(&mut self, id: EntityId) -> Option<Creature> {
        let index = self.creatures.iter().position(|c| c.id == id)?;
        Some(self.creatures.remove(index))
    }

    pub fn clear(&mut self) {
        self.creatures.clear();
        self.hearts.clear();
    }

    pub fn get(&self, id: EntityId) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Creature> {
        self.creatures.iter_mut().find(|c| c.id == id)
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    pub fn hearts(&self) -> &[HeartParticle] {
        &self.hearts
    }

    pub fn count(&self) -> usize {
        self.creatures.len()
    }

    pub fn count_species(&self, species: Species) -> usize {
        self.creatures
            .iter()
            .filter(|c| c.species() == species)
            .count()
    }
}

fn random_below<R: Rng + ?Sized>(rng: &mut R, max: f32) -> f32 {
    if max > 0.0 {
        rng.gen_range(0.0..max)
    } else {
        0.0
    }
}
