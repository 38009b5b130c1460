//! Per-species behavior and tile physics
//!
//! Every creature advances once per tick. All velocities are in pixels per
//! tick; decisions are driven by each creature's own countdown timer, so no
//! two creatures are synchronized.

use glam::Vec2;
use rand::Rng;

use meadow_simulation::TreeSpecies;

use crate::creature::{
    Body, BunnyState, Creature, CreatureKind, FishState, Species, SquirrelState,
};
use crate::habitat::Habitat;
use crate::particles::HeartParticle;
use crate::traits::WorldAccess;

/// Downward acceleration for walking creatures
pub const GRAVITY: f32 = 0.3;
/// Downward acceleration for a fish stranded out of water
pub const FISH_GRAVITY: f32 = 0.2;
/// Cap on falling speed, kept below a tile so landings are never skipped
pub const MAX_FALL_SPEED: f32 = 8.0;

const HOP_VELOCITY: f32 = -4.0;
const LEAP_VELOCITY: f32 = -6.0;
const LEAP_SPEED: f32 = 3.0;
const WATER_DRAG_Y: f32 = 0.6;
const WATER_DRAG_X: f32 = 0.7;

/// Player distance (in tile widths) at which a bunny reacts
pub const HEART_RANGE_TILES: f32 = 4.0;
/// Ticks between bunny reactions
pub const DROP_COOLDOWN: i32 = 60;

const CLIMB_SPEED: f32 = 1.0;
const CLIMB_EXIT_VELOCITY: f32 = -2.0;

const FISH_SPEED_SCALE: f32 = 0.5;
const BUTTERFLY_SPEED_SCALE: f32 = 0.5;
const FIREFLY_SPEED_SCALE: f32 = 0.3;
const FIREFLY_PHASE_STEP: f32 = 0.1;

const WALKER_TIMER: (i32, i32) = (60, 180);
const FLYER_TIMER: (i32, i32) = (50, 150);

/// Read-only inputs shared by every creature during one tick
pub struct TickContext<'a, W: WorldAccess + ?Sized> {
    pub world: &'a W,
    pub habitat: &'a Habitat,
    /// Center of the player's bounding box in pixels
    pub player_center: Vec2,
}

/// Advance one creature by a single tick
pub fn update_creature<W, R>(
    creature: &mut Creature,
    ctx: &TickContext<'_, W>,
    rng: &mut R,
    hearts: &mut Vec<HeartParticle>,
) where
    W: WorldAccess + ?Sized,
    R: Rng + ?Sized,
{
    let body = &mut creature.body;
    match &mut creature.kind {
        CreatureKind::Bunny(state) => update_bunny(body, state, ctx, rng, hearts),
        CreatureKind::Bird(state) => {
            let limit = ctx.habitat.sky.limit(Species::Bird);
            flutter(body, &mut state.ai_timer, 1.0, limit, ctx.habitat, rng);
        }
        CreatureKind::Squirrel(state) => update_squirrel(body, state, ctx, rng),
        CreatureKind::Fish(state) => update_fish(body, state, ctx, rng),
        CreatureKind::Butterfly(state) => {
            let limit = ctx.habitat.sky.limit(Species::Butterfly);
            flutter(
                body,
                &mut state.ai_timer,
                BUTTERFLY_SPEED_SCALE,
                limit,
                ctx.habitat,
                rng,
            );
        }
        CreatureKind::Firefly(state) => {
            let limit = ctx.habitat.sky.limit(Species::Firefly);
            flutter(
                body,
                &mut state.ai_timer,
                FIREFLY_SPEED_SCALE,
                limit,
                ctx.habitat,
                rng,
            );
            state.phase += FIREFLY_PHASE_STEP;
        }
    }
}

fn next_timer<R: Rng + ?Sized>(rng: &mut R, range: (i32, i32)) -> i32 {
    rng.gen_range(range.0..range.1)
}

fn update_bunny<W, R>(
    body: &mut Body,
    state: &mut BunnyState,
    ctx: &TickContext<'_, W>,
    rng: &mut R,
    hearts: &mut Vec<HeartParticle>,
) where
    W: WorldAccess + ?Sized,
    R: Rng + ?Sized,
{
    let habitat = ctx.habitat;

    body.velocity.y = (body.velocity.y + GRAVITY).min(MAX_FALL_SPEED);

    let (cx, cy) = habitat.tile_at(body.center());
    let in_water = ctx.world.is_water_at(cx, cy);
    if in_water {
        body.velocity.y *= WATER_DRAG_Y;
        body.velocity.x *= WATER_DRAG_X;
    }

    body.position.x += body.velocity.x;
    resolve_horizontal(body, ctx.world, habitat);
    body.position.y += body.velocity.y;
    state.on_ground = settle_on_ground(body, ctx.world, habitat);

    state.ai_timer -= 1;
    if state.ai_timer <= 0 {
        let roll: f32 = rng.r#gen();
        if roll < 0.4 {
            if state.on_ground || in_water {
                body.velocity.y = HOP_VELOCITY;
                body.velocity.x =
                    body.facing.sign() * rng.gen_range(1.0f32..2.0) * habitat.speed_factor;
                state.on_ground = false;
            }
        } else if roll < 0.7 {
            body.facing = body.facing.flipped();
            body.velocity.x = 0.0;
        } else {
            body.velocity.x = 0.0;
        }
        state.ai_timer = next_timer(rng, WALKER_TIMER);
    }

    if state.drop_cooldown > 0 {
        state.drop_cooldown -= 1;
    }
    if state.drop_cooldown == 0 {
        let center = body.center();
        if center.distance(ctx.player_center) < HEART_RANGE_TILES * habitat.tile_size {
            hearts.push(HeartParticle::new(center));
            if state.on_ground {
                body.velocity.y = LEAP_VELOCITY;
                body.velocity.x = if ctx.player_center.x < center.x {
                    LEAP_SPEED
                } else {
                    -LEAP_SPEED
                };
                body.facing = body.facing.from_velocity(body.velocity.x);
                state.on_ground = false;
            }
            state.drop_cooldown = DROP_COOLDOWN;
            log::trace!("Bunny at {:?} noticed the player", center);
        }
    }
}

fn update_squirrel<W, R>(
    body: &mut Body,
    state: &mut SquirrelState,
    ctx: &TickContext<'_, W>,
    rng: &mut R,
) where
    W: WorldAccess + ?Sized,
    R: Rng + ?Sized,
{
    let habitat = ctx.habitat;

    if state.climbing {
        body.velocity = Vec2::ZERO;
        body.position.y -= CLIMB_SPEED;
        if body.position.y <= state.climb_target_y {
            body.position.y = state.climb_target_y;
            state.climbing = false;
            body.velocity.y = CLIMB_EXIT_VELOCITY;
        }
        return;
    }

    body.velocity.y = (body.velocity.y + GRAVITY).min(MAX_FALL_SPEED);
    body.position.x += body.velocity.x;
    resolve_horizontal(body, ctx.world, habitat);
    body.position.y += body.velocity.y;
    state.on_ground = settle_on_ground(body, ctx.world, habitat);

    state.ai_timer -= 1;
    if state.ai_timer <= 0 {
        let roll: f32 = rng.r#gen();
        if roll < 0.3 {
            body.velocity.x = body.facing.sign() * rng.gen_range(0.5f32..2.0) * habitat.speed_factor;
        } else if roll < 0.6 && trunk_ahead(body, ctx.world, habitat) {
            state.climbing = true;
            state.climb_target_y =
                body.position.y - rng.gen_range(2..=5) as f32 * habitat.tile_size;
            body.velocity.x = 0.0;
        } else {
            body.facing = body.facing.flipped();
            body.velocity.x = 0.0;
        }
        state.ai_timer = next_timer(rng, WALKER_TIMER);
    }
}

fn update_fish<W, R>(body: &mut Body, state: &mut FishState, ctx: &TickContext<'_, W>, rng: &mut R)
where
    W: WorldAccess + ?Sized,
    R: Rng + ?Sized,
{
    let habitat = ctx.habitat;
    let speed = FISH_SPEED_SCALE * habitat.speed_factor;

    state.ai_timer -= 1;
    if state.ai_timer <= 0 {
        body.velocity.x = rng.gen_range(-1.0f32..=1.0) * speed;
        body.velocity.y = rng.gen_range(-1.0f32..=1.0) * speed;
        state.ai_timer = next_timer(rng, FLYER_TIMER);
    }

    let (cx, cy) = habitat.tile_at(body.center());
    if ctx.world.is_water_at(cx, cy) {
        state.life = FishState::FULL_LIFE;
    } else {
        state.life -= 1;
        body.velocity.y += FISH_GRAVITY;
    }

    body.position += body.velocity;

    let (min, max) = habitat.pond.swim_rect(habitat.tile_size);
    body.position.x = body.position.x.clamp(min.x, (max.x - body.size.x).max(min.x));
    body.position.y = body.position.y.clamp(min.y, (max.y - body.size.y).max(min.y));
    body.facing = body.facing.from_velocity(body.velocity.x);
}

/// Random-walk flight shared by birds, butterflies and fireflies
fn flutter<R: Rng + ?Sized>(
    body: &mut Body,
    ai_timer: &mut i32,
    speed_scale: f32,
    band_limit: f32,
    habitat: &Habitat,
    rng: &mut R,
) {
    let speed = speed_scale * habitat.speed_factor;

    *ai_timer -= 1;
    if *ai_timer <= 0 {
        body.velocity.x = rng.gen_range(-1.0f32..=1.0) * speed;
        body.velocity.y = rng.gen_range(-1.0f32..=1.0) * speed;
        *ai_timer = next_timer(rng, FLYER_TIMER);
    }

    body.position += body.velocity;

    let width = habitat.world_width_px();
    if body.position.x < 0.0 {
        body.position.x += width;
    } else if body.position.x >= width {
        body.position.x -= width;
    }

    // Leaving the band on either side re-enters from the opposite edge
    if body.position.y < 0.0 {
        body.position.y = band_limit;
    } else if body.position.y > band_limit {
        body.position.y = 0.0;
    }

    body.facing = body.facing.from_velocity(body.velocity.x);
}

/// Snap a falling body onto the solid tiles under its feet; returns grounded
pub fn settle_on_ground<W: WorldAccess + ?Sized>(
    body: &mut Body,
    world: &W,
    habitat: &Habitat,
) -> bool {
    if body.velocity.y < 0.0 {
        return false;
    }

    let t = habitat.tile_size;
    let row = (body.bottom() / t).floor() as i32;
    let left = (body.position.x / t).floor() as i32;
    let right = ((body.right() - 0.01) / t).floor() as i32;

    if (left..=right).any(|x| world.is_solid_at(x, row)) {
        body.position.y = row as f32 * t - body.size.y;
        body.velocity.y = 0.0;
        true
    } else {
        false
    }
}

/// Push a walking body out of solid tiles on its leading edge and keep it
/// inside the world's horizontal extent
fn resolve_horizontal<W: WorldAccess + ?Sized>(body: &mut Body, world: &W, habitat: &Habitat) {
    let t = habitat.tile_size;
    let vx = body.velocity.x;

    if vx != 0.0 {
        let lead_col = if vx > 0.0 {
            ((body.right() - 0.01) / t).floor() as i32
        } else {
            (body.position.x / t).floor() as i32
        };
        let top = (body.position.y / t).floor() as i32;
        let bottom = ((body.bottom() - 0.01) / t).floor() as i32;

        if (top..=bottom).any(|y| world.is_solid_at(lead_col, y)) {
            body.position.x = if vx > 0.0 {
                lead_col as f32 * t - body.size.x
            } else {
                (lead_col + 1) as f32 * t
            };
            body.velocity.x = 0.0;
        }
    }

    let max_x = (habitat.world_width_px() - body.size.x).max(0.0);
    if body.position.x < 0.0 || body.position.x > max_x {
        body.position.x = body.position.x.clamp(0.0, max_x);
        body.velocity.x = 0.0;
    }
}

/// Whether a tree trunk stands directly ahead of the body's feet
fn trunk_ahead<W: WorldAccess + ?Sized>(body: &Body, world: &W, habitat: &Habitat) -> bool {
    let t = habitat.tile_size;
    let probe_x = if body.facing.sign() > 0.0 {
        body.right() + 1.0
    } else {
        body.position.x - 1.0
    };
    let col = (probe_x / t).floor() as i32;
    let feet_row = ((body.bottom() - 0.01) / t).floor() as i32;

    world
        .get_tile(col, feet_row)
        .is_some_and(|code| TreeSpecies::ALL.iter().any(|species| species.trunk() == code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::{BirdState, FireflyState};
    use crate::habitat::{FISH_SWIM_ROWS, PondBounds, SkyBands};
    use crate::types::Facing;
    use meadow_simulation::TileId;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    const W: i32 = 40;
    const H: i32 = 30;
    const GROUND: i32 = 25;

    struct TestGrid {
        tiles: Vec<u8>,
    }

    impl TestGrid {
        /// Flat ground at GROUND with a 3-deep pond in columns 10..15
        fn new() -> Self {
            let mut grid = Self {
                tiles: vec![TileId::EMPTY; (W * H) as usize],
            };
            for x in 0..W {
                grid.set(x, GROUND, TileId::GRASS);
                for y in GROUND + 1..H {
                    grid.set(x, y, TileId::DIRT);
                }
            }
            for x in 10..15 {
                for y in GROUND..GROUND + 3 {
                    grid.set(x, y, TileId::WATER);
                }
            }
            grid
        }

        fn set(&mut self, x: i32, y: i32, code: u8) {
            self.tiles[(y * W + x) as usize] = code;
        }
    }

    impl WorldAccess for TestGrid {
        fn get_tile(&self, x: i32, y: i32) -> Option<u8> {
            if x < 0 || y < 0 || x >= W || y >= H {
                return None;
            }
            Some(self.tiles[(y * W + x) as usize])
        }
    }

    fn habitat() -> Habitat {
        Habitat {
            tile_size: 20.0,
            world_width: W,
            ground_level_y: GROUND,
            pond: PondBounds {
                start_col: 10,
                end_col: 15,
                top_row: GROUND,
                depth: 3,
            },
            sky: SkyBands {
                viewport_height: 600.0,
                ..SkyBands::default()
            },
            speed_factor: 1.0,
        }
    }

    fn rng() -> Xoshiro256StarStar {
        Xoshiro256StarStar::seed_from_u64(7)
    }

    #[test]
    fn test_bunny_lands_on_ground() {
        let grid = TestGrid::new();
        let habitat = habitat();
        let far = Vec2::new(-10_000.0, 0.0);
        let ctx = TickContext {
            world: &grid,
            habitat: &habitat,
            player_center: far,
        };
        let mut bunny = Creature::new(Species::Bunny, Vec2::new(100.0, 300.0), 1000);
        let mut hearts = Vec::new();
        let mut rng = rng();

        for _ in 0..200 {
            update_creature(&mut bunny, &ctx, &mut rng, &mut hearts);
        }

        assert_eq!(bunny.body.bottom(), GROUND as f32 * 20.0);
        match &bunny.kind {
            CreatureKind::Bunny(state) => assert!(state.on_ground),
            _ => unreachable!(),
        }
        assert!(hearts.is_empty());
    }

    #[test]
    fn test_bunny_heart_once_per_cooldown() {
        let grid = TestGrid::new();
        let habitat = habitat();
        let mut bunny = Creature::new(Species::Bunny, Vec2::ZERO, 1000);
        let ground_y = GROUND as f32 * 20.0 - bunny.body.size.y;
        bunny.body.position = Vec2::new(300.0, ground_y);
        let center = bunny.body.center();
        // Three tile widths away
        let ctx = TickContext {
            world: &grid,
            habitat: &habitat,
            player_center: center + Vec2::new(60.0, 0.0),
        };
        let mut hearts = Vec::new();
        let mut rng = rng();

        update_creature(&mut bunny, &ctx, &mut rng, &mut hearts);
        assert_eq!(hearts.len(), 1);
        match &bunny.kind {
            CreatureKind::Bunny(state) => assert_eq!(state.drop_cooldown, DROP_COOLDOWN),
            _ => unreachable!(),
        }
        // Leapt away from the player, who is to the right
        assert!(bunny.body.velocity.x < 0.0);

        for _ in 0..DROP_COOLDOWN - 1 {
            update_creature(&mut bunny, &ctx, &mut rng, &mut hearts);
        }
        assert_eq!(hearts.len(), 1);

        // Back beside the player, the next heart comes exactly one cooldown later
        bunny.body.position = Vec2::new(300.0, ground_y);
        bunny.body.velocity = Vec2::ZERO;
        update_creature(&mut bunny, &ctx, &mut rng, &mut hearts);
        assert_eq!(hearts.len(), 2);
    }

    #[test]
    fn test_walker_in_world_narrower_than_body() {
        let grid = TestGrid::new();
        let habitat = Habitat {
            world_width: 0,
            ..habitat()
        };
        let ctx = TickContext {
            world: &grid,
            habitat: &habitat,
            player_center: Vec2::new(-10_000.0, 0.0),
        };
        let mut bunny = Creature::new(Species::Bunny, Vec2::new(5.0, 300.0), 1000);
        bunny.body.velocity.x = 2.0;
        let mut rng = rng();

        for _ in 0..10 {
            update_creature(&mut bunny, &ctx, &mut rng, &mut Vec::new());
        }
        assert_eq!(bunny.body.position.x, 0.0);
        assert_eq!(bunny.body.velocity.x, 0.0);
    }

    #[test]
    fn test_bunny_ignores_distant_player() {
        let grid = TestGrid::new();
        let habitat = habitat();
        let mut bunny = Creature::new(Species::Bunny, Vec2::new(300.0, 488.0), 1000);
        let ctx = TickContext {
            world: &grid,
            habitat: &habitat,
            player_center: bunny.body.center() + Vec2::new(81.0, 0.0),
        };
        let mut hearts = Vec::new();
        update_creature(&mut bunny, &ctx, &mut rng(), &mut hearts);
        assert!(hearts.is_empty());
    }

    #[test]
    fn test_bunny_water_damping() {
        let grid = TestGrid::new();
        let habitat = habitat();
        let ctx = TickContext {
            world: &grid,
            habitat: &habitat,
            player_center: Vec2::new(-10_000.0, 0.0),
        };
        // Centered in the pond's middle water row
        let mut bunny = Creature::new(Species::Bunny, Vec2::new(243.0, 514.0), 1000);
        bunny.body.velocity = Vec2::new(1.0, 1.0);
        update_creature(&mut bunny, &ctx, &mut rng(), &mut Vec::new());

        assert!((bunny.body.velocity.x - 0.7).abs() < 1e-5);
        assert!((bunny.body.velocity.y - (1.0 + GRAVITY) * 0.6).abs() < 1e-5);
    }

    #[test]
    fn test_bird_wraps_and_resets() {
        let grid = TestGrid::new();
        let habitat = habitat();
        let ctx = TickContext {
            world: &grid,
            habitat: &habitat,
            player_center: Vec2::ZERO,
        };
        let limit = habitat.sky.limit(Species::Bird);

        let mut bird = Creature::new(Species::Bird, Vec2::new(1.0, 100.0), 1000);
        bird.body.velocity = Vec2::new(-2.0, 0.0);
        update_creature(&mut bird, &ctx, &mut rng(), &mut Vec::new());
        assert!((bird.body.position.x - (habitat.world_width_px() - 1.0)).abs() < 1e-3);

        bird.body.position = Vec2::new(100.0, 1.0);
        bird.body.velocity = Vec2::new(0.0, -2.0);
        update_creature(&mut bird, &ctx, &mut rng(), &mut Vec::new());
        assert_eq!(bird.body.position.y, limit);

        bird.body.position = Vec2::new(100.0, limit - 0.5);
        bird.body.velocity = Vec2::new(0.0, 1.0);
        update_creature(&mut bird, &ctx, &mut rng(), &mut Vec::new());
        assert_eq!(bird.body.position.y, 0.0);
    }

    #[test]
    fn test_bird_timer_redraws_velocity() {
        let grid = TestGrid::new();
        let habitat = habitat();
        let ctx = TickContext {
            world: &grid,
            habitat: &habitat,
            player_center: Vec2::ZERO,
        };
        let mut bird = Creature {
            id: crate::EntityId::new(),
            body: Body::new(Vec2::new(200.0, 100.0), Species::Bird.size()),
            kind: CreatureKind::Bird(BirdState { ai_timer: 1 }),
        };
        update_creature(&mut bird, &ctx, &mut rng(), &mut Vec::new());
        assert!(bird.body.velocity.x.abs() <= 1.0);
        assert!(bird.body.velocity.y.abs() <= 1.0);
        match &bird.kind {
            CreatureKind::Bird(state) => assert!((50..150).contains(&state.ai_timer)),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_firefly_phase_advances() {
        let grid = TestGrid::new();
        let habitat = habitat();
        let ctx = TickContext {
            world: &grid,
            habitat: &habitat,
            player_center: Vec2::ZERO,
        };
        let mut firefly = Creature {
            id: crate::EntityId::new(),
            body: Body::new(Vec2::new(200.0, 100.0), Species::Firefly.size()),
            kind: CreatureKind::Firefly(FireflyState {
                ai_timer: 1,
                phase: 0.0,
            }),
        };
        let mut rng = rng();
        for _ in 0..10 {
            update_creature(&mut firefly, &ctx, &mut rng, &mut Vec::new());
            assert!(firefly.body.velocity.x.abs() <= FIREFLY_SPEED_SCALE + 1e-6);
        }
        match &firefly.kind {
            CreatureKind::Firefly(state) => assert!((state.phase - 1.0).abs() < 1e-4),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_squirrel_climbs_then_falls_back() {
        let mut grid = TestGrid::new();
        for y in GROUND - 5..GROUND {
            grid.set(20, y, TileId::BIRCH_WOOD);
        }
        let habitat = habitat();
        let ctx = TickContext {
            world: &grid,
            habitat: &habitat,
            player_center: Vec2::ZERO,
        };
        let ground_y = GROUND as f32 * 20.0 - Species::Squirrel.size().y;
        // Standing just left of the trunk, facing it
        let mut squirrel = Creature {
            id: crate::EntityId::new(),
            body: Body::new(Vec2::new(387.0, ground_y), Species::Squirrel.size()),
            kind: CreatureKind::Squirrel(SquirrelState {
                on_ground: true,
                ai_timer: 1000,
                climbing: false,
                climb_target_y: 0.0,
            }),
        };
        squirrel.body.facing = Facing::Right;
        assert!(trunk_ahead(&squirrel.body, &grid, &habitat));

        // Force a climb of two tiles
        if let CreatureKind::Squirrel(state) = &mut squirrel.kind {
            state.climbing = true;
            state.climb_target_y = ground_y - 40.0;
        }
        let mut rng = rng();
        for _ in 0..40 {
            update_creature(&mut squirrel, &ctx, &mut rng, &mut Vec::new());
        }
        assert_eq!(squirrel.body.position.y, ground_y - 40.0);
        match &squirrel.kind {
            CreatureKind::Squirrel(state) => assert!(!state.climbing),
            _ => unreachable!(),
        }
        assert_eq!(squirrel.body.velocity.y, CLIMB_EXIT_VELOCITY);

        for _ in 0..120 {
            update_creature(&mut squirrel, &ctx, &mut rng, &mut Vec::new());
            if let CreatureKind::Squirrel(state) = &mut squirrel.kind {
                state.ai_timer = 1000;
            }
        }
        assert_eq!(squirrel.body.bottom(), GROUND as f32 * 20.0);
    }

    #[test]
    fn test_fish_stays_in_pond() {
        let grid = TestGrid::new();
        let habitat = habitat();
        let ctx = TickContext {
            world: &grid,
            habitat: &habitat,
            player_center: Vec2::ZERO,
        };
        let mut fish = Creature::new(Species::Fish, Vec2::new(250.0, 510.0), 1);
        let (min, max) = habitat.pond.swim_rect(habitat.tile_size);
        let mut rng = rng();

        for _ in 0..2000 {
            update_creature(&mut fish, &ctx, &mut rng, &mut Vec::new());
            let body = &fish.body;
            assert!(body.position.x >= min.x && body.right() <= max.x);
            assert!(body.position.y >= min.y && body.bottom() <= max.y);
            if fish.is_expired() {
                break;
            }
        }
    }

    #[test]
    fn test_fish_reaches_bottom_of_swim_band() {
        let grid = TestGrid::new();
        let habitat = habitat();
        let ctx = TickContext {
            world: &grid,
            habitat: &habitat,
            player_center: Vec2::ZERO,
        };
        let mut fish = Creature::new(Species::Fish, Vec2::new(250.0, 540.0), 1000);
        fish.body.velocity = Vec2::new(0.0, 60.0);
        update_creature(&mut fish, &ctx, &mut rng(), &mut Vec::new());

        let band_bottom = (GROUND + FISH_SWIM_ROWS) as f32 * 20.0;
        assert_eq!(fish.body.bottom(), band_bottom);
        let (_, row) = habitat.tile_at(fish.body.center());
        assert_eq!(row, GROUND + 3);
    }

    #[test]
    fn test_fish_suffocates_without_water() {
        let mut grid = TestGrid::new();
        for x in 10..15 {
            for y in GROUND..GROUND + 3 {
                grid.set(x, y, TileId::EMPTY);
            }
        }
        let habitat = habitat();
        let ctx = TickContext {
            world: &grid,
            habitat: &habitat,
            player_center: Vec2::ZERO,
        };
        let mut fish = Creature::new(Species::Fish, Vec2::new(250.0, 510.0), 1000);
        let mut rng = rng();

        for _ in 0..FishState::FULL_LIFE - 1 {
            update_creature(&mut fish, &ctx, &mut rng, &mut Vec::new());
        }
        assert!(!fish.is_expired());
        update_creature(&mut fish, &ctx, &mut rng, &mut Vec::new());
        assert!(fish.is_expired());
    }
}
