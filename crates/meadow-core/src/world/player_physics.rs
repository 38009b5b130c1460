//! Player physics system - movement, gravity, jumping, collision

use crate::entity::input::InputState;
use crate::entity::player::Player;
use crate::entity::Facing;

use super::worldgen_config::PhysicsConfig;

/// Shrinks the box's far edges so a box flush against a tile edge
/// doesn't count as overlapping the next tile
const EDGE_EPSILON: f32 = 0.001;

/// Player physics system - handles movement, jumping, gravity, collision
pub struct PlayerPhysicsSystem;

impl PlayerPhysicsSystem {
    /// Update player physics for one tick
    ///
    /// Collision is resolved per axis: horizontal against the position after
    /// applying vx, then vertical against the position after applying vy.
    ///
    /// # Arguments
    /// * `player` - Mutable reference to player state
    /// * `input` - Held keys this tick
    /// * `physics` - Speed, gravity and jump constants
    /// * `tile_size` - Tile edge length in pixels
    /// * `world_width_px` - Hard horizontal limit
    /// * `is_solid` - Callback: does tile (x, y) block movement
    pub fn update<F>(
        player: &mut Player,
        input: &InputState,
        physics: &PhysicsConfig,
        tile_size: f32,
        world_width_px: f32,
        is_solid: F,
    ) where
        F: Fn(i32, i32) -> bool,
    {
        // 1. Horizontal intent and walk animation
        let direction = input.horizontal();
        player.velocity.x = direction * physics.player_speed;
        player.walking = direction != 0.0;

        if player.walking {
            player.facing = if direction < 0.0 {
                Facing::Left
            } else {
                Facing::Right
            };
            player.walk_timer += 1;
            if player.walk_timer >= physics.walk_frame_ticks.max(1) {
                player.walk_timer = 0;
                player.walk_frame ^= 1;
            }
        } else {
            player.walk_timer = 0;
            player.walk_frame = 0;
        }

        // 2. Jump only from the ground
        if input.jump && player.grounded {
            player.velocity.y = -physics.jump_force;
            player.grounded = false;
            log::debug!("Player jumped!");
        }

        // 3. Gravity always applies
        player.velocity.y += physics.gravity;

        // 4. Horizontal pass
        player.position.x += player.velocity.x;
        Self::resolve_horizontal(player, tile_size, &is_solid);

        // 5. Vertical pass
        player.grounded = false;
        player.position.y += player.velocity.y;
        Self::resolve_vertical(player, tile_size, &is_solid);

        // 6. Hard world edges; no vertical clamp
        let max_x = (world_width_px - player.size.x).max(0.0);
        player.position.x = player.position.x.clamp(0.0, max_x);

        log::trace!(
            "Player at {:?} (vel: {:?}, grounded: {})",
            player.position,
            player.velocity,
            player.grounded
        );
    }

    /// Tile index span `[first, last]` covered by `start..start + len`
    fn span(start: f32, len: f32, tile_size: f32) -> (i32, i32) {
        (
            (start / tile_size).floor() as i32,
            ((start + len - EDGE_EPSILON) / tile_size).floor() as i32,
        )
    }

    fn resolve_horizontal<F>(player: &mut Player, tile_size: f32, is_solid: &F)
    where
        F: Fn(i32, i32) -> bool,
    {
        let vx = player.velocity.x;
        if vx == 0.0 {
            return;
        }

        let (x0, x1) = Self::span(player.position.x, player.size.x, tile_size);
        let (y0, y1) = Self::span(player.position.y, player.size.y, tile_size);
        let blocked = |x: i32| (y0..=y1).any(|y| is_solid(x, y));

        if vx > 0.0 {
            if let Some(col) = (x0..=x1).find(|&x| blocked(x)) {
                player.position.x = col as f32 * tile_size - player.size.x;
                player.velocity.x = 0.0;
            }
        } else if let Some(col) = (x0..=x1).rev().find(|&x| blocked(x)) {
            player.position.x = (col + 1) as f32 * tile_size;
            player.velocity.x = 0.0;
        }
    }

    fn resolve_vertical<F>(player: &mut Player, tile_size: f32, is_solid: &F)
    where
        F: Fn(i32, i32) -> bool,
    {
        let vy = player.velocity.y;
        if vy == 0.0 {
            return;
        }

        let (x0, x1) = Self::span(player.position.x, player.size.x, tile_size);
        let (y0, y1) = Self::span(player.position.y, player.size.y, tile_size);
        let blocked = |y: i32| (x0..=x1).any(|x| is_solid(x, y));

        if vy > 0.0 {
            if let Some(row) = (y0..=y1).find(|&y| blocked(y)) {
                player.position.y = row as f32 * tile_size - player.size.y;
                player.velocity.y = 0.0;
                player.grounded = true;
            }
        } else if let Some(row) = (y0..=y1).rev().find(|&y| blocked(y)) {
            player.position.y = (row + 1) as f32 * tile_size;
            player.velocity.y = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const T: f32 = 20.0;
    const FLOOR: i32 = 10;

    /// Solid floor on row FLOOR, plus a wall column at x = 8 above it
    fn floor_with_wall(x: i32, y: i32) -> bool {
        y == FLOOR || (x == 8 && y < FLOOR && y >= FLOOR - 3)
    }

    fn floor_only(_x: i32, y: i32) -> bool {
        y == FLOOR
    }

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(Vec2::new(x, y), Vec2::new(14.0, 36.0))
    }

    fn step(player: &mut Player, input: InputState, solid: fn(i32, i32) -> bool) {
        PlayerPhysicsSystem::update(
            player,
            &input,
            &PhysicsConfig::default(),
            T,
            1000.0,
            solid,
        );
    }

    #[test]
    fn test_falls_and_lands_on_tile_top() {
        let mut player = player_at(50.0, 20.0);
        for _ in 0..120 {
            step(&mut player, InputState::default(), floor_only);
        }
        assert_eq!(player.bottom(), FLOOR as f32 * T);
        assert_eq!(player.velocity.y, 0.0);
        assert!(player.grounded);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let jump = InputState {
            jump: true,
            ..InputState::default()
        };

        let mut airborne = player_at(50.0, 20.0);
        step(&mut airborne, jump, floor_only);
        assert!(airborne.velocity.y > 0.0);

        let mut grounded = player_at(50.0, FLOOR as f32 * T - 36.0);
        step(&mut grounded, InputState::default(), floor_only);
        assert!(grounded.grounded);
        step(&mut grounded, jump, floor_only);
        let config = PhysicsConfig::default();
        assert_eq!(grounded.velocity.y, -config.jump_force + config.gravity);
        assert!(!grounded.grounded);
    }

    #[test]
    fn test_wall_stops_horizontal_motion() {
        let right = InputState {
            right: true,
            ..InputState::default()
        };
        let mut player = player_at(100.0, FLOOR as f32 * T - 36.0);
        for _ in 0..60 {
            step(&mut player, right, floor_with_wall);
        }
        assert_eq!(player.right(), 8.0 * T);
        assert!(player.grounded);
        assert_eq!(player.facing, Facing::Right);
    }

    #[test]
    fn test_ceiling_stops_rise() {
        fn ceiling(_x: i32, y: i32) -> bool {
            y == 2 || y == FLOOR
        }
        let mut player = player_at(50.0, 62.0);
        player.velocity.y = -10.0;
        // Rising from y=62 runs into the ceiling row's bottom edge at y=60
        PlayerPhysicsSystem::update(
            &mut player,
            &InputState::default(),
            &PhysicsConfig {
                gravity: 0.0,
                ..PhysicsConfig::default()
            },
            T,
            1000.0,
            ceiling,
        );
        assert_eq!(player.position.y, 60.0);
        assert_eq!(player.velocity.y, 0.0);
        assert!(!player.grounded);
    }

    #[test]
    fn test_world_edges_clamp() {
        let left = InputState {
            left: true,
            ..InputState::default()
        };
        let mut player = player_at(2.0, FLOOR as f32 * T - 36.0);
        step(&mut player, left, floor_only);
        assert_eq!(player.position.x, 0.0);
        assert_eq!(player.facing, Facing::Left);

        let right = InputState {
            right: true,
            ..InputState::default()
        };
        let mut player = player_at(984.0, FLOOR as f32 * T - 36.0);
        step(&mut player, right, floor_only);
        assert_eq!(player.position.x, 1000.0 - 14.0);
    }

    #[test]
    fn test_walk_frame_toggles_every_eight_ticks() {
        let right = InputState {
            right: true,
            ..InputState::default()
        };
        let mut player = player_at(100.0, FLOOR as f32 * T - 36.0);
        for _ in 0..7 {
            step(&mut player, right, floor_only);
        }
        assert_eq!(player.walk_frame, 0);
        step(&mut player, right, floor_only);
        assert_eq!(player.walk_frame, 1);
        for _ in 0..8 {
            step(&mut player, right, floor_only);
        }
        assert_eq!(player.walk_frame, 0);

        step(&mut player, InputState::default(), floor_only);
        assert!(!player.walking);
        assert_eq!(player.walk_timer, 0);
    }

    #[test]
    fn test_no_vertical_clamp() {
        let mut player = player_at(50.0, 20.0);
        for _ in 0..200 {
            step(&mut player, InputState::default(), |_, _| false);
        }
        assert!(player.position.y > 1000.0);
    }
}
