use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::inventory::Inventory;
use super::{EntityId, Facing};

/// The player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: EntityId,
    /// Top-left corner in pixels
    pub position: Vec2,
    /// Pixels per tick
    pub velocity: Vec2,
    pub size: Vec2,
    pub facing: Facing,
    pub grounded: bool, // Is player standing on ground?
    pub walking: bool,
    /// Walk animation frame, toggles between 0 and 1
    pub walk_frame: u8,
    /// Ticks since the last walk frame change
    pub walk_timer: u32,
    pub inventory: Inventory,
}

impl Player {
    /// Create a new player at the specified position
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Player {
            id: EntityId::new(),
            position,
            velocity: Vec2::ZERO,
            size,
            facing: Facing::Right,
            grounded: false, // Start in air
            walking: false,
            walk_frame: 0,
            walk_timer: 0,
            inventory: Inventory::starting(),
        }
    }

    /// Spawn point centered horizontally, feet on the ground row
    pub fn spawn_position(world_width_px: f32, ground_top_px: f32, size: Vec2) -> Vec2 {
        Vec2::new((world_width_px - size.x) * 0.5, ground_top_px - size.y)
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    /// Tile containing the player's center
    pub fn center_tile(&self, tile_size: f32) -> (i32, i32) {
        let center = self.center();
        (
            (center.x / tile_size).floor() as i32,
            (center.y / tile_size).floor() as i32,
        )
    }

    /// Place the player at `position` at rest
    pub fn teleport(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::ZERO;
        self.grounded = false;
    }
}
