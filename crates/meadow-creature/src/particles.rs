//! Heart particles emitted when a bunny notices the player

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A short-lived floating heart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartParticle {
    pub position: Vec2,
    /// Remaining lifetime in ticks
    pub life: u32,
    /// Vertical velocity in pixels per tick (negative floats upward)
    pub fall_velocity: f32,
}

impl HeartParticle {
    pub const LIFETIME: u32 = 60;
    const INITIAL_VELOCITY: f32 = -1.0;
    const GRAVITY: f32 = 0.02;

    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            life: Self::LIFETIME,
            fall_velocity: Self::INITIAL_VELOCITY,
        }
    }

    /// Advance one tick; returns false once the particle has expired
    pub fn update(&mut self) -> bool {
        self.position.y += self.fall_velocity;
        self.fall_velocity += Self::GRAVITY;
        self.life = self.life.saturating_sub(1);
        self.life > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heart_rises_then_expires() {
        let mut heart = HeartParticle::new(Vec2::new(10.0, 100.0));
        assert!(heart.update());
        assert!(heart.position.y < 100.0);

        let mut ticks = 1;
        while heart.update() {
            ticks += 1;
        }
        assert_eq!(ticks + 1, HeartParticle::LIFETIME);
        assert_eq!(heart.life, 0);
    }
}
