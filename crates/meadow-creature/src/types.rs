//! Common types for creatures

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Id shared by the player and every creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(u64);

static ID_COUNTER: AtomicU64 = AtomicU64::new(1);

impl EntityId {
    pub fn new() -> Self {
        Self(ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(&self) -> u64 {
        self.0
    }

    /// Reuse a stored id; later `new` calls never hand it out again
    pub fn from_raw(raw: u64) -> Self {
        ID_COUNTER.fetch_max(raw.saturating_add(1), Ordering::Relaxed);
        Self(raw)
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Horizontal facing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1.0 for left, 1.0 for right
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    /// Facing implied by a horizontal velocity, keeping `self` when stationary
    pub fn from_velocity(self, vx: f32) -> Self {
        if vx > 0.0 {
            Facing::Right
        } else if vx < 0.0 {
            Facing::Left
        } else {
            self
        }
    }
}
