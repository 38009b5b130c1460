//! Player input state

use glam::Vec2;

/// Held movement keys, sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    /// Up/space
    pub jump: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// -1, 0 or 1; opposing keys cancel out
    pub fn horizontal(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// A discrete click on the world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Click {
    /// Target in world pixels
    pub target: Vec2,
    /// Inventory slot active for this click
    pub slot: usize,
}
