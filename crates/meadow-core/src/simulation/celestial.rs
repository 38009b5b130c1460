//! Celestial cycle - sun/moon angle and sky light

use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

/// Sun/moon angle in radians, advanced once per tick
///
/// Angle 0 is midnight and π is noon; a fresh cycle starts at noon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CelestialCycle {
    angle: f32,
    day_length_ticks: u32,
}

impl CelestialCycle {
    pub fn new(day_length_ticks: u32) -> Self {
        Self {
            angle: PI,
            day_length_ticks: day_length_ticks.max(1),
        }
    }

    /// Advance by one tick, wrapping after a full revolution
    pub fn tick(&mut self) {
        let step = TAU / self.day_length_ticks as f32;
        self.angle = (self.angle + step).rem_euclid(TAU);
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Restore a saved angle; any value is wrapped into `[0, 2π)`
    pub fn set_angle(&mut self, angle: f32) {
        self.angle = if angle.is_finite() {
            angle.rem_euclid(TAU)
        } else {
            PI
        };
    }

    pub fn day_length_ticks(&self) -> u32 {
        self.day_length_ticks
    }

    /// Sky light level (0-15): 0 at midnight, 15 at noon
    pub fn sky_light(&self) -> u8 {
        // -1 at midnight, 1 at noon
        let cosine = -self.angle.cos();
        let normalized = (cosine + 1.0) / 2.0;
        (normalized * 15.0).round() as u8
    }

    /// Whether the sun is below the horizon
    pub fn is_night(&self) -> bool {
        self.angle.cos() > 0.0
    }
}

impl Default for CelestialCycle {
    fn default() -> Self {
        Self::new(72_000)
    }
}
