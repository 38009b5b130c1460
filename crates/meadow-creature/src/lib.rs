//! Ambient wildlife for Meadow
//!
//! This crate implements:
//! - Six creature species as a tagged enum with a shared body header
//! - Timer-driven per-species behavior and simple tile physics
//! - The creature registry (spawning, ticking, fish expiry)
//! - Heart particles emitted by friendly bunnies
//! - The world access trait creatures read the tile grid through

#![allow(clippy::module_inception)]

pub mod behavior;
pub mod creature;
pub mod habitat;
pub mod particles;
pub mod spawning;
pub mod traits;
pub mod types;

pub use creature::{Body, Creature, CreatureKind, Species};
pub use habitat::{FISH_SWIM_ROWS, Habitat, PondBounds, SkyBands};
pub use particles::HeartParticle;
pub use spawning::{CreatureManager, RosterCounts, UpdateSummary};
pub use traits::WorldAccess;
pub use types::{EntityId, Facing};
