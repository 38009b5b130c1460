//! Simulation systems - delayed growth and the day/night cycle

pub mod celestial;
pub mod growth;

pub use celestial::CelestialCycle;
pub use growth::{GrowthEvent, GrowthOutcome, GrowthScheduler};
