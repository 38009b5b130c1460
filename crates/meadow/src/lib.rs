//! # Meadow - 2D tile sandbox
//!
//! Headless host: layered configuration and scripted runs on top of
//! `meadow-core`.

pub mod config;
pub mod session;

// Re-export core modules for convenience
pub use meadow_core::creature;
pub use meadow_core::entity;
pub use meadow_core::simulation;
pub use meadow_core::world;

pub use session::{InputScript, Session, SessionStats, Walk};

/// Common imports for internal use
pub mod prelude {
    pub use glam::Vec2;
    pub use meadow_core::world::{World, WorldGenConfig, WorldSnapshot};
    pub use meadow_core::{TileId, Tiles};
}
