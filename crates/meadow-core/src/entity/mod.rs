pub mod input;
pub mod inventory;
pub mod player;
pub mod tools;

pub use input::{Click, InputState};
pub use inventory::{Inventory, ItemKind, ItemSlot, Placement};
pub use player::Player;
pub use tools::{ToolAction, ToolType};

// Player and creatures draw ids from one counter
pub use meadow_creature::{EntityId, Facing};
