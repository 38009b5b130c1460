//! Inventory - ordered item slots with one selection

use meadow_simulation::{FlowerKind, TileId, TreeSpecies};
use serde::{Deserialize, Serialize};

use super::tools::ToolType;

/// Kind of item a slot holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Tool(ToolType),
    Dirt,
    Stone,
    Wood(TreeSpecies),
    Cactus,
    Flower(FlowerKind),
    Sapling,
}

/// What placing an item writes into the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// A single tile onto an empty target
    Block(u8),
    /// Stem on the target, petal above it; needs grass below
    Flower(FlowerKind),
    /// Sapling on the target; needs grass below, grows later
    Sapling,
}

impl ItemKind {
    pub fn is_tool(self) -> bool {
        matches!(self, ItemKind::Tool(_))
    }

    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Tool(tool) => tool.name(),
            ItemKind::Dirt => "Dirt",
            ItemKind::Stone => "Stone",
            ItemKind::Wood(TreeSpecies::Oak) => "Oak Wood",
            ItemKind::Wood(TreeSpecies::Birch) => "Birch Wood",
            ItemKind::Wood(TreeSpecies::Cherry) => "Cherry Wood",
            ItemKind::Cactus => "Cactus",
            ItemKind::Flower(FlowerKind::Tulip) => "Tulip",
            ItemKind::Flower(FlowerKind::Lily) => "Lily",
            ItemKind::Flower(FlowerKind::Rose) => "Rose",
            ItemKind::Sapling => "Sapling",
        }
    }

    /// How this item is placed, `None` for tools
    pub fn placement(self) -> Option<Placement> {
        match self {
            ItemKind::Tool(_) => None,
            ItemKind::Dirt => Some(Placement::Block(TileId::DIRT)),
            ItemKind::Stone => Some(Placement::Block(TileId::STONE)),
            ItemKind::Wood(species) => Some(Placement::Block(species.trunk())),
            ItemKind::Cactus => Some(Placement::Block(TileId::CACTUS)),
            ItemKind::Flower(kind) => Some(Placement::Flower(kind)),
            ItemKind::Sapling => Some(Placement::Sapling),
        }
    }
}

/// One inventory slot; tools carry no amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSlot {
    pub kind: ItemKind,
    pub amount: Option<u32>,
}

impl ItemSlot {
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            amount: (!kind.is_tool()).then_some(0),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// Ordered slots, exactly one selected
///
/// Amounts only ever grow: harvesting adds, placing does not consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    slots: Vec<ItemSlot>,
    selected: usize,
}

impl Inventory {
    /// Slots in the given order, first one selected
    pub fn with_items(kinds: &[ItemKind]) -> Self {
        Self {
            slots: kinds.iter().copied().map(ItemSlot::new).collect(),
            selected: 0,
        }
    }

    /// The default starting layout
    pub fn starting() -> Self {
        Self::with_items(&[
            ItemKind::Tool(ToolType::Axe),
            ItemKind::Tool(ToolType::Pickaxe),
            ItemKind::Dirt,
            ItemKind::Stone,
            ItemKind::Wood(TreeSpecies::Oak),
            ItemKind::Wood(TreeSpecies::Birch),
            ItemKind::Wood(TreeSpecies::Cherry),
            ItemKind::Cactus,
            ItemKind::Flower(FlowerKind::Tulip),
            ItemKind::Flower(FlowerKind::Lily),
            ItemKind::Flower(FlowerKind::Rose),
            ItemKind::Sapling,
        ])
    }

    pub fn slots(&self) -> &[ItemSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The selected slot, `None` only for an inventory without slots
    pub fn selected(&self) -> Option<&ItemSlot> {
        self.slots.get(self.selected)
    }

    /// Select slot `index`; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.slots.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// Select the first slot holding `kind`
    pub fn select_kind(&mut self, kind: ItemKind) -> bool {
        match self.position(kind) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    pub fn select_next(&mut self) {
        if !self.slots.is_empty() {
            self.selected = (self.selected + 1) % self.slots.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.slots.is_empty() {
            self.selected = if self.selected == 0 {
                self.slots.len() - 1
            } else {
                self.selected - 1
            };
        }
    }

    fn position(&self, kind: ItemKind) -> Option<usize> {
        self.slots.iter().position(|slot| slot.kind == kind)
    }

    /// Amount held of `kind`; `None` for tools and missing kinds
    pub fn amount_of(&self, kind: ItemKind) -> Option<u32> {
        self.position(kind).and_then(|i| self.slots[i].amount)
    }

    /// Add to the slot holding `kind`; false if there is no countable slot
    pub fn add(&mut self, kind: ItemKind, count: u32) -> bool {
        let Some(index) = self.position(kind) else {
            return false;
        };
        match &mut self.slots[index].amount {
            Some(amount) => {
                *amount = amount.saturating_add(count);
                true
            }
            None => false,
        }
    }

    /// Countable amounts in slot order, for persistence
    pub fn amounts(&self) -> Vec<(ItemKind, u32)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.amount.map(|amount| (slot.kind, amount)))
            .collect()
    }

    /// Overwrite amounts from a saved list; unknown kinds are skipped
    pub fn restore_amounts(&mut self, amounts: &[(ItemKind, u32)]) {
        for &(kind, amount) in amounts {
            let Some(index) = self.position(kind) else {
                continue;
            };
            if let Some(slot_amount) = &mut self.slots[index].amount {
                *slot_amount = amount;
            }
        }
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::starting()
    }
}
