//! Creature entity - shared body header plus a per-species payload

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Facing};

/// Species tag, fixed for the lifetime of a creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Bunny,
    Bird,
    Squirrel,
    Fish,
    Butterfly,
    Firefly,
}

impl Species {
    pub const ALL: [Species; 6] = [
        Species::Bunny,
        Species::Bird,
        Species::Squirrel,
        Species::Fish,
        Species::Butterfly,
        Species::Firefly,
    ];

    /// Body size in pixels
    pub fn size(self) -> Vec2 {
        match self {
            Species::Bunny => Vec2::new(14.0, 12.0),
            Species::Bird => Vec2::new(12.0, 8.0),
            Species::Squirrel => Vec2::new(12.0, 12.0),
            Species::Fish => Vec2::new(12.0, 6.0),
            Species::Butterfly => Vec2::new(8.0, 8.0),
            Species::Firefly => Vec2::new(4.0, 4.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Species::Bunny => "bunny",
            Species::Bird => "bird",
            Species::Squirrel => "squirrel",
            Species::Fish => "fish",
            Species::Butterfly => "butterfly",
            Species::Firefly => "firefly",
        }
    }
}

/// Fields every creature carries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner in pixels
    pub position: Vec2,
    /// Pixels per tick
    pub velocity: Vec2,
    pub size: Vec2,
    pub facing: Facing,
}

impl Body {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size,
            facing: Facing::Right,
        }
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
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BunnyState {
    pub on_ground: bool,
    /// Ticks until the next random decision
    pub ai_timer: i32,
    /// Ticks until the bunny may react to the player again
    pub drop_cooldown: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirdState {
    pub ai_timer: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquirrelState {
    pub on_ground: bool,
    pub ai_timer: i32,
    pub climbing: bool,
    /// Pixel y the climb stops at
    pub climb_target_y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishState {
    pub ai_timer: i32,
    /// Ticks of survival left out of water
    pub life: i32,
}

impl FishState {
    pub const FULL_LIFE: i32 = 100;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButterflyState {
    pub ai_timer: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireflyState {
    pub ai_timer: i32,
    /// Flicker phase accumulator, used for the glow pulse
    pub phase: f32,
}

/// Per-species payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CreatureKind {
    Bunny(BunnyState),
    Bird(BirdState),
    Squirrel(SquirrelState),
    Fish(FishState),
    Butterfly(ButterflyState),
    Firefly(FireflyState),
}

impl CreatureKind {
    pub fn species(&self) -> Species {
        match self {
            CreatureKind::Bunny(_) => Species::Bunny,
            CreatureKind::Bird(_) => Species::Bird,
            CreatureKind::Squirrel(_) => Species::Squirrel,
            CreatureKind::Fish(_) => Species::Fish,
            CreatureKind::Butterfly(_) => Species::Butterfly,
            CreatureKind::Firefly(_) => Species::Firefly,
        }
    }

    /// Fresh payload for a species with the given first decision delay
    pub fn for_species(species: Species, ai_timer: i32) -> Self {
        match species {
            Species::Bunny => CreatureKind::Bunny(BunnyState {
                on_ground: false,
                ai_timer,
                drop_cooldown: 0,
            }),
            Species::Bird => CreatureKind::Bird(BirdState { ai_timer }),
            Species::Squirrel => CreatureKind::Squirrel(SquirrelState {
                on_ground: false,
                ai_timer,
                climbing: false,
                climb_target_y: 0.0,
            }),
            Species::Fish => CreatureKind::Fish(FishState {
                ai_timer,
                life: FishState::FULL_LIFE,
            }),
            Species::Butterfly => CreatureKind::Butterfly(ButterflyState { ai_timer }),
            Species::Firefly => CreatureKind::Firefly(FireflyState {
                ai_timer,
                phase: 0.0,
            }),
        }
    }
}

/// A single autonomous creature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: EntityId,
    pub body: Body,
    pub kind: CreatureKind,
}

impl Creature {
    pub fn new(species: Species, position: Vec2, ai_timer: i32) -> Self {
        Self {
            id: EntityId::new(),
            body: Body::new(position, species.size()),
            kind: CreatureKind::for_species(species, ai_timer),
        }
    }

    pub fn species(&self) -> Species {
        self.kind.species()
    }

    /// Whether a fish has run out of life; always false for other species
    pub fn is_expired(&self) -> bool {
        matches!(&self.kind, CreatureKind::Fish(fish) if fish.life <= 0)
    }
}
