//! Presentation data and classification scalars
//!
//! These are read by rendering, AI and combat code outside the catalog;
//! the catalog only stores and hands them out.

use crate::error::Violation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display colour of a glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Colour {
    Black,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Brown,
    #[default]
    LightGrey,
    DarkGrey,
    LightBlue,
    LightGreen,
    LightCyan,
    LightRed,
    LightMagenta,
    Yellow,
    White,
    /// Picked at random when the monster is created
    Undef,
    /// Cycling element colours
    Jewel,
    Tree,
    Fire,
    Ice,
    Shimmer,
}

/// Name of a tile in the tile set
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileRef(pub String);

impl TileRef {
    /// Tile used when a monster leaves no corpse
    pub const NO_CORPSE: &'static str = "error";

    /// Tile of the program-bug sentinel
    pub const PROGRAM_BUG: &'static str = "mons_program_bug";

    /// Create a new tile reference
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the tile name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TileRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// How a monster's tile varies between instances or over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TileVariation {
    #[default]
    None,
    /// Picked per instance
    Mod,
    /// Cycles every turn
    Cycle,
    /// Random every turn
    Random,
    /// Changes when standing in water
    Water,
}

/// Spell set a monster casts from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpellSetId(pub String);

impl SpellSetId {
    /// The "casts nothing" spell set
    pub const NONE: &'static str = "no_spells";

    /// Create a new spell set ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the empty spell set
    pub fn is_none(&self) -> bool {
        self.0 == Self::NONE
    }
}

impl Default for SpellSetId {
    fn default() -> Self {
        Self::new(Self::NONE)
    }
}

/// Noise made on noticing a foe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Shout {
    #[default]
    Silent,
    Shout,
    Bark,
    Howl,
    Growl,
    Hiss,
    Roar,
    LoudRoar,
    Screech,
    Buzz,
    Moan,
    Whine,
    Croak,
    Bellow,
    Trumpet,
}

/// How smart a monster is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Intelligence {
    #[default]
    Brainless,
    Animal,
    Human,
}

/// Terrain a monster can live in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Habitat {
    #[default]
    Land,
    Amphibious,
    Water,
    Lava,
    AmphibiousLava,
}

/// What items a monster can handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum ItemUse {
    #[default]
    Nothing,
    OpenDoors,
    StartingEquipment,
    WeaponsArmour,
}

/// Body size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum BodySize {
    Tiny,
    Little,
    Small,
    #[default]
    Medium,
    Large,
    Giant,
}

/// Body plan, used for armour fitting and descriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BodyShape {
    Humanoid,
    HumanoidWinged,
    HumanoidTailed,
    Centaur,
    Naga,
    Quadruped,
    QuadrupedTailless,
    QuadrupedWinged,
    Bat,
    Bird,
    Snake,
    Fish,
    Insect,
    InsectWinged,
    Arachnid,
    Snail,
    Plant,
    Fungus,
    Orb,
    Blob,
    #[default]
    Misc,
}

/// Willpower as written in content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Willpower {
    /// A flat value
    Fixed(i32),
    /// Scales with hit dice: `n * hd * 4 / 3`
    PerHitDie(i32),
    /// Immune to everything that checks willpower
    Invulnerable,
}

impl Willpower {
    /// Value reported for invulnerable willpower
    pub const INVULNERABLE_VALUE: i32 = 5000;

    /// Effective willpower for a monster with `hit_dice`, saturating on overflow
    pub fn value(&self, hit_dice: u8) -> i32 {
        match *self {
            Willpower::Fixed(n) => n,
            Willpower::PerHitDie(n) => {
                n.saturating_mul(i32::from(hit_dice)).saturating_mul(4) / 3
            }
            Willpower::Invulnerable => Self::INVULNERABLE_VALUE,
        }
    }

    /// Check that the effective value lies in `0..=INVULNERABLE_VALUE`
    pub fn check(&self, hit_dice: u8) -> Result<(), Violation> {
        let value = self.value(hit_dice);
        if (0..=Self::INVULNERABLE_VALUE).contains(&value) {
            Ok(())
        } else {
            Err(Violation::WillpowerOutOfRange {
                value,
                max: Self::INVULNERABLE_VALUE,
            })
        }
    }
}

impl Default for Willpower {
    fn default() -> Self {
        Willpower::Fixed(0)
    }
}
