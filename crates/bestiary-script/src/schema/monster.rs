//! Monster definition schema
//!
//! Entries name their genus and species symbolically; the catalog resolves
//! those names to ids once the identifier space is known.

use bestiary_core::{
    AttackSlot, BodyShape, BodySize, Colour, EnergyPattern, Habitat, Holiness, Intelligence,
    ItemUse, MonsterFlags, ResistKind, Shout, SpellSetId, TileRef, TileVariation, Willpower,
};
use serde::{Deserialize, Serialize};

/// Raw definition of a monster as written in content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterEntry {
    /// Symbolic id, e.g. `"FIRE_BAT"`
    pub id: String,
    pub glyph: char,
    pub colour: Colour,
    /// Display name; empty inherits from species/genus
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub flags: MonsterFlags,
    /// Resistance magnitudes, `0..=3` each
    #[serde(default)]
    pub resists: Vec<(ResistKind, u8)>,
    #[serde(default)]
    pub vulnerable: Vec<ResistKind>,
    #[serde(default = "default_exp_mod")]
    pub exp_mod: u8,
    pub genus: String,
    pub species: String,
    #[serde(default = "default_holiness")]
    pub holiness: Holiness,
    #[serde(default)]
    pub willpower: Willpower,
    /// Up to four attacks; missing slots are filled with the empty slot
    #[serde(default)]
    pub attacks: Vec<AttackSlot>,
    pub hit_dice: u8,
    pub avg_hp_10x: u16,
    #[serde(default)]
    pub ac: u8,
    #[serde(default)]
    pub ev: u8,
    #[serde(default)]
    pub spells: SpellSetId,
    #[serde(default = "default_corpse")]
    pub corpse: bool,
    #[serde(default)]
    pub shout: Shout,
    #[serde(default)]
    pub intel: Intelligence,
    #[serde(default)]
    pub habitat: Habitat,
    #[serde(default = "default_speed")]
    pub speed: u8,
    #[serde(default)]
    pub energy: EnergyPattern,
    #[serde(default)]
    pub uses: ItemUse,
    #[serde(default)]
    pub size: BodySize,
    #[serde(default)]
    pub shape: BodyShape,
    #[serde(default)]
    pub tile: Option<TileRef>,
    #[serde(default)]
    pub tile_variation: TileVariation,
    #[serde(default)]
    pub corpse_tile: Option<TileRef>,
}

fn default_exp_mod() -> u8 {
    10
}

fn default_holiness() -> Holiness {
    Holiness::NATURAL
}

fn default_corpse() -> bool {
    true
}

fn default_speed() -> u8 {
    10
}

/// A genus root: only presentation data, everything else is fixed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenusEntry {
    pub id: String,
    pub glyph: char,
    pub colour: Colour,
    pub name: String,
    #[serde(default)]
    pub tile: Option<TileRef>,
    /// Inherited by members that leave a corpse but name no tile
    #[serde(default)]
    pub corpse_tile: Option<TileRef>,
}

/// A collection of monster definitions
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MonsterDefs {
    #[serde(default)]
    pub monsters: Vec<MonsterEntry>,
    #[serde(default)]
    pub genera: Vec<GenusEntry>,
}
