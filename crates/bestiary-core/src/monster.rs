//! Monster definition records and their template constructors

use crate::attack::{check_attacks, AttackSlot, Attacks, MAX_ATTACKS};
use crate::classify::{
    BodyShape, BodySize, Colour, Habitat, Intelligence, ItemUse, Shout, SpellSetId, TileRef,
    TileVariation, Willpower,
};
use crate::energy::EnergyCost;
use crate::error::Violation;
use crate::flags::{Holiness, MonsterFlags};
use crate::identity::MonsterId;
use crate::resist::Resists;
use serde::{Deserialize, Serialize};

/// Immutable definition of one monster type
///
/// `genus` and `species` are ids in the same table. A record may point at
/// itself; genus roots ("dummies") always do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterDef {
    /// Must equal the record's position in the table
    pub id: MonsterId,
    pub glyph: char,
    pub colour: Colour,
    /// Empty means "inherit from species/genus"
    pub name: String,
    pub flags: MonsterFlags,
    pub resists: Resists,
    /// Multiplier applied to the experience value
    pub exp_mod: u8,
    pub genus: MonsterId,
    pub species: MonsterId,
    pub holiness: Holiness,
    pub willpower: Willpower,
    pub attacks: Attacks,
    pub hit_dice: u8,
    /// Average hit points times ten
    pub avg_hp_10x: u16,
    pub ac: u8,
    pub ev: u8,
    pub spells: SpellSetId,
    pub leaves_corpse: bool,
    pub shout: Shout,
    pub intel: Intelligence,
    pub habitat: Habitat,
    pub speed: u8,
    pub energy: EnergyCost,
    pub uses: ItemUse,
    pub size: BodySize,
    pub shape: BodyShape,
    pub tile: Option<TileRef>,
    pub tile_variation: TileVariation,
    /// `None` means "inherit from species/genus"
    pub corpse_tile: Option<TileRef>,
}

impl MonsterDef {
    /// A blank record: no attacks, no resistances, default energy
    pub fn new(id: MonsterId, glyph: char, colour: Colour, name: impl Into<String>) -> Self {
        Self {
            id,
            glyph,
            colour,
            name: name.into(),
            flags: MonsterFlags::empty(),
            resists: Resists::NONE,
            exp_mod: 10,
            genus: id,
            species: id,
            holiness: Holiness::NATURAL,
            willpower: Willpower::Fixed(10),
            attacks: [AttackSlot::EMPTY; MAX_ATTACKS],
            hit_dice: 0,
            avg_hp_10x: 0,
            ac: 0,
            ev: 0,
            spells: SpellSetId::default(),
            leaves_corpse: true,
            shout: Shout::Silent,
            intel: Intelligence::Brainless,
            habitat: Habitat::Land,
            speed: 0,
            energy: EnergyCost::DEFAULT,
            uses: ItemUse::Nothing,
            size: BodySize::Medium,
            shape: BodyShape::Misc,
            tile: None,
            tile_variation: TileVariation::None,
            corpse_tile: None,
        }
    }

    /// The sentinel every unresolvable lookup falls back to
    pub fn program_bug() -> Self {
        Self {
            flags: MonsterFlags::NOT_DANGEROUS | MonsterFlags::CANT_SPAWN,
            willpower: Willpower::Fixed(10),
            size: BodySize::Giant,
            tile: Some(TileRef::new(TileRef::PROGRAM_BUG)),
            ..Self::new(MonsterId::PROGRAM_BUG, 'B', Colour::LightRed, "program bug")
        }
    }

    /// Placeholder kept in the slot of removed content
    ///
    /// Unspawnable, worth no experience and inert, so a save that still
    /// references the id loads without reviving the monster.
    pub fn axed(id: MonsterId, name: &str) -> Self {
        Self {
            flags: MonsterFlags::NOT_DANGEROUS
                | MonsterFlags::CANT_SPAWN
                | MonsterFlags::UNFINISHED,
            genus: MonsterId::PROGRAM_BUG,
            species: MonsterId::PROGRAM_BUG,
            holiness: Holiness::NONLIVING,
            willpower: Willpower::Fixed(0),
            size: BodySize::Giant,
            tile: Some(TileRef::new(TileRef::PROGRAM_BUG)),
            ..Self::new(id, 'X', Colour::LightRed, format!("removed {}", name))
        }
    }

    /// Genus root used to group related monsters
    pub fn dummy(
        id: MonsterId,
        glyph: char,
        colour: Colour,
        name: impl Into<String>,
        tile: Option<TileRef>,
    ) -> Self {
        Self {
            flags: MonsterFlags::CANT_SPAWN,
            holiness: Holiness::NONLIVING,
            tile,
            ..Self::new(id, glyph, colour, name)
        }
    }

    /// Unspawnable stand-in for a generated id, derived from its template
    ///
    /// Name and tile are cleared so they resolve through the template,
    /// which becomes the variant's species.
    pub fn variant(id: MonsterId, template: &MonsterDef) -> Self {
        Self {
            id,
            name: String::new(),
            flags: template.flags | MonsterFlags::CANT_SPAWN,
            species: template.id,
            tile: None,
            ..template.clone()
        }
    }

    /// Check if this record is its own genus and species
    pub fn is_root(&self) -> bool {
        self.genus == self.id && self.species == self.id
    }

    /// Check if this is a genus/species placeholder that never spawns
    pub fn is_dummy(&self) -> bool {
        self.is_root() && self.flags.contains(MonsterFlags::CANT_SPAWN)
    }

    /// Check if this record may be placed by level generation
    pub fn can_spawn(&self) -> bool {
        !self.flags.contains(MonsterFlags::CANT_SPAWN)
    }

    /// Check if this monster is harmless and worthless
    pub fn is_zero_threat(&self) -> bool {
        self.flags.contains(MonsterFlags::NOT_DANGEROUS)
    }

    /// Effective willpower, resolving per-HD scaling
    pub fn willpower_value(&self) -> i32 {
        self.willpower.value(self.hit_dice)
    }

    /// Check the fixed-arity attributes and the effective willpower
    pub fn check_slots(&self) -> Result<(), Violation> {
        check_attacks(&self.attacks)?;
        self.resists.check()?;
        self.energy.check()?;
        self.willpower.check(self.hit_dice)
    }
}

/// Turn a symbolic id name into display text: `DEEP_ELF_SOLDIER` -> `deep elf soldier`
pub fn symbol_to_name(symbol: &str) -> String {
    symbol.to_ascii_lowercase().replace('_', " ")
}
