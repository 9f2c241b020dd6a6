//! Bestiary Core - Identifiers and definition records for a roguelike content catalog
//!
//! This crate provides the leaf types of the catalog:
//! - Stable ordinal identifiers (`MonsterId`, `BookId`)
//! - Append-only identifier spaces with tombstones and a generated sub-range
//! - Monster definition records and their template constructors
//! - Fixed-arity attribute models: attack slots, packed resistances, energy costs
//! - The load-time integrity error taxonomy
//!
//! ## Save Compatibility
//!
//! A raw id ordinal is what save files store. Identifier spaces only ever
//! grow before their generated boundary, and removed content keeps its slot
//! as a retired entry, so an ordinal written by an older build still
//! resolves to some record.

mod attack;
mod classify;
mod energy;
mod error;
mod flags;
mod id_space;
mod identity;
mod monster;
mod resist;

pub use attack::{
    check_attacks, pad_attacks, AttackFlavour, AttackKind, AttackSlot, Attacks,
    MAX_ATTACKS, MAX_ATTACK_DAMAGE,
};
pub use classify::{
    BodyShape, BodySize, Colour, Habitat, Intelligence, ItemUse, Shout, SpellSetId, TileRef,
    TileVariation, Willpower,
};
pub use energy::{
    EnergyAxis, EnergyCost, EnergyPattern, DEFAULT_ACTION_COST, DEFAULT_PICKUP_PERCENT,
    MAX_ENERGY_COST,
};
pub use error::{IdSpaceError, IntegrityError, Result, Violation};
pub use flags::{Holiness, MonsterFlags};
pub use id_space::{IdEntry, IdSpace, IdSpaceBuilder, IdStatus};
pub use identity::{BookId, Ident, MonsterId};
pub use monster::{symbol_to_name, MonsterDef};
pub use resist::{ResistKind, Resists, MAX_RESIST_LEVEL};
