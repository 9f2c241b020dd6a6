//! Genus/species trait inheritance
//!
//! A record that leaves a trait unspecified borrows it from its species,
//! then its genus, walking at most `max_hops` links. Running out of hops
//! is not an error: the trait's documented default is returned instead.

use crate::config::{DEFAULT_MAX_HOPS, MAX_HOPS_LIMIT};
use crate::table::MonsterTable;
use bestiary_core::{Colour, MonsterDef, MonsterId, TileRef};

/// A trait that may be inherited through species and genus links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InheritedTrait {
    /// Corpse tile; a monster that leaves no corpse resolves to [`TileRef::NO_CORPSE`]
    CorpseTile,
    /// Display name
    DisplayName,
    /// Monster tile
    Tile,
    /// Glyph colour; `Undef` means unspecified
    Colour,
}

impl InheritedTrait {
    /// Every inheritable trait
    pub const ALL: [InheritedTrait; 4] = [
        InheritedTrait::CorpseTile,
        InheritedTrait::DisplayName,
        InheritedTrait::Tile,
        InheritedTrait::Colour,
    ];

    /// The value `def` specifies for this trait, if any
    fn own_value(self, def: &MonsterDef) -> Option<TraitValue<'_>> {
        match self {
            InheritedTrait::CorpseTile if !def.leaves_corpse => {
                Some(TraitValue::Tile(TileRef::NO_CORPSE))
            }
            InheritedTrait::CorpseTile => def
                .corpse_tile
                .as_ref()
                .map(|tile| TraitValue::Tile(tile.as_str())),
            InheritedTrait::DisplayName => {
                (!def.name.is_empty()).then_some(TraitValue::Name(def.name.as_str()))
            }
            InheritedTrait::Tile => def.tile.as_ref().map(|tile| TraitValue::Tile(tile.as_str())),
            InheritedTrait::Colour => {
                (def.colour != Colour::Undef).then_some(TraitValue::Colour(def.colour))
            }
        }
    }

    /// The value used when nothing in the chain specifies this trait
    fn default_value(self, table: &MonsterTable) -> TraitValue<'_> {
        match self {
            InheritedTrait::CorpseTile => TraitValue::Tile(TileRef::NO_CORPSE),
            InheritedTrait::DisplayName => TraitValue::Name(table.sentinel().name.as_str()),
            InheritedTrait::Tile => TraitValue::Tile(
                table
                    .sentinel()
                    .tile
                    .as_ref()
                    .map_or(TileRef::PROGRAM_BUG, TileRef::as_str),
            ),
            InheritedTrait::Colour => TraitValue::Colour(Colour::Undef),
        }
    }
}

/// The resolved value of an inherited trait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraitValue<'a> {
    Tile(&'a str),
    Name(&'a str),
    Colour(Colour),
}

impl<'a> TraitValue<'a> {
    /// The value as text, if it is a tile or a name
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            TraitValue::Tile(s) | TraitValue::Name(s) => Some(s),
            TraitValue::Colour(_) => None,
        }
    }
}

/// A trait value together with where it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub value: TraitValue<'a>,
    /// Record that supplied the value; `None` when the default was used
    pub source: Option<MonsterId>,
    /// Links followed to reach `source`
    pub hops: u8,
    /// Deepest link level the search visited
    pub deepest: u8,
}

/// Walks species and genus links with a hop bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolver {
    max_hops: u8,
}

impl Resolver {
    /// Create a resolver that follows at most `max_hops` links
    ///
    /// The bound is clamped to `[1, MAX_HOPS_LIMIT]`; every hop may branch
    /// into both species and genus.
    pub fn new(max_hops: u8) -> Self {
        Self {
            max_hops: max_hops.clamp(1, MAX_HOPS_LIMIT),
        }
    }

    /// Get the hop bound
    pub fn max_hops(&self) -> u8 {
        self.max_hops
    }

    /// Effective value of `which` for `id`
    pub fn effective<'a>(
        &self,
        table: &'a MonsterTable,
        id: MonsterId,
        which: InheritedTrait,
    ) -> TraitValue<'a> {
        self.resolve(table, id, which).value
    }

    /// Effective value of `which` for `id`, with its provenance
    pub fn resolve<'a>(
        &self,
        table: &'a MonsterTable,
        id: MonsterId,
        which: InheritedTrait,
    ) -> Resolution<'a> {
        let mut deepest = 0;
        match self.search(table, id, which, 0, &mut deepest) {
            Some((value, source, hops)) => Resolution {
                value,
                source: Some(source),
                hops,
                deepest,
            },
            None => Resolution {
                value: which.default_value(table),
                source: None,
                hops: 0,
                deepest,
            },
        }
    }

    fn search<'a>(
        &self,
        table: &'a MonsterTable,
        id: MonsterId,
        which: InheritedTrait,
        depth: u8,
        deepest: &mut u8,
    ) -> Option<(TraitValue<'a>, MonsterId, u8)> {
        *deepest = (*deepest).max(depth);
        let def = table.record_for(id);
        if let Some(value) = which.own_value(def) {
            return Some((value, def.id, depth));
        }
        if depth >= self.max_hops {
            return None;
        }

        // Species first, then genus; a genus equal to the species was already tried
        let links = [
            Some(def.species),
            (def.genus != def.species).then_some(def.genus),
        ];
        links
            .into_iter()
            .flatten()
            .filter(|&link| link != def.id)
            .find_map(|link| self.search(table, link, which, depth + 1, deepest))
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HOPS)
    }
}
