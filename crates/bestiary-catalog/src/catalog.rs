//! Read-only catalog facade
//!
//! The only handle outside systems use. Every lookup is a pure function
//! of the frozen table and the id it is given; none of them fail. Ids
//! outside the table resolve to the program-bug sentinel.

use crate::config::CatalogConfig;
use crate::error::{Error, Result};
use crate::resolver::{InheritedTrait, Resolution, Resolver, TraitValue};
use crate::table::MonsterTable;
use bestiary_core::{
    Attacks, BookId, EnergyAxis, IdSpace, Ident, MonsterDef, MonsterId, ResistKind,
};
use bestiary_script::{CatalogDefs, Loader};
use std::path::Path;
use tracing::{info, warn};

/// Validated, immutable content catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    table: MonsterTable,
    books: IdSpace<BookId>,
    resolver: Resolver,
    config: CatalogConfig,
}

impl Catalog {
    /// Build a catalog from loaded content
    pub fn from_defs(defs: &CatalogDefs, config: CatalogConfig) -> Result<Self> {
        let monster_ids = defs
            .monster_ids
            .as_ref()
            .ok_or(Error::MissingIdSpace(MonsterId::NAMESPACE))?
            .build::<MonsterId>()?;
        let books = defs
            .book_ids
            .as_ref()
            .ok_or(Error::MissingIdSpace(BookId::NAMESPACE))?
            .build::<BookId>()?;
        let table = MonsterTable::build(monster_ids, defs)?;

        info!(
            monsters = table.len(),
            permanent_monsters = table.ids().num_permanent(),
            retired_monsters = table.ids().tombstones().count(),
            books = books.len(),
            fixed_books = books.num_permanent(),
            "Catalog initialized"
        );

        Ok(Self {
            resolver: Resolver::new(config.max_inheritance_hops()),
            table,
            books,
            config,
        })
    }

    /// Build a catalog from RON text
    ///
    /// `monsters` may be split over several documents; each is loaded in order.
    pub fn from_ron(
        monster_ids: &str,
        book_ids: &str,
        monsters: &[&str],
        config: CatalogConfig,
    ) -> Result<Self> {
        let mut loader = Loader::new();
        loader.load_id_space_str(monster_ids)?;
        loader.load_id_space_str(book_ids)?;
        for content in monsters {
            loader.load_monsters_str(content)?;
        }
        Self::from_defs(loader.defs(), config)
    }

    /// Build a catalog from every `.ron` file in a directory
    pub fn load_directory(path: impl AsRef<Path>, config: CatalogConfig) -> Result<Self> {
        let mut loader = Loader::new();
        loader.load_directory(path)?;
        Self::from_defs(loader.defs(), config)
    }

    /// The record for `id`; ids outside the table get the sentinel
    pub fn definition_for(&self, id: MonsterId) -> &MonsterDef {
        match self.table.get(id) {
            Some(def) => def,
            None => {
                if self.config.warn_on_fallback() {
                    warn!(%id, "Unknown monster id, using sentinel record");
                }
                self.table.sentinel()
            }
        }
    }

    /// Display name of `id`, inherited if the record has none
    pub fn display_name_for(&self, id: MonsterId) -> &str {
        self.effective_trait(id, InheritedTrait::DisplayName)
            .as_str()
            .unwrap_or_default()
    }

    /// Check if level generation may place `id`
    ///
    /// False for unknown ids, tombstones, genus roots and anything flagged
    /// as unspawnable, which includes generated variants without content.
    pub fn is_spawnable(&self, id: MonsterId) -> bool {
        match self.table.get(id) {
            Some(def) => !self.table.ids().is_tombstoned(id) && !def.is_dummy() && def.can_spawn(),
            None => false,
        }
    }

    /// Effective value of an inheritable trait
    pub fn effective_trait(&self, id: MonsterId, which: InheritedTrait) -> TraitValue<'_> {
        self.resolver.effective(&self.table, id, which)
    }

    /// Effective value of an inheritable trait, with where it came from
    pub fn resolve_trait(&self, id: MonsterId, which: InheritedTrait) -> Resolution<'_> {
        self.resolver.resolve(&self.table, id, which)
    }

    /// All four attack slots, empty slots included
    pub fn attacks_of(&self, id: MonsterId) -> Attacks {
        self.definition_for(id).attacks
    }

    /// Resistance magnitude, `0..=3`
    pub fn resistance_level(&self, id: MonsterId, kind: ResistKind) -> u8 {
        self.definition_for(id).resists.level(kind)
    }

    /// Check if `id` takes extra damage from `kind`
    pub fn is_vulnerable(&self, id: MonsterId, kind: ResistKind) -> bool {
        self.definition_for(id).resists.is_vulnerable(kind)
    }

    /// Energy spent on one kind of action
    pub fn energy_cost(&self, id: MonsterId, axis: EnergyAxis) -> i32 {
        self.definition_for(id).energy.cost(axis)
    }

    /// Species link of `id`
    pub fn species_of(&self, id: MonsterId) -> MonsterId {
        self.table.species_of(id)
    }

    /// Genus link of `id`
    pub fn genus_of(&self, id: MonsterId) -> MonsterId {
        self.table.genus_of(id)
    }

    /// Look up a monster id by symbolic name or alias
    pub fn monster_id(&self, name: &str) -> Option<MonsterId> {
        self.table.ids().id_of(name)
    }

    /// Look up a book id by symbolic name or alias
    pub fn book_id(&self, name: &str) -> Option<BookId> {
        self.books.id_of(name)
    }

    /// The monster identifier space
    pub fn monster_ids(&self) -> &IdSpace<MonsterId> {
        self.table.ids()
    }

    /// The book identifier space
    pub fn book_ids(&self) -> &IdSpace<BookId> {
        &self.books
    }

    /// The underlying record table
    pub fn table(&self) -> &MonsterTable {
        &self.table
    }

    /// The configuration this catalog was built with
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::tests::{IDS, MONSTERS};
    use bestiary_core::{AttackKind, AttackSlot, TileRef};
    use proptest::prelude::*;

    const BOOKS: &str = r#"
    (
        namespace: "book",
        permanent: [
            Live("MINOR_MAGIC"),
            Retired("TRANSFIGURATIONS"),
            Live("FEN"),
        ],
        generated: [(name: "RANDART_LEVEL")],
        aliases: [(name: "WAR_CHANTS", target: "FEN")],
    )
    "#;

    fn catalog() -> Catalog {
        Catalog::from_ron(IDS, BOOKS, &[MONSTERS], CatalogConfig::default()).unwrap()
    }

    fn id(catalog: &Catalog, name: &str) -> MonsterId {
        catalog.monster_id(name).unwrap()
    }

    #[test]
    fn test_lookups() {
        let catalog = catalog();
        let bear = id(&catalog, "POLAR_BEAR");
        assert_eq!(catalog.definition_for(bear).name, "polar bear");
        assert_eq!(catalog.display_name_for(bear), "polar bear");
        assert_eq!(catalog.attacks_of(bear)[0], AttackSlot::plain(AttackKind::Bite, 20));
        assert_eq!(catalog.resistance_level(bear, ResistKind::Cold), 1);
        assert!(!catalog.is_vulnerable(bear, ResistKind::Cold));
        assert_eq!(catalog.genus_of(bear), id(&catalog, "BEAR"));
        assert_eq!(catalog.species_of(bear), bear);
    }

    #[test]
    fn test_spawnability() {
        let catalog = catalog();
        assert!(catalog.is_spawnable(id(&catalog, "ORC")));
        assert!(!catalog.is_spawnable(id(&catalog, "BEAR")));
        assert!(!catalog.is_spawnable(MonsterId::PROGRAM_BUG));
        assert!(!catalog.is_spawnable(id(&catalog, "ORC_VARIANT")));
        assert!(!catalog.is_spawnable(MonsterId::from_raw(u16::MAX)));
    }

    #[cfg(feature = "save-compat")]
    #[test]
    fn test_tombstone_lookup() {
        let catalog = catalog();
        let bee = id(&catalog, "BUMBLEBEE");
        assert!(catalog.monster_ids().is_tombstoned(bee));
        assert!(!catalog.is_spawnable(bee));
        let record = catalog.definition_for(bee);
        assert!(record.is_zero_threat());
        assert!(record.flags.contains(bestiary_core::MonsterFlags::CANT_SPAWN));
        assert_eq!(catalog.display_name_for(bee), "removed bumblebee");
    }

    #[cfg(not(feature = "save-compat"))]
    #[test]
    fn test_closed_window_drops_tombstones() {
        let catalog = catalog();
        assert!(catalog.monster_id("BUMBLEBEE").is_none());
        assert_eq!(catalog.monster_id("ORC_WIZARD"), Some(MonsterId(2)));
    }

    #[test]
    fn test_unknown_id_uses_sentinel() {
        let catalog = catalog();
        let unknown = MonsterId::from_raw(4000);
        assert!(!catalog.monster_ids().is_valid(unknown));
        assert_eq!(catalog.definition_for(unknown).id, MonsterId::PROGRAM_BUG);
        assert_eq!(catalog.display_name_for(unknown), "program bug");
        assert_eq!(catalog.attacks_of(unknown), [AttackSlot::EMPTY; 4]);
        assert_eq!(
            catalog.effective_trait(unknown, InheritedTrait::Tile),
            TraitValue::Tile(TileRef::PROGRAM_BUG)
        );
    }

    #[test]
    fn test_energy() {
        let catalog = catalog();
        let dummy = id(&catalog, "TRAINING_DUMMY");
        for axis in EnergyAxis::ALL {
            assert_eq!(catalog.energy_cost(dummy, axis), 12);
        }

        let merfolk = id(&catalog, "MERFOLK");
        for axis in EnergyAxis::ALL {
            let cost = catalog.energy_cost(merfolk, axis);
            let default = bestiary_core::EnergyCost::DEFAULT.cost(axis);
            assert_eq!(cost == default, axis != EnergyAxis::Swim, "{:?}", axis);
        }
    }

    #[test]
    fn test_books() {
        let catalog = catalog();
        assert_eq!(catalog.book_id("WAR_CHANTS"), catalog.book_id("FEN"));
        assert!(catalog.book_ids().is_generated(catalog.book_id("RANDART_LEVEL").unwrap()));
        assert_eq!(
            catalog.book_ids().max_permanent_id(),
            catalog.book_id("FEN").unwrap()
        );
    }

    #[test]
    fn test_missing_id_space() {
        let err = Catalog::from_ron(IDS, IDS, &[MONSTERS], CatalogConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Content(_)));

        let mut loader = Loader::new();
        loader.load_id_space_str(IDS).unwrap();
        loader.load_monsters_str(MONSTERS).unwrap();
        let err = Catalog::from_defs(loader.defs(), CatalogConfig::default()).unwrap_err();
        assert!(matches!(err, Error::MissingIdSpace("book")));
    }

    #[test]
    fn test_integrity_error_surfaces() {
        let broken = MONSTERS.replace("genus: \"BEAR\"", "genus: \"OWLBEAR\"");
        let err = Catalog::from_ron(IDS, BOOKS, &[&broken], CatalogConfig::default()).unwrap_err();
        assert!(err.integrity().is_some());
    }

    #[test]
    fn test_hop_bound_from_config() {
        let config = CatalogConfig::default().with_max_inheritance_hops(1);
        let catalog = Catalog::from_ron(IDS, BOOKS, &[MONSTERS], config).unwrap();
        let wizard = id(&catalog, "ORC_WIZARD");
        let resolution = catalog.resolve_trait(wizard, InheritedTrait::CorpseTile);
        assert_eq!(resolution.value, TraitValue::Tile("corpse_orc"));
        assert!(resolution.deepest <= 1);
    }

    #[test]
    fn test_catalog_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }

    proptest! {
        #[test]
        fn prop_facade_is_total(raw in any::<u16>()) {
            let catalog = catalog();
            let id = MonsterId::from_raw(raw);
            let def = catalog.definition_for(id);
            if catalog.monster_ids().is_valid(id) {
                prop_assert_eq!(def.id, id);
                prop_assert!(catalog.monster_ids().is_valid(def.genus));
                prop_assert!(catalog.monster_ids().is_valid(def.species));
            } else {
                prop_assert_eq!(def.id, MonsterId::PROGRAM_BUG);
                prop_assert!(!catalog.is_spawnable(id));
            }
            for kind in ResistKind::ALL {
                prop_assert!(catalog.resistance_level(id, kind) <= 3);
                prop_assert!(!(catalog.resistance_level(id, kind) > 0 && catalog.is_vulnerable(id, kind)));
            }
            for slot in catalog.attacks_of(id) {
                if slot.kind == AttackKind::None {
                    prop_assert_eq!(slot, AttackSlot::EMPTY);
                }
            }
            for which in InheritedTrait::ALL {
                prop_assert_eq!(catalog.effective_trait(id, which), catalog.effective_trait(id, which));
            }
        }
    }
}
