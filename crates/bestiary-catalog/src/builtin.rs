//! The built-in catalog
//!
//! Content ships inside the binary and is validated the first time the
//! catalog is requested. Broken content is a build defect, so the
//! initializer logs the integrity error and panics rather than handing
//! back a partial catalog.

use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::error::Result;
use std::sync::OnceLock;
use tracing::error;

const MONSTER_IDS: &str = include_str!("../data/monster_ids.ron");
const BOOK_IDS: &str = include_str!("../data/book_ids.ron");
const MONSTERS: &[&str] = &[
    include_str!("../data/genera.ron"),
    include_str!("../data/monsters.ron"),
];

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// The process-wide built-in catalog
///
/// Built on first call with the default configuration; every later call
/// returns the same frozen catalog.
///
/// # Panics
///
/// Panics if the bundled content fails to load or validate.
pub fn builtin() -> &'static Catalog {
    BUILTIN.get_or_init(|| match load_builtin(CatalogConfig::default()) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!(%err, "Built-in catalog failed validation");
            panic!("built-in catalog failed validation: {err}");
        }
    })
}

/// Build a fresh copy of the built-in catalog with a custom configuration
pub fn load_builtin(config: CatalogConfig) -> Result<Catalog> {
    Catalog::from_ron(MONSTER_IDS, BOOK_IDS, MONSTERS, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{InheritedTrait, TraitValue};
    use bestiary_core::{
        AttackFlavour, AttackKind, AttackSlot, EnergyAxis, Ident, MonsterId, ResistKind, TileRef,
    };
    use proptest::prelude::*;

    fn id(name: &str) -> MonsterId {
        builtin().monster_id(name).unwrap()
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(builtin(), builtin()));
        let handle = std::thread::spawn(|| builtin() as *const Catalog as usize);
        assert_eq!(handle.join().unwrap(), builtin() as *const Catalog as usize);
    }

    #[test]
    fn test_builtin_validates_again() {
        let fresh = load_builtin(CatalogConfig::default()).unwrap();
        assert!(fresh.table().validate().is_ok());
        assert_eq!(fresh.table().len(), builtin().table().len());
    }

    #[test]
    fn test_data_directory_matches_builtin() {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/data");
        let loaded = Catalog::load_directory(dir, CatalogConfig::default()).unwrap();
        assert_eq!(loaded.table().len(), builtin().table().len());
        assert_eq!(loaded.book_ids().len(), builtin().book_ids().len());
        assert_eq!(loaded.monster_id("ORC_WIZARD"), builtin().monster_id("ORC_WIZARD"));
    }

    #[test]
    fn test_sentinel_at_zero() {
        let bug = builtin().definition_for(MonsterId::PROGRAM_BUG);
        assert_eq!(bug.name, "program bug");
        assert!(!builtin().is_spawnable(MonsterId::PROGRAM_BUG));
    }

    #[test]
    fn test_fire_bat() {
        let bat = id("FIRE_BAT");
        let catalog = builtin();
        assert_eq!(catalog.resistance_level(bat, ResistKind::Fire), 3);
        assert!(catalog.is_vulnerable(bat, ResistKind::Cold));
        assert_eq!(
            catalog.attacks_of(bat)[0],
            AttackSlot::new(AttackKind::Bite, AttackFlavour::Fire, 6)
        );
        assert_eq!(
            catalog.effective_trait(bat, InheritedTrait::CorpseTile),
            TraitValue::Tile(TileRef::NO_CORPSE)
        );
        assert_eq!(catalog.genus_of(bat), id("BAT"));
    }

    #[test]
    fn test_inherited_corpses() {
        let catalog = builtin();
        assert_eq!(
            catalog.effective_trait(id("ORC_WIZARD"), InheritedTrait::CorpseTile),
            TraitValue::Tile("corpse_orc")
        );
        assert_eq!(
            catalog.effective_trait(id("SPRIGGAN_RIDER"), InheritedTrait::CorpseTile),
            TraitValue::Tile("corpse_spriggan")
        );
    }

    #[test]
    fn test_genus_roots_never_spawn() {
        let catalog = builtin();
        for name in ["BEAR", "DRAGON", "SNAKE", "SPIDER", "GOLEM"] {
            let root = id(name);
            assert!(catalog.definition_for(root).is_dummy(), "{}", name);
            assert!(!catalog.is_spawnable(root), "{}", name);
        }
        assert!(catalog.is_spawnable(id("POLAR_BEAR")));
    }

    #[test]
    fn test_energy_patterns() {
        let catalog = builtin();
        assert_eq!(catalog.energy_cost(id("MERFOLK"), EnergyAxis::Swim), 6);
        assert_eq!(catalog.energy_cost(id("MERFOLK"), EnergyAxis::Move), 10);
        assert_eq!(catalog.energy_cost(id("SPRIGGAN"), EnergyAxis::Move), 6);
        assert_eq!(catalog.energy_cost(id("SPRIGGAN"), EnergyAxis::Swim), 6);
        assert_eq!(
            catalog.energy_cost(id("DEEP_ELF_MASTER_ARCHER"), EnergyAxis::Missile),
            5
        );
    }

    #[test]
    fn test_generated_variant() {
        let catalog = builtin();
        let merged = id("MERGED_SLIME_CREATURE");
        assert!(catalog.monster_ids().is_generated(merged));
        assert!(!catalog.is_spawnable(merged));
        assert_eq!(catalog.display_name_for(merged), "slime creature");
    }

    #[test]
    fn test_book_aliases() {
        let catalog = builtin();
        let fen = catalog.book_id("FEN").unwrap();
        assert_eq!(catalog.book_id("WAR_CHANTS").is_some(), cfg!(feature = "save-compat"));
        assert!(!catalog.book_ids().is_generated(fen));
        let randart = catalog.book_id("RANDART_LEVEL").unwrap();
        assert!(catalog.book_ids().is_generated(randart));
        assert!(randart > catalog.book_ids().max_permanent_id());
    }

    #[cfg(feature = "save-compat")]
    #[test]
    fn test_every_tombstone_resolves() {
        let catalog = builtin();
        let tombstones: Vec<MonsterId> = catalog.monster_ids().tombstones().collect();
        assert!(!tombstones.is_empty());
        for bee in tombstones {
            let record = catalog.definition_for(bee);
            assert_eq!(record.id, bee);
            assert!(record.is_zero_threat());
            assert!(!catalog.is_spawnable(bee));
        }
        assert_eq!(
            catalog.display_name_for(id("BUMBLEBEE")),
            "removed bumblebee"
        );
    }

    #[test]
    fn test_uniform_and_swim_energy_laws() {
        let catalog = builtin();
        let dummy = id("TRAINING_DUMMY");
        let first = catalog.energy_cost(dummy, EnergyAxis::Move);
        assert!(EnergyAxis::ALL
            .iter()
            .all(|&axis| catalog.energy_cost(dummy, axis) == first));

        let adder = id("ADDER");
        let distinct: Vec<EnergyAxis> = EnergyAxis::ALL
            .into_iter()
            .filter(|&axis| {
                catalog.energy_cost(adder, axis)
                    != bestiary_core::EnergyCost::DEFAULT.cost(axis)
            })
            .collect();
        assert_eq!(distinct, vec![EnergyAxis::Swim]);
    }

    proptest! {
        #[test]
        fn prop_every_valid_id_is_well_formed(index in 0usize..256) {
            let catalog = builtin();
            let Some(id) = MonsterId::from_index(index) else { return Ok(()); };
            if !catalog.monster_ids().is_valid(id) {
                return Ok(());
            }
            let def = catalog.definition_for(id);
            prop_assert_eq!(def.id, id);
            prop_assert!(catalog.monster_ids().is_valid(def.genus));
            prop_assert!(catalog.monster_ids().is_valid(def.species));
            prop_assert!(def.check_slots().is_ok());
            if catalog.monster_ids().is_tombstoned(id) {
                prop_assert!(!catalog.is_spawnable(id));
            }
            for which in InheritedTrait::ALL {
                let resolution = catalog.resolve_trait(id, which);
                prop_assert!(resolution.deepest <= catalog.config().max_inheritance_hops());
                prop_assert_eq!(resolution, catalog.resolve_trait(id, which));
            }
        }
    }
}
