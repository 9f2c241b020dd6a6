//! Catalog Report Example
//!
//! Initializes the built-in catalog and prints what a few consumers would
//! see: the spawner, combat, and rendering. Set `RUST_LOG=debug` to watch
//! the loader and validator.

use bestiary_catalog::{builtin, InheritedTrait, TraitValue};
use bestiary_core::{EnergyAxis, Ident, MonsterId, ResistKind};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bestiary_catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Bestiary Catalog Report ===\n");

    let catalog = builtin();
    let ids = catalog.monster_ids();

    let spawnable = ids.iter().filter(|(id, _)| catalog.is_spawnable(*id)).count();
    println!(
        "Monsters: {} ids, {} permanent, {} retired, {} spawnable",
        ids.len(),
        ids.num_permanent(),
        ids.tombstones().count(),
        spawnable,
    );
    println!(
        "Books: {} ids, {} fixed (last fixed book: {})\n",
        catalog.book_ids().len(),
        catalog.book_ids().num_permanent(),
        catalog
            .book_ids()
            .name_of(catalog.book_ids().max_permanent_id())
            .unwrap_or("none"),
    );

    println!(
        "{:<4} {:<26} {:<6} {:<22} {}",
        "id", "name", "spawn", "corpse", "genus"
    );
    for (id, entry) in ids.iter() {
        let corpse = match catalog.effective_trait(id, InheritedTrait::CorpseTile) {
            TraitValue::Tile(tile) => tile,
            _ => "?",
        };
        let genus = ids.name_of(catalog.genus_of(id)).unwrap_or("?");
        println!(
            "{:<4} {:<26} {:<6} {:<22} {}",
            id.index(),
            catalog.display_name_for(id),
            catalog.is_spawnable(id),
            corpse,
            if genus == entry.name { "-" } else { genus },
        );
    }

    println!("\nCombat view:");
    for name in ["FIRE_BAT", "FIRE_DRAGON", "REDBACK"] {
        let Some(id) = catalog.monster_id(name) else {
            continue;
        };
        let attacks: Vec<String> = catalog
            .attacks_of(id)
            .iter()
            .filter(|slot| !slot.is_empty())
            .map(|slot| format!("{:?}/{:?} {}", slot.kind, slot.flavour, slot.damage))
            .collect();
        let resists: Vec<String> = ResistKind::ALL
            .iter()
            .filter_map(|&kind| {
                let level = catalog.resistance_level(id, kind);
                if catalog.is_vulnerable(id, kind) {
                    Some(format!("{:?}-", kind))
                } else if level > 0 {
                    Some(format!("{:?}{}", kind, "+".repeat(level.into())))
                } else {
                    None
                }
            })
            .collect();
        println!(
            "  {}: [{}] resists [{}]",
            catalog.display_name_for(id),
            attacks.join(", "),
            resists.join(" "),
        );
    }

    println!("\nEnergy (move / swim / missile):");
    for name in ["HUMAN", "SPRIGGAN", "MERFOLK", "DEEP_ELF_MASTER_ARCHER"] {
        let Some(id) = catalog.monster_id(name) else {
            continue;
        };
        println!(
            "  {}: {} / {} / {}",
            catalog.display_name_for(id),
            catalog.energy_cost(id, EnergyAxis::Move),
            catalog.energy_cost(id, EnergyAxis::Swim),
            catalog.energy_cost(id, EnergyAxis::Missile),
        );
    }

    // An ordinal read from a damaged save
    let stray = MonsterId::from_raw(u16::MAX);
    println!(
        "\nStray ordinal {} resolves to: {}",
        stray.raw(),
        catalog.display_name_for(stray)
    );

    println!("\n=== Report Complete ===");
}
