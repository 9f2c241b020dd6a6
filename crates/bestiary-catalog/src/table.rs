//! The validated monster record table
//!
//! Records sit at the position of their id. Every valid id owns a record
//! once the table is built: content supplies the permanent ones, retired
//! ids get an `axed` placeholder and generated ids without content get a
//! variant of their template. Anything outside the table resolves to the
//! sentinel at ordinal 0.

use bestiary_core::{
    pad_attacks, symbol_to_name, IdSpace, IdStatus, Ident, IntegrityError, MonsterDef, MonsterId,
    Resists, Result, Violation,
};
use bestiary_script::{CatalogDefs, GenusEntry, MonsterEntry};
use tracing::debug;

/// Monster records indexed by id
#[derive(Debug, Clone)]
pub struct MonsterTable {
    ids: IdSpace<MonsterId>,
    records: Vec<MonsterDef>,
}

impl MonsterTable {
    /// Build and validate the table from loaded content
    pub fn build(ids: IdSpace<MonsterId>, defs: &CatalogDefs) -> Result<Self> {
        let mut records: Vec<Option<MonsterDef>> = vec![None; ids.len()];

        for (name, entry) in &defs.monsters {
            let id = lookup_id(&ids, name)?;
            let def = resolve_entry(&ids, id, entry)?;
            place(&mut records, id, name, def)?;
        }

        for (name, genus) in &defs.genera {
            let id = lookup_id(&ids, name)?;
            place(&mut records, id, name, genus_root(id, genus))?;
        }

        for id in ids.tombstones() {
            let name = ids.name_of(id).unwrap_or_default();
            place(&mut records, id, name, MonsterDef::axed(id, &symbol_to_name(name)))?;
        }

        debug!(
            monsters = defs.monsters.len(),
            genera = defs.genera.len(),
            slots = ids.len(),
            "Building monster table"
        );

        Self::from_records(ids, records)
    }

    /// Validate hand-assembled records against an identifier space
    ///
    /// `records[i]` must be the record for ordinal `i`. Missing generated
    /// slots are filled with variants of their template.
    pub fn from_records(
        ids: IdSpace<MonsterId>,
        mut records: Vec<Option<MonsterDef>>,
    ) -> Result<Self> {
        if records.len() > ids.len() {
            return Err(IntegrityError::UnknownIdentifier(format!(
                "ordinal {}",
                ids.len()
            )));
        }
        records.resize(ids.len(), None);

        let sentinel = match records.first() {
            Some(Some(def)) => def.clone(),
            _ => return Err(IntegrityError::MissingSentinel),
        };
        if sentinel.can_spawn() {
            return Err(IntegrityError::SpawnableSentinel(sentinel.name));
        }

        let generated: Vec<(MonsterId, Option<MonsterId>)> = ids
            .iter()
            .filter_map(|(id, entry)| match entry.status {
                IdStatus::Generated { template } => Some((id, template)),
                _ => None,
            })
            .collect();
        for (id, template) in generated {
            if records[id.index()].is_some() {
                continue;
            }
            let variant = {
                let base = template
                    .and_then(|t| records.get(t.index()))
                    .and_then(Option::as_ref)
                    .unwrap_or(&sentinel);
                MonsterDef::variant(id, base)
            };
            records[id.index()] = Some(variant);
        }

        let mut filled = Vec::with_capacity(records.len());
        for (position, slot) in records.into_iter().enumerate() {
            match slot {
                Some(def) => filled.push(def),
                None => return Err(IntegrityError::MissingDefinition(name_at(&ids, position))),
            }
        }

        let table = Self {
            ids,
            records: filled,
        };
        table.validate()?;
        Ok(table)
    }

    /// Check every record against the table invariants
    pub fn validate(&self) -> Result<()> {
        let sentinel = self.records.first().ok_or(IntegrityError::MissingSentinel)?;
        if sentinel.can_spawn() {
            return Err(IntegrityError::SpawnableSentinel(sentinel.name.clone()));
        }

        for (position, def) in self.records.iter().enumerate() {
            let fail = |violation| IntegrityError::record(name_at(&self.ids, position), violation);

            if def.id.index() != position {
                return Err(fail(Violation::PositionMismatch {
                    position,
                    found: def.id.index(),
                }));
            }
            for (field, target) in [("genus", def.genus), ("species", def.species)] {
                if self.get(target).is_none() {
                    return Err(fail(Violation::DanglingReference {
                        field,
                        target: target.to_string(),
                    }));
                }
            }
            def.check_slots().map_err(fail)?;
        }
        Ok(())
    }

    /// The record for `id`, or the sentinel if `id` is outside the table
    pub fn record_for(&self, id: MonsterId) -> &MonsterDef {
        self.get(id).unwrap_or_else(|| self.sentinel())
    }

    /// The record for `id`, if `id` is inside the table
    pub fn get(&self, id: MonsterId) -> Option<&MonsterDef> {
        self.records.get(id.index())
    }

    /// The program-bug record at ordinal 0
    pub fn sentinel(&self) -> &MonsterDef {
        &self.records[MonsterId::PROGRAM_BUG.index()]
    }

    /// The identifier space this table is indexed by
    pub fn ids(&self) -> &IdSpace<MonsterId> {
        &self.ids
    }

    /// Species link of `id`
    pub fn species_of(&self, id: MonsterId) -> MonsterId {
        self.record_for(id).species
    }

    /// Genus link of `id`
    pub fn genus_of(&self, id: MonsterId) -> MonsterId {
        self.record_for(id).genus
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table is empty (never true for a validated table)
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records in ordinal order
    pub fn iter(&self) -> impl Iterator<Item = &MonsterDef> {
        self.records.iter()
    }
}

fn lookup_id(ids: &IdSpace<MonsterId>, name: &str) -> Result<MonsterId> {
    ids.id_of(name)
        .ok_or_else(|| IntegrityError::UnknownIdentifier(name.to_string()))
}

fn place(
    records: &mut [Option<MonsterDef>],
    id: MonsterId,
    name: &str,
    def: MonsterDef,
) -> Result<()> {
    let slot = &mut records[id.index()];
    if slot.is_some() {
        return Err(IntegrityError::DuplicateDefinition(name.to_string()));
    }
    *slot = Some(def);
    Ok(())
}

fn name_at(ids: &IdSpace<MonsterId>, position: usize) -> String {
    MonsterId::from_index(position)
        .and_then(|id| ids.name_of(id))
        .map(str::to_string)
        .unwrap_or_else(|| format!("ordinal {}", position))
}

fn genus_root(id: MonsterId, genus: &GenusEntry) -> MonsterDef {
    MonsterDef {
        corpse_tile: genus.corpse_tile.clone(),
        ..MonsterDef::dummy(
            id,
            genus.glyph,
            genus.colour,
            genus.name.clone(),
            genus.tile.clone(),
        )
    }
}

/// Turn a content entry into a record, resolving symbolic links
fn resolve_entry(
    ids: &IdSpace<MonsterId>,
    id: MonsterId,
    entry: &MonsterEntry,
) -> Result<MonsterDef> {
    let fail = |violation| IntegrityError::record(entry.id.as_str(), violation);
    let link = |field: &'static str, target: &str| {
        ids.id_of(target).ok_or_else(|| {
            fail(Violation::DanglingReference {
                field,
                target: target.to_string(),
            })
        })
    };

    let genus = link("genus", &entry.genus)?;
    let species = link("species", &entry.species)?;
    let resists = Resists::from_declared(&entry.resists, &entry.vulnerable).map_err(fail)?;
    let attacks = pad_attacks(&entry.attacks).map_err(fail)?;

    Ok(MonsterDef {
        id,
        glyph: entry.glyph,
        colour: entry.colour,
        name: entry.name.clone(),
        flags: entry.flags,
        resists,
        exp_mod: entry.exp_mod,
        genus,
        species,
        holiness: entry.holiness,
        willpower: entry.willpower,
        attacks,
        hit_dice: entry.hit_dice,
        avg_hp_10x: entry.avg_hp_10x,
        ac: entry.ac,
        ev: entry.ev,
        spells: entry.spells.clone(),
        leaves_corpse: entry.corpse,
        shout: entry.shout,
        intel: entry.intel,
        habitat: entry.habitat,
        speed: entry.speed,
        energy: entry.energy.into(),
        uses: entry.uses,
        size: entry.size,
        shape: entry.shape,
        tile: entry.tile.clone(),
        tile_variation: entry.tile_variation,
        corpse_tile: entry.corpse_tile.clone(),
    })
}
