//! RON content loader

use crate::error::{Error, Result};
use crate::schema::{GenusEntry, IdSpaceDef, MonsterDefs, MonsterEntry};
use bestiary_core::{BookId, Ident, MonsterId};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Loaded catalog content, not yet validated against its identifier spaces
#[derive(Debug, Default)]
pub struct CatalogDefs {
    /// Monster identifier space
    pub monster_ids: Option<IdSpaceDef>,
    /// Spellbook identifier space
    pub book_ids: Option<IdSpaceDef>,
    /// Monster definitions by symbolic id, in load order
    pub monsters: IndexMap<String, MonsterEntry>,
    /// Genus roots by symbolic id, in load order
    pub genera: IndexMap<String, GenusEntry>,
}

impl CatalogDefs {
    /// Create empty catalog definitions
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a monster definition
    pub fn get_monster(&self, id: &str) -> Option<&MonsterEntry> {
        self.monsters.get(id)
    }

    /// Get a genus root
    pub fn get_genus(&self, id: &str) -> Option<&GenusEntry> {
        self.genera.get(id)
    }

    /// Check if a symbolic id already has a definition of either kind
    pub fn is_defined(&self, id: &str) -> bool {
        self.monsters.contains_key(id) || self.genera.contains_key(id)
    }
}

/// Loader for RON content files
pub struct Loader {
    defs: CatalogDefs,
}

impl Loader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            defs: CatalogDefs::new(),
        }
    }

    /// Load a single RON file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading content file");

        let stem = path.file_stem().and_then(|n| n.to_str()).unwrap_or("");
        self.load_named_str(stem, &content)
    }

    /// Load RON text, picking the schema from its file stem
    ///
    /// `ids` or `*_ids` stems are identifier spaces; stems naming monsters
    /// or genera are definition files. Anything else is parsed as an
    /// identifier space first and as definitions second.
    pub fn load_named_str(&mut self, stem: &str, content: &str) -> Result<()> {
        if stem == "ids" || stem.ends_with("_ids") {
            return self.load_id_space_str(content);
        }
        if stem.contains("monster") || stem.contains("genera") {
            return self.load_monsters_str(content);
        }

        if let Ok(def) = ron::from_str::<IdSpaceDef>(content) {
            return self.add_id_space(def);
        }
        let file: MonsterDefs = ron::from_str(content)?;
        if file.monsters.is_empty() && file.genera.is_empty() {
            return Err(Error::InvalidSchema(format!(
                "Could not classify content file {:?}",
                stem
            )));
        }
        self.add_monsters(file)
    }

    /// Load an identifier space declaration from a RON string
    pub fn load_id_space_str(&mut self, content: &str) -> Result<()> {
        let def: IdSpaceDef = ron::from_str(content)?;
        self.add_id_space(def)
    }

    /// Load monster and genus definitions from a RON string
    pub fn load_monsters_str(&mut self, content: &str) -> Result<()> {
        let file: MonsterDefs = ron::from_str(content)?;
        self.add_monsters(file)
    }

    fn add_id_space(&mut self, def: IdSpaceDef) -> Result<()> {
        let slot = match def.namespace.as_str() {
            ns if ns == MonsterId::NAMESPACE => &mut self.defs.monster_ids,
            ns if ns == BookId::NAMESPACE => &mut self.defs.book_ids,
            other => return Err(Error::UnknownNamespace(other.to_string())),
        };
        if slot.is_some() {
            return Err(Error::DuplicateDefinition(format!(
                "{} identifier space",
                def.namespace
            )));
        }
        debug!(
            namespace = %def.namespace,
            permanent = def.permanent.len(),
            generated = def.generated.len(),
            "loaded identifier space"
        );
        *slot = Some(def);
        Ok(())
    }

    fn add_monsters(&mut self, file: MonsterDefs) -> Result<()> {
        let (monsters, genera) = (file.monsters.len(), file.genera.len());

        for monster in file.monsters {
            if self.defs.is_defined(&monster.id) {
                return Err(Error::DuplicateDefinition(monster.id));
            }
            self.defs.monsters.insert(monster.id.clone(), monster);
        }
        for genus in file.genera {
            if self.defs.is_defined(&genus.id) {
                return Err(Error::DuplicateDefinition(genus.id));
            }
            self.defs.genera.insert(genus.id.clone(), genus);
        }

        debug!(monsters, genera, "loaded monster definitions");
        Ok(())
    }

    /// Load all RON files from a directory
    pub fn load_directory(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if !path.is_dir() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Not a directory: {:?}", path),
            )));
        }

        let mut paths = fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        // Load order decides definition order, keep it stable across platforms
        paths.sort();

        for file_path in paths {
            if file_path.extension().map(|e| e == "ron").unwrap_or(false) {
                self.load_file(&file_path)?;
            } else if file_path.is_dir() {
                self.load_directory(&file_path)?;
            }
        }

        Ok(())
    }

    /// Finish loading and return the catalog definitions
    pub fn finish(self) -> CatalogDefs {
        self.defs
    }

    /// Get the current definitions (for inspection during loading)
    pub fn defs(&self) -> &CatalogDefs {
        &self.defs
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONSTERS: &str = r#"
    (
        monsters: [
            (
                id: "HOUND",
                glyph: 'h',
                colour: Yellow,
                name: "hound",
                genus: "HOUND",
                species: "HOUND",
                hit_dice: 3,
                avg_hp_10x: 165,
            ),
            (
                id: "JACKAL",
                glyph: 'h',
                colour: Brown,
                name: "jackal",
                genus: "HOUND",
                species: "JACKAL",
                hit_dice: 1,
                avg_hp_10x: 55,
            ),
        ],
        genera: [
            (id: "BEAR", glyph: 'h', colour: LightGrey, name: "bear"),
        ],
    )
    "#;

    #[test]
    fn test_load_monsters() {
        let mut loader = Loader::new();
        loader.load_monsters_str(MONSTERS).unwrap();

        let defs = loader.finish();
        assert!(defs.get_monster("HOUND").is_some());
        assert!(defs.get_monster("JACKAL").is_some());
        assert!(defs.get_genus("BEAR").is_some());
        assert_eq!(
            defs.monsters.keys().collect::<Vec<_>>(),
            vec!["HOUND", "JACKAL"]
        );
    }

    #[test]
    fn test_duplicate_monster() {
        let mut loader = Loader::new();
        loader.load_monsters_str(MONSTERS).unwrap();
        let err = loader.load_monsters_str(MONSTERS).unwrap_err();
        assert!(matches!(err, Error::DuplicateDefinition(id) if id == "HOUND"));
    }

    #[test]
    fn test_named_str_trusts_the_stem() {
        let commented = format!("// Book namespace: see book_ids.ron\n{}", MONSTERS);
        let mut loader = Loader::new();
        loader.load_named_str("monsters", &commented).unwrap();
        let renamed = commented
            .replace("HOUND", "WOLF")
            .replace("JACKAL", "FOX")
            .replace("BEAR", "SPIDER");
        loader.load_named_str("spiders", &renamed).unwrap();
        loader
            .load_named_str("book_ids", r#"(namespace: "book", permanent: [Live("FEN")])"#)
            .unwrap();

        let defs = loader.finish();
        assert!(defs.get_monster("JACKAL").is_some());
        assert!(defs.get_monster("FOX").is_some());
        assert!(defs.get_genus("SPIDER").is_some());
        assert!(defs.book_ids.is_some());
        assert!(defs.monster_ids.is_none());
    }

    #[test]
    fn test_named_str_falls_back_on_content() {
        let mut loader = Loader::new();
        loader
            .load_named_str("core", r#"(namespace: "monster", permanent: [Live("PROGRAM_BUG")])"#)
            .unwrap();
        assert!(loader.defs().monster_ids.is_some());

        let err = loader.load_named_str("notes", "(title: \"nothing here\")").unwrap_err();
        assert!(matches!(err, Error::InvalidSchema(_)));
    }

    #[test]
    fn test_load_id_spaces() {
        let mut loader = Loader::new();
        loader
            .load_id_space_str(r#"(namespace: "monster", permanent: [Live("PROGRAM_BUG")])"#)
            .unwrap();
        loader
            .load_id_space_str(r#"(namespace: "book", permanent: [Live("MINOR_MAGIC")])"#)
            .unwrap();

        let defs = loader.defs();
        assert!(defs.monster_ids.is_some());
        assert!(defs.book_ids.is_some());
    }

    #[test]
    fn test_rejects_second_id_space_for_namespace() {
        let mut loader = Loader::new();
        let content = r#"(namespace: "book", permanent: [Live("MINOR_MAGIC")])"#;
        loader.load_id_space_str(content).unwrap();
        assert!(matches!(
            loader.load_id_space_str(content),
            Err(Error::DuplicateDefinition(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_namespace() {
        let mut loader = Loader::new();
        let err = loader
            .load_id_space_str(r#"(namespace: "spell", permanent: [])"#)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownNamespace(ns) if ns == "spell"));
    }

    #[test]
    fn test_parse_error_surfaces() {
        let mut loader = Loader::new();
        assert!(matches!(
            loader.load_monsters_str("(monsters: [(id: 5)])"),
            Err(Error::Ron(_))
        ));
    }
}
