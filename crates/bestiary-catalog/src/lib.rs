//! Bestiary Catalog - Validated monster table and read-only lookup facade
//!
//! This crate assembles loaded content into a [`Catalog`]:
//! - [`MonsterTable`]: records indexed by id, validated once at build time
//! - [`Resolver`]: genus/species inheritance with a hop bound
//! - [`Catalog`]: the lookup surface other systems use
//! - [`builtin()`]: the bundled content, built once per process
//!
//! ## Example
//!
//! ```
//! use bestiary_catalog::{builtin, InheritedTrait, TraitValue};
//! use bestiary_core::ResistKind;
//!
//! let catalog = builtin();
//! let wizard = catalog.monster_id("ORC_WIZARD").unwrap();
//!
//! assert!(catalog.is_spawnable(wizard));
//! assert_eq!(catalog.display_name_for(wizard), "orc wizard");
//! assert_eq!(
//!     catalog.effective_trait(wizard, InheritedTrait::CorpseTile),
//!     TraitValue::Tile("corpse_orc"),
//! );
//! assert_eq!(catalog.resistance_level(wizard, ResistKind::Fire), 0);
//! ```
//!
//! ## Feature Flags
//!
//! - `save-compat` (default): keep retired ids in the compiled identifier
//!   spaces so ordinals from older saves still resolve. Turning it off
//!   closes the compatibility window and renumbers later ids.

mod builtin;
mod catalog;
mod config;
mod error;
mod resolver;
mod table;

pub use builtin::{builtin, load_builtin};
pub use catalog::Catalog;
pub use config::{CatalogConfig, DEFAULT_MAX_HOPS, MAX_HOPS_LIMIT};
pub use error::{Error, Result};
pub use resolver::{InheritedTrait, Resolution, Resolver, TraitValue};
pub use table::MonsterTable;
