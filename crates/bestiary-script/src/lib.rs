//! Bestiary Script - RON loader and schema definitions
//!
//! Loads catalog content from RON files:
//! - Identifier space declarations (permanent, retired and generated ids)
//! - Monster definitions with symbolic genus/species references
//! - Genus roots
//!
//! ## Save Compatibility Feature
//!
//! The default `save-compat` feature keeps retired ids in every compiled
//! identifier space. Disable it once old saves no longer need to load:
//! ```toml
//! bestiary-script = { version = "0.1", default-features = false }
//! ```

mod error;
mod loader;
mod schema;

pub use error::{Error, Result};
pub use loader::{CatalogDefs, Loader};
pub use schema::ids::INCLUDE_RETIRED;
pub use schema::{AliasDef, GeneratedId, GenusEntry, IdLine, IdSpaceDef, MonsterDefs, MonsterEntry};
