//! Schema definitions for RON content

pub mod ids;
pub mod monster;

pub use ids::{AliasDef, GeneratedId, IdLine, IdSpaceDef};
pub use monster::{GenusEntry, MonsterDefs, MonsterEntry};
