//! Error types for bestiary-core
//!
//! Everything here describes broken content. None of these errors are
//! recoverable at runtime: a catalog that fails integrity checks must not
//! be handed to the game.

use crate::attack::MAX_ATTACKS;
use crate::energy::EnergyAxis;
use crate::resist::ResistKind;
use thiserror::Error;

/// Errors raised while building an identifier space
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdSpaceError {
    #[error("Duplicate {namespace} id name: {name}")]
    DuplicateName { namespace: &'static str, name: String },

    #[error("Alias {alias} points at unknown {namespace} id {target}")]
    UnknownAliasTarget {
        namespace: &'static str,
        alias: String,
        target: String,
    },

    #[error("Permanent {namespace} id {name} declared after the generated boundary")]
    PermanentAfterBoundary { namespace: &'static str, name: String },

    #[error("No generated boundary declared for the {0} namespace")]
    MissingBoundary(&'static str),

    #[error("The {0} namespace has no permanent ids")]
    EmptyPermanentRange(&'static str),

    #[error("The {namespace} namespace holds {count} ids, more than its raw type can address")]
    Overflow { namespace: &'static str, count: usize },

    #[error("Generated {namespace} id {name} uses unknown template {template}")]
    UnknownTemplate {
        namespace: &'static str,
        name: String,
        template: String,
    },

    #[error("Generated {namespace} id {name} uses template {template}, which is not a live permanent id")]
    TemplateNotPermanent {
        namespace: &'static str,
        name: String,
        template: String,
    },
}

/// A single rule broken by one definition record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("record sits at position {position} but carries id {found}")]
    PositionMismatch { position: usize, found: usize },

    #[error("{field} points at {target}, which does not resolve")]
    DanglingReference { field: &'static str, target: String },

    #[error("attack slot {slot} has no attack kind but is not the canonical empty slot")]
    NonCanonicalEmptySlot { slot: usize },

    #[error("attack slot {slot} deals {damage} damage, outside 1..={max}")]
    AttackDamageOutOfRange { slot: usize, damage: u16, max: u16 },

    #[error("{count} attacks declared, at most {max} allowed", max = MAX_ATTACKS)]
    TooManyAttacks { count: usize },

    #[error("{kind:?} resistance magnitude {level} is outside 0..=3")]
    ResistanceOutOfRange { kind: ResistKind, level: u8 },

    #[error("{0:?} is declared both resisted and vulnerable")]
    ResistAndVulnerable(ResistKind),

    #[error("willpower {value} is outside 0..={max}")]
    WillpowerOutOfRange { value: i32, max: i32 },

    #[error("{axis:?} energy cost {value} is outside 1..={max}")]
    EnergyOutOfRange { axis: EnergyAxis, value: i32, max: i32 },
}

/// Load-time integrity error for a catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("Identifier space error: {0}")]
    IdSpace(#[from] IdSpaceError),

    #[error("Invalid definition for {monster}: {violation}")]
    Record { monster: String, violation: Violation },

    #[error("No definition for permanent id {0}")]
    MissingDefinition(String),

    #[error("Duplicate definition: {0}")]
    DuplicateDefinition(String),

    #[error("Definition for {0}, which is not a known id")]
    UnknownIdentifier(String),

    #[error("Sentinel record missing at ordinal 0")]
    MissingSentinel,

    #[error("Sentinel record {0} is spawnable")]
    SpawnableSentinel(String),
}

impl IntegrityError {
    /// Attach a record-level violation to the monster that broke it
    pub fn record(monster: impl Into<String>, violation: Violation) -> Self {
        IntegrityError::Record {
            monster: monster.into(),
            violation,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, IntegrityError>;
