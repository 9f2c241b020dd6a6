//! Identity types for catalog entries
//!
//! Ids are dense ordinals into a namespace. The raw ordinal is what ends up
//! in save data, so an id's value must never change once it has shipped.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// A dense, integer-backed identifier drawn from one namespace
pub trait Ident: Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display {
    /// Name of the namespace, used in diagnostics
    const NAMESPACE: &'static str;

    /// Build an id from a table position, `None` if it does not fit the raw type
    fn from_index(index: usize) -> Option<Self>;

    /// Table position of this id
    fn index(self) -> usize;
}

/// Identifier of a monster type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonsterId(pub u16);

impl MonsterId {
    /// The "program bug" sentinel every unresolvable lookup falls back to
    pub const PROGRAM_BUG: MonsterId = MonsterId(0);

    /// Create a monster ID from its raw ordinal (e.g. read from a save file)
    pub fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Get the raw ordinal
    pub fn raw(&self) -> u16 {
        self.0
    }
}

impl Ident for MonsterId {
    const NAMESPACE: &'static str = "monster";

    fn from_index(index: usize) -> Option<Self> {
        u16::try_from(index).ok().map(Self)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for MonsterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "monster:{}", self.0)
    }
}

/// Identifier of a spellbook type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub u16);

impl BookId {
    /// Create a book ID from its raw ordinal
    pub fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Get the raw ordinal
    pub fn raw(&self) -> u16 {
        self.0
    }
}

impl Ident for BookId {
    const NAMESPACE: &'static str = "book";

    fn from_index(index: usize) -> Option<Self> {
        u16::try_from(index).ok().map(Self)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "book:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monster_id() {
        let id = MonsterId::from_raw(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(id.index(), 42);
        assert_eq!(format!("{}", id), "monster:42");
    }

    #[test]
    fn test_book_id() {
        let id = BookId::from_raw(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "book:7");
    }

    #[test]
    fn test_from_index_overflow() {
        assert_eq!(MonsterId::from_index(65_535), Some(MonsterId(65_535)));
        assert_eq!(MonsterId::from_index(65_536), None);
        assert_eq!(BookId::from_index(usize::MAX), None);
    }

    #[test]
    fn test_ids_serialize_as_raw_ordinals() {
        let encoded = ron::to_string(&MonsterId(17)).unwrap();
        assert_eq!(encoded, "17");
        let decoded: BookId = ron::from_str("3").unwrap();
        assert_eq!(decoded, BookId(3));
    }
}
