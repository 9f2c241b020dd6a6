//! Packed resistance words
//!
//! Each [`ResistKind`] owns a 2-bit magnitude field (bits `2k..2k+2`) and a
//! separate vulnerability bit (bit `32 + k`). No two kinds share bits, and
//! a vulnerability is never a negative magnitude.

use crate::error::Violation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest resistance magnitude (near-immune)
pub const MAX_RESIST_LEVEL: u8 = 3;

const LEVEL_BITS: u32 = 2;
const LEVEL_MASK: u64 = 0b11;
const VULN_SHIFT: u32 = 32;

/// A damage category a monster can resist or be vulnerable to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum ResistKind {
    Poison = 0,
    Fire = 1,
    Cold = 2,
    Elec = 3,
    Neg = 4,
    Miasma = 5,
    Corr = 6,
    Torment = 7,
    Petrify = 8,
    Damnation = 9,
    Steam = 10,
    Tornado = 11,
}

impl ResistKind {
    /// Every resistance kind, in bit order
    pub const ALL: [ResistKind; 12] = [
        ResistKind::Poison,
        ResistKind::Fire,
        ResistKind::Cold,
        ResistKind::Elec,
        ResistKind::Neg,
        ResistKind::Miasma,
        ResistKind::Corr,
        ResistKind::Torment,
        ResistKind::Petrify,
        ResistKind::Damnation,
        ResistKind::Steam,
        ResistKind::Tornado,
    ];

    const fn level_shift(self) -> u32 {
        self as u32 * LEVEL_BITS
    }

    const fn vuln_bit(self) -> u64 {
        1 << (VULN_SHIFT + self as u32)
    }
}

/// Resistance magnitudes and vulnerabilities packed into one word
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resists(u64);

impl Resists {
    /// No resistances, no vulnerabilities
    pub const NONE: Resists = Resists(0);

    /// Set `kind` to `level`, saturating at [`MAX_RESIST_LEVEL`]
    pub const fn with(self, kind: ResistKind, level: u8) -> Self {
        let level = if level > MAX_RESIST_LEVEL {
            MAX_RESIST_LEVEL
        } else {
            level
        };
        let shift = kind.level_shift();
        let cleared = self.0 & !(LEVEL_MASK << shift);
        Resists(cleared | ((level as u64) << shift))
    }

    /// Set several kinds to the same level at once
    pub fn with_all(self, kinds: &[ResistKind], level: u8) -> Self {
        kinds.iter().fold(self, |acc, &kind| acc.with(kind, level))
    }

    /// Mark `kind` as a vulnerability
    pub const fn vulnerable(self, kind: ResistKind) -> Self {
        Resists(self.0 | kind.vuln_bit())
    }

    /// Magnitude of `kind`, `0..=3`
    pub const fn level(self, kind: ResistKind) -> u8 {
        ((self.0 >> kind.level_shift()) & LEVEL_MASK) as u8
    }

    /// Check if `kind` is a vulnerability
    pub const fn is_vulnerable(self, kind: ResistKind) -> bool {
        self.0 & kind.vuln_bit() != 0
    }

    /// The raw packed word
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Check if nothing is resisted and nothing is a vulnerability
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Build a packed word from declared levels, rejecting bad content
    ///
    /// A level above [`MAX_RESIST_LEVEL`] or a kind that is both resisted and
    /// vulnerable is a content defect.
    pub fn from_declared(
        levels: &[(ResistKind, u8)],
        vulnerabilities: &[ResistKind],
    ) -> Result<Self, Violation> {
        let mut resists = Resists::NONE;
        for &(kind, level) in levels {
            if level > MAX_RESIST_LEVEL {
                return Err(Violation::ResistanceOutOfRange { kind, level });
            }
            resists = resists.with(kind, level);
        }
        for &kind in vulnerabilities {
            if resists.level(kind) > 0 {
                return Err(Violation::ResistAndVulnerable(kind));
            }
            resists = resists.vulnerable(kind);
        }
        Ok(resists)
    }

    /// Check that no kind is both resisted and vulnerable
    pub fn check(self) -> Result<(), Violation> {
        match ResistKind::ALL
            .into_iter()
            .find(|&kind| self.level(kind) > 0 && self.is_vulnerable(kind))
        {
            Some(kind) => Err(Violation::ResistAndVulnerable(kind)),
            None => Ok(()),
        }
    }

    /// Iterate over kinds with a non-zero magnitude
    pub fn iter(self) -> impl Iterator<Item = (ResistKind, u8)> {
        ResistKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.level(kind)))
            .filter(|&(_, level)| level > 0)
    }

    /// Iterate over vulnerabilities
    pub fn vulnerabilities(self) -> impl Iterator<Item = ResistKind> {
        ResistKind::ALL
            .into_iter()
            .filter(move |&kind| self.is_vulnerable(kind))
    }
}

impl fmt::Debug for Resists {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resists")
            .field("levels", &self.iter().collect::<Vec<_>>())
            .field("vulnerable", &self.vulnerabilities().collect::<Vec<_>>())
            .finish()
    }
}
