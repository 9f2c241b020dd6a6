//! Fixed-arity attack slots

use crate::error::Violation;
use serde::{Deserialize, Serialize};

/// Number of attack slots every record carries
pub const MAX_ATTACKS: usize = 4;

/// Highest base damage a single attack may deal
pub const MAX_ATTACK_DAMAGE: u16 = 250;

/// How an attack is delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AttackKind {
    /// Empty slot
    #[default]
    None,
    Hit,
    Bite,
    Sting,
    Claw,
    Peck,
    Gore,
    Kick,
    Butt,
    Touch,
    Trample,
    Constrict,
    Engulf,
    TentacleSlap,
    TailSlap,
    /// Only attacks with a wielded weapon
    WeaponOnly,
}

/// Extra effect riding on an attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AttackFlavour {
    #[default]
    Plain,
    Fire,
    Cold,
    Elec,
    Poison,
    PoisonStrong,
    Acid,
    Drain,
    Vampiric,
    Holy,
    Vuln,
    Confuse,
    Paralyse,
    Blink,
    Trample,
    Engulf,
}

/// One attack descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttackSlot {
    pub kind: AttackKind,
    #[serde(default)]
    pub flavour: AttackFlavour,
    #[serde(default)]
    pub damage: u16,
}

impl AttackSlot {
    /// The canonical empty slot
    pub const EMPTY: AttackSlot = AttackSlot {
        kind: AttackKind::None,
        flavour: AttackFlavour::Plain,
        damage: 0,
    };

    /// Create a new attack slot
    pub const fn new(kind: AttackKind, flavour: AttackFlavour, damage: u16) -> Self {
        Self {
            kind,
            flavour,
            damage,
        }
    }

    /// Create a plain attack
    pub const fn plain(kind: AttackKind, damage: u16) -> Self {
        Self::new(kind, AttackFlavour::Plain, damage)
    }

    /// Check if this slot carries no attack
    pub fn is_empty(&self) -> bool {
        self.kind == AttackKind::None
    }

    /// Check the slot against the empty-slot law and the damage range
    pub fn check(&self, slot: usize) -> Result<(), Violation> {
        if self.is_empty() {
            if *self != Self::EMPTY {
                return Err(Violation::NonCanonicalEmptySlot { slot });
            }
        } else if !(1..=MAX_ATTACK_DAMAGE).contains(&self.damage) {
            return Err(Violation::AttackDamageOutOfRange {
                slot,
                damage: self.damage,
                max: MAX_ATTACK_DAMAGE,
            });
        }
        Ok(())
    }
}

impl Default for AttackSlot {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// The full attack array of a record
pub type Attacks = [AttackSlot; MAX_ATTACKS];

/// Pad a declared attack list out to [`MAX_ATTACKS`] with empty slots
///
/// Declared slots are kept as written so the empty-slot law can still
/// reject a malformed one.
pub fn pad_attacks(declared: &[AttackSlot]) -> Result<Attacks, Violation> {
    if declared.len() > MAX_ATTACKS {
        return Err(Violation::TooManyAttacks {
            count: declared.len(),
        });
    }
    let mut attacks = [AttackSlot::EMPTY; MAX_ATTACKS];
    attacks[..declared.len()].copy_from_slice(declared);
    Ok(attacks)
}

/// Check every slot of an attack array
pub fn check_attacks(attacks: &Attacks) -> Result<(), Violation> {
    attacks
        .iter()
        .enumerate()
        .try_for_each(|(slot, attack)| attack.check(slot))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot_is_canonical() {
        assert!(AttackSlot::EMPTY.is_empty());
        assert_eq!(AttackSlot::EMPTY.check(0), Ok(()));
        assert_eq!(AttackSlot::default(), AttackSlot::EMPTY);
    }

    #[test]
    fn test_non_canonical_empty_slot() {
        let slot = AttackSlot::new(AttackKind::None, AttackFlavour::Fire, 0);
        assert_eq!(
            slot.check(2),
            Err(Violation::NonCanonicalEmptySlot { slot: 2 })
        );

        let slot = AttackSlot::new(AttackKind::None, AttackFlavour::Plain, 5);
        assert!(slot.check(0).is_err());
    }

    #[test]
    fn test_damage_range() {
        assert!(AttackSlot::plain(AttackKind::Bite, 20).check(0).is_ok());
        assert!(AttackSlot::plain(AttackKind::Bite, 0).check(0).is_err());
        assert!(AttackSlot::plain(AttackKind::Bite, MAX_ATTACK_DAMAGE + 1)
            .check(0)
            .is_err());
    }

    #[test]
    fn test_pad_attacks() {
        let bite = AttackSlot::plain(AttackKind::Bite, 20);
        let claw = AttackSlot::plain(AttackKind::Claw, 5);
        let attacks = pad_attacks(&[bite, claw, claw]).unwrap();
        assert_eq!(attacks, [bite, claw, claw, AttackSlot::EMPTY]);
        assert!(check_attacks(&attacks).is_ok());
    }

    #[test]
    fn test_too_many_attacks() {
        let hit = AttackSlot::plain(AttackKind::Hit, 1);
        assert_eq!(
            pad_attacks(&[hit; 5]),
            Err(Violation::TooManyAttacks { count: 5 })
        );
    }

    #[test]
    fn test_parse_from_ron() {
        let slot: AttackSlot = ron::from_str("(kind: Bite, flavour: Fire, damage: 6)").unwrap();
        assert_eq!(slot, AttackSlot::new(AttackKind::Bite, AttackFlavour::Fire, 6));

        let slot: AttackSlot = ron::from_str("(kind: Claw, damage: 24)").unwrap();
        assert_eq!(slot.flavour, AttackFlavour::Plain);
    }
}
