//! Per-action energy cost vectors
//!
//! A monster spends energy from its speed pool on every action. Each action
//! category has its own cost; callers pick the axis for the action they are
//! performing and never sum axes.

use crate::error::Violation;
use serde::{Deserialize, Serialize};

/// Cost of a normal action
pub const DEFAULT_ACTION_COST: i32 = 10;

/// Default pickup cost, in percent of a normal action
pub const DEFAULT_PICKUP_PERCENT: i32 = 100;

/// Highest value any single axis may hold
pub const MAX_ENERGY_COST: i32 = 1000;

/// One action category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EnergyAxis {
    Move = 0,
    Swim = 1,
    Attack = 2,
    Missile = 3,
    Spell = 4,
    Special = 5,
    Item = 6,
    /// Item pickup, scaled by ten relative to the other axes
    PickupPercent = 7,
}

impl EnergyAxis {
    /// Every axis, in storage order
    pub const ALL: [EnergyAxis; 8] = [
        EnergyAxis::Move,
        EnergyAxis::Swim,
        EnergyAxis::Attack,
        EnergyAxis::Missile,
        EnergyAxis::Spell,
        EnergyAxis::Special,
        EnergyAxis::Item,
        EnergyAxis::PickupPercent,
    ];
}

/// Energy cost per action category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnergyCost([i32; 8]);

impl EnergyCost {
    /// Normal cost for everything
    pub const DEFAULT: EnergyCost = EnergyCost([10, 10, 10, 10, 10, 10, 10, 100]);

    /// The same cost on every axis
    pub const fn uniform(cost: i32) -> Self {
        EnergyCost([cost; 8])
    }

    /// Custom movement and swimming cost
    pub const fn move_energy(cost: i32) -> Self {
        EnergyCost([cost, cost, 10, 10, 10, 10, 10, 100])
    }

    /// Custom cost for every non-movement action
    pub const fn action_energy(cost: i32) -> Self {
        EnergyCost([10, 10, cost, cost, cost, cost, cost, cost.saturating_mul(10)])
    }

    /// Custom melee cost
    pub const fn attack_energy(cost: i32) -> Self {
        EnergyCost([10, 10, cost, 10, 10, 10, 10, 100])
    }

    /// Custom ranged-attack cost
    pub const fn missile_energy(cost: i32) -> Self {
        EnergyCost([10, 10, 10, cost, 10, 10, 10, 100])
    }

    /// Custom spellcasting cost
    pub const fn spell_energy(cost: i32) -> Self {
        EnergyCost([10, 10, 10, 10, cost, 10, 10, 100])
    }

    /// Custom swimming cost
    pub const fn swim_energy(cost: i32) -> Self {
        EnergyCost([10, cost, 10, 10, 10, 10, 10, 100])
    }

    /// Override one axis, leaving the rest alone
    pub const fn with(mut self, axis: EnergyAxis, cost: i32) -> Self {
        self.0[axis as usize] = cost;
        self
    }

    /// Cost on one axis
    pub const fn cost(&self, axis: EnergyAxis) -> i32 {
        self.0[axis as usize]
    }

    /// All eight axes
    pub fn as_array(&self) -> [i32; 8] {
        self.0
    }

    /// Check that every axis is within `1..=MAX_ENERGY_COST`
    pub fn check(&self) -> Result<(), Violation> {
        for axis in EnergyAxis::ALL {
            let value = self.cost(axis);
            if !(1..=MAX_ENERGY_COST).contains(&value) {
                return Err(Violation::EnergyOutOfRange {
                    axis,
                    value,
                    max: MAX_ENERGY_COST,
                });
            }
        }
        Ok(())
    }
}

impl Default for EnergyCost {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// How content declares an energy vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EnergyPattern {
    #[default]
    Default,
    Uniform(i32),
    Move(i32),
    Action(i32),
    Attack(i32),
    Missile(i32),
    Spell(i32),
    Swim(i32),
    Custom([i32; 8]),
}

impl From<EnergyPattern> for EnergyCost {
    fn from(pattern: EnergyPattern) -> Self {
        match pattern {
            EnergyPattern::Default => EnergyCost::DEFAULT,
            EnergyPattern::Uniform(x) => EnergyCost::uniform(x),
            EnergyPattern::Move(x) => EnergyCost::move_energy(x),
            EnergyPattern::Action(x) => EnergyCost::action_energy(x),
            EnergyPattern::Attack(x) => EnergyCost::attack_energy(x),
            EnergyPattern::Missile(x) => EnergyCost::missile_energy(x),
            EnergyPattern::Spell(x) => EnergyCost::spell_energy(x),
            EnergyPattern::Swim(x) => EnergyCost::swim_energy(x),
            EnergyPattern::Custom(axes) => EnergyCost(axes),
        }
    }
}
