//! Boolean monster traits and holiness

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Boolean traits of a monster type
    ///
    /// In RON content these are written as `"WARM_BLOOD | SPEAKS"`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct MonsterFlags: u64 {
        const SPEAKS         = 1 << 0;
        const FLIES          = 1 << 1;
        const WARM_BLOOD     = 1 << 2;
        const COLD_BLOOD     = 1 << 3;
        const SEE_INVIS      = 1 << 4;
        const INVIS          = 1 << 5;
        const UNBLINDABLE    = 1 << 6;
        const BATTY          = 1 << 7;
        const CONFUSED       = 1 << 8;
        const FIGHTER        = 1 << 9;
        const ARCHER         = 1 << 10;
        const PREFER_RANGED  = 1 << 11;
        const FAST_REGEN     = 1 << 12;
        const STATIONARY     = 1 << 13;
        const NO_SKELETON    = 1 << 14;
        const WEB_IMMUNE     = 1 << 15;
        const NO_POLY_TO     = 1 << 16;
        /// Killing it grants no experience
        const NO_EXP_GAIN    = 1 << 17;
        /// Never counted as a threat
        const NO_THREAT      = 1 << 18;
        /// Never placed by level generation
        const CANT_SPAWN     = 1 << 19;
        const UNFINISHED     = 1 << 20;

        const NOT_DANGEROUS  = Self::NO_EXP_GAIN.bits() | Self::NO_THREAT.bits();
    }
}

bitflags! {
    /// What a monster fundamentally is; more than one may apply
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Holiness: u8 {
        const HOLY      = 1 << 0;
        const NATURAL   = 1 << 1;
        const UNDEAD    = 1 << 2;
        const DEMONIC   = 1 << 3;
        const NONLIVING = 1 << 4;
        const PLANT     = 1 << 5;
    }
}
