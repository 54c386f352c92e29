//! Damage types and their mitigation sources
//!
//! 6 damage types: Physical, Magical, True, Fire, Ice, Poison
//! True bypasses all mitigation.
//! Physical is mitigated by armor (after penetration) plus resistance.
//! Every other type is mitigated by resistance alone.

use serde::{Deserialize, Serialize};

/// The 6 damage types
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DamageType {
    #[default]
    Physical,
    Magical,
    True,
    Fire,
    Ice,
    Poison,
}

/// Total number of damage types (for array indexing)
pub const DAMAGE_TYPE_COUNT: usize = 6;

/// Which defender stats mitigate a damage type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MitigationSource {
    /// Ignores armor and resistance entirely
    pub bypasses_mitigation: bool,
    /// Armor (after penetration) counts toward the total reduction
    pub uses_armor: bool,
}

impl MitigationSource {
    const RESISTANCE_ONLY: Self = Self {
        bypasses_mitigation: false,
        uses_armor: false,
    };
}

/// Mitigation sources, indexed by `DamageType::index()`
const MITIGATION_SOURCES: [MitigationSource; DAMAGE_TYPE_COUNT] = [
    // Physical
    MitigationSource {
        bypasses_mitigation: false,
        uses_armor: true,
    },
    // Magical
    MitigationSource::RESISTANCE_ONLY,
    // True
    MitigationSource {
        bypasses_mitigation: true,
        uses_armor: false,
    },
    // Fire
    MitigationSource::RESISTANCE_ONLY,
    // Ice
    MitigationSource::RESISTANCE_ONLY,
    // Poison
    MitigationSource::RESISTANCE_ONLY,
];

impl DamageType {
    /// Array index for this damage type (for per-type stat tables)
    pub fn index(self) -> usize {
        match self {
            Self::Physical => 0,
            Self::Magical => 1,
            Self::True => 2,
            Self::Fire => 3,
            Self::Ice => 4,
            Self::Poison => 5,
        }
    }

    /// Lowercase identifier, same as the serialized form
    pub fn name(self) -> &'static str {
        match self {
            Self::Physical => "physical",
            Self::Magical => "magical",
            Self::True => "true",
            Self::Fire => "fire",
            Self::Ice => "ice",
            Self::Poison => "poison",
        }
    }

    /// Which defender stats reduce damage of this type
    pub fn mitigation(self) -> MitigationSource {
        MITIGATION_SOURCES[self.index()]
    }

    /// All damage type variants
    pub fn all() -> &'static [DamageType] {
        &[
            Self::Physical,
            Self::Magical,
            Self::True,
            Self::Fire,
            Self::Ice,
            Self::Poison,
        ]
    }
}

impl std::fmt::Display for DamageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
