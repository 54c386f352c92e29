//! Attacker and defender stats
//!
//! Both are plain, immutable inputs to a single damage resolution. Nothing here
//! is validated: out-of-range values flow through the formulas unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::damage_type::{DamageType, DAMAGE_TYPE_COUNT};

/// Per-damage-type resistance values. Types never set read as 0.
///
/// Serialized as a map keyed by damage type name, e.g. `{ fire = 30.0, ice = -20.0 }`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "BTreeMap<DamageType, f64>", into = "BTreeMap<DamageType, f64>")]
pub struct Resistances {
    /// Indexed by DamageType::index()
    values: [f64; DAMAGE_TYPE_COUNT],
}

impl Resistances {
    /// No resistance to anything
    pub fn new() -> Self {
        Self::default()
    }

    /// Resistance against the given type
    pub fn get(&self, damage_type: DamageType) -> f64 {
        self.values[damage_type.index()]
    }

    /// Overwrite the resistance against the given type
    pub fn set(&mut self, damage_type: DamageType, value: f64) {
        self.values[damage_type.index()] = value;
    }

    /// Builder-style `set`
    pub fn with(mut self, damage_type: DamageType, value: f64) -> Self {
        self.set(damage_type, value);
        self
    }

    /// Non-zero entries, in damage type order
    pub fn iter(&self) -> impl Iterator<Item = (DamageType, f64)> + '_ {
        DamageType::all()
            .iter()
            .map(|&t| (t, self.get(t)))
            .filter(|&(_, value)| value != 0.0)
    }
}

impl From<BTreeMap<DamageType, f64>> for Resistances {
    fn from(map: BTreeMap<DamageType, f64>) -> Self {
        let mut resistances = Self::new();
        for (damage_type, value) in map {
            resistances.set(damage_type, value);
        }
        resistances
    }
}

impl From<Resistances> for BTreeMap<DamageType, f64> {
    fn from(resistances: Resistances) -> Self {
        resistances.iter().collect()
    }
}

impl FromIterator<(DamageType, f64)> for Resistances {
    fn from_iter<I: IntoIterator<Item = (DamageType, f64)>>(iter: I) -> Self {
        let mut resistances = Self::new();
        for (damage_type, value) in iter {
            resistances.set(damage_type, value);
        }
        resistances
    }
}

/// Offensive stats of the attacking entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attacker {
    pub name: String,
    pub base_damage: f64,
    /// Chance of a critical hit (0.0-1.0)
    #[serde(default)]
    pub crit_chance: f64,
    /// Damage multiplier applied on a critical hit
    #[serde(default = "default_crit_multiplier")]
    pub crit_multiplier: f64,
    /// Fraction of the defender's armor ignored (0.0-1.0)
    #[serde(default)]
    pub armor_penetration: f64,
}

fn default_crit_multiplier() -> f64 {
    2.0
}

impl Attacker {
    /// Create an attacker with no crit chance, a 2x crit multiplier and no penetration
    pub fn new(name: impl Into<String>, base_damage: f64) -> Self {
        Self {
            name: name.into(),
            base_damage,
            crit_chance: 0.0,
            crit_multiplier: default_crit_multiplier(),
            armor_penetration: 0.0,
        }
    }

    pub fn with_crit(mut self, chance: f64, multiplier: f64) -> Self {
        self.crit_chance = chance;
        self.crit_multiplier = multiplier;
        self
    }

    pub fn with_armor_penetration(mut self, armor_penetration: f64) -> Self {
        self.armor_penetration = armor_penetration;
        self
    }
}

/// Mitigation stats of the defending entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defender {
    pub name: String,
    pub armor: f64,
    #[serde(default)]
    pub resistances: Resistances,
}

impl Defender {
    /// Create a defender with the given armor and no resistances
    pub fn new(name: impl Into<String>, armor: f64) -> Self {
        Self {
            name: name.into(),
            armor,
            resistances: Resistances::new(),
        }
    }

    pub fn with_resistance(mut self, damage_type: DamageType, value: f64) -> Self {
        self.resistances.set(damage_type, value);
        self
    }

    /// Resistance against the given type (0 when unset)
    pub fn resistance(&self, damage_type: DamageType) -> f64 {
        self.resistances.get(damage_type)
    }
}
