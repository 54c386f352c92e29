//! Hit resolution pipeline
//!
//! Pipeline: base_damage * skill_multiplier -> crit roll -> crit multiplier
//!           -> mitigation (armor and/or resistance, per damage type) -> floor at 0.0

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use skirmish_core::{Attacker, CombatError, DamageType, Defender};

use crate::dot::{self, DotResult};
use crate::mitigation;

/// Full trace of a single resolved hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageResult {
    pub attacker: String,
    pub defender: String,
    /// Attacker base damage after the skill multiplier
    pub base_damage: f64,
    pub is_critical: bool,
    /// Damage after the crit multiplier, before mitigation
    pub damage_after_crit: f64,
    pub damage_type: DamageType,
    /// Absolute amount removed by mitigation (negative when amplified)
    pub reduction: f64,
    /// Damage dealt, rounded to 2 decimal places
    pub final_damage: f64,
    /// Damage dealt at full precision
    pub unrounded_damage: f64,
}

/// Round to 2 decimal places, halves to even
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Resolve a hit given the uniform `[0, 1)` crit roll.
///
/// Deterministic: the same inputs and roll always produce the same result.
/// Inputs are not validated, out-of-range stats propagate mechanically.
pub fn compute_hit(
    attacker: &Attacker,
    defender: &Defender,
    damage_type: DamageType,
    skill_multiplier: f64,
    roll: f64,
) -> DamageResult {
    let base_damage = attacker.base_damage * skill_multiplier;

    let is_critical = roll < attacker.crit_chance;
    let damage_after_crit = if is_critical {
        base_damage * attacker.crit_multiplier
    } else {
        base_damage
    };

    let reduction = match mitigation::total_reduction(attacker, defender, damage_type) {
        None => 0.0,
        Some(total_reduction) => {
            let fraction = mitigation::reduction_fraction(total_reduction);
            debug!(
                "{} vs {}: {} reduction {:.2} -> fraction {:.4}",
                attacker.name, defender.name, damage_type, total_reduction, fraction
            );
            damage_after_crit * fraction
        }
    };

    // Floor applies to true damage too
    let unrounded_damage = (damage_after_crit - reduction).max(0.0);

    DamageResult {
        attacker: attacker.name.clone(),
        defender: defender.name.clone(),
        base_damage,
        is_critical,
        damage_after_crit,
        damage_type,
        reduction,
        final_damage: round_cents(unrounded_damage),
        unrounded_damage,
    }
}

/// Resolves hits and damage over time.
///
/// Holds only the random source used for crit rolls. Keeping a history is the
/// caller's job, see [`crate::DamageLog`].
#[derive(Debug, Clone)]
pub struct DamageResolver<R = StdRng> {
    rng: R,
}

impl DamageResolver<StdRng> {
    /// Resolver seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Resolver with reproducible crit rolls
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for DamageResolver<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> DamageResolver<R> {
    /// Resolver drawing crit rolls from the given generator
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Resolve one hit of `damage_type`, scaled by `skill_multiplier`.
    pub fn resolve_hit(
        &mut self,
        attacker: &Attacker,
        defender: &Defender,
        damage_type: DamageType,
        skill_multiplier: f64,
    ) -> DamageResult {
        let roll: f64 = self.rng.gen();
        let result = compute_hit(attacker, defender, damage_type, skill_multiplier, roll);
        if result.is_critical {
            debug!(
                "{} crit {} (roll {:.3} < {:.3})",
                attacker.name, defender.name, roll, attacker.crit_chance
            );
        }
        result
    }

    /// Physical hit with no skill multiplier
    pub fn resolve_basic_hit(&mut self, attacker: &Attacker, defender: &Defender) -> DamageResult {
        self.resolve_hit(attacker, defender, DamageType::Physical, 1.0)
    }

    /// Damage over time. Uses no randomness.
    pub fn resolve_dot(
        &self,
        tick_damage: f64,
        duration: f64,
        tick_rate: f64,
    ) -> Result<DotResult, CombatError> {
        dot::resolve_dot(tick_damage, duration, tick_rate)
    }

    /// Damage over time ticking once per second
    pub fn resolve_dot_per_second(&self, tick_damage: f64, duration: f64) -> DotResult {
        dot::resolve_dot_per_second(tick_damage, duration)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn damage_type_strategy() -> impl Strategy<Value = DamageType> {
        prop::sample::select(DamageType::all().to_vec())
    }

    proptest! {
        #[test]
        fn prop_true_damage_never_reduced(
            base in 0.0f64..10_000.0,
            armor in -500.0f64..500.0,
            resistance in -500.0f64..500.0,
            crit_chance in 0.0f64..1.0,
            roll in 0.0f64..1.0,
        ) {
            let attacker = Attacker::new("A", base).with_crit(crit_chance, 2.0);
            let defender = Defender::new("D", armor).with_resistance(DamageType::True, resistance);
            let result = compute_hit(&attacker, &defender, DamageType::True, 1.0, roll);
            prop_assert_eq!(result.reduction, 0.0);
            prop_assert_eq!(result.unrounded_damage, result.damage_after_crit);
        }

        #[test]
        fn prop_final_damage_non_negative(
            base in -1_000.0f64..10_000.0,
            skill in -5.0f64..5.0,
            armor in -500.0f64..5_000.0,
            resistance in -500.0f64..5_000.0,
            damage_type in damage_type_strategy(),
            roll in 0.0f64..1.0,
        ) {
            let attacker = Attacker::new("A", base).with_crit(0.5, 2.0);
            let defender = Defender::new("D", armor).with_resistance(damage_type, resistance);
            let result = compute_hit(&attacker, &defender, damage_type, skill, roll);
            prop_assert!(result.final_damage >= 0.0);
            prop_assert!(result.unrounded_damage >= 0.0);
        }

        #[test]
        fn prop_more_resistance_never_more_damage(
            base in 0.0f64..10_000.0,
            low in 0.0f64..1_000.0,
            extra in 0.0f64..1_000.0,
            damage_type in damage_type_strategy(),
        ) {
            let attacker = Attacker::new("A", base);
            let weaker = Defender::new("D", 0.0).with_resistance(damage_type, low);
            let stronger = Defender::new("D", 0.0).with_resistance(damage_type, low + extra);
            let a = compute_hit(&attacker, &weaker, damage_type, 1.0, 0.5);
            let b = compute_hit(&attacker, &stronger, damage_type, 1.0, 0.5);
            prop_assert!(b.unrounded_damage <= a.unrounded_damage + 1e-9);
        }

        #[test]
        fn prop_crit_implies_at_least_base(
            base in 0.0f64..10_000.0,
            multiplier in 1.0f64..10.0,
            roll in 0.0f64..1.0,
        ) {
            let attacker = Attacker::new("A", base).with_crit(1.0, multiplier);
            let result = compute_hit(&attacker, &Defender::new("D", 0.0), DamageType::Magical, 1.0, roll);
            prop_assert!(result.is_critical);
            prop_assert!(result.damage_after_crit >= result.base_damage);
        }
    }
}
