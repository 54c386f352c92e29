//! Mitigation curve
//!
//! Positive reduction follows a diminishing-returns curve: `r / (r + 100)`.
//! 100 points halve incoming damage, and no amount reaches full immunity.
//! Negative reduction is a weakness and scales linearly: `r / 100`, so -20
//! means 20% extra damage. Amplification is not capped.

use skirmish_core::{Attacker, DamageType, Defender};

/// Reduction points at which the curve mitigates exactly half the damage
pub const HALF_MITIGATION_POINT: f64 = 100.0;

/// Armor remaining after the attacker's penetration
pub fn effective_armor(armor: f64, armor_penetration: f64) -> f64 {
    armor * (1.0 - armor_penetration)
}

/// Total reduction points the defender brings against a damage type.
///
/// Returns `None` for types that bypass mitigation entirely.
pub fn total_reduction(
    attacker: &Attacker,
    defender: &Defender,
    damage_type: DamageType,
) -> Option<f64> {
    let source = damage_type.mitigation();
    if source.bypasses_mitigation {
        return None;
    }

    let resistance = defender.resistance(damage_type);
    if source.uses_armor {
        Some(effective_armor(defender.armor, attacker.armor_penetration) + resistance)
    } else {
        Some(resistance)
    }
}

/// Fraction of damage removed by the given reduction points.
///
/// Negative results amplify damage.
pub fn reduction_fraction(total_reduction: f64) -> f64 {
    if total_reduction >= 0.0 {
        total_reduction / (total_reduction + HALF_MITIGATION_POINT)
    } else {
        total_reduction / HALF_MITIGATION_POINT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_zero_reduction_mitigates_nothing() {
        assert_eq!(reduction_fraction(0.0), 0.0);
    }

    #[test]
    fn test_hundred_points_halve_damage() {
        assert!((reduction_fraction(100.0) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_curve_never_reaches_full_immunity() {
        for points in [1_000.0, 10_000.0, 1_000_000.0] {
            let fraction = reduction_fraction(points);
            assert!(fraction < 1.0);
            assert!(fraction > 0.9);
        }
    }

    #[test]
    fn test_negative_reduction_is_linear() {
        assert!((reduction_fraction(-20.0) + 0.2).abs() < EPS);
        assert!((reduction_fraction(-150.0) + 1.5).abs() < EPS);
    }

    #[test]
    fn test_effective_armor() {
        assert!((effective_armor(50.0, 0.2) - 40.0).abs() < EPS);
        assert_eq!(effective_armor(50.0, 1.0), 0.0);
        assert_eq!(effective_armor(50.0, 0.0), 50.0);
    }

    #[test]
    fn test_physical_combines_armor_and_resistance() {
        let attacker = Attacker::new("Warrior", 100.0).with_armor_penetration(0.2);
        let defender = Defender::new("Knight", 50.0).with_resistance(DamageType::Physical, 10.0);
        let total = total_reduction(&attacker, &defender, DamageType::Physical).unwrap();
        assert!((total - 50.0).abs() < EPS);
    }

    #[test]
    fn test_elemental_ignores_armor() {
        let attacker = Attacker::new("Mage", 100.0);
        let defender = Defender::new("Knight", 500.0).with_resistance(DamageType::Fire, 30.0);
        assert_eq!(
            total_reduction(&attacker, &defender, DamageType::Fire),
            Some(30.0)
        );
        assert_eq!(
            total_reduction(&attacker, &defender, DamageType::Magical),
            Some(0.0)
        );
    }

    #[test]
    fn test_true_damage_has_no_reduction() {
        let attacker = Attacker::new("Assassin", 100.0);
        let defender = Defender::new("Knight", 500.0).with_resistance(DamageType::True, 90.0);
        assert_eq!(total_reduction(&attacker, &defender, DamageType::True), None);
    }
}
