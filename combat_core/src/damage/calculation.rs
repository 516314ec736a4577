//! Damage calculation - resolving one attack between two snapshots

use super::scale::scale_multiplier;
use crate::combat::CombatResult;
use crate::config::BalanceConfig;
use crate::types::{DamageType, StatusEffect, StatusEffectType};
use crate::unit::UnitStats;
use rand::Rng;

/// Base critical strike chance in percentage points
pub const BASE_CRIT_CHANCE: i32 = 5;
/// Critical strike damage multiplier
pub const CRIT_MULTIPLIER: f64 = 1.5;
/// Chance for a non-critical hit to apply a status effect
pub const STATUS_EFFECT_CHANCE: i32 = 20;
/// Energy bonus against shielded targets
pub const ENERGY_VS_SHIELDS: f64 = 1.2;
/// Fraction of defense left standing against Void damage
pub const VOID_DEFENSE_FACTOR: f64 = 0.7;

/// Resolve an attack using the thread RNG
pub fn calculate_damage(
    attacker: &UnitStats,
    defender: &UnitStats,
    damage_type: DamageType,
    balance: &BalanceConfig,
) -> CombatResult {
    let mut rng = rand::thread_rng();
    calculate_damage_with_rng(attacker, defender, damage_type, balance, &mut rng)
}

/// Resolve an attack with a provided RNG (for deterministic testing)
///
/// Steps, in order:
/// 1. Miss check: `defender.evasion - attacker.accuracy / 10` percent
/// 2. Scale suppression on base attack
/// 3. Defense: `target_defense * defense_efficiency`
/// 4. Damage type: Energy x1.2 vs shields, Void ignores 30% defense
/// 5. Net damage, floored at 1
/// 6. Crit: `5 + accuracy / 100` percent, x1.5
/// 7. Status effect: 20% on non-critical hits, keyed by damage type
///
/// All intermediate math is floating point; the result is truncated once.
pub fn calculate_damage_with_rng<R: Rng + ?Sized>(
    attacker: &UnitStats,
    defender: &UnitStats,
    damage_type: DamageType,
    balance: &BalanceConfig,
    rng: &mut R,
) -> CombatResult {
    // Step 1: Miss check
    let miss_chance = defender.evasion - attacker.accuracy / 10;
    if miss_chance > 0 && roll_percent(rng) < miss_chance {
        tracing::debug!(%damage_type, miss_chance, "attack missed");
        return CombatResult::miss();
    }

    // Step 2: Scale suppression
    let mut base_dmg = attacker.base_attack as f64 * scale_multiplier(attacker, defender, balance);

    // Step 3: Defense
    let mut defense = defender.target_defense as f64 * defender.defense_efficiency;

    // Step 4: Damage type modifier
    match damage_type {
        DamageType::Energy if defender.shields > 0 => base_dmg *= ENERGY_VS_SHIELDS,
        DamageType::Void => defense *= VOID_DEFENSE_FACTOR,
        _ => {}
    }

    // Step 5: Net damage, at least 1 on any hit
    let mut final_dmg = (base_dmg - defense).max(1.0);

    // Step 6: Critical hit
    let crit_chance = BASE_CRIT_CHANCE + attacker.accuracy / 100;
    let is_critical = roll_percent(rng) < crit_chance;
    if is_critical {
        final_dmg *= CRIT_MULTIPLIER;
    }

    // Step 7: Status effect, never on a critical
    let applied_effect = if !is_critical && roll_percent(rng) < STATUS_EFFECT_CHANCE {
        StatusEffectType::for_damage_type(damage_type).map(StatusEffect::new)
    } else {
        None
    };

    let result = CombatResult::hit(final_dmg as i32, is_critical, applied_effect);
    tracing::debug!(
        %damage_type,
        damage = result.final_damage,
        critical = is_critical,
        effect = ?result.applied_effect.map(|e| e.effect_type),
        "attack resolved"
    );
    result
}

/// Uniform integer roll in [0, 100)
fn roll_percent<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.gen_range(0..100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn golden_attacker(accuracy: i32) -> UnitStats {
        UnitStats {
            base_attack: 100,
            accuracy,
            ..UnitStats::new(100)
        }
    }

    fn golden_defender() -> UnitStats {
        UnitStats {
            target_defense: 50,
            defense_efficiency: 0.5,
            evasion: 10,
            ..UnitStats::new(100)
        }
    }

    #[test]
    fn test_golden_value() {
        let balance = BalanceConfig::default();
        let mut rng = rng();
        let mut saw_normal = false;

        for _ in 0..200 {
            let result = calculate_damage_with_rng(
                &golden_attacker(80),
                &golden_defender(),
                DamageType::Kinetic,
                &balance,
                &mut rng,
            );
            if result.is_miss {
                continue;
            }
            if result.is_critical {
                assert_eq!(result.final_damage, 112);
            } else {
                assert_eq!(result.final_damage, 75);
                saw_normal = true;
            }
        }
        assert!(saw_normal);
    }

    #[test]
    fn test_golden_critical() {
        // 5 + 9500 / 100 = 100% crit chance
        let result = calculate_damage_with_rng(
            &golden_attacker(9500),
            &golden_defender(),
            DamageType::Kinetic,
            &BalanceConfig::default(),
            &mut rng(),
        );
        assert!(!result.is_miss);
        assert!(result.is_critical);
        assert_eq!(result.final_damage, 112);
        assert!(result.applied_effect.is_none());
    }

    #[test]
    fn test_guaranteed_miss() {
        let defender = UnitStats {
            evasion: 200,
            ..golden_defender()
        };
        let result = calculate_damage_with_rng(
            &golden_attacker(80),
            &defender,
            DamageType::Energy,
            &BalanceConfig::default(),
            &mut rng(),
        );
        assert!(result.is_miss);
        assert_eq!(result.final_damage, 0);
        assert!(!result.is_critical);
        assert!(result.applied_effect.is_none());
    }

    #[test]
    fn test_minimum_damage_floor() {
        let attacker = UnitStats {
            base_attack: 5,
            accuracy: 100,
            ..UnitStats::new(10)
        };
        let defender = UnitStats {
            target_defense: 500,
            defense_efficiency: 1.0,
            ..UnitStats::new(10)
        };
        let mut rng = rng();
        for _ in 0..50 {
            let result = calculate_damage_with_rng(
                &attacker,
                &defender,
                DamageType::Kinetic,
                &BalanceConfig::default(),
                &mut rng,
            );
            assert!(!result.is_miss);
            assert_eq!(result.final_damage, 1);
        }
    }

    #[test]
    fn test_energy_bonus_vs_shields() {
        let attacker = golden_attacker(9500);
        let shielded = UnitStats {
            shields: 10,
            evasion: 0,
            ..golden_defender()
        };
        let result = calculate_damage_with_rng(
            &attacker,
            &shielded,
            DamageType::Energy,
            &BalanceConfig::default(),
            &mut rng(),
        );
        // (100 * 1.2 - 25) * 1.5 = 142.5
        assert_eq!(result.final_damage, 142);

        let unshielded = UnitStats { shields: 0, ..shielded };
        let result = calculate_damage_with_rng(
            &attacker,
            &unshielded,
            DamageType::Energy,
            &BalanceConfig::default(),
            &mut rng(),
        );
        assert_eq!(result.final_damage, 112);
    }

    #[test]
    fn test_void_ignores_defense() {
        let result = calculate_damage_with_rng(
            &golden_attacker(9500),
            &golden_defender(),
            DamageType::Void,
            &BalanceConfig::default(),
            &mut rng(),
        );
        // (100 - 25 * 0.7) * 1.5 = 123.75
        assert_eq!(result.final_damage, 123);
    }

    #[test]
    fn test_unrecognized_type_has_no_modifier() {
        let defender = UnitStats {
            shields: 10,
            ..golden_defender()
        };
        let result = calculate_damage_with_rng(
            &golden_attacker(9500),
            &defender,
            DamageType::Unrecognized,
            &BalanceConfig::default(),
            &mut rng(),
        );
        assert_eq!(result.final_damage, 112);
    }

    #[test]
    fn test_overheat_reachable() {
        let attacker = UnitStats {
            base_attack: 100,
            accuracy: 100,
            ..UnitStats::new(100)
        };
        let defender = UnitStats::new(100);
        let balance = BalanceConfig::default();
        let mut rng = rng();

        let mut found = false;
        for _ in 0..200 {
            let result =
                calculate_damage_with_rng(&attacker, &defender, DamageType::Energy, &balance, &mut rng);
            assert!(!(result.is_critical && result.applied_effect.is_some()));
            if let Some(effect) = result.applied_effect {
                assert_eq!(effect.effect_type, StatusEffectType::Overheat);
                found = true;
            }
        }
        assert!(found);
    }

    #[test]
    fn test_void_never_applies_effect() {
        let attacker = UnitStats {
            base_attack: 100,
            accuracy: 100,
            ..UnitStats::new(100)
        };
        let defender = UnitStats::new(100);
        let balance = BalanceConfig::default();
        let mut rng = rng();
        for _ in 0..200 {
            let result =
                calculate_damage_with_rng(&attacker, &defender, DamageType::Void, &balance, &mut rng);
            assert!(result.applied_effect.is_none());
        }
    }

    #[test]
    fn test_scale_suppression_asymmetry() {
        let balance = BalanceConfig::default();
        let human = UnitStats {
            base_attack: 100,
            accuracy: 9500,
            ..UnitStats::new(100)
        };
        let mech = UnitStats {
            is_vehicle: true,
            ..human.clone()
        };

        let human_hits_mech =
            calculate_damage_with_rng(&human, &mech, DamageType::Kinetic, &balance, &mut rng());
        let mech_hits_human =
            calculate_damage_with_rng(&mech, &human, DamageType::Kinetic, &balance, &mut rng());

        assert_eq!(human_hits_mech.final_damage, 15);
        assert_eq!(mech_hits_human.final_damage, 450);
    }

    #[test]
    fn test_same_seed_same_result() {
        let balance = BalanceConfig::default();
        let a = calculate_damage_with_rng(
            &golden_attacker(80),
            &golden_defender(),
            DamageType::Explosive,
            &balance,
            &mut ChaCha8Rng::seed_from_u64(99),
        );
        let b = calculate_damage_with_rng(
            &golden_attacker(80),
            &golden_defender(),
            DamageType::Explosive,
            &balance,
            &mut ChaCha8Rng::seed_from_u64(99),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_thread_rng_entry_point() {
        let result = calculate_damage(
            &golden_attacker(9500),
            &golden_defender(),
            DamageType::Kinetic,
            &BalanceConfig::default(),
        );
        assert_eq!(result.final_damage, 112);
    }
}
