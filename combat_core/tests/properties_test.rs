//! Property tests for resolution and session invariants

use combat_core::{calculate_damage_with_rng, BalanceConfig, CombatSession, DamageType, UnitStats};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

fn damage_type() -> impl Strategy<Value = DamageType> {
    prop_oneof![
        Just(DamageType::Kinetic),
        Just(DamageType::Energy),
        Just(DamageType::Explosive),
        Just(DamageType::Void),
    ]
}

prop_compose! {
    fn unit()(
        hp in 1..2000i32,
        attack in 0..500i32,
        defense in 0..300i32,
        efficiency in 0.0..1.0f64,
        accuracy in 0..200i32,
        evasion in 0..60i32,
        shields in 0..2i32,
        is_vehicle in any::<bool>(),
        is_resonance_active in any::<bool>(),
        resonance_level in 0..5i32,
    ) -> UnitStats {
        UnitStats {
            shields,
            base_attack: attack,
            target_defense: defense,
            defense_efficiency: efficiency,
            accuracy,
            evasion,
            resonance_level,
            is_resonance_active,
            is_vehicle,
            ..UnitStats::new(hp)
        }
    }
}

proptest! {
    #[test]
    fn prop_gauge_stays_in_bounds(
        player in unit(),
        enemy in unit(),
        seed in any::<u64>(),
        moves in prop::collection::vec((damage_type(), any::<bool>()), 1..40),
    ) {
        let player = UnitStats { is_player: true, ..player };
        let mut session = CombatSession::new(player, enemy, Arc::new(BalanceConfig::default()))
            .with_seed(seed);

        for (damage_type, counter) in moves {
            if counter {
                session.execute_counter_attack(damage_type);
            } else {
                session.execute_attack(damage_type);
            }
            session.activate_resonance();

            let gauge = session.player_stats.resonance_gauge;
            prop_assert!((0.0..=100.0).contains(&gauge));
            prop_assert!(session.player_stats.hp >= 0);
            prop_assert!(session.enemy_stats.hp >= 0);
        }
    }

    #[test]
    fn prop_result_exclusivity(
        attacker in unit(),
        defender in unit(),
        damage_type in damage_type(),
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let result = calculate_damage_with_rng(
            &attacker,
            &defender,
            damage_type,
            &BalanceConfig::default(),
            &mut rng,
        );

        if result.is_miss {
            prop_assert_eq!(result.final_damage, 0);
            prop_assert!(result.applied_effect.is_none());
            prop_assert!(!result.is_critical);
        } else {
            prop_assert!(result.final_damage >= 1);
        }
        if result.is_critical {
            prop_assert!(result.applied_effect.is_none());
        }
    }

    #[test]
    fn prop_minimum_damage_floor(
        attack in 0..100i32,
        extra_defense in 0..400i32,
        accuracy in 0..300i32,
        is_vehicle in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let attacker = UnitStats {
            base_attack: attack,
            accuracy,
            is_vehicle,
            ..UnitStats::new(100)
        };
        let defender = UnitStats {
            target_defense: attack + extra_defense,
            defense_efficiency: 1.0,
            is_vehicle,
            ..UnitStats::new(100)
        };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let result = calculate_damage_with_rng(
            &attacker,
            &defender,
            DamageType::Kinetic,
            &BalanceConfig::default(),
            &mut rng,
        );

        prop_assert!(!result.is_miss);
        prop_assert_eq!(result.final_damage, 1);
    }
}
