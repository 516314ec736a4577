//! Scripted boss encounter: The Iron Awakening

use crate::SimError;
use combat_core::config::load_script_events;
use combat_core::{BalanceConfig, CombatSession, DamageType, EncounterOutcome, UnitStats};
use std::path::Path;
use std::sync::Arc;

fn player(balance: &BalanceConfig) -> UnitStats {
    UnitStats {
        base_attack: 100,
        target_defense: 10,
        defense_efficiency: balance.base_stats.default_defense_efficiency,
        accuracy: 100,
        evasion: 20,
        is_vehicle: true,
        is_player: true,
        ..UnitStats::new(1000)
    }
}

fn gatekeeper() -> UnitStats {
    UnitStats {
        base_attack: 20,
        target_defense: 30,
        defense_efficiency: 0.6,
        accuracy: 90,
        evasion: 10,
        is_vehicle: true,
        ..UnitStats::new(300)
    }
}

pub fn run(
    balance: Arc<BalanceConfig>,
    script: &Path,
    seed: Option<u64>,
    turn_limit: u32,
) -> Result<(), SimError> {
    let events = load_script_events(script)?;
    println!("{}", "=".repeat(40));
    println!("   BOSS ENCOUNTER: The Iron Awakening");
    println!("   Boss: The Gatekeeper ({} scripted events)", events.len());
    println!("{}", "=".repeat(40));

    let mut session = CombatSession::new(player(&balance), gatekeeper(), balance).with_script(events);
    if let Some(seed) = seed {
        session = session.with_seed(seed);
    }

    while session.turn_count < turn_limit {
        println!(
            "\n[TURN {}] Player HP: {} ({}) | Boss HP: {} ({})",
            session.turn_count + 1,
            session.player_stats.hp,
            session.player_stats.mode().label(),
            session.enemy_stats.hp,
            session.enemy_stats.mode().label(),
        );

        let attack = session.execute_attack(DamageType::Kinetic);
        println!(
            ">> Player attacks: {} (Gauge: {:.0}%)",
            attack.summary(),
            session.player_stats.gauge_fraction() * 100.0
        );

        if session.activate_resonance() {
            println!("!!! PLAYER ACTIVATED RESONANCE MODE !!!");
        }

        if session.outcome().is_none() {
            let counter = session.execute_counter_attack(DamageType::Kinetic);
            println!("<< Boss counters: {}", counter.summary());
        }

        for line in session.drain_log() {
            println!("   {line}");
        }

        match session.outcome() {
            Some(EncounterOutcome::Victory) => {
                println!("\n*** BOSS DEFEATED! ***");
                return Ok(());
            }
            Some(EncounterOutcome::Defeat) => {
                println!("\n*** PLAYER DESTROYED! ***");
                return Ok(());
            }
            None => {}
        }
    }

    tracing::warn!(turn_limit, "encounter hit the turn limit");
    println!("\n--- TURN LIMIT REACHED ---");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_are_vehicle_scale() {
        let balance = BalanceConfig::default();
        assert!(player(&balance).is_vehicle);
        assert!(player(&balance).is_player);
        assert!(gatekeeper().is_vehicle);
        assert!(!gatekeeper().is_player);
    }
}
