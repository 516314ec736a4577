//! CombatSession - Multi-turn state for one encounter
//!
//! The session owns both combatants' live snapshots, the encounter script and
//! a single seeded RNG. Every attack resolves through the damage pipeline,
//! applies HP loss, accrues resonance and then runs the scripted triggers.

use super::resonance;
use super::result::CombatResult;
use super::script::{evaluate_trigger, ScriptEvent, ScriptPhase, ScriptTrigger};
use crate::config::BalanceConfig;
use crate::damage::calculate_damage_with_rng;
use crate::types::DamageType;
use crate::unit::UnitStats;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How an encounter ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EncounterOutcome {
    Victory,
    Defeat,
}

/// Live state of one encounter, owned by the caller
#[derive(Debug, Clone)]
pub struct CombatSession {
    pub player_stats: UnitStats,
    pub enemy_stats: UnitStats,
    pub is_scripted: bool,
    pub script_events: Vec<ScriptEvent>,
    /// Player attacks executed so far
    pub turn_count: u32,
    pub log: Vec<String>,
    player_phase: ScriptPhase,
    enemy_phase: ScriptPhase,
    balance: Arc<BalanceConfig>,
    rng: ChaCha8Rng,
}

impl CombatSession {
    /// Start an unscripted encounter with an entropy-seeded RNG
    pub fn new(player_stats: UnitStats, enemy_stats: UnitStats, balance: Arc<BalanceConfig>) -> Self {
        CombatSession {
            player_stats,
            enemy_stats,
            is_scripted: false,
            script_events: Vec::new(),
            turn_count: 0,
            log: Vec::new(),
            player_phase: ScriptPhase::Initial,
            enemy_phase: ScriptPhase::Initial,
            balance,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Enable scripted triggers with the given events
    pub fn with_script(mut self, events: Vec<ScriptEvent>) -> Self {
        self.is_scripted = true;
        self.script_events = events;
        self
    }

    /// Reseed the session RNG for a reproducible encounter
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    /// Script phase of the combatant in the attacker slot
    pub fn player_phase(&self) -> ScriptPhase {
        self.player_phase
    }

    /// Script phase of the combatant in the defender slot
    pub fn enemy_phase(&self) -> ScriptPhase {
        self.enemy_phase
    }

    /// Player attacks enemy
    ///
    /// Damage dealt fills the attacker's gauge while it is player-controlled
    /// and dormant.
    pub fn execute_attack(&mut self, damage_type: DamageType) -> CombatResult {
        self.turn_count += 1;

        let result = calculate_damage_with_rng(
            &self.player_stats,
            &self.enemy_stats,
            damage_type,
            &self.balance,
            &mut self.rng,
        );
        self.enemy_stats.apply_damage(result.final_damage);

        if self.player_stats.is_player {
            resonance::accrue_gauge(
                &mut self.player_stats,
                result.final_damage,
                self.balance.resonance.gain_rate_dealt,
            );
        }

        self.log
            .push(format!("Turn {}: {}", self.turn_count, narrate("Player", &result, damage_type)));

        if self.is_scripted {
            self.handle_scripted_events();
        }
        result
    }

    /// Enemy strikes back at the player
    ///
    /// Damage taken fills the player's gauge at the taken rate.
    pub fn execute_counter_attack(&mut self, damage_type: DamageType) -> CombatResult {
        let result = calculate_damage_with_rng(
            &self.enemy_stats,
            &self.player_stats,
            damage_type,
            &self.balance,
            &mut self.rng,
        );
        self.player_stats.apply_damage(result.final_damage);

        if self.player_stats.is_player {
            resonance::accrue_gauge(
                &mut self.player_stats,
                result.final_damage,
                self.balance.resonance.gain_rate_taken,
            );
        }

        self.log
            .push(format!("Turn {}: {}", self.turn_count, narrate("Enemy", &result, damage_type)));

        if self.is_scripted {
            self.handle_scripted_events();
        }
        result
    }

    /// Enter resonance once the player's gauge is full
    pub fn activate_resonance(&mut self) -> bool {
        if !resonance::activate(&mut self.player_stats) {
            return false;
        }
        tracing::info!(
            level = self.player_stats.resonance_level,
            turn = self.turn_count,
            "resonance activated"
        );
        self.log
            .push("SYSTEM: Neural resonance engaged. Scale suppression bypassed.".to_string());
        true
    }

    /// `None` while the encounter is still running
    pub fn outcome(&self) -> Option<EncounterOutcome> {
        if self.enemy_stats.hp <= 0 {
            Some(EncounterOutcome::Victory)
        } else if self.player_stats.hp <= 0 {
            Some(EncounterOutcome::Defeat)
        } else {
            None
        }
    }

    /// Take the log lines accumulated since the last drain
    pub fn drain_log(&mut self) -> Vec<String> {
        std::mem::take(&mut self.log)
    }

    /// Each trigger is checked against both slots; `is_player` decides
    /// which combatant it can fire on.
    fn handle_scripted_events(&mut self) {
        for trigger in [ScriptTrigger::PlayerHpLow, ScriptTrigger::BossPhaseTwo] {
            let slots = [
                (&mut self.player_stats, &mut self.player_phase),
                (&mut self.enemy_stats, &mut self.enemy_phase),
            ];
            for (unit, phase) in slots {
                if let Some(dialogue) =
                    evaluate_trigger(trigger, unit, phase, &self.script_events, &self.balance)
                {
                    self.log.push(dialogue);
                }
            }
        }
    }
}

fn narrate(actor: &str, result: &CombatResult, damage_type: DamageType) -> String {
    if result.is_miss {
        return format!("{actor} missed!");
    }
    let mut line = format!("{actor} dealt {} {damage_type} damage.", result.final_damage);
    if result.is_critical {
        line.push_str(" CRITICAL HIT!");
    }
    if let Some(effect) = result.applied_effect {
        line.push_str(&format!(" {} applied.", effect.effect_type));
    }
    line
}
