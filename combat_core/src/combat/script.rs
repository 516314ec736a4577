//! Scripted events - narrative triggers that rewrite a combatant mid-fight
//!
//! Each combatant carries a [`ScriptPhase`]. A trigger only fires from
//! [`ScriptPhase::Initial`], and its predicate also requires the combatant to
//! still be vehicle-scale, so every trigger fires at most once per combatant.
//! Triggers follow `is_player`, not the session slot a combatant sits in.

use crate::config::BalanceConfig;
use crate::unit::UnitStats;
use serde::{Deserialize, Serialize};

/// Externally configured trigger/action/dialogue tuple
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptEvent {
    pub trigger: String,
    pub action: String,
    pub dialogue: String,
}

impl ScriptEvent {
    pub fn new(trigger: &str, action: &str, dialogue: &str) -> Self {
        ScriptEvent {
            trigger: trigger.to_string(),
            action: action.to_string(),
            dialogue: dialogue.to_string(),
        }
    }

    pub fn trigger_kind(&self) -> Option<ScriptTrigger> {
        ScriptTrigger::from_key(&self.trigger)
    }

    pub fn action_kind(&self) -> Option<ScriptAction> {
        ScriptAction::from_key(&self.action)
    }

    /// Exact trigger key paired with the trigger's action key
    pub fn matches(&self, trigger: ScriptTrigger) -> bool {
        self.trigger_kind() == Some(trigger) && self.action_kind() == Some(trigger.action())
    }
}

/// Recognized trigger keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptTrigger {
    /// Player vehicle below a quarter of max HP
    PlayerHpLow,
    /// Non-player vehicle destroyed
    BossPhaseTwo,
}

impl ScriptTrigger {
    pub fn key(&self) -> &'static str {
        match self {
            ScriptTrigger::PlayerHpLow => "player_hp_low",
            ScriptTrigger::BossPhaseTwo => "boss_phase_2",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "player_hp_low" => Some(ScriptTrigger::PlayerHpLow),
            "boss_phase_2" => Some(ScriptTrigger::BossPhaseTwo),
            _ => None,
        }
    }

    /// The action this trigger drives
    pub fn action(&self) -> ScriptAction {
        match self {
            ScriptTrigger::PlayerHpLow => ScriptAction::ForceEject,
            ScriptTrigger::BossPhaseTwo => ScriptAction::SpawnHumanPilot,
        }
    }

    /// Whether the combatant's state satisfies this trigger
    pub fn is_met(&self, unit: &UnitStats) -> bool {
        match self {
            ScriptTrigger::PlayerHpLow => unit.is_player && unit.is_vehicle && unit.is_critical_hp(),
            ScriptTrigger::BossPhaseTwo => !unit.is_player && unit.is_vehicle && unit.hp <= 0,
        }
    }
}

/// Recognized action keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptAction {
    ForceEject,
    SpawnHumanPilot,
}

impl ScriptAction {
    pub fn key(&self) -> &'static str {
        match self {
            ScriptAction::ForceEject => "force_eject",
            ScriptAction::SpawnHumanPilot => "spawn_human_pilot",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "force_eject" => Some(ScriptAction::ForceEject),
            "spawn_human_pilot" => Some(ScriptAction::SpawnHumanPilot),
            _ => None,
        }
    }

    /// Rewrite the combatant
    pub fn apply(&self, unit: &mut UnitStats, balance: &BalanceConfig) {
        let base = &balance.base_stats;
        match self {
            ScriptAction::ForceEject => {
                unit.is_vehicle = false;
                unit.hp = base.forced_survival_hp;
            }
            ScriptAction::SpawnHumanPilot => {
                unit.is_vehicle = false;
                unit.hp = base.boss_phase_2_hp;
                unit.max_hp = base.boss_phase_2_hp;
                unit.base_attack = base.boss_phase_2_attack;
                unit.is_resonance_active = true;
                unit.resonance_level = base.boss_phase_2_resonance_level;
            }
        }
    }
}

/// Scripted lifecycle of one combatant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptPhase {
    #[default]
    Initial,
    /// Pilot forced out of a failing vehicle
    Ejected,
    /// Boss continues on foot after losing its vehicle
    PhaseTwo,
}

impl ScriptPhase {
    /// Transition table; `None` means the trigger cannot fire from here
    pub fn transition(self, trigger: ScriptTrigger) -> Option<ScriptPhase> {
        match (self, trigger) {
            (ScriptPhase::Initial, ScriptTrigger::PlayerHpLow) => Some(ScriptPhase::Ejected),
            (ScriptPhase::Initial, ScriptTrigger::BossPhaseTwo) => Some(ScriptPhase::PhaseTwo),
            _ => None,
        }
    }
}

/// Fire `trigger` on a combatant if its phase, state and script allow
///
/// Returns the event dialogue when the trigger fires.
pub fn evaluate_trigger(
    trigger: ScriptTrigger,
    unit: &mut UnitStats,
    phase: &mut ScriptPhase,
    events: &[ScriptEvent],
    balance: &BalanceConfig,
) -> Option<String> {
    let next = phase.transition(trigger)?;
    if !trigger.is_met(unit) {
        return None;
    }
    let event = events.iter().find(|e| e.matches(trigger))?;

    trigger.action().apply(unit, balance);
    *phase = next;
    tracing::info!(
        trigger = trigger.key(),
        action = trigger.action().key(),
        phase = ?next,
        hp = unit.hp,
        "scripted event fired"
    );
    Some(event.dialogue.clone())
}
