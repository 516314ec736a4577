//! combat_core - Combat resolution core for mixed human/vehicle encounters
//!
//! This library provides:
//! - BalanceConfig: Tunable constants loaded once from TOML
//! - Assembly: Building UnitStats from vehicle, gear and pilot records
//! - Damage Resolution: One attack between two UnitStats snapshots
//! - CombatSession: Multi-turn state, resonance gauge and scripted triggers

pub mod combat;
pub mod config;
pub mod damage;
pub mod prelude;
pub mod source;
pub mod types;
pub mod unit;

// Re-export core types for convenience
pub use combat::{
    CombatResult, CombatSession, EncounterOutcome, ScriptAction, ScriptEvent, ScriptPhase,
    ScriptTrigger,
};
pub use config::{BalanceConfig, ConfigError};
pub use damage::{calculate_damage, calculate_damage_with_rng};
pub use source::{assemble_unit_stats, EquipmentItem, PilotRecord, StatSource, VehicleRecord};
pub use types::{DamageType, EffectDuration, StatusEffect, StatusEffectType, UnknownDamageType};
pub use unit::{CombatantMode, UnitStats};
