//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Core types
pub use crate::types::{DamageType, EffectDuration, StatusEffect, StatusEffectType};
pub use crate::unit::{CombatantMode, UnitStats};

// Damage system
pub use crate::damage::{calculate_damage, calculate_damage_with_rng};

// Combat
pub use crate::combat::{CombatResult, CombatSession, EncounterOutcome, ScriptEvent};

// Assembly
pub use crate::source::{assemble_unit_stats, EquipmentItem, PilotRecord, VehicleRecord};

// Config
pub use crate::config::{BalanceConfig, ConfigError};
