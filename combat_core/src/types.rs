//! Core types shared across the combat core

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Damage type carried by an attack
///
/// Exchanged over the wire as upper-case strings. Unknown wire values
/// deserialize to [`DamageType::Unrecognized`], which receives no type
/// modifier and no status effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DamageType {
    Kinetic,
    Energy,
    Explosive,
    Void,
    #[serde(other)]
    Unrecognized,
}

impl DamageType {
    /// Wire name of this damage type
    pub fn as_str(&self) -> &'static str {
        match self {
            DamageType::Kinetic => "KINETIC",
            DamageType::Energy => "ENERGY",
            DamageType::Explosive => "EXPLOSIVE",
            DamageType::Void => "VOID",
            DamageType::Unrecognized => "UNRECOGNIZED",
        }
    }

    /// Rock-paper-scissors matchup between weapon types
    ///
    /// Kinetic beats Energy, Energy beats Explosive, Explosive beats Kinetic.
    /// Void sits outside the triangle. Not applied by the resolver.
    pub fn matchup_multiplier(self, against: DamageType) -> Option<f64> {
        use DamageType::*;
        match (self, against) {
            (Kinetic, Kinetic) | (Energy, Energy) | (Explosive, Explosive) => Some(1.0),
            (Kinetic, Energy) | (Energy, Explosive) | (Explosive, Kinetic) => Some(1.5),
            (Kinetic, Explosive) | (Energy, Kinetic) | (Explosive, Energy) => Some(0.5),
            _ => None,
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown damage type: {0}")]
pub struct UnknownDamageType(pub String);

/// Case-sensitive parse of a wire name
impl FromStr for DamageType {
    type Err = UnknownDamageType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "KINETIC" => Ok(DamageType::Kinetic),
            "ENERGY" => Ok(DamageType::Energy),
            "EXPLOSIVE" => Ok(DamageType::Explosive),
            "VOID" => Ok(DamageType::Void),
            other => Err(UnknownDamageType(other.to_string())),
        }
    }
}

/// Status effect kinds produced by non-critical hits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusEffectType {
    Overheat,
    ArmorBreach,
    EngineStall,
}

impl StatusEffectType {
    /// Effect rolled for a damage type, if that type carries one
    pub fn for_damage_type(damage_type: DamageType) -> Option<StatusEffectType> {
        match damage_type {
            DamageType::Energy => Some(StatusEffectType::Overheat),
            DamageType::Kinetic => Some(StatusEffectType::ArmorBreach),
            DamageType::Explosive => Some(StatusEffectType::EngineStall),
            DamageType::Void | DamageType::Unrecognized => None,
        }
    }

    /// Wire name of this effect
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusEffectType::Overheat => "OVERHEAT",
            StatusEffectType::ArmorBreach => "ARMOR_BREACH",
            StatusEffectType::EngineStall => "ENGINE_STALL",
        }
    }

    /// How long this effect lasts once applied
    pub fn duration(&self) -> EffectDuration {
        match self {
            StatusEffectType::Overheat => EffectDuration::Turns(2),
            StatusEffectType::ArmorBreach => EffectDuration::Permanent,
            StatusEffectType::EngineStall => EffectDuration::Turns(1),
        }
    }
}

impl fmt::Display for StatusEffectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effect lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "turns", rename_all = "snake_case")]
pub enum EffectDuration {
    Turns(u32),
    /// Lasts until explicitly cleared
    Permanent,
}

/// A status effect produced by a single resolution
///
/// The core does not track expiry; callers attach it to their own state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    #[serde(rename = "type")]
    pub effect_type: StatusEffectType,
    pub duration: EffectDuration,
}

impl StatusEffect {
    pub fn new(effect_type: StatusEffectType) -> Self {
        StatusEffect {
            effect_type,
            duration: effect_type.duration(),
        }
    }
}
