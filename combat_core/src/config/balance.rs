//! Balance constants for combat resolution
//!
//! Loaded once at startup and shared read-only. Every key is required: a
//! missing key fails to parse, and [`BalanceConfig::validate`] rejects zero or
//! inverted values before any combat runs.

use super::{ConfigError, load_toml, parse_toml};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable combat constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceConfig {
    pub resonance: ResonanceConstants,
    pub progression: ProgressionConstants,
    pub scale_suppression: ScaleSuppressionConstants,
    pub base_stats: BaseStatsConstants,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        BalanceConfig {
            resonance: ResonanceConstants::default(),
            progression: ProgressionConstants::default(),
            scale_suppression: ScaleSuppressionConstants::default(),
            base_stats: BaseStatsConstants::default(),
        }
    }
}

impl BalanceConfig {
    /// Load and validate a balance file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: BalanceConfig = load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate balance TOML
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: BalanceConfig = parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make combat math degenerate
    pub fn validate(&self) -> Result<(), ConfigError> {
        let r = &self.resonance;
        positive("resonance.gain_rate_dealt", r.gain_rate_dealt)?;
        positive("resonance.gain_rate_taken", r.gain_rate_taken)?;
        positive("resonance.resonance_damage_multiplier", r.resonance_damage_multiplier)?;
        non_negative_int("resonance.bonus_accuracy_per_level", r.bonus_accuracy_per_level)?;
        non_negative_int("resonance.bonus_evasion_per_level", r.bonus_evasion_per_level)?;

        let p = &self.progression;
        positive("progression.base_sync_rate", p.base_sync_rate)?;
        finite("progression.sync_rate_per_level", p.sync_rate_per_level)?;
        if p.sync_rate_per_level < 0.0 {
            return Err(invalid("progression.sync_rate_per_level must not be negative"));
        }

        let s = &self.scale_suppression;
        positive("scale_suppression.human_vs_mech_damage_reduction", s.human_vs_mech_damage_reduction)?;
        positive("scale_suppression.mech_vs_human_damage_multiplier", s.mech_vs_human_damage_multiplier)?;
        positive(
            "scale_suppression.resonant_human_vs_mech_damage_multiplier",
            s.resonant_human_vs_mech_damage_multiplier,
        )?;
        positive("scale_suppression.resonant_human_deflection_rate", s.resonant_human_deflection_rate)?;
        if s.human_vs_mech_damage_reduction >= 1.0 {
            return Err(invalid(
                "scale_suppression.human_vs_mech_damage_reduction must be below 1",
            ));
        }
        if s.mech_vs_human_damage_multiplier <= 1.0 {
            return Err(invalid(
                "scale_suppression.mech_vs_human_damage_multiplier must be above 1",
            ));
        }

        let b = &self.base_stats;
        positive_int("base_stats.default_accuracy", b.default_accuracy)?;
        positive("base_stats.default_defense_efficiency", b.default_defense_efficiency)?;
        if b.default_defense_efficiency > 1.0 {
            return Err(invalid("base_stats.default_defense_efficiency must be at most 1"));
        }
        positive_int("base_stats.forced_survival_hp", b.forced_survival_hp)?;
        positive_int("base_stats.boss_phase_2_hp", b.boss_phase_2_hp)?;
        positive_int("base_stats.boss_phase_2_attack", b.boss_phase_2_attack)?;
        positive_int("base_stats.boss_phase_2_resonance_level", b.boss_phase_2_resonance_level)?;

        Ok(())
    }

    /// Sync-rate multiplier for a pilot sync level (level 1 = base rate)
    pub fn sync_rate(&self, sync_level: i32) -> f64 {
        self.progression.base_sync_rate
            + (sync_level - 1) as f64 * self.progression.sync_rate_per_level
    }
}

fn invalid(msg: &str) -> ConfigError {
    ConfigError::ValidationError(msg.to_string())
}

fn finite(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!("{name} must be finite, got {value}")))
    }
}

fn positive(name: &str, value: f64) -> Result<(), ConfigError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!("{name} must be positive, got {value}")))
    }
}

fn positive_int(name: &str, value: i32) -> Result<(), ConfigError> {
    if value > 0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!("{name} must be positive, got {value}")))
    }
}

fn non_negative_int(name: &str, value: i32) -> Result<(), ConfigError> {
    if value >= 0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!("{name} must not be negative, got {value}")))
    }
}

/// Resonance gauge and power-up tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResonanceConstants {
    /// Gauge gained per point of damage dealt
    pub gain_rate_dealt: f64,
    /// Gauge gained per point of damage taken
    pub gain_rate_taken: f64,
    pub bonus_accuracy_per_level: i32,
    pub bonus_evasion_per_level: i32,
    /// Damage bonus per resonance level when bypassing scale suppression
    pub resonance_damage_multiplier: f64,
}

impl Default for ResonanceConstants {
    fn default() -> Self {
        ResonanceConstants {
            gain_rate_dealt: 0.5,
            gain_rate_taken: 1.0,
            bonus_accuracy_per_level: 2,
            bonus_evasion_per_level: 2,
            resonance_damage_multiplier: 0.5,
        }
    }
}

/// Pilot sync progression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionConstants {
    pub base_sync_rate: f64,
    pub sync_rate_per_level: f64,
}

impl Default for ProgressionConstants {
    fn default() -> Self {
        ProgressionConstants {
            base_sync_rate: 0.5,
            sync_rate_per_level: 0.05,
        }
    }
}

/// Damage multipliers for cross-scale matchups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleSuppressionConstants {
    /// Dormant human hitting a vehicle
    pub human_vs_mech_damage_reduction: f64,
    /// Vehicle hitting a dormant human
    pub mech_vs_human_damage_multiplier: f64,
    /// Resonant vehicle hitting a resonant human
    pub resonant_human_vs_mech_damage_multiplier: f64,
    /// Dormant vehicle hitting a resonant human
    pub resonant_human_deflection_rate: f64,
}

impl Default for ScaleSuppressionConstants {
    fn default() -> Self {
        ScaleSuppressionConstants {
            human_vs_mech_damage_reduction: 0.1,
            mech_vs_human_damage_multiplier: 3.0,
            resonant_human_vs_mech_damage_multiplier: 0.8,
            resonant_human_deflection_rate: 0.2,
        }
    }
}

/// Base stats and scripted-event values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseStatsConstants {
    pub default_accuracy: i32,
    pub default_defense_efficiency: f64,
    /// HP left to a pilot after forced ejection
    pub forced_survival_hp: i32,
    pub boss_phase_2_hp: i32,
    pub boss_phase_2_attack: i32,
    pub boss_phase_2_resonance_level: i32,
}

impl Default for BaseStatsConstants {
    fn default() -> Self {
        BaseStatsConstants {
            default_accuracy: 80,
            default_defense_efficiency: 0.5,
            forced_survival_hp: 10,
            boss_phase_2_hp: 200,
            boss_phase_2_attack: 40,
            boss_phase_2_resonance_level: 3,
        }
    }
}
