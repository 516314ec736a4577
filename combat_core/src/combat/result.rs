//! CombatResult - Outcome of one damage resolution

use crate::types::StatusEffect;
use serde::{Deserialize, Serialize};

/// Result of resolving one attack
///
/// A miss always carries zero damage and no effect. A critical hit never
/// carries an effect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatResult {
    pub final_damage: i32,
    pub is_critical: bool,
    pub is_miss: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_effect: Option<StatusEffect>,
}

impl CombatResult {
    /// A missed attack
    pub fn miss() -> Self {
        CombatResult {
            is_miss: true,
            ..Default::default()
        }
    }

    /// A landed attack
    pub fn hit(final_damage: i32, is_critical: bool, applied_effect: Option<StatusEffect>) -> Self {
        CombatResult {
            final_damage,
            is_critical,
            is_miss: false,
            applied_effect,
        }
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        if self.is_miss {
            return "missed".to_string();
        }

        let mut parts = vec![format!("{} damage", self.final_damage)];
        if self.is_critical {
            parts.push("CRITICAL HIT".to_string());
        }
        if let Some(effect) = self.applied_effect {
            parts.push(format!("{} applied", effect.effect_type));
        }
        parts.join(", ")
    }
}
