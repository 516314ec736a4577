//! Scale suppression - Damage multipliers between human and vehicle scale
//!
//! | Attacker          | Defender          | Multiplier                               |
//! |-------------------|-------------------|------------------------------------------|
//! | Human (dormant)   | Vehicle           | `human_vs_mech_damage_reduction`         |
//! | Human (resonant)  | Vehicle           | `1 + level * resonance_damage_multiplier`|
//! | Vehicle           | Human (dormant)   | `mech_vs_human_damage_multiplier`        |
//! | Vehicle (resonant)| Human (resonant)  | `resonant_human_vs_mech_damage_multiplier` |
//! | Vehicle (dormant) | Human (resonant)  | `resonant_human_deflection_rate`         |
//! | same scale        | same scale        | 1.0                                      |

use crate::config::BalanceConfig;
use crate::unit::UnitStats;

/// Multiplier applied to the attacker's base damage for this matchup
pub fn scale_multiplier(attacker: &UnitStats, defender: &UnitStats, balance: &BalanceConfig) -> f64 {
    let suppression = &balance.scale_suppression;

    match (attacker.is_vehicle, defender.is_vehicle) {
        (false, true) => {
            if attacker.is_resonance_active {
                1.0 + attacker.resonance_level as f64 * balance.resonance.resonance_damage_multiplier
            } else {
                suppression.human_vs_mech_damage_reduction
            }
        }
        (true, false) => {
            if !defender.is_resonance_active {
                suppression.mech_vs_human_damage_multiplier
            } else if attacker.is_resonance_active {
                suppression.resonant_human_vs_mech_damage_multiplier
            } else {
                suppression.resonant_human_deflection_rate
            }
        }
        _ => 1.0,
    }
}
