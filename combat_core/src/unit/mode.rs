//! Combatant modes - scale crossed with resonance

use serde::{Deserialize, Serialize};

/// The four observable modes of a combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatantMode {
    HumanDormant,
    HumanResonant,
    VehicleDormant,
    VehicleResonant,
}

impl CombatantMode {
    pub fn of(is_vehicle: bool, is_resonant: bool) -> Self {
        match (is_vehicle, is_resonant) {
            (false, false) => CombatantMode::HumanDormant,
            (false, true) => CombatantMode::HumanResonant,
            (true, false) => CombatantMode::VehicleDormant,
            (true, true) => CombatantMode::VehicleResonant,
        }
    }

    pub fn is_vehicle(&self) -> bool {
        matches!(self, CombatantMode::VehicleDormant | CombatantMode::VehicleResonant)
    }

    pub fn is_resonant(&self) -> bool {
        matches!(self, CombatantMode::HumanResonant | CombatantMode::VehicleResonant)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CombatantMode::HumanDormant => "HUMAN",
            CombatantMode::HumanResonant => "HUMAN (RESONANT)",
            CombatantMode::VehicleDormant => "MECH",
            CombatantMode::VehicleResonant => "MECH (RESONANT)",
        }
    }
}
