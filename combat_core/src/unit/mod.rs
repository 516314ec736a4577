//! UnitStats - One combatant's fighting capability at the moment of an attack

mod mode;

pub use mode::CombatantMode;

use serde::{Deserialize, Serialize};

/// Upper bound of the resonance gauge
pub const GAUGE_MAX: f64 = 100.0;

/// Snapshot of a combatant, built fresh for each combat request
///
/// Only HP and the resonance fields are meant to be written back by callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitStats {
    pub hp: i32,
    pub max_hp: i32,
    /// Any positive value enables the Energy damage bonus against this unit
    pub shields: i32,
    pub base_attack: i32,
    pub target_defense: i32,
    /// Fraction (0-1) of defense that actually mitigates damage
    pub defense_efficiency: f64,
    pub accuracy: i32,
    pub evasion: i32,
    pub speed: i32,
    /// 0 = no resonance
    pub resonance_level: i32,
    /// 0-100
    pub resonance_gauge: f64,
    pub is_resonance_active: bool,
    pub is_vehicle: bool,
    pub is_player: bool,
}

impl UnitStats {
    /// Create a unit at full health
    pub fn new(max_hp: i32) -> Self {
        UnitStats {
            hp: max_hp,
            max_hp,
            ..Default::default()
        }
    }

    /// Check if unit is still standing
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Subtract damage, clamping HP at zero. Returns the HP actually lost.
    pub fn apply_damage(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = (self.hp - amount.max(0)).max(0);
        before - self.hp
    }

    /// Below one quarter of max HP
    pub fn is_critical_hp(&self) -> bool {
        i64::from(self.hp) * 4 < i64::from(self.max_hp)
    }

    /// Current mode (scale crossed with resonance)
    pub fn mode(&self) -> CombatantMode {
        CombatantMode::of(self.is_vehicle, self.is_resonance_active)
    }

    /// Gauge as a 0-1 fraction
    pub fn gauge_fraction(&self) -> f64 {
        (self.resonance_gauge / GAUGE_MAX).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_damage_clamps_at_zero() {
        let mut unit = UnitStats::new(50);
        assert_eq!(unit.apply_damage(30), 30);
        assert_eq!(unit.hp, 20);

        assert_eq!(unit.apply_damage(100), 20);
        assert_eq!(unit.hp, 0);
        assert!(!unit.is_alive());
    }

    #[test]
    fn test_negative_damage_does_not_heal() {
        let mut unit = UnitStats::new(50);
        unit.hp = 10;
        assert_eq!(unit.apply_damage(-5), 0);
        assert_eq!(unit.hp, 10);
    }

    #[test]
    fn test_critical_hp_threshold() {
        let mut unit = UnitStats::new(100);
        unit.hp = 25;
        assert!(!unit.is_critical_hp());
        unit.hp = 24;
        assert!(unit.is_critical_hp());
    }

    #[test]
    fn test_critical_hp_near_i32_max() {
        let unit = UnitStats::new(i32::MAX);
        assert!(!unit.is_critical_hp());

        let mut low = UnitStats::new(i32::MAX);
        low.hp = i32::MAX / 4 - 1;
        assert!(low.is_critical_hp());
    }

    #[test]
    fn test_gauge_fraction() {
        let mut unit = UnitStats::new(10);
        unit.resonance_gauge = 25.0;
        assert!((unit.gauge_fraction() - 0.25).abs() < 1e-9);
        unit.resonance_gauge = GAUGE_MAX;
        assert!((unit.gauge_fraction() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_json_field_names() {
        let unit = UnitStats {
            is_vehicle: true,
            ..UnitStats::new(10)
        };
        let json = serde_json::to_value(&unit).unwrap();
        assert_eq!(json["max_hp"], 10);
        assert_eq!(json["is_vehicle"], true);
        assert_eq!(json["is_resonance_active"], false);
    }
}
