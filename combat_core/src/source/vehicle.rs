//! VehicleSource - Base stats from a vehicle record

use crate::config::BalanceConfig;
use crate::source::StatSource;
use crate::unit::UnitStats;
use serde::{Deserialize, Serialize};

/// Vehicle base stats as stored by the hangar
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    #[serde(default)]
    pub name: String,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
}

/// Replaces the human defaults with vehicle-scale stats
pub struct VehicleSource<'a> {
    pub vehicle: &'a VehicleRecord,
}

impl<'a> VehicleSource<'a> {
    pub fn new(vehicle: &'a VehicleRecord) -> Self {
        VehicleSource { vehicle }
    }
}

impl StatSource for VehicleSource<'_> {
    fn id(&self) -> &str {
        "vehicle"
    }

    fn priority(&self) -> i32 {
        -100
    }

    fn apply(&self, stats: &mut UnitStats, balance: &BalanceConfig) {
        let v = self.vehicle;
        stats.hp = v.hp;
        stats.max_hp = v.hp;
        stats.base_attack = v.attack;
        stats.target_defense = v.defense;
        stats.defense_efficiency = balance.base_stats.default_defense_efficiency;
        stats.accuracy = balance.base_stats.default_accuracy;
        stats.evasion = v.speed / 10;
        stats.speed = v.speed;
        stats.is_vehicle = true;
    }
}
