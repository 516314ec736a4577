//! PilotSource - Sync-rate scaling and resonance bonuses from the pilot

use crate::config::BalanceConfig;
use crate::source::StatSource;
use crate::unit::{UnitStats, GAUGE_MAX};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata key marking a pilot whose resonance is already active
pub const RESONANCE_ACTIVE_KEY: &str = "is_resonance_active";

/// Pilot progression relevant to combat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PilotRecord {
    pub sync_level: i32,
    pub resonance_level: i32,
    #[serde(default)]
    pub resonance_gauge: f64,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl Default for PilotRecord {
    fn default() -> Self {
        PilotRecord {
            sync_level: 1,
            resonance_level: 0,
            resonance_gauge: 0.0,
            metadata: Map::new(),
        }
    }
}

impl PilotRecord {
    /// Whether metadata flags resonance as active
    pub fn is_resonance_active(&self) -> bool {
        self.metadata
            .get(RESONANCE_ACTIVE_KEY)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

/// Marks the unit as player-controlled and applies the pilot's modifiers
pub struct PilotSource<'a> {
    pub pilot: &'a PilotRecord,
}

impl<'a> PilotSource<'a> {
    pub fn new(pilot: &'a PilotRecord) -> Self {
        PilotSource { pilot }
    }
}

impl StatSource for PilotSource<'_> {
    fn id(&self) -> &str {
        "pilot"
    }

    fn priority(&self) -> i32 {
        100
    }

    fn apply(&self, stats: &mut UnitStats, balance: &BalanceConfig) {
        let p = self.pilot;
        stats.is_player = true;
        stats.resonance_level = p.resonance_level;
        stats.resonance_gauge = p.resonance_gauge.clamp(0.0, GAUGE_MAX);
        if p.is_resonance_active() {
            stats.is_resonance_active = true;
        }

        let sync_rate = balance.sync_rate(p.sync_level);
        stats.base_attack = (stats.base_attack as f64 * sync_rate) as i32;
        stats.target_defense = (stats.target_defense as f64 * sync_rate) as i32;

        stats.accuracy += p.resonance_level * balance.resonance.bonus_accuracy_per_level;
        stats.evasion += p.resonance_level * balance.resonance.bonus_evasion_per_level;
    }
}
