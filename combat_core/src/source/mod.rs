//! StatSource - Assembly of a combatant from vehicle, gear and pilot records

mod gear;
mod pilot;
mod vehicle;

pub use gear::{EquipmentItem, GearSource};
pub use pilot::{PilotRecord, PilotSource};
pub use vehicle::{VehicleRecord, VehicleSource};

use crate::config::BalanceConfig;
use crate::unit::UnitStats;

/// Trait for anything that contributes stats to a UnitStats snapshot
pub trait StatSource {
    /// Unique identifier for this source
    fn id(&self) -> &str;

    /// Priority for application order (higher = applied later)
    /// - Vehicle/base: -100
    /// - Gear: 0
    /// - Pilot: 100
    fn priority(&self) -> i32 {
        0
    }

    /// Apply this source's stats
    fn apply(&self, stats: &mut UnitStats, balance: &BalanceConfig);
}

/// Stats for a human with no vehicle and no gear
pub fn human_defaults() -> UnitStats {
    UnitStats {
        hp: 100,
        max_hp: 100,
        base_attack: 10,
        target_defense: 5,
        defense_efficiency: 0.3,
        accuracy: 70,
        evasion: 10,
        speed: 50,
        ..Default::default()
    }
}

/// Apply sources in priority order on top of the human defaults
pub fn apply_sources(sources: &mut [&dyn StatSource], balance: &BalanceConfig) -> UnitStats {
    sources.sort_by_key(|s| s.priority());

    let mut stats = human_defaults();
    for source in sources.iter() {
        tracing::trace!(source = source.id(), priority = source.priority(), "applying stat source");
        source.apply(&mut stats, balance);
    }
    stats
}

/// Build the engine's input shape from a vehicle, its items and a pilot
///
/// Vehicle base stats first, then equipped item bonuses, then the pilot's
/// sync-rate scaling and resonance bonuses.
pub fn assemble_unit_stats(
    vehicle: Option<&VehicleRecord>,
    items: &[EquipmentItem],
    pilot: Option<&PilotRecord>,
    balance: &BalanceConfig,
) -> UnitStats {
    let vehicle_source = vehicle.map(VehicleSource::new);
    let gear_sources: Vec<GearSource> = items.iter().map(GearSource::new).collect();
    let pilot_source = pilot.map(PilotSource::new);

    let mut sources: Vec<&dyn StatSource> = Vec::with_capacity(gear_sources.len() + 2);
    if let Some(ref v) = vehicle_source {
        sources.push(v);
    }
    for g in &gear_sources {
        sources.push(g);
    }
    if let Some(ref p) = pilot_source {
        sources.push(p);
    }

    apply_sources(&mut sources, balance)
}
