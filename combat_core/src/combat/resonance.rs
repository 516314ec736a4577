//! Resonance gauge - accrual and the Dormant -> Active transition
//!
//! The gauge fills from damage dealt and taken while a combatant is dormant.
//! Activation requires a full gauge, empties it, and is one-way for the
//! remainder of the encounter.

use crate::unit::{UnitStats, GAUGE_MAX};

/// Add `damage * rate` to a dormant unit's gauge, clamped to [0, 100]
///
/// Returns the gauge actually gained. Active units do not accrue.
pub fn accrue_gauge(unit: &mut UnitStats, damage: i32, rate: f64) -> f64 {
    if unit.is_resonance_active {
        return 0.0;
    }
    let before = unit.resonance_gauge;
    unit.resonance_gauge = (before + damage as f64 * rate).clamp(0.0, GAUGE_MAX);
    unit.resonance_gauge - before
}

/// Whether the unit could activate resonance right now
pub fn can_activate(unit: &UnitStats) -> bool {
    !unit.is_resonance_active && unit.resonance_gauge >= GAUGE_MAX
}

/// Enter resonance if the gauge is full; no-op otherwise
pub fn activate(unit: &mut UnitStats) -> bool {
    if !can_activate(unit) {
        return false;
    }
    unit.is_resonance_active = true;
    unit.resonance_gauge = 0.0;
    true
}
