//! Combat - session state, resonance and scripted triggers

pub mod resonance;
mod result;
mod script;
mod session;

pub use result::CombatResult;
pub use script::{evaluate_trigger, ScriptAction, ScriptEvent, ScriptPhase, ScriptTrigger};
pub use session::{CombatSession, EncounterOutcome};
