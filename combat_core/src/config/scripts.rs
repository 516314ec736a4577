//! Encounter script loading

use super::ConfigError;
use crate::combat::ScriptEvent;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for an encounter's scripted events
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncounterScript {
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

/// Load scripted events from a TOML file
pub fn load_script_events(path: &Path) -> Result<Vec<ScriptEvent>, ConfigError> {
    let script: EncounterScript = super::load_toml(path)?;
    Ok(script.events)
}

/// Load scripted events from a TOML string
pub fn parse_script_events(content: &str) -> Result<Vec<ScriptEvent>, ConfigError> {
    let script: EncounterScript = super::parse_toml(content)?;
    Ok(script.events)
}
