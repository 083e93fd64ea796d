use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::crystal_rig::CrystalParams;
use crate::sequencer::MorphParams;

/// Tuning parameters for both scenes.
///
/// These constants are art direction and have been retuned repeatedly
/// (orbit radius 1200/1400/1500, coefficient 1.2/1.5/1.6, rotation formulas
/// toggled on and off), so none of them are baked in: everything lives
/// here, and a JSON file can override any subset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Camera orbit radius for the morph scene
    pub orbit_radius: f32,
    pub morph: MorphParams,
    pub crystal: CrystalParams,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            orbit_radius: 1500.0,
            morph: MorphParams::default(),
            crystal: CrystalParams::default(),
        }
    }
}

impl Tuning {
    /// Load overrides from a JSON file; absent fields keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read tuning file {:?}", path))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse tuning file {:?}", path))
    }
}
