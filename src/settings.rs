//! Brush settings - initial clamp flags, key bindings and hit-test geometry.
//!
//! Settings are plain serde data and can be loaded from JSON. Missing fields
//! fall back to the defaults in [`crate::constants`].

use crate::constants::{DEFAULT_CLAMP, DEFAULT_DRAG_TOGGLE_KEY, DEFAULT_HANDLE_SIZE};
use crate::types::AxisPair;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushSettings {
    /// Initial clamp flag per axis
    pub clamp: AxisPair<bool>,
    /// Key code that toggles a resize into a drag while held
    pub drag_toggle_key: u32,
    /// Resize handle thickness in pixels
    pub handle_size: f64,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            clamp: AxisPair::splat(DEFAULT_CLAMP),
            drag_toggle_key: DEFAULT_DRAG_TOGGLE_KEY,
            handle_size: DEFAULT_HANDLE_SIZE,
        }
    }
}

impl BrushSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json).context("Failed to parse brush settings")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read brush settings from {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid brush settings in {}", path.display()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize brush settings")
    }

    fn validate(&self) -> Result<()> {
        if !(self.handle_size.is_finite() && self.handle_size > 0.0) {
            anyhow::bail!("handle_size must be a positive number, got {}", self.handle_size);
        }
        Ok(())
    }
}
