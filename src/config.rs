use serde::{Deserialize, Serialize};

use crate::error::SpriteError;

// ── ComparatorConfig ──────────────────────────────────────────────────────────

/// Thresholds used when validating a character/obstacle pair and when
/// deciding which hints to give.
///
/// All values are percentages in `0.0..=100.0`.  Missing keys fall back to
/// the defaults when loading from JSON, so a file may override just one of
/// them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparatorConfig {
    /// A pair passes validation when its difference is at least this.
    pub min_difference_required: f64,
    /// Horizontal bands differing by less than this are reported.
    pub region_threshold: f64,
    /// Density hint fires when the two densities are closer than this.
    pub density_gap_threshold: f64,
    /// A character denser than this is told to shed pixels rather than add them.
    pub dense_sprite_threshold: f64,
    /// Shape hint fires when both side bands differ by less than this.
    pub lateral_threshold: f64,
}

impl ComparatorConfig {
    pub fn from_json(json: &str) -> Result<Self, SpriteError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            min_difference_required: 20.0,
            region_threshold:        30.0,
            density_gap_threshold:   15.0,
            dense_sprite_threshold:  50.0,
            lateral_threshold:       25.0,
        }
    }
}
