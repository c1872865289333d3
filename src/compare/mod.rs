mod regions;

pub use regions::{analyze_regional_differences, Region, RegionStats, RegionalDifferences};

use serde::{Deserialize, Serialize};

use crate::config::ComparatorConfig;
use crate::error::SpriteError;
use crate::sprite::{Sprite, SPRITE_CELLS};
use crate::suggestions::{self, Suggestion};

// ── Difference ────────────────────────────────────────────────────────────────

/// Percentage of the 40 pixels that differ between two sprites, rounded to
/// one decimal place.
///
/// Returns `Err(InvalidShape)` when either input does not have exactly 8 rows.
pub fn try_sprite_difference(a: &[u8], b: &[u8]) -> Result<f64, SpriteError> {
    let a = Sprite::try_from(a)?;
    let b = Sprite::try_from(b)?;
    Ok(sprite_difference(&a, &b))
}

/// Like [`try_sprite_difference`], but malformed input reads as `0.0`.
///
/// A `0.0` result therefore means either "identical" or "not 8 rows"; use
/// [`try_sprite_difference`] when the two must be told apart.
pub fn calculate_sprite_difference(a: &[u8], b: &[u8]) -> f64 {
    match try_sprite_difference(a, b) {
        Ok(difference) => difference,
        Err(e) => {
            tracing::warn!(error = %e, "treating malformed sprite pair as identical");
            0.0
        }
    }
}

/// Difference between two well-formed sprites.
pub fn sprite_difference(a: &Sprite, b: &Sprite) -> f64 {
    let mismatches = a.mismatches(b);
    round_one_decimal(mismatches as f64 / SPRITE_CELLS as f64 * 100.0)
}

/// Round half away from zero to one decimal place.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ── DifferenceResult ──────────────────────────────────────────────────────────

/// Outcome of checking whether a character and an obstacle are told apart
/// easily enough.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifferenceResult {
    pub valid: bool,
    /// `0.0..=100.0`, one decimal place.
    pub difference: f64,
    pub message: String,
    /// Only populated when `valid` is false.
    pub suggestions: Vec<Suggestion>,
}

// ── SpriteComparator ──────────────────────────────────────────────────────────

/// Validates sprite pairs against a [`ComparatorConfig`].
///
/// Holds no mutable state; one instance can be shared freely across threads.
#[derive(Clone, Debug, Default)]
pub struct SpriteComparator {
    config: ComparatorConfig,
}

impl SpriteComparator {
    pub fn new(config: ComparatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ComparatorConfig {
        &self.config
    }

    pub fn difference(&self, a: &[u8], b: &[u8]) -> f64 {
        calculate_sprite_difference(a, b)
    }

    /// Check `character` against `obstacle`.
    ///
    /// Passing pairs carry no suggestions.  Failing pairs carry the full
    /// output of [`SpriteComparator::suggest`], or none at all when either
    /// sprite is not 8 rows (the difference then reads as `0.0`).
    pub fn validate(&self, character: &[u8], obstacle: &[u8]) -> DifferenceResult {
        let min = self.config.min_difference_required;
        let difference = self.difference(character, obstacle);
        tracing::debug!(difference, min, "validated sprite pair");

        if difference < min {
            let suggestions = match (Sprite::try_from(character), Sprite::try_from(obstacle)) {
                (Ok(c), Ok(o)) => self.suggest(&c, &o),
                _ => Vec::new(),
            };
            return DifferenceResult {
                valid: false,
                difference,
                message: format!(
                    "El personaje y el obstáculo son muy similares ({difference}% de diferencia). \
                     Se requiere al menos {min}% de diferencia para garantizar jugabilidad."
                ),
                suggestions,
            };
        }

        DifferenceResult {
            valid: true,
            difference,
            message: format!("Los sprites son suficientemente diferentes ({difference}% de diferencia)."),
            suggestions: Vec::new(),
        }
    }

    pub fn suggest(&self, character: &Sprite, obstacle: &Sprite) -> Vec<Suggestion> {
        suggestions::generate(character, obstacle, &self.config)
    }
}

/// [`SpriteComparator::validate`] with the default thresholds.
pub fn validate_sprite_difference(character: &[u8], obstacle: &[u8]) -> DifferenceResult {
    SpriteComparator::default().validate(character, obstacle)
}
