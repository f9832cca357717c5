//! Tunables for the [`Recommender`](../recommend/struct.Recommender.html). Every field has a
//! default, so a settings file only needs the values it changes:
//!
//! ```toml
//! default_count = 5
//! quality_floor = 0.6
//! ```

use std::fs;
use std::path::Path;

use error::{Result, WardrobeError};
use toml;

/// Settings that control how many outfits the recommender builds and which ones it keeps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationSettings {
    /// How many outfits to produce when a call doesn't say.
    pub default_count: usize,
    /// Seasonal recommendations must score strictly above this to be kept.
    pub quality_floor: f64,
    /// Seasonal recommendations need at least this many items.
    pub min_outfit_items: usize,
    /// At most `candidate_multiplier * count` base items are tried for seasonal recommendations.
    pub candidate_multiplier: usize,
    /// Occasion, season and style recommendations need at least this many matching items.
    pub min_filtered_items: usize,
    /// How many alternatives to build around a single item when completing an outfit.
    pub gap_alternatives: usize,
    /// Confidence of the first completed outfit.
    pub gap_base_confidence: f64,
    /// How much confidence drops with each further completed outfit.
    pub gap_confidence_step: f64,
    /// Confidence given to every weather-based outfit.
    pub weather_confidence: f64,
}

impl Default for RecommendationSettings {
    fn default() -> RecommendationSettings {
        RecommendationSettings {
            default_count: 3,
            quality_floor: 0.7,
            min_outfit_items: 3,
            candidate_multiplier: 2,
            min_filtered_items: 3,
            gap_alternatives: 3,
            gap_base_confidence: 0.8,
            gap_confidence_step: 0.1,
            weather_confidence: 0.8,
        }
    }
}

impl RecommendationSettings {
    /// Parses settings from TOML, filling in defaults for anything left out.
    pub fn from_toml_str(text: &str) -> Result<RecommendationSettings> {
        let settings: RecommendationSettings =
            toml::from_str(text).map_err(|e| WardrobeError::InvalidSettings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads settings from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<RecommendationSettings> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            WardrobeError::InvalidSettings(format!("could not read {}: {}", path.display(), e))
        })?;
        RecommendationSettings::from_toml_str(&text)
    }

    /// Checks that every threshold and confidence is a number in `[0, 1]`. NaN is rejected.
    pub fn validate(&self) -> Result<()> {
        let fractions = [
            ("quality_floor", self.quality_floor),
            ("gap_base_confidence", self.gap_base_confidence),
            ("gap_confidence_step", self.gap_confidence_step),
            ("weather_confidence", self.weather_confidence),
        ];
        for &(name, value) in fractions.iter() {
            if value.is_nan() || !(0.0..=1.0).contains(&value) {
                return Err(WardrobeError::InvalidSettings(format!(
                    "{} must be between 0 and 1, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
