//! Scoring configuration: component weights and venue profiles
//!
//! Everything the composite score depends on lives here so alternate
//! weight tables can be injected without touching the engine. Defaults
//! match the operator's tuned values; a JSON file with the same shape
//! can override any subset of fields.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::error::AppError;

/// Weight applied to each standardized component of the composite score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentWeights {
    /// Handicap position (smaller offset starts further forward)
    pub handicap: f64,
    /// Average start timing (smaller is better)
    pub start_timing: f64,
    /// Average race completion time (smaller is better)
    pub race_time: f64,
    /// In-2 finish rate over the trailing window
    pub recent: f64,
    /// In-2 finish rate on the day's surface
    pub surface: f64,
    /// Home-venue bonus weight
    pub home: f64,
}

impl Default for ComponentWeights {
    fn default() -> Self {
        Self {
            handicap: 0.90,
            start_timing: 1.10,
            race_time: 1.10,
            recent: 0.90,
            surface: 0.90,
            home: 1.00,
        }
    }
}

/// Venue weighting profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VenueProfile {
    /// Wet-surface weighting multiplier (>1 means wet aptitude matters more here)
    pub wet_boost: f64,
    /// Start-timing weighting multiplier (>1 means starts matter more here)
    pub st_boost: f64,
    /// Extra wet weighting added on night sessions with a wet surface
    pub night_wet_extra: f64,
}

impl Default for VenueProfile {
    /// Neutral profile used for venues outside the known table
    fn default() -> Self {
        Self {
            wet_boost: 1.0,
            st_boost: 1.0,
            night_wet_extra: 0.0,
        }
    }
}

/// Full scoring configuration passed to the rating engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: ComponentWeights,
    /// Home-venue bonus in standard-score points
    pub home_bonus: f64,
    /// Default partner count behind the anchor
    pub partner_count: usize,
    /// Venue profiles keyed by venue name
    pub venues: HashMap<String, VenueProfile>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ComponentWeights::default(),
            home_bonus: 2.0,
            partner_count: 4,
            venues: default_venues(),
        }
    }
}

/// Built-in venue table
pub fn default_venues() -> HashMap<String, VenueProfile> {
    let mut venues = HashMap::new();
    venues.insert(
        "川口".to_string(),
        VenueProfile {
            wet_boost: 1.20,
            st_boost: 1.00,
            night_wet_extra: 0.05,
        },
    );
    venues.insert(
        "飯塚".to_string(),
        VenueProfile {
            wet_boost: 1.20,
            st_boost: 1.00,
            night_wet_extra: 0.05,
        },
    );
    venues.insert(
        "伊勢崎".to_string(),
        VenueProfile {
            wet_boost: 0.85,
            st_boost: 1.00,
            night_wet_extra: 0.00,
        },
    );
    venues.insert(
        "山陽".to_string(),
        VenueProfile {
            wet_boost: 1.00,
            st_boost: 1.10,
            night_wet_extra: 0.00,
        },
    );
    venues.insert(
        "浜松".to_string(),
        VenueProfile {
            wet_boost: 0.95,
            st_boost: 1.05,
            night_wet_extra: 0.00,
        },
    );
    venues
}

impl ScoringConfig {
    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigError(format!("failed to read {:?}: {}", path, e)))?;
        serde_json::from_str(&content)
            .map_err(|e| AppError::ConfigError(format!("failed to parse {:?}: {}", path, e)))
    }

    /// Load from an optional path, falling back to built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(p) => match Self::load(p) {
                Ok(config) => config,
                Err(e) => {
                    warn!("{}. Using built-in defaults.", e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// Resolve the profile for a venue, falling back to the neutral profile
    /// when the venue is not in the table
    pub fn venue_profile(&self, venue: &str) -> VenueProfile {
        match self.venues.get(venue) {
            Some(profile) => *profile,
            None => {
                warn!("Unknown venue '{}', using neutral profile", venue);
                VenueProfile::default()
            }
        }
    }
}
