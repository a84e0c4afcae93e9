use serde::{Deserialize, Serialize};

/// Rider entry data from the race program
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rider {
    pub no: u8,
    #[serde(default)]
    pub name: String,
    pub home: String,
    pub handicap_m: u32,
    pub avg_st: f64,
    pub avg_race_time: f64,
    pub recent_in2_rate: f64,
    pub dry_in2_rate: f64,
    pub wet_in2_rate: f64,
}

/// Track surface state on race day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    Dry,
    Wet,
}

impl Surface {
    pub fn is_wet(&self) -> bool {
        matches!(self, Surface::Wet)
    }
}

/// Race-day conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceConditions {
    pub venue: String,
    pub surface: Surface,
    #[serde(default)]
    pub is_night: bool,
}

/// Per-component standard scores for a rider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentScores {
    pub no: u8,
    pub handicap: f64,
    pub start_timing: f64,
    pub race_time: f64,
    pub recent: f64,
    pub surface: f64,
}

/// One ranked entry: priority mark, rider number, composite score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkedEntry {
    pub mark: String,
    pub no: u8,
    pub score: f64,
}

/// Full rating output for a field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceRating {
    /// Entries sorted by descending composite score
    pub ranking: Vec<MarkedEntry>,
    /// Component standard scores, aligned with the input rider order
    pub components: Vec<ComponentScores>,
}

/// Rating request
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictRequest {
    pub conditions: RaceConditions,
    pub riders: Vec<Rider>,
    /// Partner count override (2-6); falls back to the configured default
    #[serde(default)]
    pub partners: Option<usize>,
}

/// Rating response
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    pub conditions: RaceConditions,
    pub ranking: Vec<MarkedEntry>,
    pub components: Vec<ComponentScores>,
    pub bet: crate::core::wheel::BetRecommendation,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub known_venues: usize,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
