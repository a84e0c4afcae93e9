use std::collections::HashMap;

use crate::config::ScoringConfig;
use crate::core::standard_score::standard_scores;
use crate::error::AppError;
use crate::models::{ComponentScores, MarkedEntry, RaceConditions, RaceRating, Rider};

/// Priority marks assigned to ranked positions, best first
pub const MARKS: [&str; 8] = ["◎", "〇", "▲", "△", "×", "α", "β", "γ"];

/// Standard-score rating engine for a race field
///
/// Converts raw rider statistics into five standardized components,
/// combines them with venue/weather-adjusted weights and the home-track
/// bonus, and ranks the field by descending composite score.
pub struct RatingEngine {
    config: ScoringConfig,
}

impl RatingEngine {
    /// Create an engine with an explicit scoring configuration
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Create an engine with the built-in weight and venue tables
    pub fn with_defaults() -> Self {
        Self::new(ScoringConfig::default())
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Composite scores keyed by rider number
    ///
    /// Returns Err for an empty field; a single-rider field is the
    /// degenerate zero-variance case where every component standardizes
    /// to 50.
    pub fn score_riders(
        &self,
        riders: &[Rider],
        conditions: &RaceConditions,
    ) -> Result<HashMap<u8, f64>, AppError> {
        if riders.is_empty() {
            return Err(AppError::EmptyField);
        }

        let components = self.component_scores(riders, conditions);

        let profile = self.config.venue_profile(&conditions.venue);
        let mut wet_boost = profile.wet_boost;
        if conditions.is_night && conditions.surface.is_wet() {
            wet_boost += profile.night_wet_extra;
        }

        let weights = &self.config.weights;
        let st_weight = weights.start_timing * profile.st_boost;
        let surface_weight = weights.surface
            * if conditions.surface.is_wet() {
                wet_boost
            } else {
                1.0
            };

        let mut scores = HashMap::with_capacity(riders.len());
        for (rider, c) in riders.iter().zip(&components) {
            let mut score = weights.handicap * c.handicap
                + st_weight * c.start_timing
                + weights.race_time * c.race_time
                + weights.recent * c.recent
                + surface_weight * c.surface;
            if rider.home == conditions.venue {
                score += weights.home * self.config.home_bonus;
            }
            scores.insert(rider.no, score);
        }
        Ok(scores)
    }

    /// Per-component standard scores, aligned with the input rider order
    ///
    /// Each raw array is re-oriented so that larger is better before
    /// standardizing: handicap offset, start timing and race time are
    /// negated; the surface component picks the wet or dry in-2 rate to
    /// match the day's surface.
    pub fn component_scores(
        &self,
        riders: &[Rider],
        conditions: &RaceConditions,
    ) -> Vec<ComponentScores> {
        let handicap: Vec<f64> = riders.iter().map(|r| -(r.handicap_m as f64)).collect();
        let start_timing: Vec<f64> = riders.iter().map(|r| -r.avg_st).collect();
        let race_time: Vec<f64> = riders.iter().map(|r| -r.avg_race_time).collect();
        let recent: Vec<f64> = riders.iter().map(|r| r.recent_in2_rate).collect();
        let surface: Vec<f64> = riders
            .iter()
            .map(|r| {
                if conditions.surface.is_wet() {
                    r.wet_in2_rate
                } else {
                    r.dry_in2_rate
                }
            })
            .collect();

        let h_handicap = standard_scores(&handicap);
        let h_start = standard_scores(&start_timing);
        let h_race = standard_scores(&race_time);
        let h_recent = standard_scores(&recent);
        let h_surface = standard_scores(&surface);

        riders
            .iter()
            .enumerate()
            .map(|(i, r)| ComponentScores {
                no: r.no,
                handicap: h_handicap[i],
                start_timing: h_start[i],
                race_time: h_race[i],
                recent: h_recent[i],
                surface: h_surface[i],
            })
            .collect()
    }

    /// Descending-score ranking with priority marks
    ///
    /// Ties break by ascending rider number so the order is fully
    /// deterministic. Positions beyond the mark alphabet get an empty
    /// mark.
    pub fn rank_riders(&self, scores: &HashMap<u8, f64>) -> Vec<MarkedEntry> {
        let mut ordered: Vec<(u8, f64)> = scores.iter().map(|(no, s)| (*no, *s)).collect();
        ordered.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });

        ordered
            .into_iter()
            .enumerate()
            .map(|(i, (no, score))| MarkedEntry {
                mark: MARKS.get(i).copied().unwrap_or("").to_string(),
                no,
                score,
            })
            .collect()
    }

    /// Full rating: marked ranking plus component standard scores
    pub fn rate(
        &self,
        riders: &[Rider],
        conditions: &RaceConditions,
    ) -> Result<RaceRating, AppError> {
        let scores = self.score_riders(riders, conditions)?;
        let ranking = self.rank_riders(&scores);
        let components = self.component_scores(riders, conditions);
        Ok(RaceRating {
            ranking,
            components,
        })
    }
}

impl Default for RatingEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
