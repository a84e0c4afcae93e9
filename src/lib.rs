//! Velobi - Auto race pre-race rating system
//!
//! This library provides:
//! - Standard-score (偏差値) rating of a rider field
//! - Venue/weather weighting and home-track bonus
//! - Priority-mark ranking (◎〇▲△×αβγ)
//! - Fixed anchor-partners wheel bet recommendation
//! - Rider table loading from CSV
//!
//! # Example
//!
//! ```
//! use velobi::core::standard_score::standard_scores;
//! use velobi::core::wheel::{recommend, BetRecommendation};
//! use velobi::models::MarkedEntry;
//!
//! // Standardize a field of race times (negated so smaller is better)
//! let scores = standard_scores(&[-3.472, -3.462, -3.433]);
//! assert_eq!(scores.len(), 3);
//!
//! // Build the fixed wheel bet from a ranking
//! let ranked: Vec<MarkedEntry> = vec![
//!     MarkedEntry { mark: "◎".into(), no: 7, score: 250.1 },
//!     MarkedEntry { mark: "〇".into(), no: 2, score: 247.8 },
//!     MarkedEntry { mark: "▲".into(), no: 5, score: 244.0 },
//! ];
//! let bet = recommend(&ranked, 4);
//! assert!(matches!(bet, BetRecommendation::Formation { anchor: 7, .. }));
//! ```

pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod models;
pub mod predictor;

// API-specific modules (only available with api feature)
#[cfg(feature = "api")]
pub mod handlers;

// Re-export commonly used types
pub use crate::core::wheel::{recommend, BetRecommendation, TrifectaTicket};
pub use config::{ComponentWeights, ScoringConfig, VenueProfile};
pub use data::load_riders;
pub use models::{
    ComponentScores, MarkedEntry, PredictRequest, PredictResponse, RaceConditions, RaceRating,
    Rider, Surface,
};
pub use predictor::{RatingEngine, MARKS};
