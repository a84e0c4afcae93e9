//! HTTP request handlers

pub mod health;
pub mod predict;

use crate::predictor::RatingEngine;

/// Application state shared across handlers
pub struct AppState {
    pub engine: RatingEngine,
}
