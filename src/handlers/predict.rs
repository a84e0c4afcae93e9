use actix_web::{web, HttpResponse};
use std::sync::Arc;
use tracing::info;

use crate::core::wheel::recommend;
use crate::error::{validate_partner_count, validate_riders, AppError};
use crate::handlers::AppState;
use crate::models::{PredictRequest, PredictResponse};

/// Rate a field and recommend the fixed wheel bet
pub async fn predict_race(
    state: web::Data<Arc<AppState>>,
    req: web::Json<PredictRequest>,
) -> Result<HttpResponse, AppError> {
    // Validate request
    validate_riders(&req.riders)?;
    let partner_count = req
        .partners
        .unwrap_or(state.engine.config().partner_count);
    validate_partner_count(partner_count)?;

    let rating = state.engine.rate(&req.riders, &req.conditions)?;
    let bet = recommend(&rating.ranking, partner_count);

    info!(
        "Rated {} riders at {} ({:?}), top pick {}",
        req.riders.len(),
        req.conditions.venue,
        req.conditions.surface,
        rating.ranking[0].no
    );

    let response = PredictResponse {
        conditions: req.into_inner().conditions,
        ranking: rating.ranking,
        components: rating.components,
        bet,
    };

    Ok(HttpResponse::Ok().json(response))
}
