use actix_web::{middleware, web, App, HttpServer};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use velobi::config::ScoringConfig;
use velobi::handlers::{health, predict, AppState};
use velobi::predictor::RatingEngine;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("{}:{}", host, port);

    // Scoring config: file override or built-in tables
    let config_path = std::env::var("VELOBI_CONFIG").map(PathBuf::from).ok();
    if let Some(ref path) = config_path {
        info!("Loading scoring config from {:?}", path);
    }
    let config = ScoringConfig::load_or_default(config_path.as_deref());

    info!(
        "Scoring config ready: {} venues, default partner count {}",
        config.venues.len(),
        config.partner_count
    );

    let app_state = Arc::new(AppState {
        engine: RatingEngine::new(config),
    });

    info!("Starting Velobi API server at http://{}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(middleware::Logger::default())
            .route("/health", web::get().to(health::health_check))
            .route("/predict", web::post().to(predict::predict_race))
    })
    .bind(&addr)?
    .run()
    .await
}
