use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{Coordinates, Ranker, TravelMode};
use crate::models::{HealthResponse, RankListingsRequest, RankListingsResponse};
use crate::routes::{bad_request, internal_error, AppState};

/// Configure listing and health routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/listings/rank", web::post().to(rank_listings));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank listings endpoint
///
/// POST /api/v1/listings/rank
///
/// Request body:
/// ```json
/// {
///   "profile": { "purpose": "invest", "budgetMax": 1600000, "minBeds": 3, ... },
///   "showNearMisses": true,
///   "origin": "-37.8183,144.9671",
///   "mode": "driving"
/// }
/// ```
///
/// Fetches the current listing set, enriches it with travel time and risk,
/// then scores and sorts it.
async fn rank_listings(
    state: web::Data<AppState>,
    req: web::Json<RankListingsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    let origin = match req.origin.as_deref() {
        None => state.default_origin,
        Some(o) => match Coordinates::parse(o) {
            Ok(c) => c,
            Err(e) => return bad_request("Bad origin coords", e.to_string()),
        },
    };

    let mode = match TravelMode::from_param(req.mode.as_deref()) {
        Ok(mode) => mode.unwrap_or(state.default_mode),
        Err(e) => return bad_request("Invalid mode", e.to_string()),
    };

    let listings = match state.listings.search().await {
        Ok(listings) => listings,
        Err(e) => {
            tracing::error!("Failed to fetch listings: {}", e);
            return internal_error("Failed to fetch listings");
        }
    };

    tracing::info!("Ranking {} listings by {} from {}", listings.len(), mode, origin);

    // Enrichment must finish before scoring starts
    let enriched = state.enricher.with_commute(origin, mode).enrich(listings).await;

    let show_near_misses = req.show_near_misses.unwrap_or(state.show_near_misses);
    let results = Ranker::new(show_near_misses)
        .with_default_weights(state.default_weights)
        .rank(&req.profile, &enriched);

    let response = RankListingsResponse {
        total: results.len(),
        results,
    };

    HttpResponse::Ok().json(response)
}
