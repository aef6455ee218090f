// Route exports
pub mod estimates;
pub mod listings;

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::core::{Coordinates, TravelMode};
use crate::models::{ErrorResponse, Weights};
use crate::services::{Enricher, ListingProvider};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub enricher: Enricher,
    pub listings: Arc<dyn ListingProvider>,
    pub default_origin: Coordinates,
    pub default_mode: TravelMode,
    pub show_near_misses: bool,
    pub default_weights: Weights,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(estimates::configure)
            .configure(listings::configure),
    );
}

pub(crate) fn bad_request(error: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message: message.into(),
        status_code: 400,
    })
}

/// Generic 500; internal detail goes to the log, not the client
pub(crate) fn internal_error(error: &str) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: error.to_string(),
        message: "An internal error occurred".to_string(),
        status_code: 500,
    })
}
