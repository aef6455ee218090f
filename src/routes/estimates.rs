use actix_web::{web, HttpResponse, Responder};

use crate::core::{Coordinates, GeoError, TravelMode};
use crate::models::{RiskQuery, RiskResponse, TravelTimeQuery, TravelTimeResponse};
use crate::routes::{bad_request, internal_error, AppState};
use crate::services::{LocalEstimator, RiskProvider, TravelTimeProvider};

/// Configure the estimator endpoints
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/distance", web::get().to(travel_time))
        .route("/risk", web::get().to(traffic_risk));
}

/// Travel-time estimate endpoint
///
/// GET /api/v1/distance?origin={lat,lon}&destination={lat,lon}&mode={driving|walking|transit}
///
/// A missing or unparseable origin falls back to the configured commute origin.
async fn travel_time(
    state: web::Data<AppState>,
    query: web::Query<TravelTimeQuery>,
) -> impl Responder {
    let destination = match query.destination.as_deref().map(str::trim) {
        Some(d) if !d.is_empty() => d,
        _ => return bad_request("Missing destination", GeoError::Missing("destination").to_string()),
    };

    let destination = match Coordinates::parse(destination) {
        Ok(c) => c,
        Err(e) => {
            tracing::info!("Rejected travel-time request: {}", e);
            return bad_request("Bad destination coords", e.to_string());
        }
    };

    let origin = query
        .origin
        .as_deref()
        .and_then(|o| Coordinates::parse(o).ok())
        .unwrap_or(state.default_origin);

    let mode = match TravelMode::from_param(query.mode.as_deref()) {
        Ok(mode) => mode.unwrap_or_default(),
        Err(e) => return bad_request("Invalid mode", e.to_string()),
    };

    match LocalEstimator.travel_time(&origin, &destination, mode).await {
        Ok(estimate) => {
            tracing::debug!("Estimated {} -> {} by {}: {} min", origin, destination, mode, estimate.minutes);
            HttpResponse::Ok().json(TravelTimeResponse::from(estimate))
        }
        Err(e) => {
            tracing::error!("Travel-time estimator failed: {}", e);
            internal_error("Estimator failed")
        }
    }
}

/// Traffic/parking risk endpoint
///
/// GET /api/v1/risk?lat={lat}&lon={lon}&suburb={name}
async fn traffic_risk(query: web::Query<RiskQuery>) -> impl Responder {
    let at = match (query.lat, query.lon) {
        (Some(lat), Some(lon)) => Coordinates::try_new(lat, lon),
        _ => Err(GeoError::Missing("lat and lon")),
    };

    let at = match at {
        Ok(c) => c,
        Err(e) => return bad_request("Bad coords", e.to_string()),
    };

    let suburb = query.suburb.as_deref().unwrap_or("").trim();

    match LocalEstimator.risk(&at, suburb).await {
        Ok(assessment) => HttpResponse::Ok().json(RiskResponse::from(assessment)),
        Err(e) => {
            tracing::error!("Risk estimator failed: {}", e);
            internal_error("Risk service failed")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use std::sync::Arc;
    use crate::core::REFERENCE_ORIGIN;
    use crate::models::Weights;
    use crate::services::{Enricher, StaticListings};

    fn state() -> AppState {
        AppState {
            enricher: Enricher::new(
                Arc::new(LocalEstimator),
                Arc::new(LocalEstimator),
                REFERENCE_ORIGIN,
                TravelMode::Driving,
            ),
            listings: Arc::new(StaticListings::new(vec![])),
            default_origin: REFERENCE_ORIGIN,
            default_mode: TravelMode::Driving,
            show_near_misses: true,
            default_weights: Weights::default(),
        }
    }

    #[actix_web::test]
    async fn test_travel_time_default_origin() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/distance?destination=-37.9529,145.0157")
            .to_request();
        let body: TravelTimeResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.minutes, 38);
        assert_eq!(body.method, "local-estimator");
        assert_eq!(body.km, 15.6);
    }

    #[actix_web::test]
    async fn test_travel_time_rejects_bad_destination() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure),
        )
        .await;

        for uri in ["/distance", "/distance?destination=", "/distance?destination=nowhere"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 400, "{} should be rejected", uri);
        }

        let req = test::TestRequest::get()
            .uri("/distance?destination=-37.95,145.01&mode=cycling")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_travel_time_blank_mode_means_driving() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure),
        )
        .await;

        for uri in [
            "/distance?destination=-37.9529,145.0157&mode=",
            "/distance?destination=-37.9529,145.0157&mode=%20%20",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let body: TravelTimeResponse = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body.minutes, 38, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_risk_endpoint() {
        let app = test::init_service(App::new().configure(configure)).await;

        let req = test::TestRequest::get()
            .uri("/risk?lat=-37.95&lon=145.01&suburb=Hampton")
            .to_request();
        let body: RiskResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.risk, 1.0);
        assert_eq!(body.notes[0], "Bayside rules applied: true");
    }

    #[actix_web::test]
    async fn test_risk_rejects_missing_coords() {
        let app = test::init_service(App::new().configure(configure)).await;

        for uri in ["/risk?lat=-37.95", "/risk?lat=NaN&lon=145.0", "/risk"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 400, "{} should be rejected", uri);
        }

        let req = test::TestRequest::get().uri("/risk?lon=145.0").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["error"], "Bad coords");
        assert_eq!(body["message"], "Missing coordinates: lat and lon");
    }
}
