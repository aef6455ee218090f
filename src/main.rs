use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use hotlot_engine::config::Settings;
use hotlot_engine::routes::{self, AppState};
use hotlot_engine::services::{
    Enricher, LocalEstimator, RemoteEstimator, RiskProvider, StaticListings, TravelTimeProvider,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration before logging so the configured level applies
    let settings = Settings::load();

    // Initialize logging; LOG_LEVEL and LOG_FORMAT override the config file
    let (cfg_level, cfg_format) = match &settings {
        Ok(s) => (s.logging.level.clone(), s.logging.format.clone()),
        Err(_) => ("info".to_string(), "json".to_string()),
    };
    let log_level = std::env::var("LOG_LEVEL").unwrap_or(cfg_level);
    let log_format = std::env::var("LOG_FORMAT").unwrap_or(cfg_format);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }

    info!("Starting HotLot ranking service...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;

    info!("Configuration loaded successfully");

    let origin = settings.estimator.origin();
    let mode = settings.estimator.mode;

    // Estimators: remote provider when configured, local heuristics otherwise
    let (travel, risk): (Arc<dyn TravelTimeProvider>, Arc<dyn RiskProvider>) =
        match &settings.estimator.remote_url {
            Some(url) => {
                let remote = RemoteEstimator::new(
                    url.clone(),
                    Duration::from_secs(settings.estimator.timeout_secs.unwrap_or(10)),
                    settings.estimator.cache_size.unwrap_or(1000),
                    Duration::from_secs(settings.estimator.cache_ttl_secs.unwrap_or(600)),
                )
                .map_err(|e| {
                    error!("Failed to create remote estimator client: {}", e);
                    std::io::Error::new(std::io::ErrorKind::Other, e)
                })?;
                info!("Using remote estimator at {}", url);
                let remote = Arc::new(remote);
                let travel: Arc<dyn TravelTimeProvider> = remote.clone();
                let risk: Arc<dyn RiskProvider> = remote;
                (travel, risk)
            }
            None => {
                info!("Using local heuristic estimators");
                let travel: Arc<dyn TravelTimeProvider> = Arc::new(LocalEstimator);
                let risk: Arc<dyn RiskProvider> = Arc::new(LocalEstimator);
                (travel, risk)
            }
        };

    let listings = StaticListings::sample().map_err(|e| {
        error!("Failed to load sample listings: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;

    if listings.is_empty() {
        warn!("No sample listings loaded; every ranking will be empty");
    } else {
        info!("Loaded {} sample listings", listings.len());
    }

    // Build application state
    let app_state = AppState {
        enricher: Enricher::new(travel, risk, origin, mode)
            .with_concurrency(settings.estimator.max_concurrency),
        listings: Arc::new(listings),
        default_origin: origin,
        default_mode: mode,
        show_near_misses: settings.ranking.show_near_misses,
        default_weights: settings.scoring.weights,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
