use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use crate::core::{
    distance::Coordinates,
    risk::{estimate_risk, RiskAssessment},
    travel::{estimate_travel_time, TravelEstimate, TravelMode},
};
use crate::models::{RiskResponse, TravelTimeResponse};

/// Errors raised by travel-time and risk providers
#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Provider returned status {0}")]
    ApiError(u16),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Source of commute estimates
///
/// Implementations are interchangeable as long as they answer with the
/// same shape; the enrichment stage does not care which one it holds.
#[async_trait]
pub trait TravelTimeProvider: Send + Sync {
    async fn travel_time(
        &self,
        origin: &Coordinates,
        destination: &Coordinates,
        mode: TravelMode,
    ) -> Result<TravelEstimate, EstimatorError>;
}

/// Source of traffic/parking risk estimates
#[async_trait]
pub trait RiskProvider: Send + Sync {
    async fn risk(&self, at: &Coordinates, suburb: &str) -> Result<RiskAssessment, EstimatorError>;
}

/// In-process heuristic estimators
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalEstimator;

#[async_trait]
impl TravelTimeProvider for LocalEstimator {
    async fn travel_time(
        &self,
        origin: &Coordinates,
        destination: &Coordinates,
        mode: TravelMode,
    ) -> Result<TravelEstimate, EstimatorError> {
        Ok(estimate_travel_time(origin, destination, mode))
    }
}

#[async_trait]
impl RiskProvider for LocalEstimator {
    async fn risk(&self, _at: &Coordinates, suburb: &str) -> Result<RiskAssessment, EstimatorError> {
        // Placeholder corridor and amenity signals; `_at` is unused until a spatial source exists
        Ok(estimate_risk(suburb))
    }
}

/// Estimators backed by a remote HTTP service
///
/// The service must expose `GET {base}/distance` and `GET {base}/risk`
/// answering with the same JSON as this crate's own endpoints. Responses
/// are cached per request for the configured TTL.
pub struct RemoteEstimator {
    base_url: String,
    client: Client,
    travel_cache: moka::future::Cache<String, TravelEstimate>,
    risk_cache: moka::future::Cache<String, RiskAssessment>,
}

impl RemoteEstimator {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        cache_size: u64,
        cache_ttl: Duration,
    ) -> Result<Self, EstimatorError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
            travel_cache: moka::future::CacheBuilder::new(cache_size)
                .time_to_live(cache_ttl)
                .build(),
            risk_cache: moka::future::CacheBuilder::new(cache_size)
                .time_to_live(cache_ttl)
                .build(),
        })
    }

    async fn get_json<T>(&self, url: &str) -> Result<T, EstimatorError>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        tracing::debug!("Requesting estimate from: {}", url);

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(EstimatorError::ApiError(response.status().as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| EstimatorError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl TravelTimeProvider for RemoteEstimator {
    async fn travel_time(
        &self,
        origin: &Coordinates,
        destination: &Coordinates,
        mode: TravelMode,
    ) -> Result<TravelEstimate, EstimatorError> {
        let url = format!(
            "{}/distance?origin={}&destination={}&mode={}",
            self.base_url,
            urlencoding::encode(&origin.to_string()),
            urlencoding::encode(&destination.to_string()),
            mode
        );

        if let Some(hit) = self.travel_cache.get(&url).await {
            tracing::trace!("Travel cache hit: {}", url);
            return Ok(hit);
        }

        let body: TravelTimeResponse = self.get_json(&url).await?;
        let estimate = TravelEstimate::from(body);
        self.travel_cache.insert(url, estimate.clone()).await;

        Ok(estimate)
    }
}

#[async_trait]
impl RiskProvider for RemoteEstimator {
    async fn risk(&self, at: &Coordinates, suburb: &str) -> Result<RiskAssessment, EstimatorError> {
        let url = format!(
            "{}/risk?lat={}&lon={}&suburb={}",
            self.base_url,
            at.lat,
            at.lon,
            urlencoding::encode(suburb)
        );

        if let Some(hit) = self.risk_cache.get(&url).await {
            tracing::trace!("Risk cache hit: {}", url);
            return Ok(hit);
        }

        let body: RiskResponse = self.get_json(&url).await?;
        if !body.risk.is_finite() || !(0.0..=1.0).contains(&body.risk) {
            return Err(EstimatorError::InvalidResponse(format!("risk out of range: {}", body.risk)));
        }

        let assessment = RiskAssessment::from(body);
        self.risk_cache.insert(url, assessment.clone()).await;

        Ok(assessment)
    }
}
