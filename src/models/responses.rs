use serde::{Deserialize, Serialize};
use crate::core::{risk::RiskAssessment, travel::TravelEstimate};
use crate::models::domain::ScoredListing;

/// Travel-time estimate. Any provider answering in this shape is interchangeable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelTimeResponse {
    pub minutes: u32,
    pub method: String,
    pub km: f64,
}

/// Traffic/parking risk estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResponse {
    pub risk: f64,
    pub notes: Vec<String>,
}

impl From<TravelEstimate> for TravelTimeResponse {
    fn from(e: TravelEstimate) -> Self {
        Self {
            minutes: e.minutes,
            method: e.method,
            km: e.km,
        }
    }
}

impl From<TravelTimeResponse> for TravelEstimate {
    fn from(r: TravelTimeResponse) -> Self {
        Self {
            minutes: r.minutes,
            method: r.method,
            km: r.km,
        }
    }
}

impl From<RiskAssessment> for RiskResponse {
    fn from(a: RiskAssessment) -> Self {
        Self {
            risk: a.risk,
            notes: a.notes,
        }
    }
}

impl From<RiskResponse> for RiskAssessment {
    fn from(r: RiskResponse) -> Self {
        Self {
            risk: r.risk,
            notes: r.notes,
        }
    }
}

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankListingsResponse {
    pub results: Vec<ScoredListing>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
