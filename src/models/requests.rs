use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::BuyerProfile;

/// Query for the travel-time endpoint
///
/// Coordinates are `"lat,lon"` strings. `origin` falls back to the
/// configured reference point when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TravelTimeQuery {
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
}

/// Query for the traffic/parking risk endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskQuery {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub suburb: Option<String>,
}

/// Request to rank the current listing set against a profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankListingsRequest {
    #[validate(custom(function = "validate_profile"))]
    pub profile: BuyerProfile,
    #[serde(rename = "showNearMisses", default)]
    pub show_near_misses: Option<bool>,
    /// Commute origin as `"lat,lon"`
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
}

fn validate_profile(profile: &BuyerProfile) -> Result<(), ValidationError> {
    if !profile.budget_max.is_finite() || profile.budget_max <= 0.0 {
        return Err(ValidationError::new("budget_max_must_be_positive"));
    }

    if let Some(w) = &profile.weights {
        let weights = [w.financial, w.lifestyle, w.attributes, w.growth, w.quiet];
        if weights.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ValidationError::new("weights_must_be_non_negative"));
        }
    }

    for rate in [profile.target_yield, profile.target_growth].into_iter().flatten() {
        if !rate.is_finite() || rate < 0.0 {
            return Err(ValidationError::new("target_rates_must_be_non_negative"));
        }
    }

    Ok(())
}
