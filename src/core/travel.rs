use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::core::distance::Coordinates;

/// Method tag reported by the heuristic estimator
pub const LOCAL_METHOD: &str = "local-estimator";

const MIN_MINUTES: f64 = 2.0;
const MAX_MINUTES: f64 = 180.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown travel mode: {0} (expected driving, walking or transit)")]
pub struct UnknownModeError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Transit,
}

impl TravelMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Transit => "transit",
        }
    }

    /// Parse an optional request parameter; absent or blank means "not given"
    pub fn from_param(param: Option<&str>) -> Result<Option<Self>, UnknownModeError> {
        match param.map(str::trim) {
            None | Some("") => Ok(None),
            Some(m) => m.parse().map(Some),
        }
    }

    /// Average speed in km/h for a trip of `km`
    fn speed_kmh(&self, km: f64) -> f64 {
        match self {
            TravelMode::Walking => 4.7,
            TravelMode::Transit => 16.0,
            TravelMode::Driving => {
                let base = if km < 5.0 {
                    18.0
                } else if km < 15.0 {
                    24.0
                } else {
                    32.0
                };
                // congestion
                base * 0.9
            }
        }
    }

    /// Fixed minutes added on top of moving time
    fn overhead_mins(&self, km: f64) -> f64 {
        match self {
            // Start-up and parking, capped at 6 minutes
            TravelMode::Driving => (2.0 + km * 0.2).min(6.0),
            // Waiting for a service
            TravelMode::Transit => 4.0,
            TravelMode::Walking => 0.0,
        }
    }
}

impl std::str::FromStr for TravelMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "driving" => Ok(TravelMode::Driving),
            "walking" => Ok(TravelMode::Walking),
            "transit" => Ok(TravelMode::Transit),
            other => Err(UnknownModeError(other.to_string())),
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a travel-time estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelEstimate {
    pub minutes: u32,
    pub method: String,
    /// Distance rounded to one decimal place
    pub km: f64,
}

/// Estimated minutes for a trip of `km` by `mode`, clamped to [2, 180]
pub fn estimate_minutes(km: f64, mode: TravelMode) -> u32 {
    let speed = mode.speed_kmh(km).max(1.0);
    let minutes = km / speed * 60.0 + mode.overhead_mins(km);

    minutes.clamp(MIN_MINUTES, MAX_MINUTES).round() as u32
}

/// Heuristic door-to-door travel time between two points
///
/// Used when no routing provider is available.
pub fn estimate_travel_time(origin: &Coordinates, destination: &Coordinates, mode: TravelMode) -> TravelEstimate {
    let km = origin.distance_km(destination);

    TravelEstimate {
        minutes: estimate_minutes(km, mode),
        method: LOCAL_METHOD.to_string(),
        km: (km * 10.0).round() / 10.0,
    }
}
