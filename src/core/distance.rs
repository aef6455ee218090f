use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Flinders Street Station, Melbourne. Used when no commute origin is given.
pub const REFERENCE_ORIGIN: Coordinates = Coordinates {
    lat: -37.8183,
    lon: 144.9671,
};

/// Errors raised while validating coordinates
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("Missing coordinates: {0}")]
    Missing(&'static str),

    #[error("Malformed coordinates: {0}")]
    Malformed(String),

    #[error("Coordinates must be finite numbers")]
    NonFinite,
}

/// A point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Build from two finite numbers
    pub fn try_new(lat: f64, lon: f64) -> Result<Self, GeoError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(GeoError::NonFinite);
        }
        Ok(Self { lat, lon })
    }

    /// Parse a `"lat,lon"` string
    ///
    /// Exactly two comma-separated parts are required; surrounding
    /// whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, GeoError> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 2 {
            return Err(GeoError::Malformed(s.to_string()));
        }

        let lat: f64 = parts[0]
            .parse()
            .map_err(|_| GeoError::Malformed(s.to_string()))?;
        let lon: f64 = parts[1]
            .parse()
            .map_err(|_| GeoError::Malformed(s.to_string()))?;

        Self::try_new(lat, lon)
    }

    /// Great-circle distance to `other` in kilometers
    #[inline]
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        haversine_distance(self.lat, self.lon, other.lat, other.lon)
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
