use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::{Coordinates, TravelMode, REFERENCE_ORIGIN};
use crate::models::Weights;
use crate::services::enrichment::DEFAULT_CONCURRENCY;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub estimator: EstimatorSettings,
    #[serde(default)]
    pub ranking: RankingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EstimatorSettings {
    #[serde(default = "default_origin_lat")]
    pub origin_lat: f64,
    #[serde(default = "default_origin_lon")]
    pub origin_lon: f64,
    #[serde(default)]
    pub mode: TravelMode,
    /// Base URL of an external estimator; the local heuristics are used when unset
    pub remote_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub cache_ttl_secs: Option<u64>,
    pub cache_size: Option<u64>,
    /// Listings enriched at once; each listing makes one travel and one risk call
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
}

impl EstimatorSettings {
    /// Configured commute origin, or the reference point if it is not finite
    pub fn origin(&self) -> Coordinates {
        Coordinates::try_new(self.origin_lat, self.origin_lon).unwrap_or(REFERENCE_ORIGIN)
    }
}

impl Default for EstimatorSettings {
    fn default() -> Self {
        Self {
            origin_lat: default_origin_lat(),
            origin_lon: default_origin_lon(),
            mode: TravelMode::default(),
            remote_url: None,
            timeout_secs: None,
            cache_ttl_secs: None,
            cache_size: None,
            max_concurrency: default_max_concurrency(),
        }
    }
}

fn default_origin_lat() -> f64 { REFERENCE_ORIGIN.lat }
fn default_origin_lon() -> f64 { REFERENCE_ORIGIN.lon }
fn default_max_concurrency() -> usize { DEFAULT_CONCURRENCY }

#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    #[serde(default = "default_show_near_misses")]
    pub show_near_misses: bool,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            show_near_misses: default_show_near_misses(),
        }
    }
}

fn default_show_near_misses() -> bool { true }

/// Weights applied when a profile does not carry its own
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: Weights,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HOTLOT__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HOTLOT__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("HOTLOT")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
